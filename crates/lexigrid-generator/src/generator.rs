//! Random letter board generation.

use lexigrid_core::{Dimensions, InvalidDimension, Letter, LetterGrid};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::seed::BoardSeed;

/// A generated board together with the seed that produced it.
///
/// Feeding the seed back into
/// [`BoardGenerator::generate_with_seed`] with the same dimensions
/// reproduces the grid exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The generated letter grid.
    pub grid: LetterGrid,
    /// The seed that produced the grid.
    pub seed: BoardSeed,
}

/// Generates boards of uniformly random lowercase letters.
///
/// Every cell is drawn independently from the full alphabet; the generator
/// makes no attempt to place real words, so any dictionary hits on a
/// generated board are incidental.
///
/// # Examples
///
/// ```
/// use lexigrid_generator::BoardGenerator;
///
/// let generator = BoardGenerator::with_size(12, 8)?;
/// let board = generator.generate();
/// assert_eq!(board.grid.dimensions().width(), 12);
/// assert_eq!(board.grid.dimensions().height(), 8);
///
/// // The seed reproduces the board.
/// let replay = generator.generate_with_seed(board.seed);
/// assert_eq!(replay.grid, board.grid);
/// # Ok::<(), lexigrid_core::InvalidDimension>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator {
    dimensions: Dimensions,
}

impl BoardGenerator {
    /// Creates a generator for boards of the given dimensions.
    #[must_use]
    pub const fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    /// Creates a generator from raw width and height values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] if either side is zero.
    pub fn with_size(width: usize, height: usize) -> Result<Self, InvalidDimension> {
        Ok(Self::new(Dimensions::new(width, height)?))
    }

    /// Returns the dimensions of generated boards.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Generates a board from a fresh entropy seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::from_entropy())
    }

    /// Generates the board determined by `seed`.
    ///
    /// The same seed and dimensions always produce the same grid.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let grid = self.fill(&mut rng);
        GeneratedBoard { grid, seed }
    }

    /// Fills a grid with letters drawn from the given generator.
    ///
    /// Cells are drawn in row-major order, one uniform draw per cell.
    pub fn fill<R>(&self, rng: &mut R) -> LetterGrid
    where
        R: Rng,
    {
        LetterGrid::from_fn(self.dimensions, |_| {
            Letter::from_index(rng.random_range(0..Letter::ALL.len()))
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SEED_A: &str = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
    const SEED_B: &str = "ffeeddccbbaa99887766554433221100ffeeddccbbaa99887766554433221100";

    #[test]
    fn test_same_seed_same_board() {
        let generator = BoardGenerator::with_size(10, 10).unwrap();
        let seed: BoardSeed = SEED_A.parse().unwrap();
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = BoardGenerator::with_size(10, 10).unwrap();
        let a: BoardSeed = SEED_A.parse().unwrap();
        let b: BoardSeed = SEED_B.parse().unwrap();
        assert_ne!(
            generator.generate_with_seed(a).grid,
            generator.generate_with_seed(b).grid
        );
    }

    #[test]
    fn test_generate_seed_replays() {
        let generator = BoardGenerator::with_size(6, 4).unwrap();
        let board = generator.generate();
        let replay = generator.generate_with_seed(board.seed);
        assert_eq!(replay.grid, board.grid);
    }

    #[test]
    fn test_fill_matches_seeded_generation() {
        let generator = BoardGenerator::with_size(5, 5).unwrap();
        let seed: BoardSeed = SEED_A.parse().unwrap();
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        assert_eq!(generator.fill(&mut rng), generator.generate_with_seed(seed).grid);
    }

    #[test]
    fn test_with_size_rejects_zero_axes() {
        assert_eq!(
            BoardGenerator::with_size(0, 5).unwrap_err(),
            InvalidDimension {
                width: 0,
                height: 5
            }
        );
        assert_eq!(
            BoardGenerator::with_size(5, 0).unwrap_err(),
            InvalidDimension {
                width: 5,
                height: 0
            }
        );
        assert_eq!(
            BoardGenerator::with_size(0, 0).unwrap_err(),
            InvalidDimension {
                width: 0,
                height: 0
            }
        );
    }

    proptest! {
        #[test]
        fn prop_generated_boards_have_requested_shape(
            width in 1..=32_usize,
            height in 1..=32_usize,
        ) {
            let generator = BoardGenerator::with_size(width, height).unwrap();
            let board = generator.generate();
            prop_assert_eq!(board.grid.dimensions().width(), width);
            prop_assert_eq!(board.grid.dimensions().height(), height);
            prop_assert_eq!(board.grid.cells().len(), width * height);
        }

        #[test]
        fn prop_seeded_generation_is_deterministic(
            width in 1..=16_usize,
            height in 1..=16_usize,
            bytes in prop::array::uniform32(any::<u8>()),
        ) {
            let generator = BoardGenerator::with_size(width, height).unwrap();
            let seed = BoardSeed::from_bytes(bytes);
            prop_assert_eq!(
                generator.generate_with_seed(seed).grid,
                generator.generate_with_seed(seed).grid
            );
        }
    }
}
