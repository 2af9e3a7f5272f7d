//! Game board owning a grid and its search space.

use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

use lexigrid_core::{Dimensions, InvalidDimension, LetterGrid};
use lexigrid_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use lexigrid_search::{SearchError, SearchSpace, WordSearcher};

/// A word search board with its derived search space.
///
/// A `GameBoard` owns one immutable [`LetterGrid`] and the [`SearchSpace`]
/// extracted from it, so repeated searches reuse the same vectors. Every
/// board owns its vectors exclusively; creating another board never shares
/// or grows state elsewhere.
///
/// Wall-clock durations for board construction and the most recent search
/// are recorded as diagnostics. They are observability only and have no
/// effect on search results.
///
/// # Examples
///
/// ```
/// use lexigrid_game::GameBoard;
///
/// let mut board = GameBoard::generate(12, 8)?;
/// assert_eq!(board.dimensions().width(), 12);
/// assert_eq!(board.dimensions().height(), 8);
///
/// let found = board.search(&["cat", "dog"])?;
/// assert!(found.len() <= 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameBoard {
    grid: LetterGrid,
    space: SearchSpace,
    seed: Option<BoardSeed>,
    generation_time: Duration,
    search_time: Option<Duration>,
}

impl GameBoard {
    /// Generates a random board of the given size.
    ///
    /// The grid is filled from a fresh entropy seed and the search space is
    /// derived immediately, so the returned board is ready to search.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] if either side is zero.
    pub fn generate(width: usize, height: usize) -> Result<Self, InvalidDimension> {
        let generator = BoardGenerator::with_size(width, height)?;
        let start = Instant::now();
        let GeneratedBoard { grid, seed } = generator.generate();
        Ok(Self::assemble(grid, Some(seed), start))
    }

    /// Generates the board determined by `seed`.
    ///
    /// The same seed and size always produce the same board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] if either side is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_game::GameBoard;
    /// use lexigrid_generator::BoardSeed;
    ///
    /// let seed = BoardSeed::from_phrase("rematch");
    /// let board = GameBoard::generate_with_seed(6, 6, seed)?;
    /// let replay = GameBoard::generate_with_seed(6, 6, seed)?;
    /// assert_eq!(board.grid(), replay.grid());
    /// # Ok::<(), lexigrid_core::InvalidDimension>(())
    /// ```
    pub fn generate_with_seed(
        width: usize,
        height: usize,
        seed: BoardSeed,
    ) -> Result<Self, InvalidDimension> {
        let generator = BoardGenerator::with_size(width, height)?;
        let start = Instant::now();
        let GeneratedBoard { grid, seed } = generator.generate_with_seed(seed);
        Ok(Self::assemble(grid, Some(seed), start))
    }

    /// Creates a board from an existing grid.
    ///
    /// Useful for fixed-content boards in tests and demos. The search space
    /// is derived immediately; the board carries no seed.
    #[must_use]
    pub fn from_grid(grid: LetterGrid) -> Self {
        Self::assemble(grid, None, Instant::now())
    }

    /// Derives the search space and snapshots the construction time.
    fn assemble(grid: LetterGrid, seed: Option<BoardSeed>, start: Instant) -> Self {
        let space = SearchSpace::from_grid(&grid);
        Self {
            grid,
            space,
            seed,
            generation_time: start.elapsed(),
            search_time: None,
        }
    }

    /// Searches the board for every word in `words`.
    ///
    /// Returns the found subset in input order and records the elapsed
    /// search time. Grid letters and words are both lowercase; no case
    /// normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyWordList`] if `words` is empty. No search
    /// time is recorded for a failed search.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::LetterGrid;
    /// use lexigrid_game::GameBoard;
    ///
    /// let grid: LetterGrid = "
    ///     c a t
    ///     o x e
    ///     w y z
    /// "
    /// .parse()?;
    /// let mut board = GameBoard::from_grid(grid);
    ///
    /// let found = board.search(&["cat", "cow", "dog"])?;
    /// assert_eq!(found, ["cat", "cow"]);
    /// assert!(board.search_time().is_some());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn search<S>(&mut self, words: &[S]) -> Result<Vec<String>, SearchError>
    where
        S: AsRef<str>,
    {
        let start = Instant::now();
        let found = WordSearcher::new(&self.space).find_words(words)?;
        self.search_time = Some(start.elapsed());
        Ok(found)
    }

    /// Returns the board's letter grid.
    #[must_use]
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the search space derived from the grid.
    #[must_use]
    pub const fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    /// Returns the seed the board was generated from.
    ///
    /// Boards built with [`from_grid`](Self::from_grid) have no seed.
    #[must_use]
    pub const fn seed(&self) -> Option<BoardSeed> {
        self.seed
    }

    /// Returns the board's dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    /// Returns how long board construction took, including search space
    /// derivation.
    #[must_use]
    pub const fn generation_time(&self) -> Duration {
        self.generation_time
    }

    /// Returns how long the most recent successful search took, or `None`
    /// if no search has completed yet.
    #[must_use]
    pub const fn search_time(&self) -> Option<Duration> {
        self.search_time
    }
}

impl Display for GameBoard {
    /// Formats the board's grid, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use lexigrid_core::Letter;
    use lexigrid_search::Direction;

    use super::*;

    const SEED: &str = "8d5f3a1c9b7e2d4f6a8c0e1b3d5f7a9c8d5f3a1c9b7e2d4f6a8c0e1b3d5f7a9c";

    /// One word per letter of the alphabet, so any board of any size must
    /// contain at least one of them.
    const ALPHABET_WORDS: [&str; 26] = [
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z",
    ];

    fn hello_board() -> GameBoard {
        GameBoard::from_grid(
            "
                q w e r t
                y u i o p
                h e l l o
                a s d f g
                z x c v b
            "
            .parse()
            .unwrap(),
        )
    }

    #[test]
    fn test_generate_has_requested_shape() {
        let board = GameBoard::generate(9, 4).unwrap();
        assert_eq!(board.dimensions(), Dimensions::new(9, 4).unwrap());
        assert!(board.seed().is_some());
        for direction in Direction::ALL {
            assert!(!board.search_space().family(direction).is_empty());
        }
    }

    #[test]
    fn test_generate_rejects_zero_axes() {
        assert_eq!(
            GameBoard::generate(0, 4).unwrap_err(),
            InvalidDimension {
                width: 0,
                height: 4
            }
        );
        assert_eq!(
            GameBoard::generate(4, 0).unwrap_err(),
            InvalidDimension {
                width: 4,
                height: 0
            }
        );
        assert_eq!(
            GameBoard::generate(0, 0).unwrap_err(),
            InvalidDimension {
                width: 0,
                height: 0
            }
        );
    }

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let seed: BoardSeed = SEED.parse().unwrap();
        let a = GameBoard::generate_with_seed(8, 5, seed).unwrap();
        let b = GameBoard::generate_with_seed(8, 5, seed).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.seed(), Some(seed));
    }

    #[test]
    fn test_from_grid_preserves_content() {
        let board = hello_board();
        assert!(board.seed().is_none());
        assert_eq!(board.grid().row_string(2), "hello");
        assert_eq!(board.to_string(), board.grid().to_string());
    }

    #[test]
    fn test_search_finds_row_words() {
        let mut board = hello_board();
        assert!(board.search_time().is_none());

        let found = board.search(&["hello", "olleh", "world"]).unwrap();
        assert_eq!(found, ["hello", "olleh"]);
        assert!(board.search_time().is_some());
    }

    #[test]
    fn test_search_single_cell_board() {
        let mut board = GameBoard::from_grid("a".parse().unwrap());
        assert_eq!(board.search(&["a"]).unwrap(), ["a"]);
        assert_eq!(board.search(&["b"]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_search_empty_word_list_errors() {
        let mut board = hello_board();
        let words: [&str; 0] = [];
        assert_eq!(board.search(&words), Err(SearchError::EmptyWordList));
        // A failed search records no timing.
        assert!(board.search_time().is_none());
    }

    #[test]
    fn test_boards_do_not_share_vectors() {
        let all_a = GameBoard::from_grid(
            LetterGrid::from_fn(Dimensions::new(3, 3).unwrap(), |_| Letter::A),
        );
        let all_b = GameBoard::from_grid(
            LetterGrid::from_fn(Dimensions::new(3, 3).unwrap(), |_| Letter::B),
        );

        // Each board's vectors come from its own grid only.
        assert!(
            all_a
                .search_space()
                .vectors()
                .all(|vector| vector.chars().all(|c| c == 'a'))
        );
        assert!(
            all_b
                .search_space()
                .vectors()
                .all(|vector| vector.chars().all(|c| c == 'b'))
        );
        assert_eq!(all_a.search_space().vector_count(), 32);
        assert_eq!(all_b.search_space().vector_count(), 32);
    }

    #[test]
    fn test_asymmetric_boards_search_without_panic() {
        for (width, height) in [(15, 5), (5, 15)] {
            let mut board = GameBoard::generate(width, height).unwrap();
            // 2h + 2w + 4(w + h - 1) vectors for a w x h board.
            assert_eq!(
                board.search_space().vector_count(),
                2 * height + 2 * width + 4 * (width + height - 1)
            );
            // Every cell letter matches one of the single-letter words, so
            // some word is always found.
            let found = board.search(&ALPHABET_WORDS).unwrap();
            assert!(!found.is_empty());
        }
    }

    #[test]
    fn test_search_completes_quickly() {
        let mut board = GameBoard::generate(15, 15).unwrap();
        board.search(&ALPHABET_WORDS).unwrap();
        assert!(board.generation_time() > Duration::ZERO);
        assert!(board.search_time().unwrap() < Duration::from_millis(500));
    }
}
