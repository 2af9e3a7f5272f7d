//! Directional search vectors derived from a letter grid.

use lexigrid_core::{LetterGrid, Position};

use crate::direction::Direction;

/// Every straight-line reading of a grid, grouped into the eight
/// [`Direction`] families.
///
/// A search space is derived once from a [`LetterGrid`] and is read-only
/// afterward. The four forward families are produced by scanning the grid;
/// each reversed family contains the forward family's vectors reversed
/// one by one, in the same order. Diagonal families cover non-square grids
/// too: a `w`×`h` grid always yields `w + h - 1` vectors per diagonal
/// family, from the single-letter corner vectors up to the main diagonal.
///
/// # Examples
///
/// ```
/// use lexigrid_core::LetterGrid;
/// use lexigrid_search::{Direction, SearchSpace};
///
/// let grid: LetterGrid = "
///     c a t
///     o x e
///     w y z
/// "
/// .parse()?;
/// let space = SearchSpace::from_grid(&grid);
///
/// assert_eq!(space.family(Direction::Rows), ["cat", "oxe", "wyz"]);
/// assert_eq!(space.family(Direction::RowsReversed), ["tac", "exo", "zyw"]);
/// assert_eq!(space.family(Direction::Columns), ["cow", "axy", "tez"]);
/// assert_eq!(space.vector_count(), 32);
/// # Ok::<(), lexigrid_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchSpace {
    families: [Vec<String>; 8],
}

impl SearchSpace {
    /// Derives all eight vector families from a grid.
    #[must_use]
    pub fn from_grid(grid: &LetterGrid) -> Self {
        let mut families: [Vec<String>; 8] = std::array::from_fn(|_| Vec::new());
        for direction in Direction::ALL {
            if direction.is_reversed() {
                continue;
            }
            let forward = forward_family(grid, direction);
            // Reversed vectors are per-vector reversals of the forward
            // family, preserving vector order.
            families[direction.reversed().index()] = forward
                .iter()
                .map(|vector| vector.chars().rev().collect())
                .collect();
            families[direction.index()] = forward;
        }
        Self { families }
    }

    /// Returns the vectors of one family, in scan order.
    #[must_use]
    pub fn family(&self, direction: Direction) -> &[String] {
        &self.families[direction.index()]
    }

    /// Returns an iterator over all vectors of all families.
    ///
    /// Families appear in [`Direction::ALL`] order, each in scan order.
    pub fn vectors(&self) -> impl Iterator<Item = &str> {
        self.families.iter().flatten().map(String::as_str)
    }

    /// Returns the total number of vectors across all families.
    ///
    /// For a `w`×`h` grid this is `2h + 2w + 4(w + h - 1)`.
    #[must_use]
    pub fn vector_count(&self) -> usize {
        self.families.iter().map(Vec::len).sum()
    }
}

/// Scans one forward family off the grid.
///
/// Each vector starts from an edge cell and follows the family's step until
/// it leaves the grid, so ragged diagonals of non-square grids come out at
/// their natural lengths.
fn forward_family(grid: &LetterGrid, direction: Direction) -> Vec<String> {
    let width = grid.dimensions().width();
    let height = grid.dimensions().height();
    let (starts, step): (Vec<Position>, (isize, isize)) = match direction {
        Direction::Rows => ((0..height).map(|y| Position::new(0, y)).collect(), (1, 0)),
        Direction::Columns => ((0..width).map(|x| Position::new(x, 0)).collect(), (0, 1)),
        // Top-row starts left to right, then right-column starts below the
        // corner, stepping one cell down and left.
        Direction::DiagonalDownLeft => (
            (0..width)
                .map(|x| Position::new(x, 0))
                .chain((1..height).map(|y| Position::new(width - 1, y)))
                .collect(),
            (-1, 1),
        ),
        // Left-column starts bottom to top, then top-row starts right of the
        // corner, stepping one cell down and right.
        Direction::DiagonalDownRight => (
            (0..height)
                .rev()
                .map(|y| Position::new(0, y))
                .chain((1..width).map(|x| Position::new(x, 0)))
                .collect(),
            (1, 1),
        ),
        Direction::RowsReversed
        | Direction::ColumnsReversed
        | Direction::DiagonalDownLeftReversed
        | Direction::DiagonalDownRightReversed => {
            unreachable!("reversed families are derived from forward scans")
        }
    };
    starts
        .into_iter()
        .map(|start| scan_vector(grid, start, step))
        .collect()
}

fn scan_vector(grid: &LetterGrid, start: Position, (dx, dy): (isize, isize)) -> String {
    let mut vector = String::new();
    let mut pos = start;
    while let Some(letter) = grid.get(pos) {
        vector.push(letter.as_char());
        let Some(next) = offset(pos, dx, dy) else {
            break;
        };
        pos = next;
    }
    vector
}

fn offset(pos: Position, dx: isize, dy: isize) -> Option<Position> {
    let x = pos.x().checked_add_signed(dx)?;
    let y = pos.y().checked_add_signed(dy)?;
    Some(Position::new(x, y))
}
