//! Board cell coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a letter grid.
///
/// `x` is the column (0-based, increasing rightward) and `y` is the row
/// (0-based, increasing downward). A `Position` carries no knowledge of any
/// particular grid's bounds; bounds checking happens at the grid access site.
///
/// # Examples
///
/// ```
/// use lexigrid_core::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.to_string(), "(3, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
