//! Board dimensions and letter grid storage.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{letter::Letter, position::Position};

/// Validated width and height of a letter grid.
///
/// Both sides must be at least 1. Construction is the single validation
/// point; code holding a `Dimensions` can rely on both sides being non-zero.
///
/// # Examples
///
/// ```
/// use lexigrid_core::Dimensions;
///
/// let dims = Dimensions::new(10, 6)?;
/// assert_eq!(dims.width(), 10);
/// assert_eq!(dims.height(), 6);
/// assert_eq!(dims.cell_count(), 60);
/// assert_eq!(dims.to_string(), "10x6");
///
/// assert!(Dimensions::new(0, 6).is_err());
/// # Ok::<(), lexigrid_core::InvalidDimension>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Creates dimensions from a width and height.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] if either side is zero. The error carries
    /// the full requested pair so callers can report both values.
    pub const fn new(width: usize, height: usize) -> Result<Self, InvalidDimension> {
        if width == 0 || height == 0 {
            return Err(InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Returns the total number of cells (`width * height`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if the position lies within these dimensions.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error returned when a grid dimension is out of range.
///
/// Both axes are always validated, so a single error names every offending
/// side rather than just the first one checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Error)]
pub struct InvalidDimension {
    /// The requested width.
    pub width: usize,
    /// The requested height.
    pub height: usize,
}

impl Display for InvalidDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides = match (self.width, self.height) {
            (0, 0) => "width and height",
            (0, _) => "width",
            _ => "height",
        };
        write!(
            f,
            "invalid board dimensions {}x{}: {sides} must be at least 1",
            self.width, self.height
        )
    }
}

/// Error returned when rows do not form a rectangular grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GridShapeError {
    /// The grid would have a zero-length side.
    #[display("{_0}")]
    Dimension(#[from] InvalidDimension),
    /// A row's length differs from the first row's.
    #[display("row {row} has {len} letters, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of letters in the offending row.
        len: usize,
        /// Number of letters in the first row.
        expected: usize,
    },
}

/// Error returned when parsing a grid from text fails.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseGridError {
    /// The input contained a character outside `a`-`z`.
    #[display("invalid character {character:?} at row {row}, column {column}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Board row of the offending character (0-based).
        row: usize,
        /// Board column of the offending character (0-based).
        column: usize,
    },
    /// The input did not form a rectangular grid.
    #[display("{_0}")]
    Shape(#[from] GridShapeError),
}

/// A rectangular grid of lowercase letters.
///
/// Cells are stored in row-major order. The grid's shape is fixed at
/// construction; every constructor goes through [`Dimensions`] validation,
/// so a `LetterGrid` always has at least one row and one column.
///
/// # Examples
///
/// Grids can be parsed from text, which is convenient for fixtures:
///
/// ```
/// use lexigrid_core::{LetterGrid, Letter, Position};
///
/// let grid: LetterGrid = "
///     a b c
///     d e f
///     g h i
/// "
/// .parse()?;
///
/// assert_eq!(grid.dimensions().width(), 3);
/// assert_eq!(grid.dimensions().height(), 3);
/// assert_eq!(grid[Position::new(2, 1)], Letter::F);
/// # Ok::<(), lexigrid_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    dimensions: Dimensions,
    cells: Vec<Letter>,
}

impl LetterGrid {
    /// Creates a grid by calling `f` for every position in row-major order.
    pub fn from_fn<F>(dimensions: Dimensions, f: F) -> Self
    where
        F: FnMut(Position) -> Letter,
    {
        let cells = (0..dimensions.height())
            .flat_map(|y| (0..dimensions.width()).map(move |x| Position::new(x, y)))
            .map(f)
            .collect();
        Self { dimensions, cells }
    }

    /// Creates a grid from rows of letters.
    ///
    /// # Errors
    ///
    /// Returns [`GridShapeError`] if the rows have differing lengths, or if
    /// the resulting grid would have a zero-length side.
    pub fn from_rows(rows: Vec<Vec<Letter>>) -> Result<Self, GridShapeError> {
        let expected = rows.first().map_or(0, Vec::len);
        for (row, letters) in rows.iter().enumerate() {
            if letters.len() != expected {
                return Err(GridShapeError::RaggedRow {
                    row,
                    len: letters.len(),
                    expected,
                });
            }
        }
        let dimensions = Dimensions::new(expected, rows.len())?;
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { dimensions, cells })
    }

    /// Returns the grid's dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the letter at `pos`, or `None` if `pos` is out of bounds.
    ///
    /// Both coordinates are checked against the grid's dimensions, so a
    /// position past the right edge never aliases into the next row.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.dimensions
            .contains(pos)
            .then(|| self.cells[pos.y() * self.dimensions.width() + pos.x()])
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Letter] {
        &self.cells
    }

    /// Returns the letters of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Letter] {
        assert!(
            y < self.dimensions.height(),
            "row {y} out of range for {} board",
            self.dimensions
        );
        let width = self.dimensions.width();
        &self.cells[y * width..(y + 1) * width]
    }

    /// Returns an iterator over the grid's rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        self.cells.chunks_exact(self.dimensions.width())
    }

    /// Returns the letters of row `y` as a contiguous string.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[must_use]
    pub fn row_string(&self, y: usize) -> String {
        self.row(y).iter().map(|letter| letter.as_char()).collect()
    }
}

impl Index<Position> for LetterGrid {
    type Output = Letter;

    /// Returns the letter at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    fn index(&self, pos: Position) -> &Letter {
        assert!(
            self.dimensions.contains(pos),
            "position {pos} out of bounds for {} board",
            self.dimensions
        );
        &self.cells[pos.y() * self.dimensions.width() + pos.x()]
    }
}

impl FromStr for LetterGrid {
    type Err = ParseGridError;

    /// Parses a grid from text.
    ///
    /// Each non-blank line becomes a row. Whitespace within a line is
    /// ignored, so `abc` and `a b c` parse identically. Every remaining
    /// character must be a lowercase letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let mut row = Vec::new();
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                let letter = Letter::from_char(c).ok_or(ParseGridError::InvalidCharacter {
                    character: c,
                    row: rows.len(),
                    column: row.len(),
                })?;
                row.push(letter);
            }
            rows.push(row);
        }
        Ok(Self::from_rows(rows)?)
    }
}

impl Display for LetterGrid {
    /// Formats the grid with one line per row and letters separated by
    /// single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (x, letter) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
