//! Search vector families.

/// The eight directional families of search vectors.
///
/// The four forward families read rows left to right, columns top to
/// bottom, and diagonals downward (toward the lower-left and lower-right
/// corners). Each forward family has a reversed counterpart containing the
/// same vectors read backward, so a word hidden in any of the eight
/// straight-line reading directions is covered.
///
/// # Examples
///
/// ```
/// use lexigrid_search::Direction;
///
/// assert_eq!(Direction::ALL.len(), 8);
/// assert_eq!(Direction::Rows.reversed(), Direction::RowsReversed);
/// assert!(!Direction::Rows.is_reversed());
/// assert!(Direction::RowsReversed.is_reversed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(u8)]
pub enum Direction {
    /// Rows, left to right.
    #[display("rows")]
    Rows,
    /// Rows, right to left.
    #[display("rows reversed")]
    RowsReversed,
    /// Columns, top to bottom.
    #[display("columns")]
    Columns,
    /// Columns, bottom to top.
    #[display("columns reversed")]
    ColumnsReversed,
    /// Diagonals running toward the lower-left corner.
    #[display("down-left diagonals")]
    DiagonalDownLeft,
    /// Down-left diagonals read backward.
    #[display("down-left diagonals reversed")]
    DiagonalDownLeftReversed,
    /// Diagonals running toward the lower-right corner.
    #[display("down-right diagonals")]
    DiagonalDownRight,
    /// Down-right diagonals read backward.
    #[display("down-right diagonals reversed")]
    DiagonalDownRightReversed,
}

impl Direction {
    /// All eight families, each forward family followed by its reversed
    /// counterpart.
    pub const ALL: [Self; 8] = [
        Self::Rows,
        Self::RowsReversed,
        Self::Columns,
        Self::ColumnsReversed,
        Self::DiagonalDownLeft,
        Self::DiagonalDownLeftReversed,
        Self::DiagonalDownRight,
        Self::DiagonalDownRightReversed,
    ];

    /// Returns `true` for the four reversed families.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(
            self,
            Self::RowsReversed
                | Self::ColumnsReversed
                | Self::DiagonalDownLeftReversed
                | Self::DiagonalDownRightReversed
        )
    }

    /// Returns the family reading the same lines in the opposite direction.
    ///
    /// This pairing is an involution: `d.reversed().reversed() == d`.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Rows => Self::RowsReversed,
            Self::RowsReversed => Self::Rows,
            Self::Columns => Self::ColumnsReversed,
            Self::ColumnsReversed => Self::Columns,
            Self::DiagonalDownLeft => Self::DiagonalDownLeftReversed,
            Self::DiagonalDownLeftReversed => Self::DiagonalDownLeft,
            Self::DiagonalDownRight => Self::DiagonalDownRightReversed,
            Self::DiagonalDownRightReversed => Self::DiagonalDownRight,
        }
    }

    /// Returns this family's position in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}
