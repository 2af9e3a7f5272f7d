//! Core data structures for letter-grid word search.
//!
//! This crate provides the fundamental types for representing word search
//! boards. These structures are used across board generation, search, and
//! game management components.
//!
//! # Overview
//!
//! - [`letter`]: Type-safe representation of the lowercase alphabet
//! - [`position`]: Board position (x, y) coordinate types
//! - [`grid`]: Validated board dimensions and rectangular letter storage
//!
//! # Examples
//!
//! ```
//! use lexigrid_core::{Letter, LetterGrid, Position};
//!
//! // Parse a board from text
//! let grid: LetterGrid = "
//!     c a t
//!     o x e
//!     w y z
//! "
//! .parse()?;
//!
//! // Access cells by position
//! assert_eq!(grid[Position::new(0, 0)], Letter::C);
//! assert_eq!(grid.row_string(0), "cat");
//! # Ok::<(), lexigrid_core::ParseGridError>(())
//! ```

pub mod grid;
pub mod letter;
pub mod position;

// Re-export commonly used types
pub use self::{
    grid::{Dimensions, GridShapeError, InvalidDimension, LetterGrid, ParseGridError},
    letter::Letter,
    position::Position,
};
