//! Word search over letter grids.
//!
//! This crate turns a [`LetterGrid`](lexigrid_core::LetterGrid) into its
//! complete set of straight-line readings and finds dictionary words in
//! them.
//!
//! # Overview
//!
//! - [`direction`]: the eight vector families ([`Direction`])
//! - [`search_space`]: derives every vector of every family from a grid
//!   ([`SearchSpace`])
//! - [`searcher`]: substring search for whole word lists ([`WordSearcher`])
//!
//! # Examples
//!
//! ```
//! use lexigrid_core::LetterGrid;
//! use lexigrid_search::{SearchSpace, WordSearcher};
//!
//! let grid: LetterGrid = "
//!     b i r d
//!     o e x x
//!     a x e x
//!     t x x x
//! "
//! .parse()?;
//!
//! let space = SearchSpace::from_grid(&grid);
//! let searcher = WordSearcher::new(&space);
//!
//! // "bird" reads along the top row, "boat" down the first column, and
//! // "bee" down the main diagonal.
//! let found = searcher.find_words(&["bird", "boat", "bee", "fish"])?;
//! assert_eq!(found, ["bird", "boat", "bee"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod direction;
pub mod search_space;
pub mod searcher;

// Re-export commonly used types
pub use self::{
    direction::Direction,
    search_space::SearchSpace,
    searcher::{SearchError, WordSearcher},
};
