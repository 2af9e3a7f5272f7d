//! Game board facade for letter-grid word search.
//!
//! This crate ties board generation ([`lexigrid_generator`]) and word search
//! ([`lexigrid_search`]) together behind a single [`GameBoard`] type that
//! owns a grid, its derived search space, and timing diagnostics.
//!
//! # Examples
//!
//! ```
//! use lexigrid_game::GameBoard;
//! use lexigrid_generator::BoardSeed;
//!
//! let seed = BoardSeed::from_phrase("evening round");
//! let mut board = GameBoard::generate_with_seed(10, 10, seed)?;
//!
//! // Same seed, same board, same results.
//! let mut replay = GameBoard::generate_with_seed(10, 10, seed)?;
//! assert_eq!(board.grid(), replay.grid());
//!
//! let words = ["cat", "dog", "owl"];
//! assert_eq!(board.search(&words)?, replay.search(&words)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;

// Re-export commonly used types
pub use self::board::GameBoard;
