//! Random board generation for letter-grid word search.
//!
//! This crate produces [`LetterGrid`](lexigrid_core::LetterGrid)s of
//! uniformly random lowercase letters, with reproducible seeding.
//!
//! # Overview
//!
//! - [`seed`]: 32-byte [`BoardSeed`] with a 64-digit hex text form, fresh
//!   entropy, and SHA-256 phrase hashing
//! - [`generator`]: [`BoardGenerator`] drawing each cell uniformly from the
//!   alphabet through a seeded PCG stream
//!
//! # Examples
//!
//! ```
//! use lexigrid_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::with_size(10, 10)?;
//!
//! // Reproducible: a phrase-derived seed always yields the same board.
//! let seed = BoardSeed::from_phrase("daily puzzle 412");
//! let first = generator.generate_with_seed(seed);
//! let second = generator.generate_with_seed(seed);
//! assert_eq!(first.grid, second.grid);
//! # Ok::<(), lexigrid_core::InvalidDimension>(())
//! ```

pub mod generator;
pub mod seed;

// Re-export commonly used types
pub use self::{
    generator::{BoardGenerator, GeneratedBoard},
    seed::{BoardSeed, ParseSeedError},
};
