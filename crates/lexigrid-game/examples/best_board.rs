//! Example sampling random boards in parallel and keeping the best one.
//!
//! Boards are uniformly random, so dictionary words only appear by accident.
//! Sampling many boards and keeping the one with the most hits produces a
//! denser puzzle. The sampling loop is safe to parallelize because every
//! thread owns its board and search space outright; only the winning seed is
//! kept, and the final board is reproduced from it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example best_board
//! ```
//!
//! Pick the board size and sampling budget:
//!
//! ```sh
//! cargo run --example best_board -- --width 20 --height 12 --samples 5000
//! ```
//!
//! Search for specific words instead of the built-in list (repeatable):
//!
//! ```sh
//! cargo run --example best_board -- --word cat --word dog --word owl
//! ```

use std::process;

use clap::Parser;
use lexigrid_game::GameBoard;
use lexigrid_generator::{BoardGenerator, GeneratedBoard};
use lexigrid_search::{SearchSpace, WordSearcher};
use rayon::prelude::*;

const DEFAULT_WORDS: [&str; 12] = [
    "cat", "dog", "bird", "fish", "horse", "mouse", "zebra", "whale", "otter", "crane", "shark",
    "eagle",
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board width in cells.
    #[arg(long, value_name = "CELLS", default_value_t = 15)]
    width: usize,

    /// Board height in cells.
    #[arg(long, value_name = "CELLS", default_value_t = 15)]
    height: usize,

    /// Lowercase word to search for. Repeatable.
    #[arg(short, long = "word", value_name = "WORD", num_args = 1..)]
    words: Vec<String>,

    /// Number of random boards to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    samples: usize,
}

fn main() {
    let args = Args::parse();

    let words = if args.words.is_empty() {
        DEFAULT_WORDS.iter().map(ToString::to_string).collect()
    } else {
        args.words
    };

    let generator = match BoardGenerator::with_size(args.width, args.height) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(2);
    }

    let (seed, found) = (0..args.samples)
        .into_par_iter()
        .map(|_| {
            let GeneratedBoard { grid, seed } = generator.generate();
            let space = SearchSpace::from_grid(&grid);
            let searcher = WordSearcher::new(&space);
            let found = searcher.find_words(&words).unwrap();
            (seed, found)
        })
        .max_by_key(|(_, found)| found.len())
        .expect("at least one sample");

    let board = GameBoard::generate_with_seed(args.width, args.height, seed)
        .expect("dimensions validated above");

    println!("Seed:");
    println!("  {seed}");
    println!();

    println!("Board:");
    for line in board.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Found {} of {} words:", found.len(), words.len());
    for word in &found {
        println!("  {word}");
    }
}
