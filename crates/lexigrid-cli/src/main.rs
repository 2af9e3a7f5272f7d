//! Command-line word search driver.
//!
//! Generates a board of random letters and reports which dictionary words
//! are hidden in it.
//!
//! # Usage
//!
//! ```sh
//! lexigrid --width 15 --height 10 --dictionary words.txt
//! ```
//!
//! Reproduce a board from a logged seed (64 hex digits), or derive a seed
//! from any memorable phrase:
//!
//! ```sh
//! lexigrid --width 15 --height 10 --dictionary words.txt --seed "friday puzzle"
//! ```
//!
//! Show the generated board, vector families, and timing details:
//!
//! ```sh
//! lexigrid --width 15 --height 10 --dictionary words.txt --debug
//! ```

mod dictionary;

use std::{path::PathBuf, process};

use clap::Parser;
use lexigrid_game::GameBoard;
use lexigrid_generator::BoardSeed;
use lexigrid_search::Direction;
use log::{LevelFilter, debug, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The width of the word search board, in characters.
    #[arg(long, value_name = "CELLS")]
    width: usize,

    /// The height of the word search board, in characters.
    #[arg(long, value_name = "CELLS")]
    height: usize,

    /// File containing dictionary words, one per line.
    #[arg(long, value_name = "FILE")]
    dictionary: PathBuf,

    /// Board seed: 64 hex digits are used verbatim, anything else is hashed.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() {
    better_panic::install();
    let args = Args::parse();
    init_logging(args.debug);

    let words = match dictionary::load(&args.dictionary) {
        Ok(words) => words,
        Err(err) => {
            eprintln!(
                "cannot read dictionary {}: {err}",
                args.dictionary.display()
            );
            process::exit(1);
        }
    };
    if words.is_empty() {
        eprintln!("dictionary {} contains no words", args.dictionary.display());
        process::exit(2);
    }

    info!("Generating game board...");
    let seed = args.seed.as_deref().map(parse_seed);
    let generated = match seed {
        Some(seed) => GameBoard::generate_with_seed(args.width, args.height, seed),
        None => GameBoard::generate(args.width, args.height),
    };
    let mut board = match generated {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    if let Some(seed) = board.seed() {
        info!("Generated {} board from seed {seed}", board.dimensions());
    }

    debug!("====================");
    debug!("Generated Game Board");
    debug!("====================");
    for line in board.to_string().lines() {
        debug!("{line}");
    }
    for direction in Direction::ALL {
        debug!(
            "{direction}: {} vectors",
            board.search_space().family(direction).len()
        );
    }

    let found = match board.search(&words) {
        Ok(found) => found,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    println!("====================");
    println!("      RESULTS       ");
    println!("====================");
    for word in &found {
        println!("{word}");
    }

    debug!("generation took {:?}", board.generation_time());
    if let Some(elapsed) = board.search_time() {
        debug!("search took {elapsed:?}");
    }
}

/// Logs at info level by default, debug with `--debug`; `RUST_LOG` settings
/// take precedence over both.
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// 64 hex digits parse as a literal seed; anything else is hashed so a
/// memorable phrase works too.
fn parse_seed(input: &str) -> BoardSeed {
    input
        .parse()
        .unwrap_or_else(|_| BoardSeed::from_phrase(input))
}
