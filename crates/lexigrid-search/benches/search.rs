//! Benchmarks for search space extraction and word search.
//!
//! # Benchmarks
//!
//! - **`extraction`**: Derives all eight vector families from seeded random
//!   boards of several shapes, including a non-square one.
//! - **`word_search`**: Runs a twelve-word dictionary search against a fixed
//!   25x25 board's search space.
//!
//! # Test Data
//!
//! All boards are generated from one fixed seed so runs are reproducible:
//!
//! - `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use lexigrid_generator::{BoardGenerator, BoardSeed};
use lexigrid_search::{SearchSpace, WordSearcher};

const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

const SIZES: [(usize, usize); 3] = [(10, 10), (25, 25), (50, 20)];

const WORDS: [&str; 12] = [
    "cat", "dog", "bird", "fish", "horse", "mouse", "zebra", "whale", "otter", "crane", "shark",
    "eagle",
];

fn bench_extraction(c: &mut Criterion) {
    let seed = BoardSeed::from_str(SEED).unwrap();
    for (width, height) in SIZES {
        let generator = BoardGenerator::with_size(width, height).unwrap();
        let board = generator.generate_with_seed(seed);
        c.bench_with_input(
            BenchmarkId::new("extraction", format!("{width}x{height}")),
            &board.grid,
            |b, grid| {
                b.iter_batched(
                    || hint::black_box(grid),
                    SearchSpace::from_grid,
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_word_search(c: &mut Criterion) {
    let seed = BoardSeed::from_str(SEED).unwrap();
    let generator = BoardGenerator::with_size(25, 25).unwrap();
    let board = generator.generate_with_seed(seed);
    let space = SearchSpace::from_grid(&board.grid);
    let searcher = WordSearcher::new(&space);

    c.bench_function("word_search", |b| {
        b.iter(|| searcher.find_words(hint::black_box(&WORDS)));
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_extraction,
        bench_word_search
);
criterion_main!(benches);
