//! Benchmark command
//!
//! Measures autocomplete latency over prefixes sampled from the stored words.

use crate::core::RankedWordStore;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub queries: usize,
    pub prefix_len: usize,
    pub total_suggestions: usize,
    pub average_suggestions: f64,
    pub max_suggestions: usize,
    pub empty_results: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Pick up to `count` stored words at random and cut each to `prefix_len` characters
///
/// Words are drawn with replacement, so the result always has `count` entries unless the store
/// is empty.
#[must_use]
pub fn sample_prefixes(store: &RankedWordStore, count: usize, prefix_len: usize) -> Vec<String> {
    let mut words: Vec<&str> = store.words().collect();
    // Sorted so the sample depends only on the rng, not on hash order
    words.sort_unstable();

    let mut rng = rand::rng();
    (0..count)
        .filter_map(|_| words.choose(&mut rng))
        .map(|word| word.chars().take(prefix_len).collect())
        .collect()
}

/// Run autocomplete for every prefix and collect timing statistics
///
/// `prefix_len` is the length the prefixes were sampled with and is reported as given.
/// Rank updates from the run stay in the store, as with any other query.
pub fn run_benchmark(
    store: &mut RankedWordStore,
    prefixes: &[String],
    prefix_len: usize,
) -> BenchmarkResult {
    let pb = ProgressBar::new(prefixes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_suggestions = 0;
    let mut max_suggestions = 0;
    let mut empty_results = 0;

    for prefix in prefixes {
        let found = store.autocomplete(prefix).len();

        total_suggestions += found;
        max_suggestions = max_suggestions.max(found);
        if found == 0 {
            empty_results += 1;
        }
        pb.inc(1);
    }

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let queries = prefixes.len();

    BenchmarkResult {
        queries,
        prefix_len,
        total_suggestions,
        average_suggestions: if queries == 0 {
            0.0
        } else {
            total_suggestions as f64 / queries as f64
        },
        max_suggestions,
        empty_results,
        duration,
        queries_per_second: if duration.is_zero() {
            0.0
        } else {
            queries as f64 / duration.as_secs_f64()
        },
    }
}
