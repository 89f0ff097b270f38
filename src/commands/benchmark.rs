//! Benchmark command
//!
//! Measures compile + rescan throughput over random criteria lists. Trials are
//! independent, so they run in parallel; each worker owns its own engine.

use crate::core::{Criterion, Kind, Scope, WORD_LENGTH, Word};
use crate::filter::{FilterEngine, PAGE_SIZE, compile};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub trials: usize,
    /// Upper bound on criteria per trial (at least one)
    pub max_criteria: usize,
    /// Fixed seed for reproducible runs; random when `None`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(trials: usize) -> Self {
        Self {
            trials,
            max_criteria: 4,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub trials: usize,
    pub corpus_size: usize,
    pub min_matches: usize,
    pub max_matches: usize,
    pub average_matches: f64,
    pub average_atoms: f64,
    pub empty_results: usize,
    pub duration: Duration,
    pub scans_per_second: f64,
}

/// Generate a random criteria list
///
/// Kinds are always valid for their scope; letters are lowercase ASCII.
pub fn random_criteria<R: Rng>(rng: &mut R, max_criteria: usize) -> Vec<Criterion> {
    let count = rng.random_range(1..=max_criteria.max(1));
    (0..count).map(|_| random_criterion(rng)).collect()
}

fn random_criterion<R: Rng>(rng: &mut R) -> Criterion {
    let position = rng.random_range(0..=WORD_LENGTH);
    let scope = Scope::at(position).unwrap_or(Scope::All);

    let kinds: Vec<Kind> = Kind::ALL
        .into_iter()
        .filter(|kind| kind.valid_at(scope))
        .collect();
    let kind = kinds.choose(rng).copied().unwrap_or_default();

    let letter_count = if kind.is_singleton() {
        1
    } else {
        rng.random_range(1..=3)
    };
    let letters: String = (0..letter_count)
        .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
        .collect();

    Criterion::new(kind, letters, scope)
}

/// Run the benchmark against `corpus`
#[must_use]
pub fn run_benchmark(corpus: &[Word], config: &BenchmarkConfig) -> BenchmarkResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let trials: Vec<Vec<Criterion>> = (0..config.trials)
        .map(|_| random_criteria(&mut rng, config.max_criteria))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(trials.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<(usize, usize)> = trials
        .par_iter()
        .map_init(
            || FilterEngine::new(corpus.to_vec(), PAGE_SIZE),
            |engine, criteria| {
                let predicate = compile(criteria);
                engine.refilter(&predicate);
                pb.inc(1);
                (engine.result_count(), predicate.atom_count())
            },
        )
        .collect();

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let count = outcomes.len().max(1) as f64;
    let total_matches: usize = outcomes.iter().map(|&(matches, _)| matches).sum();
    let total_atoms: usize = outcomes.iter().map(|&(_, atoms)| atoms).sum();

    BenchmarkResult {
        seed,
        trials: outcomes.len(),
        corpus_size: corpus.len(),
        min_matches: outcomes.iter().map(|&(m, _)| m).min().unwrap_or(0),
        max_matches: outcomes.iter().map(|&(m, _)| m).max().unwrap_or(0),
        average_matches: total_matches as f64 / count,
        average_atoms: total_atoms as f64 / count,
        empty_results: outcomes.iter().filter(|&&(m, _)| m == 0).count(),
        duration,
        scans_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
