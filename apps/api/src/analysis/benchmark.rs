//! Industry benchmark — pluggable source for the `industry_match` percentage.
//!
//! Default: `JitterBenchmark` (score plus a uniform draw in `[0, spread)`).
//! `FlatBenchmark` echoes the score and is used when the spread is configured to 0.
//!
//! `ContentAnalyzer` holds an `Arc<dyn IndustryBenchmark>`, chosen at startup via config.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SPREAD: f64 = 20.0;

/// Maps a deterministic content score to an industry-match percentage.
/// Implementations must return a value in `[score, min(100, score + spread)]`.
pub trait IndustryBenchmark: Send + Sync {
    fn industry_match(&self, score: u8) -> u8;

    /// "jitter" | "flat" — surfaced in logs.
    fn name(&self) -> &'static str;
}

/// Adds a uniformly sampled perturbation to the score.
pub struct JitterBenchmark {
    spread: f64,
    rng: Mutex<StdRng>,
}

impl JitterBenchmark {
    pub fn from_entropy(spread: f64) -> Self {
        Self {
            spread,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of draws for a given seed.
    pub fn seeded(spread: f64, seed: u64) -> Self {
        Self {
            spread,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndustryBenchmark for JitterBenchmark {
    fn industry_match(&self, score: u8) -> u8 {
        let offset = if self.spread > 0.0 {
            // Poisoning leaves the RNG state intact.
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_range(0.0..self.spread)
        } else {
            0.0
        };
        clamp_percent(score as f64 + offset)
    }

    fn name(&self) -> &'static str {
        "jitter"
    }
}

/// No perturbation: `industry_match == score`.
pub struct FlatBenchmark;

impl IndustryBenchmark for FlatBenchmark {
    fn industry_match(&self, score: u8) -> u8 {
        score.min(100)
    }

    fn name(&self) -> &'static str {
        "flat"
    }
}

fn clamp_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
