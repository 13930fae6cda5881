// Content Quality Scorer
// Implements: tokenization, per-category rule bundles, industry benchmark, debounced scheduling.
// Scoring is pure and synchronous; any delay belongs to the caller (see debounce).

pub mod analyzer;
pub mod benchmark;
pub mod debounce;
pub mod handlers;
pub mod models;
pub mod rules;
pub mod text;

// Re-export the public API consumed by state and handlers.
pub use analyzer::ContentAnalyzer;
pub use benchmark::{FlatBenchmark, IndustryBenchmark, JitterBenchmark};
