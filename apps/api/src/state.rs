use crate::analysis::ContentAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Carries the industry benchmark chosen at startup (jitter, seeded jitter or flat).
    pub analyzer: ContentAnalyzer,
}
