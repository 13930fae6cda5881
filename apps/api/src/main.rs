mod analysis;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{ContentAnalyzer, FlatBenchmark, IndustryBenchmark, JitterBenchmark};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    let benchmark = build_benchmark(&config);
    info!(
        "Industry benchmark: {} (spread {}, seed {:?})",
        benchmark.name(),
        config.industry_spread,
        config.industry_seed
    );

    let state = AppState {
        analyzer: ContentAnalyzer::new(benchmark),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the industry benchmark: flat when the spread is 0, seeded jitter when a seed is set.
fn build_benchmark(config: &Config) -> Arc<dyn IndustryBenchmark> {
    if config.industry_spread == 0.0 {
        return Arc::new(FlatBenchmark);
    }
    match config.industry_seed {
        Some(seed) => Arc::new(JitterBenchmark::seeded(config.industry_spread, seed)),
        None => Arc::new(JitterBenchmark::from_entropy(config.industry_spread)),
    }
}
