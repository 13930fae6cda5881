#![allow(dead_code)]

//! Debounced analysis for interactive editors.
//!
//! Library-side helper for editor clients embedding the scorer; the HTTP
//! routes score synchronously and do not use it.
//!
//! Each `submit` cancels the pending job and schedules a fresh one after the
//! debounce delay. Results are published on a `watch` channel tagged with a
//! generation number; only the most recent submission ever publishes.
//! The scorer itself stays synchronous: the delay lives here, not in `analyze`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::analysis::analyzer::ContentAnalyzer;
use crate::analysis::models::{AnalysisInput, AnalysisResult};
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisUpdate {
    pub generation: u64,
    pub input: AnalysisInput,
    pub result: AnalysisResult,
}

pub struct DebouncedAnalyzer {
    analyzer: ContentAnalyzer,
    delay: Duration,
    min_chars: usize,
    latest: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    tx: Arc<watch::Sender<Option<AnalysisUpdate>>>,
}

impl DebouncedAnalyzer {
    pub fn new(
        analyzer: ContentAnalyzer,
        delay: Duration,
        min_chars: usize,
    ) -> (Self, watch::Receiver<Option<AnalysisUpdate>>) {
        let (tx, rx) = watch::channel(None);
        let debouncer = Self {
            analyzer,
            delay,
            min_chars,
            latest: Arc::new(AtomicU64::new(0)),
            pending: None,
            tx: Arc::new(tx),
        };
        (debouncer, rx)
    }

    pub fn from_config(
        analyzer: ContentAnalyzer,
        config: &Config,
    ) -> (Self, watch::Receiver<Option<AnalysisUpdate>>) {
        Self::new(
            analyzer,
            Duration::from_millis(config.analysis_debounce_ms),
            config.min_analysis_chars,
        )
    }

    /// Schedules analysis of `input`, superseding anything still pending.
    ///
    /// Returns the generation assigned to this submission, or `None` when the
    /// text is too short to analyze (the pending job is still cancelled).
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, input: AnalysisInput) -> Option<u64> {
        self.cancel();

        if input.text.trim().chars().count() < self.min_chars {
            return None;
        }

        let generation = self.latest.load(Ordering::SeqCst);
        let analyzer = self.analyzer.clone();
        let latest = Arc::clone(&self.latest);
        let tx = Arc::clone(&self.tx);
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let result = analyzer.analyze_input(&input);
            tx.send_if_modified(|current| {
                // A newer submit or cancel bumped the counter.
                if latest.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *current = Some(AnalysisUpdate {
                    generation,
                    input,
                    result,
                });
                true
            });
        }));

        debug!("Scheduled analysis generation {generation} in {delay:?}");
        Some(generation)
    }

    /// Drops the pending job, if any, without publishing.
    pub fn cancel(&mut self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for DebouncedAnalyzer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
