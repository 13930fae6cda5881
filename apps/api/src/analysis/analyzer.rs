//! Content analyzer — runs a category's rule bundle over a text block.
//!
//! Pure and synchronous. The only non-determinism is `industry_match`, which
//! is delegated to the injected `IndustryBenchmark`.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::benchmark::IndustryBenchmark;
use crate::analysis::models::{AnalysisInput, AnalysisResult, FieldCategory, Impact, Readability};
use crate::analysis::rules::{Note, CLARITY_RULE};
use crate::analysis::text::TextStats;

pub const MAX_SCORE: u32 = 100;

/// Deterministic part of an analysis: everything except `industry_match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentScore {
    pub score: u8,
    pub word_count: usize,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
}

/// Scores `text` against the rule bundle for `category`, then the clarity rule.
/// Blank text short-circuits to a zero score with no notes.
pub fn score_content(text: &str, category: FieldCategory) -> ContentScore {
    let stats = TextStats::from_text(text);

    if stats.is_blank() {
        return ContentScore {
            score: 0,
            word_count: 0,
            suggestions: vec![],
            keywords: vec![],
        };
    }

    let mut total = 0_u32;
    let mut suggestions = Vec::new();
    let mut keywords = Vec::new();

    for rule in category.rules().iter().chain(std::iter::once(&CLARITY_RULE)) {
        let verdict = rule.evaluate(&stats);
        total += verdict.points;
        match verdict.note {
            Some(Note::Keyword(k)) => keywords.push(k.to_string()),
            Some(Note::Suggestion(s)) => suggestions.push(s.to_string()),
            None => {}
        }
    }

    let score = total.min(MAX_SCORE) as u8;
    debug!(
        "Scored {} text: {} words, score {score}",
        category.as_str(),
        stats.word_count
    );

    ContentScore {
        score,
        word_count: stats.word_count,
        suggestions,
        keywords,
    }
}

/// Entry point used by handlers and the debounced analyzer.
#[derive(Clone)]
pub struct ContentAnalyzer {
    benchmark: Arc<dyn IndustryBenchmark>,
}

impl ContentAnalyzer {
    pub fn new(benchmark: Arc<dyn IndustryBenchmark>) -> Self {
        Self { benchmark }
    }

    pub fn benchmark_name(&self) -> &'static str {
        self.benchmark.name()
    }

    pub fn analyze(&self, text: &str, category: FieldCategory) -> AnalysisResult {
        let ContentScore {
            score,
            word_count,
            suggestions,
            keywords,
        } = score_content(text, category);

        // Blank text has nothing to benchmark.
        let industry_match = if word_count == 0 {
            0
        } else {
            self.benchmark.industry_match(score)
        };

        AnalysisResult {
            score,
            suggestions,
            keywords,
            readability: Readability::from_score(score),
            impact: Impact::from_score(score),
            industry_match,
        }
    }

    pub fn analyze_input(&self, input: &AnalysisInput) -> AnalysisResult {
        self.analyze(&input.text, input.field_category)
    }
}
