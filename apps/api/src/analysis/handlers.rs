//! Axum route handlers for the Content Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::models::{AnalysisInput, AnalysisResult, FieldCategory};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub field_category: FieldCategory,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub fields: Vec<AnalysisInput>,
}

#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<AnalysisResult>,
    pub average_score: f64,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: FieldCategory,
    pub keywords: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/content/analyze
///
/// Scores a single field. Text shorter than `MIN_ANALYSIS_CHARS` (after trimming)
/// is rejected; the editor is expected not to send it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let min_chars = state.config.min_analysis_chars;
    if request.text.trim().chars().count() < min_chars {
        return Err(AppError::Validation(format!(
            "text must be at least {min_chars} characters"
        )));
    }

    let analysis = state
        .analyzer
        .analyze(&request.text, request.field_category);

    Ok(Json(AnalyzeResponse {
        analysis,
        analyzed_at: Utc::now(),
    }))
}

/// POST /api/v1/content/analyze/batch
///
/// Scores every field of a document in one round trip. Fields are independent;
/// blank fields score 0 rather than failing the batch.
pub async fn handle_analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>, AppError> {
    if request.fields.is_empty() {
        return Err(AppError::Validation("fields cannot be empty".to_string()));
    }
    let max_fields = state.config.max_batch_fields;
    if request.fields.len() > max_fields {
        return Err(AppError::Validation(format!(
            "at most {max_fields} fields may be analyzed per request"
        )));
    }

    let results: Vec<AnalysisResult> = request
        .fields
        .iter()
        .map(|input| state.analyzer.analyze_input(input))
        .collect();

    let average_score =
        results.iter().map(|r| r.score as f64).sum::<f64>() / results.len() as f64;

    info!(
        "Analyzed batch of {} fields (average score {average_score:.1})",
        results.len()
    );

    Ok(Json(BatchAnalyzeResponse {
        results,
        average_score,
        analyzed_at: Utc::now(),
    }))
}

/// GET /api/v1/content/categories
pub async fn handle_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        FieldCategory::ALL
            .iter()
            .map(|&category| CategoryInfo {
                category,
                keywords: category.keyword_vocabulary(),
            })
            .collect(),
    )
}
