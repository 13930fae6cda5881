pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::not_found;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content Analysis API
        .route("/api/v1/content/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/content/analyze/batch",
            post(handlers::handle_analyze_batch),
        )
        .route(
            "/api/v1/content/categories",
            get(handlers::handle_categories),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::{ContentAnalyzer, FlatBenchmark};
    use crate::config::Config;

    fn test_router() -> Router {
        build_router(AppState {
            config: Config {
                max_batch_fields: 3,
                ..Config::default()
            },
            analyzer: ContentAnalyzer::new(Arc::new(FlatBenchmark)),
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(request).await
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(request).await
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["benchmark"], "flat");
    }

    #[tokio::test]
    async fn test_analyze_returns_result() {
        let (status, body) = post_json(
            "/api/v1/content/analyze",
            json!({
                "text": "Developed and implemented a new system that increased efficiency by 30%",
                "field_category": "summary"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let analysis = &body["analysis"];
        assert_eq!(analysis["score"], 80);
        assert_eq!(analysis["industry_match"], 80);
        assert_eq!(analysis["readability"], "good");
        assert_eq!(analysis["impact"], "high");
        assert_eq!(analysis["keywords"].as_array().unwrap().len(), 2);
        assert!(body["analyzed_at"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_rejects_short_text() {
        let (status, body) = post_json(
            "/api/v1/content/analyze",
            json!({ "text": "  Rust  ", "field_category": "skills" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_category() {
        let (status, _) = post_json(
            "/api/v1/content/analyze",
            json!({ "text": "Knits excellent scarves", "field_category": "hobbies" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_batch_averages_scores() {
        let (status, body) = post_json(
            "/api/v1/content/analyze/batch",
            json!({
                "fields": [
                    { "text": "JavaScript, Python, SQL", "field_category": "skills" },
                    { "text": "", "field_category": "education" }
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["score"], 35);
        assert_eq!(results[1]["score"], 0);
        assert_eq!(body["average_score"], 17.5);
    }

    #[tokio::test]
    async fn test_batch_rejects_empty_and_oversized() {
        let (status, _) =
            post_json("/api/v1/content/analyze/batch", json!({ "fields": [] })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let field = json!({ "text": "Rust, Go", "field_category": "skills" });
        let (status, body) = post_json(
            "/api/v1/content/analyze/batch",
            json!({ "fields": [field.clone(), field.clone(), field.clone(), field] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains('3'));
    }

    #[tokio::test]
    async fn test_categories_lists_vocabulary() {
        let (status, body) = get_json("/api/v1/content/categories").await;
        assert_eq!(status, StatusCode::OK);
        let categories = body.as_array().unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0]["category"], "summary");
        assert_eq!(categories[1]["keywords"][0], "STAR method");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let (status, body) = get_json("/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
