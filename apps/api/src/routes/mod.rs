pub mod health;
pub mod landing;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::index_handler))
        .route("/health", get(health::health_handler))
        // JSON API
        .route("/api/generate/outline", post(handlers::handle_outline))
        .route("/api/generate/questions", post(handlers::handle_questions))
        .route("/api/generate/title", post(handlers::handle_title))
        // Form endpoints (HTML fragments)
        .route("/generate_research", post(handlers::handle_research_form))
        .route("/generate_questions", post(handlers::handle_questions_form))
        .route("/generate_title", post(handlers::handle_title_form))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::generation::generator::Generator;
    use crate::llm_client::mock::StubModel;

    fn app(stub: &StubModel) -> Router {
        build_router(AppState {
            generator: Generator::new(Arc::new(stub.clone())),
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ── JSON API ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_title_defaults_to_deep_style() {
        let stub = StubModel::replying("1. Machines With Morals");
        let (status, body) =
            post_json(app(&stub), "/api/generate/title", json!({"topic": "AI ethics"})).await;

        assert_eq!(status, StatusCode::OK);
        let prompt = stub.last_prompt().unwrap();
        assert!(prompt.contains("Topic: AI ethics"));
        assert!(prompt.contains("Style: deep"));

        let titles = body["titles"].as_str().unwrap();
        assert!(titles.contains("# Episode Title Options"));
        assert!(titles.contains("- Style: Deep"));
        assert!(titles.contains("- Topic: AI ethics"));
        assert!(titles.contains("- Generated: "));
    }

    #[tokio::test]
    async fn test_outline_returns_html_envelope() {
        let stub = StubModel::replying("# Episode");
        let (status, body) = post_json(
            app(&stub),
            "/api/generate/outline",
            json!({"topic": "Ocean plastics", "duration": 45, "style": "casual"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let outline = body["outline"].as_str().unwrap();
        assert!(outline.contains("Podcast Episode Outline"));
        assert!(outline.contains("<p>Duration: 45m</p>"));
        assert!(outline.contains("<p>Topic: Ocean plastics</p>"));
        assert!(outline.contains("<p>Style: Casual</p>"));
        assert!(stub.last_prompt().unwrap().contains("Duration: 45 minutes"));
    }

    #[tokio::test]
    async fn test_outline_duration_defaults_to_thirty_minutes() {
        let stub = StubModel::replying("# Episode");
        let (_, body) =
            post_json(app(&stub), "/api/generate/outline", json!({"topic": "Bees"})).await;

        assert!(body["outline"].as_str().unwrap().contains("<p>Duration: 30m</p>"));
        assert!(stub.last_prompt().unwrap().contains("Duration: 30 minutes"));
    }

    #[tokio::test]
    async fn test_questions_returns_markdown_envelope() {
        let stub = StubModel::replying("1. What got you started?");
        let (status, body) = post_json(
            app(&stub),
            "/api/generate/questions",
            json!({"topic": "Chess", "guest_expertise": "grandmaster"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_str().unwrap();
        assert!(questions.contains("# Interview Questions"));
        assert!(questions.contains("- Guest Expertise: grandmaster"));
        assert!(questions.contains("- Style: Deep"));
    }

    #[tokio::test]
    async fn test_missing_topic_is_rejected_without_calling_model() {
        let stub = StubModel::replying("unused");

        let (status, body) =
            post_json(app(&stub), "/api/generate/outline", json!({"style": "deep"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Topic is required");

        let (status, body) =
            post_json(app(&stub), "/api/generate/title", json!({"topic": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Topic is required");

        let (status, body) =
            post_json(app(&stub), "/api/generate/questions", json!({"topic": "Chess"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Topic and guest expertise are required");

        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_model_failure_maps_to_generic_500() {
        let stub = StubModel::failing("quota exceeded");

        let (status, body) =
            post_json(app(&stub), "/api/generate/outline", json!({"topic": "Bees"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate outline");

        let (status, body) = post_json(
            app(&stub),
            "/api/generate/questions",
            json!({"topic": "Bees", "guest_expertise": "beekeeping"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate questions");
    }

    #[tokio::test]
    async fn test_empty_model_reply_maps_to_generic_500() {
        let stub = StubModel::empty();
        let (status, body) =
            post_json(app(&stub), "/api/generate/title", json!({"topic": "Bees"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate titles");
    }

    #[tokio::test]
    async fn test_malformed_json_is_reported_with_its_cause() {
        let stub = StubModel::replying("unused");
        let response = app(&stub)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate/title")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert_eq!(stub.calls(), 0);
    }

    // ── Form endpoints ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_research_form_returns_html_report() {
        let stub = StubModel::replying("# Executive Summary");
        let (status, html) = post_form(
            app(&stub),
            "/generate_research",
            "topic=Electric+cars&keywords=batteries%2C+charging&analysisType=audience",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Content Research &amp; Analysis"));
        assert!(html.contains("<strong>Topic:</strong> Electric cars"));
        assert!(html.contains("<strong>Analysis Type:</strong> Audience"));
        assert!(html.contains("<strong>Generated:</strong> "));

        let prompt = stub.last_prompt().unwrap();
        assert!(prompt.starts_with("Create a clear, structured analysis of audience interests"));
        assert!(prompt.contains("Keywords/Areas: batteries, charging"));
    }

    #[tokio::test]
    async fn test_research_form_rejects_unknown_analysis_type() {
        let stub = StubModel::replying("unused");
        let (status, html) = post_form(
            app(&stub),
            "/generate_research",
            "topic=Cars&keywords=ev&analysisType=sentiment",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            html,
            r#"<div class="error-message">Invalid analysis type: sentiment</div>"#
        );
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_research_form_matches_analysis_type_exactly() {
        let stub = StubModel::replying("unused");
        let (status, html) = post_form(
            app(&stub),
            "/generate_research",
            "topic=Cars&keywords=ev&analysisType=+trends+",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            html,
            r#"<div class="error-message">Invalid analysis type:  trends </div>"#
        );
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_research_form_requires_all_fields() {
        let stub = StubModel::replying("unused");
        let (status, html) =
            post_form(app(&stub), "/generate_research", "topic=Cars&analysisType=gaps").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            html,
            r#"<div class="error-message">Please provide all required fields</div>"#
        );
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_research_form_surfaces_model_failure_as_fragment() {
        let stub = StubModel::failing("quota exceeded");
        let (status, html) = post_form(
            app(&stub),
            "/generate_research",
            "topic=Cars&keywords=ev&analysisType=trends",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.starts_with(r#"<div class="error-message">"#));
        assert!(html.contains("Error generating research analysis: "));
        assert!(html.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_research_form_reports_empty_reply() {
        let stub = StubModel::empty();
        let (status, html) = post_form(
            app(&stub),
            "/generate_research",
            "topic=Cars&keywords=ev&analysisType=gaps",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            html,
            r#"<div class="error-message">No content generated from the AI model</div>"#
        );
    }

    #[tokio::test]
    async fn test_questions_form_requires_style() {
        let stub = StubModel::replying("unused");
        let (status, html) = post_form(
            app(&stub),
            "/generate_questions",
            "topic=Chess&guest_expertise=grandmaster",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("Please provide all required fields"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_questions_form_returns_markdown() {
        let stub = StubModel::replying("1. Opening move?");
        let (status, body) = post_form(
            app(&stub),
            "/generate_questions",
            "topic=Chess&guest_expertise=grandmaster&style=interview",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("# Interview Questions"));
        assert!(body.contains("- Style: Interview"));
        assert!(body.contains("1. Opening move?"));
    }

    #[tokio::test]
    async fn test_questions_form_escapes_echoed_fields() {
        let stub = StubModel::replying("1. Opening move?");
        let (status, body) = post_form(
            app(&stub),
            "/generate_questions",
            "topic=%3Cimg+src%3Dx+onerror%3Dalert(1)%3E&guest_expertise=chess&style=deep",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("- Topic: &lt;img src=x onerror=alert(1)&gt;"));
        assert!(!body.contains("<img"));
    }

    #[tokio::test]
    async fn test_title_form_failure_is_generic() {
        let stub = StubModel::failing("quota exceeded");
        let (status, html) =
            post_form(app(&stub), "/generate_title", "topic=Chess&style=deep").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            html,
            r#"<div class="error-message">Failed to generate titles. Please try again.</div>"#
        );
    }

    #[tokio::test]
    async fn test_title_form_returns_markdown() {
        let stub = StubModel::replying("1. Checkmate");
        let (status, body) =
            post_form(app(&stub), "/generate_title", "topic=Chess&style=deep").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("# Episode Title Options"));
        assert!(body.contains("- Topic: Chess"));
    }

    // ── Static ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_landing_page_and_health() {
        let stub = StubModel::replying("unused");

        let response = app(&stub)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("<form"));

        let response = app(&stub)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
