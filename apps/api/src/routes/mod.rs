pub mod health;

use axum::{
    routing::{any, get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;

use crate::critique::handlers::handle_critique;
use crate::extract::handlers::handle_extract_pdf;
use crate::leads::handlers::handle_lead;
use crate::readiness::function::handle_function_route;
use crate::readiness::handlers::handle_job_readiness;
use crate::state::AppState;

/// Decodes a JSON request body. An empty body reads as `{}`.
///
/// Handlers take the raw bytes and call this so each route controls its own
/// rejection message instead of the extractor's.
pub fn parse_json_body<T: DeserializeOwned>(raw: &[u8]) -> Result<T, serde_json::Error> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_slice(b"{}");
    }
    serde_json::from_slice(raw)
}

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Deterministic readiness check
        .route("/api/job-readiness", post(handle_job_readiness))
        .route(
            "/.netlify/functions/job-readiness",
            any(handle_function_route),
        )
        // Auxiliary services
        .route("/api/analyze", post(handle_critique))
        .route("/api/lead", post(handle_lead))
        .route("/api/extract-pdf", post(handle_extract_pdf))
        .fallback_service(static_files)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::critique::{Critique, ResumeCritic};
    use crate::errors::AppError;
    use crate::leads::LeadStore;
    use crate::readiness::perturbation::FixedSource;
    use crate::readiness::taxonomy::Taxonomy;

    const RESUME: &str = "Full stack engineer: React, Redux and TypeScript on the frontend, \
        Node and Express on the backend, PostgreSQL database, deployed with Docker on AWS. \
        Built and launched three production projects.";

    struct StubCritic;

    #[async_trait]
    impl ResumeCritic for StubCritic {
        async fn critique(&self, _resume_text: &str) -> Result<Critique, AppError> {
            Ok(Critique {
                score: 74,
                score_summary: "Strong base.".to_string(),
                good: vec!["Clear stack".to_string()],
                fix: vec!["Quantify impact".to_string()],
            })
        }
    }

    fn test_router(critic: Option<Arc<dyn ResumeCritic>>) -> (Router, TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("index.html"), "<h1>Job Readiness</h1>").expect("index");
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            openai_api_key: None,
            leads_file: dir.path().join("leads.json"),
            static_dir: dir.path().to_path_buf(),
            score_seed: None,
        };
        let state = AppState {
            leads: Arc::new(LeadStore::new(config.leads_file.clone())),
            config,
            taxonomy: Arc::new(Taxonomy::standard()),
            jitter: Arc::new(FixedSource(0.5)),
            critic,
        };
        (build_router(state), dir)
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body)
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, bytes.to_vec())
    }

    async fn send_json(
        router: &Router,
        method: &str,
        uri: &str,
        payload: Value,
    ) -> (StatusCode, Value) {
        let (status, bytes) = send(router, method, uri, Body::from(payload.to_string())).await;
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    async fn send_multipart(router: &Router, field: &str, content: &[u8]) -> (StatusCode, Value) {
        const BOUNDARY: &str = "readiness-upload-boundary";
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"resume.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/extract-pdf")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    #[test]
    fn test_parse_empty_body_as_object() {
        let value: Value = parse_json_body(b"  ").unwrap();
        assert_eq!(value, json!({}));
        assert!(parse_json_body::<Value>(b"{oops").is_err());
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _dir) = test_router(None);
        let (status, bytes) = send(&router, "GET", "/health", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        let payload: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["llm_enabled"], false);
    }

    #[tokio::test]
    async fn test_job_readiness_report() {
        let (router, _dir) = test_router(None);
        let (status, payload) = send_json(
            &router,
            "POST",
            "/api/job-readiness",
            json!({ "text": RESUME, "role": "Full Stack Engineer" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["ok"], true);
        assert_eq!(payload["role"], "Full Stack Engineer");
        let areas = payload["skillAreas"].as_array().unwrap();
        assert_eq!(areas.len(), 5);
        assert_eq!(areas[3]["skillArea"], "Role Stack");
        assert_eq!(areas[3]["yourLevel"], "High");

        // FixedSource(0.5) shifts the score by exactly -5
        let base: u64 = areas.iter().map(|a| a["score"].as_u64().unwrap()).sum::<u64>() / 5;
        assert_eq!(payload["overallScore"].as_u64().unwrap(), base - 5);
    }

    #[tokio::test]
    async fn test_job_readiness_validation() {
        let (router, _dir) = test_router(None);

        let (status, payload) = send_json(
            &router,
            "POST",
            "/api/job-readiness",
            json!({ "text": RESUME, "role": "Astronaut" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            payload["error"],
            "Invalid role. Choose Backend Engineer, Full Stack Engineer, or Data Engineer."
        );

        let (status, payload) =
            send_json(&router, "POST", "/api/job-readiness", json!({ "text": "too short" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["ok"], false);

        let (status, bytes) =
            send(&router, "POST", "/api/job-readiness", Body::from("{broken")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let payload: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["error"], "Invalid request body.");
    }

    #[tokio::test]
    async fn test_function_route_matches_http_route() {
        let (router, _dir) = test_router(None);
        let request = json!({ "text": RESUME, "role": "Backend Engineer" });

        let (_, via_route) =
            send_json(&router, "POST", "/api/job-readiness", request.clone()).await;
        let (status, via_function) = send_json(
            &router,
            "POST",
            "/.netlify/functions/job-readiness",
            request,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(via_route, via_function);

        let (status, _) = send(
            &router,
            "GET",
            "/.netlify/functions/job-readiness",
            Body::empty(),
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_critique_without_llm_falls_back() {
        let (router, _dir) = test_router(None);
        let (status, payload) =
            send_json(&router, "POST", "/api/analyze", json!({ "text": RESUME })).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["error"], "LLM not configured");
        assert_eq!(payload["useFallback"], true);
    }

    #[tokio::test]
    async fn test_critique_with_stub_critic() {
        let (router, _dir) = test_router(Some(Arc::new(StubCritic)));

        let (status, payload) =
            send_json(&router, "POST", "/api/analyze", json!({ "text": RESUME })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["ok"], true);
        assert_eq!(payload["score"], 74);
        assert_eq!(payload["scoreSummary"], "Strong base.");
        assert_eq!(payload["scoreClass"], "score-good");

        let (status, payload) =
            send_json(&router, "POST", "/api/analyze", json!({ "text": "tiny" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "Resume text too short");
    }

    #[tokio::test]
    async fn test_lead_capture() {
        let (router, dir) = test_router(None);

        let (status, payload) =
            send_json(&router, "POST", "/api/lead", json!({ "email": "nope" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "Invalid email");

        let (status, payload) = send_json(
            &router,
            "POST",
            "/api/lead",
            json!({ "email": "  grace@example.com ", "source": "report" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({ "ok": true }));

        let saved: Value =
            serde_json::from_slice(&std::fs::read(dir.path().join("leads.json")).unwrap()).unwrap();
        assert_eq!(saved["leads"][0]["email"], "grace@example.com");
        assert_eq!(saved["leads"][0]["source"], "report");
        assert_eq!(saved["submitted"], json!(["grace@example.com"]));
    }

    #[tokio::test]
    async fn test_extract_pdf_requires_file_field() {
        let (router, _dir) = test_router(None);
        let (status, payload) = send_multipart(&router, "attachment", b"%PDF-1.4").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["ok"], false);
        assert_eq!(
            payload["error"],
            "PDF only. Upload a PDF file or paste text instead."
        );
    }

    #[tokio::test]
    async fn test_extract_pdf_rejects_unreadable_file() {
        let (router, _dir) = test_router(None);
        let (status, payload) =
            send_multipart(&router, "file", b"this is definitely not a pdf document").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(payload["ok"], false);
        assert_eq!(
            payload["error"],
            "Couldn't read that PDF. Try pasting instead."
        );
    }

    #[tokio::test]
    async fn test_static_files_served() {
        let (router, _dir) = test_router(None);

        let (status, bytes) = send(&router, "GET", "/", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"<h1>Job Readiness</h1>");

        let (status, _) = send(&router, "GET", "/missing.css", Body::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
