// Presentation layer - HTTP surface and page template
pub mod app_state;
pub mod handlers;
pub mod page;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, health_check, list_regions};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/regions", get(list_regions))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::infrastructure::config::PathSettings;
    use crate::infrastructure::file_source::FileDocumentSource;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn write_documents(dir: &std::path::Path, skip: Option<&str>) {
        let documents = [
            ("system-health.json", r#"{"generated_at": "2024-01-01T00:00:00Z", "openclaw": {"status": "online"}}"#),
            ("skyhawk-pipeline.json", r#"{"status": "unavailable", "opportunities": [], "reason": "CRM offline"}"#),
            ("ventures.json", r#"{"ventures": [{"name": "Skyhawk", "priority_tier": 1}]}"#),
            ("activity-feed.json", r#"{"events": []}"#),
            ("implementation-progress.json", r#"{"items": []}"#),
            ("finance.json", r#"{"generated_at": "2024-03-01T00:00:00Z", "status": "ok"}"#),
        ];
        std::fs::create_dir_all(dir.join("data")).unwrap();
        for (name, body) in documents {
            if Some(name) != skip {
                std::fs::write(dir.join("data").join(name), body).unwrap();
            }
        }
    }

    fn create_test_app(dir: &std::path::Path) -> Router {
        let source = Arc::new(FileDocumentSource::new(dir));
        let service = DashboardService::new(source, PathSettings::default().to_map());
        build_router(Arc::new(AppState {
            dashboard_service: service,
            default_tab: "system".to_string(),
        }))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempdir().unwrap();
        let (status, body) = get_body(create_test_app(dir.path()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_page_renders_documents() {
        let dir = tempdir().unwrap();
        write_documents(dir.path(), None);

        let (status, body) = get_body(create_test_app(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<td colspan="4">No live opportunities available (CRM offline).</td>"#));
        assert!(body.contains("<h3>Skyhawk</h3>"));
        assert!(body.contains(r#"<section class="tab-panel is-active" data-panel="system">"#));
        assert!(body.contains(r#"<span id="generatedAt">Data: "#));
        assert!(!body.contains("Data: unavailable"));
    }

    #[tokio::test]
    async fn test_page_tab_query() {
        let dir = tempdir().unwrap();
        write_documents(dir.path(), None);

        let (_, body) = get_body(create_test_app(dir.path()), "/?tab=ventures").await;
        assert!(body.contains(r#"<section class="tab-panel is-active" data-panel="ventures">"#));
        assert!(body.contains(r#"<section class="tab-panel" data-panel="system">"#));
        assert!(body.contains(r#"<button class="tab is-active" data-tab="ventures" type="button">"#));
        assert!(!body.contains(r#"href="/?tab=system""#));

        let (_, body) = get_body(create_test_app(dir.path()), "/?tab=nope").await;
        assert!(body.contains(r#"<section class="tab-panel is-active" data-panel="system">"#));
    }

    #[tokio::test]
    async fn test_page_missing_document_renders_nothing() {
        let dir = tempdir().unwrap();
        write_documents(dir.path(), Some("finance.json"));

        let (status, body) = get_body(create_test_app(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<span id="generatedAt">Failed to load dashboard data</span>"#));
        assert!(!body.contains("CRM offline"));
        assert!(!body.contains("Skyhawk</h3>"));
    }

    #[tokio::test]
    async fn test_regions_endpoint() {
        let dir = tempdir().unwrap();
        write_documents(dir.path(), None);

        let (status, body) = get_body(create_test_app(dir.path()), "/api/regions").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["loaded"], true);
        assert_eq!(json["generated_at"], "2024-03-01T00:00:00+00:00");
        assert_eq!(json["regions"]["openclawStatus"]["text"], "online");
        assert_eq!(json["regions"]["openclawStatus"]["classes"], serde_json::json!(["status-ok"]));
    }

    #[tokio::test]
    async fn test_regions_endpoint_failure() {
        let dir = tempdir().unwrap();
        write_documents(dir.path(), Some("ventures.json"));

        let (status, body) = get_body(create_test_app(dir.path()), "/api/regions").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["loaded"], false);
        assert!(json["error"].as_str().unwrap().contains("./data/ventures.json"));
        assert_eq!(json["regions"]["generatedAt"]["text"], "Failed to load dashboard data");
        assert!(json["regions"].get("pipelineRows").is_none());
    }
}
