// HTTP request handlers
use crate::application::dashboard_service::LoadOutcome;
use crate::application::view::InMemoryView;
use crate::infrastructure::http_response::{html_response, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

#[derive(Serialize)]
pub struct RegionsResponse {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub regions: InMemoryView,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard page, re-fetching every document
pub async fn dashboard_page(
    Query(query): Query<TabQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let mut view = InMemoryView::new();
    state.dashboard_service.load(&mut view).await;

    let mut tabs = state.tab_controller();
    if let Some(tab) = query.tab.as_deref() {
        if !tabs.activate(tab) {
            tracing::debug!("Ignoring unknown tab: {}", tab);
        }
    }

    match html_response(render_page(&view, &tabs)) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Rendered regions as JSON
pub async fn list_regions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut view = InMemoryView::new();
    let outcome = state.dashboard_service.load(&mut view).await;

    let (status, body) = match outcome {
        LoadOutcome::Loaded { generated_at } => (
            StatusCode::OK,
            RegionsResponse {
                loaded: true,
                generated_at: generated_at.map(|ts| ts.to_rfc3339()),
                error: None,
                regions: view,
            },
        ),
        LoadOutcome::Failed(e) => (
            StatusCode::BAD_GATEWAY,
            RegionsResponse {
                loaded: false,
                generated_at: None,
                error: Some(e.to_string()),
                regions: view,
            },
        ),
    };

    match json_response(status, &body) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
