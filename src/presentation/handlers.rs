// HTTP request handlers
use crate::application::dashboard_service::WidgetInput;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::json_mapper::dashboard_to_view;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Debug, Default, Deserialize)]
pub struct WidgetQuery {
    pub min_count: Option<f64>,
    /// JSON array of item names, e.g. `["Milk","Eggs, large"]`; `[]` selects nothing
    pub items: Option<String>,
}

impl WidgetQuery {
    fn into_input(self) -> Result<WidgetInput, serde_json::Error> {
        let items = self
            .items
            .map(|raw| serde_json::from_str::<Vec<String>>(&raw))
            .transpose()?;

        Ok(WidgetInput {
            min_count: self.min_count,
            items,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards/:session", get(get_dashboard))
        .route("/sessions/:session", delete(reset_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard for a session, applying any widget values in the query
pub async fn get_dashboard(
    Path(session_id): Path<String>,
    Query(query): Query<WidgetQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let input = match query.into_input() {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!("Rejecting items selection for session {}: {}", session_id, e);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    // Held for the whole render so a reset or a concurrent request cannot interleave
    let mut sessions = state.sessions.lock().await;
    let mut session = sessions.checkout(&session_id);
    let dashboard = state
        .dashboard_service
        .get_dashboard(&mut session, &input)
        .await;
    sessions.checkin(&session_id, session);
    drop(sessions);

    match json_response(&dashboard_to_view(dashboard), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Drop a session's retained widget state
pub async fn reset_session(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    if state.sessions.reset(&session_id).await {
        tracing::info!("Reset session {}", session_id);
    }
    StatusCode::NO_CONTENT
}
