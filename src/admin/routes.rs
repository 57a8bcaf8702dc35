//! REST endpoints for the admin config.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::warn;

use super::store::ConfigStore;

/// Shared state for config routes.
#[derive(Clone)]
pub struct ConfigRouteState {
    pub store: Arc<ConfigStore>,
}

/// GET /api/admin/config
///
/// Returns the stored sequence as-is.
async fn get_config(State(state): State<ConfigRouteState>) -> impl IntoResponse {
    let entries = state.store.get().await;
    Json(Value::Array(entries))
}

/// POST /api/admin/config
///
/// Replaces the whole config. 400 if the body is not an array.
async fn replace_config(
    State(state): State<ConfigRouteState>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    match state.store.replace(payload).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({"message": "Config updated"})),
        ),
        Err(e) => {
            warn!(error = %e, "Config replacement rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"message": e.to_string()})),
            )
        }
    }
}

/// Build the admin config routes.
pub fn config_routes(store: Arc<ConfigStore>) -> Router {
    Router::new()
        .route("/api/admin/config", get(get_config).post(replace_config))
        .with_state(ConfigRouteState { store })
}
