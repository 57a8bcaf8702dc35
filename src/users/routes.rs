//! REST endpoints for user registration and listing.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use crate::error::RegistrationError;

use super::model::UserRecord;
use super::store::UserStore;

/// Shared state for user routes.
#[derive(Clone)]
pub struct UserRouteState {
    pub store: Arc<UserStore>,
}

/// POST /api/users
///
/// Registers a new user. 400 if email or password is missing, 409 if the
/// email is already registered.
async fn register_user(
    State(state): State<UserRouteState>,
    Json(record): Json<UserRecord>,
) -> impl IntoResponse {
    match state.store.register(record).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({"message": "User registered successfully"})),
        ),
        Err(e @ RegistrationError::MissingField { .. }) => {
            warn!(error = %e, "Registration rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"message": "Email and password are required."})),
            )
        }
        Err(RegistrationError::DuplicateEmail { .. }) => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({"message": "User already exists!"})),
        ),
    }
}

/// GET /api/users
///
/// Returns every registered user in insertion order. No pagination.
async fn list_users(State(state): State<UserRouteState>) -> impl IntoResponse {
    Json(state.store.list_all().await)
}

/// Build the user routes.
pub fn user_routes(store: Arc<UserStore>) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(register_user))
        .with_state(UserRouteState { store })
}
