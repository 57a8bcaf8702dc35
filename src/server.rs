//! HTTP surface — router assembly, CORS policy, liveness probe.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::admin::routes::config_routes;
use crate::admin::store::ConfigStore;
use crate::config::ServerConfig;
use crate::error::SetupError;
use crate::users::routes::user_routes;
use crate::users::store::UserStore;

/// GET / — plaintext liveness probe.
async fn liveness() -> &'static str {
    "onboard-api is running"
}

/// Build the CORS layer for the configured origin.
///
/// A single configured origin gets credentialed CORS; no origin means any
/// origin is accepted.
fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, SetupError> {
    match allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin.parse().map_err(|_| SetupError::InvalidValue {
                key: "ONBOARD_ALLOWED_ORIGIN".to_string(),
                message: format!("not a valid origin: {origin:?}"),
            })?;
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true))
        }
        None => Ok(CorsLayer::permissive()),
    }
}

/// Assemble the full application router.
pub fn app(
    config: &ServerConfig,
    config_store: Arc<ConfigStore>,
    user_store: Arc<UserStore>,
) -> Result<Router, SetupError> {
    let cors = cors_layer(config.allowed_origin.as_deref())?;

    Ok(Router::new()
        .route("/", get(liveness))
        .merge(config_routes(config_store))
        .merge(user_routes(user_store))
        .layer(ServiceBuilder::new().layer(cors)))
}
