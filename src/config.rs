//! Runtime configuration, built from environment variables.

use crate::error::SetupError;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Allowed CORS origin. `None` means any origin is accepted.
    pub allowed_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            allowed_origin: None,
        }
    }
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// `ONBOARD_PORT` sets the listen port (default 4000).
    /// `ONBOARD_ALLOWED_ORIGIN` restricts CORS to a single origin; unset or
    /// empty leaves the policy permissive.
    pub fn from_env() -> Result<Self, SetupError> {
        let port = match std::env::var("ONBOARD_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SetupError::InvalidValue {
                key: "ONBOARD_PORT".to_string(),
                message: format!("expected a port number, got {raw:?}"),
            })?,
            Err(_) => 4000,
        };

        let allowed_origin = std::env::var("ONBOARD_ALLOWED_ORIGIN")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self {
            port,
            allowed_origin,
        })
    }
}
