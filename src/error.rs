//! Error types for the onboarding service.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),
}

/// Config payload validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid config format. Must be an array.")]
    NotAnArray,
}

/// Registration errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },
}

/// Client-observed network errors (request failure or non-2xx response).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Client-side wizard flow errors.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Already at the final step")]
    AtFinalStep,

    #[error("Already at the first step")]
    AtFirstStep,
}

/// Startup environment errors.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
