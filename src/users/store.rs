//! In-memory user store.

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::RegistrationError;

use super::model::UserRecord;

/// Append-only collection of registered users, unique by email.
///
/// State lives for the process lifetime only.
pub struct UserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Register a new user.
    ///
    /// Rejects records with a missing or empty email or password, and emails
    /// that are already registered (linear scan). Accepted records are
    /// appended unmodified.
    pub async fn register(&self, record: UserRecord) -> Result<(), RegistrationError> {
        if record.email.is_empty() {
            return Err(RegistrationError::MissingField { field: "email" });
        }
        if record.password.is_empty() {
            return Err(RegistrationError::MissingField { field: "password" });
        }

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == record.email) {
            warn!(email = %record.email, "Duplicate registration rejected");
            return Err(RegistrationError::DuplicateEmail {
                email: record.email,
            });
        }

        info!(email = %record.email, "New user registered");
        users.push(record);
        Ok(())
    }

    /// All registered users in insertion order.
    pub async fn list_all(&self) -> Vec<UserRecord> {
        self.users.read().await.clone()
    }

    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no users are registered yet.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
