//! User record model.

use serde::{Deserialize, Serialize};

/// A registered onboarding submission, keyed by email.
///
/// Email and password are required at registration; the remaining fields
/// hold whatever the later wizard steps collected. Records are immutable
/// once stored — there is no update or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    // A missing key deserializes to empty; the store treats missing and
    // empty credentials alike.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl UserRecord {
    /// Create a record with just the required credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            about_me: None,
            birthdate: None,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_from_the_wire() {
        let record = UserRecord::new("a@b.com", "x");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "x"}));
    }

    #[test]
    fn camel_case_keys_on_the_wire() {
        let record = UserRecord {
            about_me: Some("hi".to_string()),
            ..UserRecord::new("a@b.com", "x")
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["aboutMe"], "hi");
        assert!(json.get("about_me").is_none());
    }

    #[test]
    fn missing_keys_deserialize_to_empty_defaults() {
        let record: UserRecord = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(record.email, "a@b.com");
        assert!(record.password.is_empty());
        assert!(record.city.is_none());
    }
}
