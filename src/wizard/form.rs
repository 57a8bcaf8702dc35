//! Wizard form state — accumulates values across steps.

use std::collections::BTreeMap;

use crate::admin::model::fields;
use crate::users::model::UserRecord;

/// Accumulated input values, keyed by field identifier.
///
/// Values collect across all steps; submission sends everything at once no
/// matter which step owned each field.
#[derive(Debug, Clone, Default)]
pub struct WizardForm {
    values: BTreeMap<String, String>,
}

impl WizardForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value, replacing any previous one.
    pub fn set(&mut self, component: impl Into<String>, value: impl Into<String>) {
        self.values.insert(component.into(), value.into());
    }

    /// Current value for a field, empty if unset.
    pub fn get(&self, component: &str) -> &str {
        self.values.get(component).map(String::as_str).unwrap_or("")
    }

    /// Whether both credentials are present and non-empty.
    pub fn has_credentials(&self) -> bool {
        !self.get(fields::EMAIL).is_empty() && !self.get(fields::PASSWORD).is_empty()
    }

    /// Clear all collected values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Build the registration record from everything collected so far.
    ///
    /// Optional fields that were never filled in are omitted entirely.
    pub fn to_record(&self) -> UserRecord {
        let optional = |component: &str| {
            let value = self.get(component);
            (!value.is_empty()).then(|| value.to_string())
        };

        UserRecord {
            email: self.get(fields::EMAIL).to_string(),
            password: self.get(fields::PASSWORD).to_string(),
            about_me: optional(fields::ABOUT_ME),
            birthdate: optional(fields::BIRTHDATE),
            address: optional(fields::ADDRESS),
            city: optional(fields::CITY),
            state: optional(fields::STATE),
            zip: optional(fields::ZIP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_read_as_empty() {
        let form = WizardForm::new();
        assert_eq!(form.get("email"), "");
        assert!(!form.has_credentials());
    }

    #[test]
    fn credentials_require_both_values() {
        let mut form = WizardForm::new();
        form.set("email", "a@b.com");
        assert!(!form.has_credentials());

        form.set("password", "x");
        assert!(form.has_credentials());

        form.set("password", "");
        assert!(!form.has_credentials());
    }

    #[test]
    fn record_includes_only_filled_fields() {
        let mut form = WizardForm::new();
        form.set("email", "a@b.com");
        form.set("password", "x");
        form.set("city", "Oakland");

        let record = form.to_record();
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.city.as_deref(), Some("Oakland"));
        assert!(record.about_me.is_none());
        assert!(record.zip.is_none());
    }

    #[test]
    fn set_replaces_previous_values() {
        let mut form = WizardForm::new();
        form.set("state", "CA");
        form.set("state", "OR");
        assert_eq!(form.get("state"), "OR");
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = WizardForm::new();
        form.set("email", "a@b.com");
        form.set("password", "x");
        form.clear();
        assert!(!form.has_credentials());
        assert_eq!(form.get("email"), "");
    }
}
