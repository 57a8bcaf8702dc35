//! Field assignment model.

use serde::{Deserialize, Serialize};

/// A (field identifier, page number) pair controlling which onboarding step
/// renders a given input.
///
/// The wire key for the identifier is `component`, which is what both the
/// wizard and admin clients exchange with the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAssignment {
    pub component: String,
    pub page: u8,
}

impl FieldAssignment {
    pub fn new(component: impl Into<String>, page: u8) -> Self {
        Self {
            component: component.into(),
            page,
        }
    }
}

/// Field identifiers known to the wizard.
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const ABOUT_ME: &str = "aboutMe";
    pub const BIRTHDATE: &str = "birthdate";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP: &str = "zip";
}

/// The layout a fresh process starts with: aboutMe and birthdate on page 2,
/// the address fields on page 3.
pub fn default_layout() -> Vec<FieldAssignment> {
    vec![
        FieldAssignment::new(fields::ABOUT_ME, 2),
        FieldAssignment::new(fields::BIRTHDATE, 2),
        FieldAssignment::new(fields::ADDRESS, 3),
        FieldAssignment::new(fields::CITY, 3),
        FieldAssignment::new(fields::STATE, 3),
        FieldAssignment::new(fields::ZIP, 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_wire_format_uses_component_key() {
        let assignment = FieldAssignment::new(fields::ABOUT_ME, 2);
        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(json, serde_json::json!({"component": "aboutMe", "page": 2}));
    }

    #[test]
    fn assignment_serde_roundtrip() {
        let json = r#"{"component":"zip","page":3}"#;
        let parsed: FieldAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, FieldAssignment::new("zip", 3));
    }

    #[test]
    fn default_layout_covers_all_reassignable_fields() {
        let layout = default_layout();
        assert_eq!(layout.len(), 6);
        assert!(layout.iter().all(|a| a.page == 2 || a.page == 3));
        assert!(
            !layout
                .iter()
                .any(|a| a.component == fields::EMAIL || a.component == fields::PASSWORD)
        );
    }
}
