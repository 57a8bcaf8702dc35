//! Step planner — groups the admin config into per-page field lists and
//! maps each field to an input widget.

use std::collections::BTreeMap;

use crate::admin::model::{FieldAssignment, fields};

use super::step::WizardStep;

/// The input widget a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Masked single-line input.
    Password,
    /// Multi-line text area.
    Multiline,
    /// Date picker.
    Date,
}

impl FieldKind {
    /// Fixed widget lookup. Unrecognized identifiers fall back to free text.
    pub fn of(component: &str) -> FieldKind {
        match component {
            fields::PASSWORD => Self::Password,
            fields::ABOUT_ME => Self::Multiline,
            fields::BIRTHDATE => Self::Date,
            _ => Self::Text,
        }
    }
}

/// Display label for a field. Unknown identifiers are labeled by raw name.
pub fn display_label(component: &str) -> &str {
    match component {
        fields::EMAIL => "Email",
        fields::PASSWORD => "Password",
        fields::ABOUT_ME => "About Me",
        fields::BIRTHDATE => "Birthdate",
        fields::ADDRESS => "Address",
        fields::CITY => "City",
        fields::STATE => "State",
        fields::ZIP => "ZIP",
        other => other,
    }
}

/// Per-page field lists derived from the fetched config.
#[derive(Debug, Clone, Default)]
pub struct StepPlan {
    by_page: BTreeMap<u8, Vec<String>>,
}

impl StepPlan {
    /// Group assignments by page number, preserving the order they arrived
    /// in. A field appearing twice ends up in both positions; nothing is
    /// deduplicated.
    pub fn from_config(config: &[FieldAssignment]) -> Self {
        let mut by_page: BTreeMap<u8, Vec<String>> = BTreeMap::new();
        for assignment in config {
            by_page
                .entry(assignment.page)
                .or_default()
                .push(assignment.component.clone());
        }
        Self { by_page }
    }

    /// Fields rendered on a given wizard step.
    ///
    /// Step 1 is always [email, password] regardless of config; steps 2 and
    /// 3 are whatever the config assigns to that page, possibly nothing.
    pub fn fields_for(&self, step: WizardStep) -> Vec<String> {
        match step {
            WizardStep::Credentials => vec![
                fields::EMAIL.to_string(),
                fields::PASSWORD.to_string(),
            ],
            other => self
                .by_page
                .get(&other.number())
                .cloned()
                .unwrap_or_default(),
        }
    }
}
