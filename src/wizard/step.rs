//! Wizard step state machine.

use serde::{Deserialize, Serialize};

/// The three screens of the onboarding wizard.
///
/// Progresses linearly: Credentials → PageTwo → PageThree. Credentials is
/// fixed; the other two render whatever the admin config assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Credentials,
    PageTwo,
    PageThree,
}

impl WizardStep {
    /// 1-based step number shown to the user, and the page number the admin
    /// config keys field assignments by.
    pub fn number(&self) -> u8 {
        match self {
            Self::Credentials => 1,
            Self::PageTwo => 2,
            Self::PageThree => 3,
        }
    }

    /// Get the next step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            Self::Credentials => Some(Self::PageTwo),
            Self::PageTwo => Some(Self::PageThree),
            Self::PageThree => None,
        }
    }

    /// Get the previous step, if any.
    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            Self::Credentials => None,
            Self::PageTwo => Some(Self::Credentials),
            Self::PageThree => Some(Self::PageTwo),
        }
    }

    /// Whether this is the final step (submission happens here).
    pub fn is_final(&self) -> bool {
        matches!(self, Self::PageThree)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Credentials
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Credentials => "credentials",
            Self::PageTwo => "page_two",
            Self::PageThree => "page_three",
        };
        write!(f, "{s}")
    }
}
