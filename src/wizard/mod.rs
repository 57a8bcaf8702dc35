//! Onboarding wizard — the client-side flow over the REST API.
//!
//! Three sequential steps: step 1 always collects credentials; steps 2 and 3
//! render whatever fields the admin config assigns to their page. The admin
//! form in [`admin_form`] is what rewrites that config.

pub mod admin_form;
pub mod form;
pub mod plan;
pub mod session;
pub mod step;

pub use admin_form::{FieldSelection, REASSIGNABLE_FIELDS, ReassignmentForm, TargetPage};
pub use form::WizardForm;
pub use plan::{FieldKind, StepPlan, display_label};
pub use session::WizardSession;
pub use step::WizardStep;
