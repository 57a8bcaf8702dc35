//! Wizard session — drives the three-step flow against the API.

use tracing::info;

use crate::client::ApiClient;
use crate::error::{Result, WizardError};

use super::form::WizardForm;
use super::plan::StepPlan;
use super::step::WizardStep;

/// Client-side wizard state: the step plan fetched from the server, the
/// current step, and the values collected so far.
pub struct WizardSession {
    client: ApiClient,
    plan: StepPlan,
    step: WizardStep,
    form: WizardForm,
}

impl WizardSession {
    /// Fetch the current config and start at step 1.
    pub async fn start(client: ApiClient) -> Result<Self> {
        let config = client.fetch_config().await?;
        Ok(Self {
            client,
            plan: StepPlan::from_config(&config),
            step: WizardStep::Credentials,
            form: WizardForm::new(),
        })
    }

    /// The step currently shown.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Fields to render on the current step.
    pub fn current_fields(&self) -> Vec<String> {
        self.plan.fields_for(self.step)
    }

    /// Record a value typed into the current form.
    pub fn set_value(&mut self, component: &str, value: &str) {
        self.form.set(component, value);
    }

    /// Current value for a field, empty if unset.
    pub fn value(&self, component: &str) -> &str {
        self.form.get(component)
    }

    /// Advance to the next step.
    ///
    /// Leaving step 1 requires both email and a non-empty password; later
    /// steps advance unconditionally (empty values are fine).
    pub fn advance(&mut self) -> Result<WizardStep> {
        if self.step == WizardStep::Credentials && !self.form.has_credentials() {
            return Err(WizardError::MissingCredentials.into());
        }
        let next = self.step.next().ok_or(WizardError::AtFinalStep)?;
        self.step = next;
        Ok(next)
    }

    /// Go back one step. Collected values are kept.
    pub fn back(&mut self) -> Result<WizardStep> {
        let prev = self.step.prev().ok_or(WizardError::AtFirstStep)?;
        self.step = prev;
        Ok(prev)
    }

    /// Submit the accumulated record, whichever step each field came from.
    ///
    /// On success the wizard resets: values cleared, back at step 1.
    pub async fn submit(&mut self) -> Result<()> {
        let record = self.form.to_record();
        self.client.register(&record).await?;

        info!(email = %record.email, "Wizard submission accepted");
        self.form.clear();
        self.step = WizardStep::Credentials;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn session_with_plan(plan: StepPlan) -> WizardSession {
        WizardSession {
            client: ApiClient::new("http://127.0.0.1:0"),
            plan,
            step: WizardStep::Credentials,
            form: WizardForm::new(),
        }
    }

    #[test]
    fn cannot_leave_step_one_without_credentials() {
        let mut session = session_with_plan(StepPlan::default());

        let err = session.advance().unwrap_err();
        assert!(matches!(err, Error::Wizard(WizardError::MissingCredentials)));
        assert_eq!(session.step(), WizardStep::Credentials);

        session.set_value("email", "a@b.com");
        session.set_value("password", "x");
        assert_eq!(session.advance().unwrap(), WizardStep::PageTwo);
    }

    #[test]
    fn later_steps_advance_without_validation() {
        let mut session = session_with_plan(StepPlan::default());
        session.set_value("email", "a@b.com");
        session.set_value("password", "x");
        session.advance().unwrap();

        // Nothing filled in on step 2, advancing is still fine.
        assert_eq!(session.advance().unwrap(), WizardStep::PageThree);

        let err = session.advance().unwrap_err();
        assert!(matches!(err, Error::Wizard(WizardError::AtFinalStep)));
    }

    #[test]
    fn back_keeps_collected_values() {
        let mut session = session_with_plan(StepPlan::default());
        session.set_value("email", "a@b.com");
        session.set_value("password", "x");
        session.advance().unwrap();
        session.set_value("aboutMe", "hello");

        session.back().unwrap();
        assert_eq!(session.step(), WizardStep::Credentials);
        assert_eq!(session.value("aboutMe"), "hello");

        let err = session.back().unwrap_err();
        assert!(matches!(err, Error::Wizard(WizardError::AtFirstStep)));
    }
}
