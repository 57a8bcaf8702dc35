//! Admin reassignment form — moves fields between pages 2 and 3.

use tracing::debug;

use crate::admin::model::{FieldAssignment, fields};
use crate::client::ApiClient;
use crate::error::ClientError;

/// The six identifiers the admin panel can move between pages. Email and
/// password are pinned to step 1 and never appear here.
pub const REASSIGNABLE_FIELDS: [&str; 6] = [
    fields::ABOUT_ME,
    fields::BIRTHDATE,
    fields::ADDRESS,
    fields::CITY,
    fields::STATE,
    fields::ZIP,
];

/// The two pages an operator can assign a field to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPage {
    Two,
    Three,
}

impl TargetPage {
    pub fn number(&self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// One reassignable field and its current page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub component: &'static str,
    /// Raw page number from the stored config, or the operator's choice.
    /// `None` until either assigns one.
    pub page: Option<u8>,
}

/// Admin form state: one selection per reassignable field, in a fixed order.
#[derive(Debug, Clone)]
pub struct ReassignmentForm {
    selections: Vec<FieldSelection>,
}

impl ReassignmentForm {
    /// Initialize selections from the fetched config.
    ///
    /// Later entries win when a field appears more than once. The stored
    /// page number is taken as-is, even if it is outside {2,3}. Fields with
    /// no config entry start unassigned; entries for identifiers outside
    /// the reassignable set are ignored.
    pub fn from_config(config: &[FieldAssignment]) -> Self {
        let mut form = Self {
            selections: REASSIGNABLE_FIELDS
                .into_iter()
                .map(|component| FieldSelection {
                    component,
                    page: None,
                })
                .collect(),
        };

        for assignment in config {
            if let Some(selection) = form
                .selections
                .iter_mut()
                .find(|s| s.component == assignment.component)
            {
                selection.page = Some(assignment.page);
            } else {
                debug!(component = %assignment.component, "Ignoring non-reassignable config entry");
            }
        }

        form
    }

    /// Current selections, in enumerated order.
    pub fn selections(&self) -> &[FieldSelection] {
        &self.selections
    }

    /// Assign a reassignable field to page 2 or 3.
    ///
    /// Returns false if the identifier is not in the reassignable set.
    pub fn assign(&mut self, component: &str, page: TargetPage) -> bool {
        match self
            .selections
            .iter_mut()
            .find(|s| s.component == component)
        {
            Some(selection) => {
                selection.page = Some(page.number());
                true
            }
            None => false,
        }
    }

    /// Rebuild the full config sequence from the current selections.
    ///
    /// Assignments come out in enumerated order; still-unassigned fields
    /// are skipped. Anything that was in the stored config but outside the
    /// reassignable set does not come back — the save replaces the whole
    /// list, it does not merge.
    pub fn to_config(&self) -> Vec<FieldAssignment> {
        self.selections
            .iter()
            .filter_map(|s| s.page.map(|page| FieldAssignment::new(s.component, page)))
            .collect()
    }

    /// Write the rebuilt sequence back to the server.
    pub async fn save(&self, client: &ApiClient) -> Result<(), ClientError> {
        client.save_config(&self.to_config()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_from_config_in_enumerated_order() {
        let config = [
            FieldAssignment::new("zip", 3),
            FieldAssignment::new("aboutMe", 2),
        ];
        let form = ReassignmentForm::from_config(&config);

        let selections = form.selections();
        assert_eq!(selections.len(), 6);
        assert_eq!(selections[0].component, "aboutMe");
        assert_eq!(selections[0].page, Some(2));
        assert_eq!(selections[5].component, "zip");
        assert_eq!(selections[5].page, Some(3));
        // No config entry yet.
        assert_eq!(selections[2].component, "address");
        assert_eq!(selections[2].page, None);
    }

    #[test]
    fn last_match_wins_on_duplicate_entries() {
        let config = [
            FieldAssignment::new("city", 2),
            FieldAssignment::new("city", 3),
        ];
        let form = ReassignmentForm::from_config(&config);

        let city = &form.selections()[3];
        assert_eq!(city.component, "city");
        assert_eq!(city.page, Some(3));
    }

    #[test]
    fn out_of_range_pages_are_kept_as_stored() {
        let config = [FieldAssignment::new("state", 7)];
        let form = ReassignmentForm::from_config(&config);
        assert_eq!(form.selections()[4].page, Some(7));
        // And they round-trip through a save unchanged if untouched.
        assert_eq!(form.to_config(), vec![FieldAssignment::new("state", 7)]);
    }

    #[test]
    fn assign_only_accepts_reassignable_fields() {
        let mut form = ReassignmentForm::from_config(&[]);
        assert!(form.assign("birthdate", TargetPage::Three));
        assert!(!form.assign("email", TargetPage::Two));
        assert!(!form.assign("unknown", TargetPage::Two));

        assert_eq!(
            form.to_config(),
            vec![FieldAssignment::new("birthdate", 3)]
        );
    }

    #[test]
    fn save_payload_is_rebuilt_fresh_from_the_enumerated_set() {
        // A stray entry outside the set is present in the stored config.
        let config = [
            FieldAssignment::new("favoriteColor", 2),
            FieldAssignment::new("aboutMe", 2),
            FieldAssignment::new("address", 3),
        ];
        let mut form = ReassignmentForm::from_config(&config);
        form.assign("aboutMe", TargetPage::Three);

        // The stray field is dropped; order follows the enumerated set.
        assert_eq!(
            form.to_config(),
            vec![
                FieldAssignment::new("aboutMe", 3),
                FieldAssignment::new("address", 3),
            ]
        );
    }

    #[test]
    fn unassigned_fields_are_skipped_on_save() {
        let form = ReassignmentForm::from_config(&[]);
        assert!(form.to_config().is_empty());
    }
}
