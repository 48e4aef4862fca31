//! Create-organization dialog.

use orgdesk_core::error::OrgDeskResult;
use orgdesk_core::models::organization::{Organization, Tier};
use orgdesk_core::repository::OrganizationRepository;
use tracing::{debug, warn};

use super::{DialogState, OrgField, OrganizationDraft};

#[derive(Debug, Clone, Default)]
pub struct CreateOrgDialog {
    state: DialogState<OrganizationDraft>,
    default_tier: Tier,
}

impl CreateOrgDialog {
    pub fn new(default_tier: Tier) -> Self {
        Self {
            state: DialogState::Closed,
            default_tier,
        }
    }

    /// Open with an empty form.
    pub fn open(&mut self) {
        self.open_with(OrganizationDraft {
            tier: self.default_tier,
            ..Default::default()
        });
    }

    /// Open with a prefilled form.
    pub fn open_with(&mut self, seed: OrganizationDraft) {
        debug!("Opening create dialog");
        self.state.open(seed);
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn draft(&self) -> Option<&OrganizationDraft> {
        self.state.draft()
    }

    pub fn update_field(&mut self, field: OrgField, value: &str) -> OrgDeskResult<()> {
        self.state.draft_mut()?.set(field, value)
    }

    /// Create the organization and close. A form missing its name or slug
    /// stays open and nothing is created.
    pub fn confirm<R: OrganizationRepository>(
        &mut self,
        registry: &mut R,
    ) -> OrgDeskResult<Organization> {
        let draft = self.state.require_draft()?;
        if let Err(err) = draft.validate() {
            warn!(error = %err, "Create dialog rejected");
            return Err(err.into());
        }

        let org = registry.create(draft.to_create())?;
        self.state.close();
        Ok(org)
    }

    pub fn cancel(&mut self) {
        debug!("Cancelling create dialog");
        self.state.close();
    }
}
