//! Change-organization dialog.

use orgdesk_core::error::{OrgDeskError, OrgDeskResult};
use orgdesk_core::models::organization::{Organization, OrganizationId};
use orgdesk_core::repository::OrganizationRepository;
use tracing::debug;

use super::DialogState;

/// Picks which organization becomes current. The draft is the highlighted
/// id, starting at the current organization.
#[derive(Debug, Clone, Default)]
pub struct ChangeOrgDialog {
    state: DialogState<OrganizationId>,
}

impl ChangeOrgDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, current: &OrganizationId) {
        debug!(current = %current, "Opening change-org dialog");
        self.state.open(current.clone());
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn selected(&self) -> Option<&OrganizationId> {
        self.state.draft()
    }

    /// Highlight `id`. Only ids the registry lists are accepted.
    pub fn pick<R: OrganizationRepository>(
        &mut self,
        registry: &R,
        id: &OrganizationId,
    ) -> OrgDeskResult<()> {
        let selected = self.state.draft_mut()?;
        if !registry.list().iter().any(|org| &org.id == id) {
            return Err(OrgDeskError::not_found("organization", id));
        }
        *selected = id.clone();
        Ok(())
    }

    pub fn confirm<R: OrganizationRepository>(
        &mut self,
        registry: &mut R,
    ) -> OrgDeskResult<Organization> {
        let id = self.state.require_draft()?;
        let org = registry.select(id)?;
        self.state.close();
        Ok(org)
    }

    pub fn cancel(&mut self) {
        self.state.close();
    }
}
