//! Delete-organization confirmation.

use orgdesk_core::error::OrgDeskResult;
use orgdesk_core::models::organization::{Organization, OrganizationId};
use orgdesk_core::repository::OrganizationRepository;

use super::DialogState;

#[derive(Debug, Clone, Default)]
pub struct DeleteOrgDialog {
    state: DialogState<OrganizationId>,
}

impl DeleteOrgDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, org: &Organization) {
        self.state.open(org.id.clone());
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn target(&self) -> Option<&OrganizationId> {
        self.state.draft()
    }

    /// Delete the target. Deleting the only organization is refused and
    /// the dialog stays open.
    pub fn confirm<R: OrganizationRepository>(
        &mut self,
        registry: &mut R,
    ) -> OrgDeskResult<OrganizationId> {
        let id = self.state.require_draft()?.clone();
        registry.delete(&id)?;
        self.state.close();
        Ok(id)
    }

    pub fn cancel(&mut self) {
        self.state.close();
    }
}
