//! Edit-profile dialog.

use orgdesk_core::error::OrgDeskResult;
use orgdesk_core::models::organization::{Organization, OrganizationId};
use orgdesk_core::repository::OrganizationRepository;
use serde::Serialize;
use tracing::{debug, warn};

use super::{DialogState, OrgField, OrganizationDraft};

/// The organization being edited and its form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditDraft {
    pub target: OrganizationId,
    pub fields: OrganizationDraft,
}

#[derive(Debug, Clone, Default)]
pub struct EditProfileDialog {
    state: DialogState<EditDraft>,
}

impl EditProfileDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on a fresh copy of `org`'s fields. Edits left over from an
    /// earlier, unconfirmed open are dropped.
    pub fn open(&mut self, org: &Organization) {
        debug!(org_id = %org.id, "Opening edit dialog");
        self.state.open(EditDraft {
            target: org.id.clone(),
            fields: OrganizationDraft::from_organization(org),
        });
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.state.draft()
    }

    pub fn update_field(&mut self, field: OrgField, value: &str) -> OrgDeskResult<()> {
        self.state.draft_mut()?.fields.set(field, value)
    }

    pub fn confirm<R: OrganizationRepository>(
        &mut self,
        registry: &mut R,
    ) -> OrgDeskResult<Organization> {
        let draft = self.state.require_draft()?;
        if let Err(err) = draft.fields.validate() {
            warn!(org_id = %draft.target, error = %err, "Edit dialog rejected");
            return Err(err.into());
        }

        let org = registry.update(&draft.target, draft.fields.to_update())?;
        self.state.close();
        Ok(org)
    }

    pub fn cancel(&mut self) {
        self.state.close();
    }
}
