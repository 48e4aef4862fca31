//! SSO provider configuration dialog (add and edit).

use std::str::FromStr;

use orgdesk_core::error::OrgDeskResult;
use orgdesk_core::models::sso::{CreateSsoProvider, SsoKind, SsoProvider, UpdateSsoProvider};
use orgdesk_core::repository::SsoProviderRepository;
use serde::Serialize;
use tracing::{debug, warn};

use super::DialogState;
use crate::error::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SsoField {
    Name,
    Kind,
    TenantUrl,
    ClientId,
    ClientSecret,
    TenantId,
}

impl FromStr for SsoField {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let field = match key.as_str() {
            "name" => Self::Name,
            "kind" | "type" => Self::Kind,
            "tenant_url" | "tenanturl" => Self::TenantUrl,
            "client_id" | "clientid" => Self::ClientId,
            "client_secret" | "clientsecret" => Self::ClientSecret,
            "tenant_id" | "tenantid" => Self::TenantId,
            _ => return Err(ConsoleError::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "provider_id", rename_all = "snake_case")]
pub enum SsoDialogMode {
    Add,
    Edit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SsoDraft {
    pub mode: SsoDialogMode,
    pub name: String,
    pub kind: SsoKind,
    pub tenant_url: String,
    pub client_id: String,
    /// Never rendered back; views mask it.
    #[serde(skip)]
    pub client_secret: String,
    pub tenant_id: String,
}

impl SsoDraft {
    fn empty() -> Self {
        Self {
            mode: SsoDialogMode::Add,
            name: String::new(),
            kind: SsoKind::default(),
            tenant_url: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            tenant_id: String::new(),
        }
    }

    fn from_provider(provider: &SsoProvider) -> Self {
        Self {
            mode: SsoDialogMode::Edit(provider.id.clone()),
            name: provider.name.clone(),
            kind: provider.kind,
            tenant_url: provider.tenant_url.clone(),
            client_id: provider.client_id.clone(),
            client_secret: provider.client_secret.clone(),
            tenant_id: provider.tenant_id.clone().unwrap_or_default(),
        }
    }

    /// Tenant id as stored: kept for Azure, dropped for everything else.
    fn stored_tenant_id(&self) -> Option<String> {
        self.kind.uses_tenant_id().then(|| self.tenant_id.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SsoConfigDialog {
    state: DialogState<SsoDraft>,
}

impl SsoConfigDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_add(&mut self) {
        debug!("Opening add-SSO dialog");
        self.state.open(SsoDraft::empty());
    }

    pub fn open_edit(&mut self, provider: &SsoProvider) {
        debug!(provider_id = %provider.id, "Opening edit-SSO dialog");
        self.state.open(SsoDraft::from_provider(provider));
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn draft(&self) -> Option<&SsoDraft> {
        self.state.draft()
    }

    /// The provider type is chosen when adding and fixed afterwards.
    pub fn update_field(&mut self, field: SsoField, value: &str) -> OrgDeskResult<()> {
        let draft = self.state.draft_mut()?;
        match field {
            SsoField::Name => draft.name = value.to_string(),
            SsoField::Kind => {
                if draft.mode != SsoDialogMode::Add {
                    return Err(ConsoleError::ReadOnlyField("provider type").into());
                }
                draft.kind = value.parse()?;
            }
            SsoField::TenantUrl => draft.tenant_url = value.to_string(),
            SsoField::ClientId => draft.client_id = value.to_string(),
            SsoField::ClientSecret => draft.client_secret = value.to_string(),
            SsoField::TenantId => draft.tenant_id = value.to_string(),
        }
        Ok(())
    }

    pub fn confirm<S: SsoProviderRepository>(
        &mut self,
        store: &mut S,
    ) -> OrgDeskResult<SsoProvider> {
        let draft = self.state.require_draft()?;

        let provider = match &draft.mode {
            SsoDialogMode::Add => store.create(CreateSsoProvider {
                name: draft.name.clone(),
                kind: draft.kind,
                tenant_url: draft.tenant_url.clone(),
                client_id: draft.client_id.clone(),
                client_secret: draft.client_secret.clone(),
                tenant_id: draft.stored_tenant_id(),
            })?,
            SsoDialogMode::Edit(id) => {
                if draft.name.trim().is_empty() {
                    warn!(provider_id = %id, "Edit-SSO dialog rejected: blank name");
                    return Err(ConsoleError::MissingField("name").into());
                }
                store.update(
                    id,
                    UpdateSsoProvider {
                        name: Some(draft.name.clone()),
                        kind: None,
                        tenant_url: Some(draft.tenant_url.clone()),
                        client_id: Some(draft.client_id.clone()),
                        client_secret: Some(draft.client_secret.clone()),
                        tenant_id: Some(draft.stored_tenant_id()),
                        is_active: None,
                    },
                )?
            }
        };

        self.state.close();
        Ok(provider)
    }

    pub fn cancel(&mut self) {
        self.state.close();
    }
}
