//! In-memory implementation of [`SsoProviderRepository`].

use chrono::{NaiveDate, Utc};
use orgdesk_core::error::OrgDeskResult;
use orgdesk_core::models::sso::{CreateSsoProvider, SsoKind, SsoProvider, UpdateSsoProvider};
use orgdesk_core::repository::SsoProviderRepository;
use tracing::info;
use uuid::Uuid;

use crate::error::StoreError;

/// SSO providers of the current organization, held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySsoProviderStore {
    providers: Vec<SsoProvider>,
}

impl InMemorySsoProviderStore {
    pub fn new(providers: Vec<SsoProvider>) -> Self {
        Self { providers }
    }

    /// Store pre-filled with the Google, Azure and Okta samples.
    pub fn seeded() -> Self {
        Self::new(builtin_providers())
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.providers
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "sso_provider".into(),
                id: id.to_string(),
            })
    }
}

impl SsoProviderRepository for InMemorySsoProviderStore {
    fn list(&self) -> Vec<SsoProvider> {
        self.providers.clone()
    }

    fn search(&self, query: &str) -> Vec<SsoProvider> {
        let needle = query.trim().to_lowercase();
        self.providers
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.tenant_url.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    fn get_by_id(&self, id: &str) -> OrgDeskResult<SsoProvider> {
        let idx = self.position(id)?;
        Ok(self.providers[idx].clone())
    }

    fn create(&mut self, input: CreateSsoProvider) -> OrgDeskResult<SsoProvider> {
        let name = if input.name.trim().is_empty() {
            format!("{} SSO", input.kind.display_name())
        } else {
            input.name
        };

        let provider = SsoProvider {
            id: Uuid::new_v4().to_string(),
            name,
            kind: input.kind,
            is_active: false,
            tenant_url: input.tenant_url,
            client_id: input.client_id,
            client_secret: input.client_secret,
            tenant_id: input.tenant_id,
            created_date: Utc::now().date_naive(),
        };
        self.providers.push(provider.clone());

        info!(provider_id = %provider.id, kind = %provider.kind, "Added SSO provider");

        Ok(provider)
    }

    fn update(&mut self, id: &str, input: UpdateSsoProvider) -> OrgDeskResult<SsoProvider> {
        let idx = self.position(id)?;
        input.apply_to(&mut self.providers[idx]);

        info!(provider_id = %id, "Updated SSO provider");

        Ok(self.providers[idx].clone())
    }

    fn set_active(&mut self, id: &str, active: bool) -> OrgDeskResult<SsoProvider> {
        let idx = self.position(id)?;
        self.providers[idx].is_active = active;

        info!(provider_id = %id, active, "Changed SSO provider status");

        Ok(self.providers[idx].clone())
    }

    fn toggle_active(&mut self, id: &str) -> OrgDeskResult<SsoProvider> {
        let idx = self.position(id)?;
        let active = !self.providers[idx].is_active;
        self.set_active(id, active)
    }

    fn delete(&mut self, id: &str) -> OrgDeskResult<()> {
        let idx = self.position(id)?;
        self.providers.remove(idx);

        info!(provider_id = %id, "Removed SSO provider");

        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn builtin_providers() -> Vec<SsoProvider> {
    vec![
        SsoProvider {
            id: "1".into(),
            name: "Google".into(),
            kind: SsoKind::Google,
            is_active: true,
            tenant_url: "accounts.google.com".into(),
            client_id: String::new(),
            client_secret: String::new(),
            tenant_id: None,
            created_date: date(2024, 1, 15),
        },
        SsoProvider {
            id: "2".into(),
            name: "Azure".into(),
            kind: SsoKind::Azure,
            is_active: true,
            tenant_url: "login.microsoftonline.com".into(),
            client_id: String::new(),
            client_secret: String::new(),
            tenant_id: Some(String::new()),
            created_date: date(2024, 2, 20),
        },
        SsoProvider {
            id: "3".into(),
            name: "Okta".into(),
            kind: SsoKind::Okta,
            is_active: false,
            tenant_url: "dev-123456.okta.com".into(),
            client_id: String::new(),
            client_secret: String::new(),
            tenant_id: None,
            created_date: date(2024, 3, 10),
        },
    ]
}
