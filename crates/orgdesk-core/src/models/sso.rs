//! SSO provider domain model.
//!
//! Providers are configured per organization in the auth settings panel.
//! Only the credential record is modeled; no OIDC/SAML exchange happens.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::OrgDeskError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SsoKind {
    #[default]
    Google,
    Azure,
    Okta,
    Custom,
}

impl SsoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Azure => "azure",
            Self::Okta => "okta",
            Self::Custom => "custom",
        }
    }

    /// Capitalized display name, used for the fallback provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Azure => "Azure",
            Self::Okta => "Okta",
            Self::Custom => "Custom",
        }
    }

    /// Azure is the only provider type that needs a directory tenant id.
    pub fn uses_tenant_id(&self) -> bool {
        matches!(self, Self::Azure)
    }
}

impl fmt::Display for SsoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SsoKind {
    type Err = OrgDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "azure" => Ok(Self::Azure),
            "okta" => Ok(Self::Okta),
            "custom" => Ok(Self::Custom),
            other => Err(OrgDeskError::validation(format!(
                "unknown SSO provider type: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoProvider {
    pub id: String,
    /// Display name for the identity provider (e.g., `Google`, `Okta`).
    pub name: String,
    pub kind: SsoKind,
    pub is_active: bool,
    /// Host of the provider's sign-in endpoint.
    pub tenant_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Directory tenant (Azure only).
    pub tenant_id: Option<String>,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSsoProvider {
    /// Blank names fall back to `"<Kind> SSO"`.
    pub name: String,
    pub kind: SsoKind,
    pub tenant_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSsoProvider {
    pub name: Option<String>,
    pub kind: Option<SsoKind>,
    pub tenant_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub tenant_id: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateSsoProvider {
    pub fn apply_to(self, provider: &mut SsoProvider) {
        if let Some(name) = self.name {
            provider.name = name;
        }
        if let Some(kind) = self.kind {
            provider.kind = kind;
        }
        if let Some(tenant_url) = self.tenant_url {
            provider.tenant_url = tenant_url;
        }
        if let Some(client_id) = self.client_id {
            provider.client_id = client_id;
        }
        if let Some(client_secret) = self.client_secret {
            provider.client_secret = client_secret;
        }
        if let Some(tenant_id) = self.tenant_id {
            provider.tenant_id = tenant_id;
        }
        if let Some(is_active) = self.is_active {
            provider.is_active = is_active;
        }
    }
}

/// Drop zones of the provider board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SsoZone {
    Active,
    Inactive,
}

impl SsoZone {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for SsoZone {
    type Err = OrgDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(OrgDeskError::validation(format!("unknown zone: {other}"))),
        }
    }
}
