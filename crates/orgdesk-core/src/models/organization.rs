//! Organization domain model.
//!
//! The organization is the only entity the console keeps in its registry.
//! Everything the tabs show besides the profile (users, reports, usage,
//! permissions) belongs conceptually to the current organization but is
//! not stored on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OrgDeskError;

/// Opaque organization identifier.
///
/// Seeded organizations may carry any string id (e.g. `"1"`); organizations
/// created at runtime get a v4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrganizationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrganizationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Subscription tier. No custom tiers exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Starter,
    Professional,
    Enterprise,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::Professional, Tier::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Professional => "Professional",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = OrgDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrgDeskError::validation(format!("unknown tier: {s}")))
    }
}

/// An organization managed by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    /// Display name.
    pub name: String,
    /// URL-safe identifier (e.g., `acme-corp`). Not required to be unique.
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub max_users: u32,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Short display token derived from the name when the organization is
    /// created. Renames do not touch it.
    #[serde(default)]
    pub logo: String,
}

fn default_enabled() -> bool {
    true
}

/// Derive the display logo: the first `len` characters of `name`, uppercased.
pub fn derive_logo(name: &str, len: usize) -> String {
    name.trim().chars().take(len).collect::<String>().to_uppercase()
}

/// Fields required to create a new organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrganization {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub industry: String,
    pub tier: Tier,
    /// `None` falls back to the registry's default seat count.
    pub max_users: Option<u32>,
    pub contact_email: String,
    pub phone_number: String,
    pub domain: String,
    pub location: String,
}

impl CreateOrganization {
    /// Quick-create input with only the required fields set.
    pub fn named(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }
}

/// Fields that can be updated on an existing organization.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrganization {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub max_users: Option<u32>,
    pub tier: Option<Tier>,
    pub contact_email: Option<String>,
    pub phone_number: Option<String>,
    pub domain: Option<String>,
    pub location: Option<String>,
    pub enabled: Option<bool>,
}

impl UpdateOrganization {
    /// Shallow-merge the present fields into `org`.
    pub fn apply_to(self, org: &mut Organization) {
        if let Some(name) = self.name {
            org.name = name;
        }
        if let Some(slug) = self.slug {
            org.slug = slug;
        }
        if let Some(description) = self.description {
            org.description = description;
        }
        if let Some(industry) = self.industry {
            org.industry = industry;
        }
        if let Some(max_users) = self.max_users {
            org.max_users = max_users;
        }
        if let Some(tier) = self.tier {
            org.tier = tier;
        }
        if let Some(contact_email) = self.contact_email {
            org.contact_email = contact_email;
        }
        if let Some(phone_number) = self.phone_number {
            org.phone_number = phone_number;
        }
        if let Some(domain) = self.domain {
            org.domain = domain;
        }
        if let Some(location) = self.location {
            org.location = location;
        }
        if let Some(enabled) = self.enabled {
            org.enabled = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_takes_first_two_chars_uppercased() {
        assert_eq!(derive_logo("Beta", 2), "BE");
        assert_eq!(derive_logo("  katana", 2), "KA");
        assert_eq!(derive_logo("Q", 2), "Q");
        assert_eq!(derive_logo("édition", 2), "ÉD");
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("enterprise".parse::<Tier>().unwrap(), Tier::Enterprise);
        assert_eq!(" Starter ".parse::<Tier>().unwrap(), Tier::Starter);
        assert!("Gold".parse::<Tier>().is_err());
    }

    #[test]
    fn seeded_organization_defaults_missing_fields() {
        let org: Organization =
            serde_json::from_str(r#"{"id":"1","name":"Acme","slug":"acme"}"#).unwrap();
        assert_eq!(org.id.as_str(), "1");
        assert_eq!(org.tier, Tier::Starter);
        assert!(org.enabled);
        assert!(org.description.is_empty());
    }

    #[test]
    fn apply_leaves_absent_fields_untouched() {
        let mut org: Organization =
            serde_json::from_str(r#"{"id":"1","name":"Acme","slug":"acme","industry":"Tech"}"#)
                .unwrap();
        UpdateOrganization {
            tier: Some(Tier::Enterprise),
            ..Default::default()
        }
        .apply_to(&mut org);
        assert_eq!(org.tier, Tier::Enterprise);
        assert_eq!(org.name, "Acme");
        assert_eq!(org.industry, "Tech");
    }
}
