//! Bootstrap organization list.
//!
//! The registry starts from a fixed seed: either the built-in sample
//! organizations or a JSON array of organizations read from disk.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use orgdesk_core::models::organization::{Organization, OrganizationId, Tier};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Load the seed list described by `config`.
pub fn load_seed(config: &StoreConfig) -> Result<Vec<Organization>, StoreError> {
    match &config.seed_path {
        Some(path) => read_seed_file(path),
        None => Ok(builtin_seed()),
    }
}

/// Read and check a JSON seed file.
pub fn read_seed_file(path: &Path) -> Result<Vec<Organization>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
        path: path.display().to_string(),
        source,
    })?;
    let orgs = parse_seed(&raw)?;

    info!(path = %path.display(), count = orgs.len(), "Loaded organization seed");

    Ok(orgs)
}

/// Parse a JSON array of organizations and check it can seed a registry.
pub fn parse_seed(raw: &str) -> Result<Vec<Organization>, StoreError> {
    let orgs: Vec<Organization> = serde_json::from_str(raw)?;
    check_seed(&orgs)?;
    Ok(orgs)
}

/// A seed must be non-empty, free of duplicate ids, and every entry needs
/// a name and a slug.
pub fn check_seed(orgs: &[Organization]) -> Result<(), StoreError> {
    if orgs.is_empty() {
        return Err(StoreError::EmptySeed);
    }

    let mut seen = HashSet::new();
    for org in orgs {
        for (field, value) in [("name", &org.name), ("slug", &org.slug)] {
            if value.trim().is_empty() {
                return Err(StoreError::BlankField {
                    id: org.id.to_string(),
                    field,
                });
            }
        }
        if !seen.insert(&org.id) {
            return Err(StoreError::DuplicateId(org.id.to_string()));
        }
    }

    Ok(())
}

/// The sample organizations available on a fresh start.
pub fn builtin_seed() -> Vec<Organization> {
    vec![
        Organization {
            id: OrganizationId::new("1"),
            name: "Katana Technologies".into(),
            slug: "katana".into(),
            description: "Cloud infrastructure and developer tooling.".into(),
            industry: "Technology".into(),
            max_users: 100,
            tier: Tier::Enterprise,
            contact_email: "admin@katana.com".into(),
            phone_number: "+1 (555) 123-4567".into(),
            domain: "katana.com".into(),
            location: "San Francisco, CA".into(),
            enabled: true,
            logo: "KT".into(),
        },
        Organization {
            id: OrganizationId::new("2"),
            name: "Northwind Traders".into(),
            slug: "northwind".into(),
            description: "Specialty food import and distribution.".into(),
            industry: "Retail".into(),
            max_users: 50,
            tier: Tier::Professional,
            contact_email: "it@northwind.example".into(),
            phone_number: "+1 (555) 987-6543".into(),
            domain: "northwind.example".into(),
            location: "Seattle, WA".into(),
            enabled: true,
            logo: "NO".into(),
        },
        Organization {
            id: OrganizationId::new("3"),
            name: "Globex Corporation".into(),
            slug: "globex".into(),
            description: "Industrial manufacturing.".into(),
            industry: "Manufacturing".into(),
            max_users: 10,
            tier: Tier::Starter,
            contact_email: "ops@globex.example".into(),
            phone_number: "+1 (555) 246-8100".into(),
            domain: "globex.example".into(),
            location: "Cypress Creek, OR".into(),
            enabled: false,
            logo: "GL".into(),
        },
    ]
}
