//! In-memory implementation of [`OrganizationRepository`].

use std::collections::HashSet;

use orgdesk_core::error::{OrgDeskError, OrgDeskResult};
use orgdesk_core::models::organization::{
    CreateOrganization, Organization, OrganizationId, UpdateOrganization, derive_logo,
};
use orgdesk_core::notify::Notifier;
use orgdesk_core::repository::OrganizationRepository;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::seed::{check_seed, load_seed};

/// Organization registry held in memory.
///
/// The current organization is tracked by id and always resolved against
/// the list, so readers never see a stale copy after an update.
pub struct InMemoryOrganizationRegistry<N: Notifier> {
    orgs: Vec<Organization>,
    current: OrganizationId,
    /// Every id ever handed out, including deleted ones.
    issued: HashSet<OrganizationId>,
    notifier: N,
    default_max_users: u32,
    logo_len: usize,
}

impl<N: Notifier> InMemoryOrganizationRegistry<N> {
    /// Build a registry from a seed list with the default settings.
    ///
    /// The first seeded organization becomes current. An empty seed fails
    /// with [`OrgDeskError::EmptyRegistry`].
    pub fn new(seed: Vec<Organization>, notifier: N) -> OrgDeskResult<Self> {
        Self::with_config(seed, notifier, &StoreConfig::default())
    }

    pub fn with_config(
        seed: Vec<Organization>,
        notifier: N,
        config: &StoreConfig,
    ) -> OrgDeskResult<Self> {
        check_seed(&seed)?;
        let mut seed = seed;
        for org in seed.iter_mut().filter(|org| org.logo.is_empty()) {
            org.logo = derive_logo(&org.name, config.logo_len);
        }
        let current = seed[0].id.clone();
        let issued = seed.iter().map(|org| org.id.clone()).collect();

        info!(count = seed.len(), current = %current, "Organization registry initialized");

        Ok(Self {
            orgs: seed,
            current,
            issued,
            notifier,
            default_max_users: config.default_max_users,
            logo_len: config.logo_len,
        })
    }

    /// Load the seed described by `config` and build a registry from it.
    pub fn from_config(config: &StoreConfig, notifier: N) -> OrgDeskResult<Self> {
        let seed = load_seed(config)?;
        Self::with_config(seed, notifier, config)
    }

    pub fn current_id(&self) -> &OrganizationId {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.orgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orgs.is_empty()
    }

    fn position(&self, id: &OrganizationId) -> Result<usize, StoreError> {
        self.orgs
            .iter()
            .position(|org| &org.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "organization".into(),
                id: id.to_string(),
            })
    }

    fn fresh_id(&self) -> OrganizationId {
        loop {
            let id = OrganizationId::generate();
            if !self.issued.contains(&id) {
                return id;
            }
        }
    }
}

fn require_non_blank(field: &str, value: &str) -> OrgDeskResult<()> {
    if value.trim().is_empty() {
        return Err(OrgDeskError::validation(format!("{field} is required")));
    }
    Ok(())
}

impl<N: Notifier> OrganizationRepository for InMemoryOrganizationRegistry<N> {
    fn list(&self) -> Vec<Organization> {
        self.orgs.clone()
    }

    fn get_by_id(&self, id: &OrganizationId) -> OrgDeskResult<Organization> {
        let idx = self.position(id)?;
        Ok(self.orgs[idx].clone())
    }

    fn get_current(&self) -> OrgDeskResult<Organization> {
        if self.orgs.is_empty() {
            return Err(OrgDeskError::EmptyRegistry);
        }
        self.get_by_id(&self.current)
    }

    fn select(&mut self, id: &OrganizationId) -> OrgDeskResult<Organization> {
        let idx = self.position(id)?;
        self.current = id.clone();

        info!(org_id = %id, "Selected organization");

        Ok(self.orgs[idx].clone())
    }

    fn create(&mut self, input: CreateOrganization) -> OrgDeskResult<Organization> {
        require_non_blank("name", &input.name)?;
        require_non_blank("slug", &input.slug)?;

        let id = self.fresh_id();
        let org = Organization {
            id: id.clone(),
            logo: derive_logo(&input.name, self.logo_len),
            name: input.name,
            slug: input.slug,
            description: input.description,
            industry: input.industry,
            max_users: input.max_users.unwrap_or(self.default_max_users),
            tier: input.tier,
            contact_email: input.contact_email,
            phone_number: input.phone_number,
            domain: input.domain,
            location: input.location,
            enabled: true,
        };

        self.issued.insert(id.clone());
        self.orgs.push(org.clone());
        self.current = id;

        info!(org_id = %org.id, slug = %org.slug, "Created organization");
        self.notifier.success("Organization created successfully");

        Ok(org)
    }

    fn update(
        &mut self,
        id: &OrganizationId,
        input: UpdateOrganization,
    ) -> OrgDeskResult<Organization> {
        let idx = self.position(id)?;
        if let Some(name) = &input.name {
            require_non_blank("name", name)?;
        }
        if let Some(slug) = &input.slug {
            require_non_blank("slug", slug)?;
        }

        debug!(org_id = %id, patch = ?input, "Applying organization patch");
        input.apply_to(&mut self.orgs[idx]);

        info!(org_id = %id, "Updated organization");
        self.notifier.success("Profile updated successfully");

        Ok(self.orgs[idx].clone())
    }

    fn set_enabled(&mut self, id: &OrganizationId, enabled: bool) -> OrgDeskResult<Organization> {
        let idx = self.position(id)?;
        self.orgs[idx].enabled = enabled;

        info!(org_id = %id, enabled, "Toggled organization");
        self.notifier.success(if enabled {
            "Organization enabled"
        } else {
            "Organization disabled"
        });

        Ok(self.orgs[idx].clone())
    }

    fn delete(&mut self, id: &OrganizationId) -> OrgDeskResult<()> {
        let idx = self.position(id)?;
        if self.orgs.len() == 1 {
            return Err(OrgDeskError::LastOrganization);
        }

        let removed = self.orgs.remove(idx);
        if self.current == removed.id {
            self.current = self.orgs[0].id.clone();
        }

        info!(org_id = %id, current = %self.current, "Deleted organization");
        self.notifier.success("Organization deleted");

        Ok(())
    }
}
