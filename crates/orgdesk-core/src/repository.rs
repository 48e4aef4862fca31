//! Repository trait definitions for state access abstraction.
//!
//! All operations are synchronous: the console processes one user event
//! at a time and owns its stores exclusively.

use crate::error::OrgDeskResult;
use crate::models::{
    organization::{CreateOrganization, Organization, OrganizationId, UpdateOrganization},
    sso::{CreateSsoProvider, SsoProvider, UpdateSsoProvider},
};

// ---------------------------------------------------------------------------
// Organization registry
// ---------------------------------------------------------------------------

/// The set of organizations plus the single current selection.
pub trait OrganizationRepository {
    /// All organizations in insertion order.
    fn list(&self) -> Vec<Organization>;
    fn get_by_id(&self, id: &OrganizationId) -> OrgDeskResult<Organization>;
    fn get_current(&self) -> OrgDeskResult<Organization>;
    /// Make `id` current. Never mutates any organization.
    fn select(&mut self, id: &OrganizationId) -> OrgDeskResult<Organization>;
    /// Create an organization and make it current.
    fn create(&mut self, input: CreateOrganization) -> OrgDeskResult<Organization>;
    /// Shallow-merge `input` into the organization with `id`.
    fn update(
        &mut self,
        id: &OrganizationId,
        input: UpdateOrganization,
    ) -> OrgDeskResult<Organization>;
    fn set_enabled(&mut self, id: &OrganizationId, enabled: bool) -> OrgDeskResult<Organization>;
    /// Remove an organization. The last remaining one cannot be deleted.
    fn delete(&mut self, id: &OrganizationId) -> OrgDeskResult<()>;
}

// ---------------------------------------------------------------------------
// SSO providers
// ---------------------------------------------------------------------------

pub trait SsoProviderRepository {
    fn list(&self) -> Vec<SsoProvider>;
    /// Case-insensitive match on name or tenant URL. Empty query matches all.
    fn search(&self, query: &str) -> Vec<SsoProvider>;
    fn get_by_id(&self, id: &str) -> OrgDeskResult<SsoProvider>;
    fn create(&mut self, input: CreateSsoProvider) -> OrgDeskResult<SsoProvider>;
    fn update(&mut self, id: &str, input: UpdateSsoProvider) -> OrgDeskResult<SsoProvider>;
    fn set_active(&mut self, id: &str, active: bool) -> OrgDeskResult<SsoProvider>;
    fn toggle_active(&mut self, id: &str) -> OrgDeskResult<SsoProvider>;
    fn delete(&mut self, id: &str) -> OrgDeskResult<()>;
}

// ---------------------------------------------------------------------------
// Tab list providers
// ---------------------------------------------------------------------------

/// Read-only source of the rows a tab lists.
///
/// Tabs only ever read through this trait, so a static fixture can be
/// replaced by a live source without touching the registry.
pub trait ListProvider {
    type Item;

    fn items(&self) -> Vec<Self::Item>;
}

impl<P: ListProvider + ?Sized> ListProvider for Box<P> {
    type Item = P::Item;

    fn items(&self) -> Vec<Self::Item> {
        (**self).items()
    }
}
