use orgdesk_core::models::organization::{Organization, OrganizationId, Tier};
use orgdesk_core::models::tab::OrgTab;
use serde::Serialize;

/// The profile card above the tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub logo: String,
    pub name: String,
    /// Short handle built from the first slug segment (e.g. `/k_acme`).
    pub handle: String,
    pub tier: Tier,
    pub enabled: bool,
}

pub fn render_header(org: &Organization) -> HeaderView {
    let first_segment = org.slug.split('-').next().unwrap_or_default();
    HeaderView {
        logo: org.logo.clone(),
        name: org.name.clone(),
        handle: format!("/k_{}", first_segment.to_lowercase()),
        tier: org.tier,
        enabled: org.enabled,
    }
}

/// One row of the change-org list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgOption {
    pub id: OrganizationId,
    pub logo: String,
    pub name: String,
    pub subtitle: String,
    pub is_current: bool,
}

pub fn render_org_options(orgs: &[Organization], current: &OrganizationId) -> Vec<OrgOption> {
    orgs.iter()
        .map(|org| OrgOption {
            id: org.id.clone(),
            logo: org.logo.clone(),
            name: org.name.clone(),
            subtitle: format!("{} • {}", org.tier, org.industry),
            is_current: &org.id == current,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabItem {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub fn render_tabs(active: OrgTab) -> Vec<TabItem> {
    OrgTab::ALL
        .into_iter()
        .map(|tab| TabItem {
            id: tab.id(),
            label: tab.label(),
            active: tab == active,
        })
        .collect()
}
