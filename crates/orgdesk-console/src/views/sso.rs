use orgdesk_core::models::sso::{SsoKind, SsoProvider};
use orgdesk_core::repository::SsoProviderRepository;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SsoProviderItem {
    pub id: String,
    pub name: String,
    pub kind: SsoKind,
    pub is_active: bool,
    pub tenant_url: String,
    /// e.g. `Jan 15, 2024`.
    pub created: String,
    pub has_credentials: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SsoView {
    pub query: String,
    pub providers: Vec<SsoProviderItem>,
    /// Ids in the active drop zone.
    pub active_zone: Vec<String>,
    /// Ids in the inactive drop zone.
    pub inactive_zone: Vec<String>,
    pub empty_message: Option<&'static str>,
}

fn item(provider: SsoProvider) -> SsoProviderItem {
    SsoProviderItem {
        created: provider.created_date.format("%b %-d, %Y").to_string(),
        has_credentials: !provider.client_id.is_empty() && !provider.client_secret.is_empty(),
        id: provider.id,
        name: provider.name,
        kind: provider.kind,
        is_active: provider.is_active,
        tenant_url: provider.tenant_url,
    }
}

/// Provider table filtered by `query`, plus the drag-and-drop zones.
pub fn render_sso<S>(store: &S, query: &str) -> SsoView
where
    S: SsoProviderRepository + ?Sized,
{
    let providers: Vec<SsoProviderItem> = store.search(query).into_iter().map(item).collect();
    let (active, inactive): (Vec<_>, Vec<_>) =
        store.list().into_iter().partition(|p| p.is_active);

    SsoView {
        query: query.to_string(),
        empty_message: providers.is_empty().then_some("No SSO providers found"),
        providers,
        active_zone: active.into_iter().map(|p| p.id).collect(),
        inactive_zone: inactive.into_iter().map(|p| p.id).collect(),
    }
}
