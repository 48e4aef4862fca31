//! Integration tests for the in-memory SSO provider store.

use chrono::Utc;
use orgdesk_core::error::OrgDeskError;
use orgdesk_core::models::sso::{CreateSsoProvider, SsoKind, UpdateSsoProvider};
use orgdesk_core::repository::SsoProviderRepository;
use orgdesk_store::InMemorySsoProviderStore;

#[test]
fn seeded_store_has_three_providers() {
    let store = InMemorySsoProviderStore::seeded();
    let providers = store.list();
    assert_eq!(providers.len(), 3);
    assert!(providers[0].is_active);
    assert!(!providers[2].is_active);
    assert_eq!(providers[1].kind, SsoKind::Azure);
}

#[test]
fn search_matches_name_or_tenant_url_case_insensitively() {
    let store = InMemorySsoProviderStore::seeded();

    let by_name = store.search("GOO");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Google");

    let by_url = store.search("microsoftonline");
    assert_eq!(by_url.len(), 1);
    assert_eq!(by_url[0].name, "Azure");

    assert_eq!(store.search("").len(), 3);
    assert!(store.search("saml").is_empty());
}

#[test]
fn create_defaults_name_and_starts_inactive() {
    let mut store = InMemorySsoProviderStore::default();
    let provider = store
        .create(CreateSsoProvider {
            kind: SsoKind::Okta,
            tenant_url: "acme.okta.com".into(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(provider.name, "Okta SSO");
    assert!(!provider.is_active);
    assert_eq!(provider.created_date, Utc::now().date_naive());
    assert_eq!(store.list().len(), 1);
}

#[test]
fn update_merges_fields() {
    let mut store = InMemorySsoProviderStore::seeded();
    let updated = store
        .update(
            "3",
            UpdateSsoProvider {
                client_id: Some("okta-client".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.client_id, "okta-client");
    assert_eq!(updated.name, "Okta");
    assert_eq!(updated.tenant_url, "dev-123456.okta.com");
}

#[test]
fn toggle_flips_status() {
    let mut store = InMemorySsoProviderStore::seeded();
    assert!(!store.toggle_active("1").unwrap().is_active);
    assert!(store.toggle_active("1").unwrap().is_active);
    assert!(store.set_active("3", true).unwrap().is_active);
}

#[test]
fn delete_removes_provider() {
    let mut store = InMemorySsoProviderStore::seeded();
    store.delete("2").unwrap();
    assert_eq!(store.list().len(), 2);
    assert!(matches!(
        store.get_by_id("2"),
        Err(OrgDeskError::NotFound { .. })
    ));
    assert!(store.delete("2").is_err());
}
