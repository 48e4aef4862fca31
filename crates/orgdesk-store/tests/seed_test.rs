//! Integration tests for seed loading.

use std::io::Write;

use orgdesk_core::error::OrgDeskError;
use orgdesk_core::models::organization::{OrganizationId, Tier};
use orgdesk_core::notify::TracingNotifier;
use orgdesk_core::repository::OrganizationRepository;
use orgdesk_store::{
    InMemoryOrganizationRegistry, StoreConfig, StoreError, builtin_seed, load_seed, parse_seed,
};

#[test]
fn builtin_seed_is_usable() {
    let seed = builtin_seed();
    assert!(!seed.is_empty());
    orgdesk_store::check_seed(&seed).unwrap();
    assert!(seed.iter().all(|org| !org.name.is_empty() && !org.slug.is_empty()));
}

#[test]
fn default_config_loads_builtin_seed() {
    let seed = load_seed(&StoreConfig::default()).unwrap();
    assert_eq!(seed, builtin_seed());
}

#[test]
fn seed_file_is_read_from_config_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "1", "name": "Acme", "slug": "acme", "tier": "Starter", "enabled": true}},
            {{"id": "2", "name": "Initech", "slug": "initech", "tier": "Enterprise", "max_users": 40}}
        ]"#
    )
    .unwrap();

    let config = StoreConfig {
        seed_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let registry = InMemoryOrganizationRegistry::from_config(&config, TracingNotifier).unwrap();

    let orgs = registry.list();
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[1].tier, Tier::Enterprise);
    assert_eq!(orgs[1].max_users, 40);
    assert!(orgs[1].enabled);
    assert_eq!(registry.get_current().unwrap().id, OrganizationId::new("1"));
}

#[test]
fn missing_seed_file_is_a_seed_error() {
    let config = StoreConfig {
        seed_path: Some("/nonexistent/orgdesk-seed.json".into()),
        ..Default::default()
    };
    let result = InMemoryOrganizationRegistry::from_config(&config, TracingNotifier);
    assert!(matches!(result, Err(OrgDeskError::Seed(_))));
}

#[test]
fn empty_seed_array_maps_to_empty_registry() {
    assert!(matches!(parse_seed("[]"), Err(StoreError::EmptySeed)));
    let err: OrgDeskError = StoreError::EmptySeed.into();
    assert_eq!(err, OrgDeskError::EmptyRegistry);
}

#[test]
fn unknown_tier_in_seed_is_rejected() {
    let result = parse_seed(r#"[{"id": "1", "name": "A", "slug": "a", "tier": "Gold"}]"#);
    assert!(matches!(result, Err(StoreError::SeedFormat(_))));
}

#[test]
fn blank_name_or_slug_in_seed_is_rejected() {
    let result = parse_seed(r#"[{"id": "1", "name": "", "slug": "acme"}]"#);
    assert!(matches!(
        result,
        Err(StoreError::BlankField { field: "name", .. })
    ));

    let result = parse_seed(r#"[{"id": "7", "name": "Acme", "slug": "  "}]"#);
    let Err(err) = result else {
        panic!("expected a blank slug to be rejected");
    };
    assert_eq!(err.to_string(), "seed organization 7 has a blank slug");
    assert!(matches!(OrgDeskError::from(err), OrgDeskError::Seed(_)));
}

#[test]
fn missing_logo_is_derived_from_name() {
    let seed = parse_seed(
        r#"[
            {"id": "1", "name": "acme labs", "slug": "acme"},
            {"id": "2", "name": "Initech", "slug": "initech", "logo": "IN"}
        ]"#,
    )
    .unwrap();
    let config = StoreConfig {
        logo_len: 3,
        ..Default::default()
    };
    let registry =
        InMemoryOrganizationRegistry::with_config(seed, TracingNotifier, &config).unwrap();

    let orgs = registry.list();
    assert_eq!(orgs[0].logo, "ACM");
    assert_eq!(orgs[1].logo, "IN");
}
