//! Integration tests for the console container: tabs, rendering, header
//! actions and the cross-dialog rules.

use orgdesk_console::views::{Badge, TabView};
use orgdesk_console::{ConsoleConfig, DialogKind, OrgConsole, TabSources};
use orgdesk_core::error::OrgDeskError;
use orgdesk_core::models::organization::{OrganizationId, Tier};
use orgdesk_core::models::sso::SsoZone;
use orgdesk_core::models::tab::OrgTab;
use orgdesk_core::notify::{NoticeKind, RecordingNotifier};
use orgdesk_core::repository::{OrganizationRepository, SsoProviderRepository};
use orgdesk_store::{
    InMemoryOrganizationRegistry, InMemorySsoProviderStore, builtin_seed, fixtures,
};

type TestConsole = OrgConsole<
    InMemoryOrganizationRegistry<RecordingNotifier>,
    InMemorySsoProviderStore,
    RecordingNotifier,
>;

fn sources() -> TabSources {
    TabSources {
        users: Box::new(fixtures::users()),
        recent_reports: Box::new(fixtures::recent_reports()),
        scheduled_reports: Box::new(fixtures::scheduled_reports()),
        usage: Box::new(fixtures::usage_metrics()),
        roles: Box::new(fixtures::role_cards()),
        permissions: Box::new(fixtures::permission_matrix()),
    }
}

/// Helper: console over the built-in seed, with a handle on its notices.
fn setup() -> (TestConsole, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let registry = InMemoryOrganizationRegistry::new(builtin_seed(), notifier.clone()).unwrap();
    let console = OrgConsole::new(
        registry,
        InMemorySsoProviderStore::seeded(),
        notifier.clone(),
        sources(),
        ConsoleConfig::default(),
    );
    (console, notifier)
}

// -----------------------------------------------------------------------
// Tabs and rendering
// -----------------------------------------------------------------------

#[test]
fn starts_on_profile_tab_of_first_org() {
    let (console, _) = setup();
    assert_eq!(console.active_tab(), OrgTab::Profile);

    let header = console.header().unwrap();
    assert_eq!(header.name, "Katana Technologies");
    assert_eq!(header.logo, "KT");
    assert_eq!(header.handle, "/k_katana");
    assert_eq!(header.tier, Tier::Enterprise);

    let strip = console.tab_strip();
    assert_eq!(strip.len(), 5);
    assert!(strip[0].active);
    assert!(strip[1..].iter().all(|tab| !tab.active));
}

#[test]
fn initial_tab_comes_from_config() {
    let notifier = RecordingNotifier::new();
    let registry = InMemoryOrganizationRegistry::new(builtin_seed(), notifier.clone()).unwrap();
    let console = OrgConsole::new(
        registry,
        InMemorySsoProviderStore::default(),
        notifier,
        sources(),
        ConsoleConfig {
            initial_tab: OrgTab::Usage,
            ..Default::default()
        },
    );
    assert!(matches!(console.render().unwrap(), TabView::Usage(_)));
}

#[test]
fn render_follows_selected_tab() {
    let (mut console, _) = setup();

    let TabView::Profile(profile) = console.render().unwrap() else {
        panic!("expected profile view");
    };
    assert_eq!(profile.fields.len(), 10);
    assert_eq!(profile.fields[0].value, "Katana Technologies");
    assert!(profile.editable);

    console.select_tab(OrgTab::Users);
    let TabView::Users(users) = console.render().unwrap() else {
        panic!("expected users view");
    };
    assert_eq!(users.users.len(), 5);

    console.select_tab(OrgTab::Reports);
    let TabView::Reports(reports) = console.render().unwrap() else {
        panic!("expected reports view");
    };
    assert_eq!(reports.recent.len(), 4);
    assert_eq!(reports.scheduled.len(), 2);

    console.select_tab(OrgTab::Usage);
    let TabView::Usage(usage) = console.render().unwrap() else {
        panic!("expected usage view");
    };
    assert_eq!(usage.metrics[0].percentage, 67);
    assert_eq!(usage.metrics[2].current, "850K");
    assert_eq!(usage.metrics[2].limit, "of 1.0M calls");

    console.select_tab(OrgTab::Permissions);
    let TabView::Permissions(perms) = console.render().unwrap() else {
        panic!("expected permissions view");
    };
    assert_eq!(perms.roles.len(), 4);
    assert_eq!(perms.roles[3].badge, Badge::Outline);
}

#[test]
fn tab_switch_keeps_registry_untouched() {
    let (mut console, notifier) = setup();
    let before = console.registry().list();
    for tab in OrgTab::ALL {
        console.select_tab(tab);
        console.render().unwrap();
    }
    assert_eq!(console.registry().list(), before);
    assert!(notifier.notices().is_empty());
}

#[test]
fn org_options_mark_current_and_show_tier_industry() {
    let (console, _) = setup();
    let options = console.org_options().unwrap();
    assert_eq!(options.len(), 3);
    assert!(options[0].is_current);
    assert!(!options[1].is_current);
    assert_eq!(options[1].subtitle, "Professional • Retail");
}

// -----------------------------------------------------------------------
// Header actions
// -----------------------------------------------------------------------

#[test]
fn toggle_enabled_updates_current_and_notifies() {
    let (mut console, notifier) = setup();

    let org = console.toggle_enabled(false).unwrap();
    assert!(!org.enabled);
    assert!(!console.header().unwrap().enabled);
    assert_eq!(notifier.last().unwrap().message, "Organization disabled");

    console.toggle_enabled(true).unwrap();
    assert_eq!(notifier.last().unwrap().message, "Organization enabled");
}

#[test]
fn select_org_switches_current_without_notice() {
    let (mut console, notifier) = setup();
    let org = console.select_org(&OrganizationId::new("3")).unwrap();
    assert_eq!(org.name, "Globex Corporation");
    assert_eq!(console.header().unwrap().handle, "/k_globex");
    assert!(notifier.notices().is_empty());

    assert!(matches!(
        console.select_org(&OrganizationId::new("9")),
        Err(OrgDeskError::NotFound { .. })
    ));
    assert_eq!(console.current().unwrap().name, "Globex Corporation");
}

#[test]
fn select_org_closes_edit_seeded_from_previous_org() {
    let (mut console, notifier) = setup();
    console.open_edit().unwrap();
    console.select_org(&OrganizationId::new("2")).unwrap();

    assert_eq!(console.open_dialog(), None);
    assert!(matches!(
        console.set_field("description", "edited"),
        Err(OrgDeskError::Validation { .. })
    ));
    assert!(console.confirm().is_err());

    let katana = console.registry().get_by_id(&OrganizationId::new("1")).unwrap();
    assert_ne!(katana.description, "edited");
    let current = console.current().unwrap();
    assert_eq!(current.id, OrganizationId::new("2"));
    assert_eq!(current.description, "Specialty food import and distribution.");
    assert!(notifier.notices().is_empty());
}

#[test]
fn refresh_only_notifies() {
    let (console, notifier) = setup();
    let before = console.registry().list();
    console.refresh();
    assert_eq!(console.registry().list(), before);
    let notice = notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Organization data refreshed");
}

#[test]
fn request_delete_asks_for_confirmation() {
    let (mut console, notifier) = setup();
    console.request_delete().unwrap();

    assert_eq!(console.open_dialog(), Some(DialogKind::DeleteOrg));
    assert_eq!(
        console.delete_dialog().target(),
        Some(&OrganizationId::new("1"))
    );
    let notice = notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(
        notice.message,
        "Deleting Katana Technologies requires confirmation"
    );
}

// -----------------------------------------------------------------------
// Dialog routing
// -----------------------------------------------------------------------

#[test]
fn opening_a_dialog_closes_the_others() {
    let (mut console, _) = setup();
    assert_eq!(console.open_dialog(), None);

    console.open_create();
    console.open_edit().unwrap();
    assert_eq!(console.open_dialog(), Some(DialogKind::EditProfile));
    assert!(!console.create_dialog().is_open());

    console.open_sso_add();
    assert_eq!(console.open_dialog(), Some(DialogKind::SsoConfig));
    assert!(!console.edit_dialog().is_open());

    console.cancel();
    assert_eq!(console.open_dialog(), None);
}

#[test]
fn confirm_and_set_field_need_an_open_dialog() {
    let (mut console, _) = setup();
    assert!(matches!(
        console.confirm(),
        Err(OrgDeskError::Validation { .. })
    ));
    assert!(matches!(
        console.set_field("name", "x"),
        Err(OrgDeskError::Validation { .. })
    ));
}

#[test]
fn unknown_field_is_rejected() {
    let (mut console, _) = setup();
    console.open_create();
    let err = console.set_field("logo", "ZZ").unwrap_err();
    assert_eq!(err.to_string(), "Validation error: unknown field: logo");
}

#[test]
fn delete_confirm_falls_back_to_first_org() {
    let (mut console, notifier) = setup();
    console.open_change_org().unwrap();
    console.pick_org(&OrganizationId::new("2")).unwrap();
    console.confirm().unwrap();

    console.request_delete().unwrap();
    console.confirm().unwrap();

    assert_eq!(console.registry().len(), 2);
    assert_eq!(console.current().unwrap().id, OrganizationId::new("1"));
    assert_eq!(notifier.last().unwrap().message, "Organization deleted");
    assert_eq!(console.open_dialog(), None);
}

#[test]
fn deleting_last_org_is_refused_and_reported() {
    let (mut console, notifier) = setup();
    for _ in 0..2 {
        console.request_delete().unwrap();
        console.confirm().unwrap();
    }

    console.request_delete().unwrap();
    assert_eq!(console.confirm(), Err(OrgDeskError::LastOrganization));
    assert_eq!(console.registry().len(), 1);
    assert_eq!(console.open_dialog(), Some(DialogKind::DeleteOrg));

    let notice = notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(
        notice.message,
        "Cannot delete the last remaining organization"
    );
}

// -----------------------------------------------------------------------
// SSO providers
// -----------------------------------------------------------------------

#[test]
fn sso_view_filters_and_splits_zones() {
    let (console, _) = setup();

    let all = console.render_sso("");
    assert_eq!(all.providers.len(), 3);
    assert_eq!(all.active_zone, vec!["1", "2"]);
    assert_eq!(all.inactive_zone, vec!["3"]);
    assert_eq!(all.providers[0].created, "Jan 15, 2024");
    assert_eq!(all.empty_message, None);

    let none = console.render_sso("saml");
    assert!(none.providers.is_empty());
    assert_eq!(none.empty_message, Some("No SSO providers found"));
    // Zones are never filtered.
    assert_eq!(none.active_zone.len(), 2);
}

#[test]
fn drag_between_zones_sets_status() {
    let (mut console, _) = setup();

    console.drag_sso("3").unwrap();
    let moved = console.drop_sso(SsoZone::Active).unwrap().unwrap();
    assert!(moved.is_active);
    assert_eq!(console.render_sso("").inactive_zone, Vec::<String>::new());

    // Nothing dragged: dropping is a no-op.
    assert_eq!(console.drop_sso(SsoZone::Inactive).unwrap(), None);

    console.drag_sso("2").unwrap();
    assert_eq!(console.dragging_sso(), Some("2"));
    console.cancel();
    assert_eq!(console.dragging_sso(), None);
    assert_eq!(console.drop_sso(SsoZone::Inactive).unwrap(), None);
    assert!(console.sso_store().get_by_id("2").unwrap().is_active);

    assert!(matches!(
        console.drag_sso("99"),
        Err(OrgDeskError::NotFound { .. })
    ));
}

#[test]
fn toggle_and_delete_sso_provider() {
    let (mut console, _) = setup();
    assert!(!console.toggle_sso("1").unwrap().is_active);
    console.delete_sso("1").unwrap();
    assert_eq!(console.sso_store().list().len(), 2);
}

#[test]
fn deleting_sso_provider_closes_its_edit_dialog() {
    let (mut console, _) = setup();

    console.open_sso_edit("2").unwrap();
    console.delete_sso("1").unwrap();
    assert_eq!(console.open_dialog(), Some(DialogKind::SsoConfig));

    console.delete_sso("2").unwrap();
    assert_eq!(console.open_dialog(), None);
    assert!(console.confirm().is_err());
    assert_eq!(console.sso_store().list().len(), 1);

    console.drag_sso("3").unwrap();
    console.delete_sso("3").unwrap();
    assert_eq!(console.dragging_sso(), None);
}
