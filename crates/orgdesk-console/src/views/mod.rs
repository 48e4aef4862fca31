//! Read-side view models.
//!
//! Renderers are pure functions of the registry state and the tab's list
//! provider. They produce serializable structures for an external renderer
//! and never write back.

mod header;
mod permissions;
mod profile;
mod reports;
mod sso;
mod usage;
mod users;

pub use header::{HeaderView, OrgOption, TabItem, render_header, render_org_options, render_tabs};
pub use permissions::{PermissionsView, RoleCardItem, render_permissions};
pub use profile::{ProfileField, ProfileView, render_profile};
pub use reports::{ReportItem, ReportTone, ReportsView, ScheduledReportItem, render_reports};
pub use sso::{SsoProviderItem, SsoView, render_sso};
pub use usage::{UsageItem, UsageView, format_compact, render_usage, utilization};
pub use users::{UserItem, UsersView, render_users};

use serde::Serialize;

/// Badge style variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Default,
    Secondary,
    Outline,
}

/// Content of the active tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "view", rename_all = "snake_case")]
pub enum TabView {
    Profile(ProfileView),
    Users(UsersView),
    Reports(ReportsView),
    Usage(UsageView),
    Permissions(PermissionsView),
}
