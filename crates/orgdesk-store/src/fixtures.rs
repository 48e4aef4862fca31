//! Static list providers backing the Users, Reports, Usage and
//! Permissions tabs.

use chrono::NaiveDate;
use orgdesk_core::models::permission::{PermissionRow, RoleCard};
use orgdesk_core::models::report::{ReportKind, ReportRow, ScheduledReport};
use orgdesk_core::models::usage::UsageMetric;
use orgdesk_core::models::user::{UserRole, UserRow, UserStatus};
use orgdesk_core::repository::ListProvider;

/// A fixed list served as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticList<T> {
    items: Vec<T>,
}

impl<T> StaticList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> ListProvider for StaticList<T> {
    type Item = T;

    fn items(&self) -> Vec<T> {
        self.items.clone()
    }
}

fn user(id: &str, name: &str, role: UserRole, status: UserStatus, last_active: &str) -> UserRow {
    let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    UserRow {
        id: id.into(),
        name: name.into(),
        email: format!("{first}@katana.com"),
        role,
        status,
        last_active: last_active.into(),
    }
}

pub fn users() -> StaticList<UserRow> {
    StaticList::new(vec![
        user("1", "John Doe", UserRole::Admin, UserStatus::Active, "2 hours ago"),
        user("2", "Jane Smith", UserRole::Member, UserStatus::Active, "5 mins ago"),
        user("3", "Mike Johnson", UserRole::Viewer, UserStatus::Pending, "Never"),
        user("4", "Sarah Williams", UserRole::Member, UserStatus::Active, "1 day ago"),
        user("5", "Tom Brown", UserRole::Viewer, UserStatus::Inactive, "30 days ago"),
    ])
}

fn report(id: &str, name: &str, kind: ReportKind, generated: (i32, u32, u32), size: &str) -> ReportRow {
    let (y, m, d) = generated;
    ReportRow {
        id: id.into(),
        name: name.into(),
        kind,
        generated: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        size: size.into(),
    }
}

pub fn recent_reports() -> StaticList<ReportRow> {
    StaticList::new(vec![
        report("1", "Monthly Activity Report", ReportKind::Activity, (2024, 1, 15), "2.5 MB"),
        report("2", "User Engagement Analysis", ReportKind::Security, (2024, 3, 4), "1.2 MB"),
        report("3", "Resource Utilization Q4", ReportKind::Activity, (2024, 5, 17), "300 KB"),
        report("4", "Security Audit Q2", ReportKind::Activity, (2024, 10, 25), "890 KB"),
    ])
}

pub fn scheduled_reports() -> StaticList<ScheduledReport> {
    StaticList::new(vec![
        ScheduledReport {
            id: "1".into(),
            name: "Weekly Activity Summary".into(),
            schedule: "Every Monday at 9:00 AM".into(),
        },
        ScheduledReport {
            id: "2".into(),
            name: "Monthly Billing Report".into(),
            schedule: "1st of every month at 12:00 AM".into(),
        },
    ])
}

fn metric(id: &str, label: &str, current: u64, max: u64, unit: &str) -> UsageMetric {
    UsageMetric {
        id: id.into(),
        label: label.into(),
        current,
        max,
        unit: unit.into(),
    }
}

pub fn usage_metrics() -> StaticList<UsageMetric> {
    StaticList::new(vec![
        metric("1", "Active Users", 67, 100, "users"),
        metric("2", "Storage Used", 45, 100, "GB"),
        metric("3", "API Calls (This Month)", 850_000, 1_000_000, "calls"),
        metric("4", "Compute Hours", 120, 200, "hours"),
    ])
}

fn role(id: &str, name: &str, title: &str, description: &str, is_filled: bool) -> RoleCard {
    RoleCard {
        id: id.into(),
        name: name.into(),
        title: title.into(),
        description: description.into(),
        is_filled,
    }
}

pub fn role_cards() -> StaticList<RoleCard> {
    StaticList::new(vec![
        role("1", "Owner", "All Permissions", "Full access to all resources", true),
        role("2", "Admin", "Manage users and settings", "4 permissions", true),
        role("3", "Member", "Standard access", "3 permissions", true),
        role("4", "Viewer", "Read-only access", "3 permissions", false),
    ])
}

pub fn permission_matrix() -> StaticList<PermissionRow> {
    StaticList::new(vec![
        PermissionRow::resource("Users"),
        PermissionRow::action("Create", true, true, false, false),
        PermissionRow::action("Read", true, true, true, true),
        PermissionRow::action("Update", true, true, false, false),
        PermissionRow::action("Delete", true, true, false, false),
        PermissionRow::resource("Settings"),
        PermissionRow::action("Read", true, true, false, false),
        PermissionRow::action("Update", true, true, false, false),
        PermissionRow::resource("Reports"),
        PermissionRow::action("Read", true, false, false, false),
    ])
}
