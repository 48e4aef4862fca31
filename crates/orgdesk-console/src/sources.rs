//! Per-tab list providers.

use orgdesk_core::models::permission::{PermissionRow, RoleCard};
use orgdesk_core::models::report::{ReportRow, ScheduledReport};
use orgdesk_core::models::usage::UsageMetric;
use orgdesk_core::models::user::UserRow;
use orgdesk_core::repository::ListProvider;

/// The lists each tab shows besides the organization itself. None of them
/// is tied to the registry; each can be swapped independently.
pub struct TabSources {
    pub users: Box<dyn ListProvider<Item = UserRow>>,
    pub recent_reports: Box<dyn ListProvider<Item = ReportRow>>,
    pub scheduled_reports: Box<dyn ListProvider<Item = ScheduledReport>>,
    pub usage: Box<dyn ListProvider<Item = UsageMetric>>,
    pub roles: Box<dyn ListProvider<Item = RoleCard>>,
    pub permissions: Box<dyn ListProvider<Item = PermissionRow>>,
}
