use orgdesk_core::models::user::{UserRole, UserRow, UserStatus};
use orgdesk_core::repository::ListProvider;
use serde::Serialize;

use super::Badge;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserItem {
    #[serde(flatten)]
    pub user: UserRow,
    pub role_badge: Badge,
    pub status_badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersView {
    pub users: Vec<UserItem>,
}

fn role_badge(role: UserRole) -> Badge {
    match role {
        UserRole::Admin => Badge::Default,
        UserRole::Member => Badge::Secondary,
        UserRole::Viewer => Badge::Outline,
    }
}

fn status_badge(status: UserStatus) -> Badge {
    match status {
        UserStatus::Active => Badge::Default,
        UserStatus::Pending => Badge::Secondary,
        UserStatus::Inactive => Badge::Outline,
    }
}

pub fn render_users<P>(users: &P) -> UsersView
where
    P: ListProvider<Item = UserRow> + ?Sized,
{
    UsersView {
        users: users
            .items()
            .into_iter()
            .map(|user| UserItem {
                role_badge: role_badge(user.role),
                status_badge: status_badge(user.status),
                user,
            })
            .collect(),
    }
}
