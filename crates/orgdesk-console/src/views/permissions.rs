use orgdesk_core::models::permission::{PermissionRow, RoleCard};
use orgdesk_core::repository::ListProvider;
use serde::Serialize;

use super::Badge;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCardItem {
    #[serde(flatten)]
    pub role: RoleCard,
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionsView {
    pub roles: Vec<RoleCardItem>,
    pub matrix: Vec<PermissionRow>,
}

pub fn render_permissions<R, M>(roles: &R, matrix: &M) -> PermissionsView
where
    R: ListProvider<Item = RoleCard> + ?Sized,
    M: ListProvider<Item = PermissionRow> + ?Sized,
{
    PermissionsView {
        roles: roles
            .items()
            .into_iter()
            .map(|role| RoleCardItem {
                badge: if role.is_filled {
                    Badge::Default
                } else {
                    Badge::Outline
                },
                role,
            })
            .collect(),
        matrix: matrix.items(),
    }
}
