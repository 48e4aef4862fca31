//! Role and permission-matrix models for the Permissions tab.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCard {
    pub id: String,
    /// Role name (e.g., `Owner`, `Viewer`).
    pub name: String,
    pub title: String,
    pub description: String,
    /// Filled cards render with a solid badge.
    pub is_filled: bool,
}

/// Which of the four built-in roles hold a permission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrants {
    pub owner: bool,
    pub admin: bool,
    pub member: bool,
    pub viewer: bool,
}

/// A row in the permission matrix: either a resource header or an action
/// on the most recent resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum PermissionRow {
    Resource { name: String },
    Action { name: String, grants: RoleGrants },
}

impl PermissionRow {
    pub fn resource(name: &str) -> Self {
        Self::Resource { name: name.into() }
    }

    pub fn action(name: &str, owner: bool, admin: bool, member: bool, viewer: bool) -> Self {
        Self::Action {
            name: name.into(),
            grants: RoleGrants {
                owner,
                admin,
                member,
                viewer,
            },
        }
    }
}
