//! The fixed set of console tabs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrgDeskError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgTab {
    #[default]
    Profile,
    Users,
    Reports,
    Usage,
    Permissions,
}

impl OrgTab {
    /// Tabs in display order.
    pub const ALL: [OrgTab; 5] = [
        OrgTab::Profile,
        OrgTab::Users,
        OrgTab::Reports,
        OrgTab::Usage,
        OrgTab::Permissions,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Users => "users",
            Self::Reports => "reports",
            Self::Usage => "usage",
            Self::Permissions => "permissions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Users => "Users",
            Self::Reports => "Reports",
            Self::Usage => "Usage",
            Self::Permissions => "Permissions",
        }
    }
}

impl fmt::Display for OrgTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OrgTab {
    type Err = OrgDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrgTab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OrgDeskError::validation(format!("unknown tab: {wanted}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_round_trips_through_its_id() {
        for tab in OrgTab::ALL {
            assert_eq!(tab.id().parse::<OrgTab>().unwrap(), tab);
        }
        assert!("dashboard".parse::<OrgTab>().is_err());
    }
}
