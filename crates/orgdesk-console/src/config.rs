//! Console configuration.

use orgdesk_core::models::organization::Tier;
use orgdesk_core::models::tab::OrgTab;

/// Configuration for the console state container.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Tab shown when the console starts (default: Profile).
    pub initial_tab: OrgTab,
    /// Tier preselected in the Create dialog.
    pub default_tier: Tier,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            initial_tab: OrgTab::Profile,
            default_tier: Tier::Starter,
        }
    }
}
