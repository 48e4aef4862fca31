//! Tab navigation state.

use orgdesk_core::models::tab::OrgTab;
use tracing::debug;

/// Which of the five tabs is showing. Every tab is reachable from every
/// other tab and there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabNavigator {
    active: OrgTab,
}

impl TabNavigator {
    pub fn new(initial: OrgTab) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> OrgTab {
        self.active
    }

    pub fn select(&mut self, tab: OrgTab) -> OrgTab {
        debug!(from = %self.active, to = %tab, "Switching tab");
        self.active = tab;
        tab
    }
}
