//! Drag-and-drop between the active and inactive SSO provider zones.

use orgdesk_core::error::OrgDeskResult;
use orgdesk_core::models::sso::{SsoProvider, SsoZone};
use orgdesk_core::repository::SsoProviderRepository;
use tracing::debug;

/// Tracks the provider being dragged. Drag-start and drop happen on the
/// same event loop, so no other state is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsoDragBoard {
    dragging: Option<String>,
}

impl SsoDragBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_start(&mut self, provider_id: &str) {
        debug!(provider_id, "Drag started");
        self.dragging = Some(provider_id.to_string());
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Commit the drag into `zone`. Dropping with nothing dragged is a
    /// no-op and returns `None`.
    pub fn drop_on<S: SsoProviderRepository>(
        &mut self,
        zone: SsoZone,
        store: &mut S,
    ) -> OrgDeskResult<Option<SsoProvider>> {
        let Some(id) = self.dragging.take() else {
            return Ok(None);
        };
        debug!(provider_id = %id, ?zone, "Dropped provider");
        store.set_active(&id, zone.is_active()).map(Some)
    }
}
