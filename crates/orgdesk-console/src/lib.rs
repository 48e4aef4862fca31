//! OrgDesk Console: tab navigation, dialog controllers and view models
//! for the organization admin console.
//!
//! [`OrgConsole`] is the entry point. It is generic over the organization
//! registry, the SSO provider store and the notifier, all defined as
//! traits in `orgdesk-core`.

pub mod config;
pub mod console;
pub mod dialog;
pub mod drag;
pub mod error;
pub mod sources;
pub mod tabs;
pub mod views;

pub use config::ConsoleConfig;
pub use console::{Confirmed, DialogKind, OrgConsole};
pub use error::ConsoleError;
pub use sources::TabSources;
pub use tabs::TabNavigator;
