//! OrgDesk Core: domain models, error taxonomy, and the repository and
//! notifier seams shared by every other crate.

pub mod error;
pub mod models;
pub mod notify;
pub mod repository;

pub use error::{OrgDeskError, OrgDeskResult};
