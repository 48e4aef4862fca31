//! Domain models for OrgDesk.
//!
//! The organization is the registry's entity; the remaining models are the
//! rows each tab lists from its own provider.

pub mod organization;
pub mod permission;
pub mod report;
pub mod sso;
pub mod tab;
pub mod usage;
pub mod user;
