//! OrgDesk Store: in-memory implementations of the core repository
//! traits, the bootstrap seed, and the static tab fixtures.
//!
//! This crate provides:
//! - The organization registry ([`InMemoryOrganizationRegistry`])
//! - The SSO provider store ([`InMemorySsoProviderStore`])
//! - Seed loading ([`load_seed`], [`builtin_seed`])
//! - Static list providers for the tabs ([`fixtures`])

mod config;
mod error;
pub mod fixtures;
pub mod repository;
mod seed;

pub use config::StoreConfig;
pub use error::StoreError;
pub use repository::{InMemoryOrganizationRegistry, InMemorySsoProviderStore};
pub use seed::{builtin_seed, check_seed, load_seed, parse_seed, read_seed_file};
