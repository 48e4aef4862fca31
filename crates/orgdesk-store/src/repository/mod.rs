//! In-memory repository implementations.

mod organization;
mod sso_provider;

pub use organization::InMemoryOrganizationRegistry;
pub use sso_provider::InMemorySsoProviderStore;
