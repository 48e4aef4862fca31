//! Store configuration.

use std::path::PathBuf;

/// Configuration for building the in-memory stores.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// JSON file holding the bootstrap organization list. `None` uses the
    /// built-in seed.
    pub seed_path: Option<PathBuf>,
    /// Seat count given to organizations created without one.
    pub default_max_users: u32,
    /// Number of name characters used for the derived logo.
    pub logo_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            default_max_users: 10,
            logo_len: 2,
        }
    }
}
