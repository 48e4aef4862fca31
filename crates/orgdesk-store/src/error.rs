//! Store-specific error types and conversions.

use orgdesk_core::error::OrgDeskError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),

    #[error("duplicate organization id in seed: {0}")]
    DuplicateId(String),

    #[error("seed organization {id} has a blank {field}")]
    BlankField { id: String, field: &'static str },

    #[error("seed list is empty")]
    EmptySeed,

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<StoreError> for OrgDeskError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => OrgDeskError::NotFound { entity, id },
            StoreError::EmptySeed => OrgDeskError::EmptyRegistry,
            other => OrgDeskError::Seed(other.to_string()),
        }
    }
}
