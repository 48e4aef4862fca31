//! Error types for the OrgDesk console.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrgDeskError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Organization registry has no organizations")]
    EmptyRegistry,

    #[error("Cannot delete the last remaining organization")]
    LastOrganization,

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl OrgDeskError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

pub type OrgDeskResult<T> = Result<T, OrgDeskError>;
