//! Console error types.

use orgdesk_core::error::OrgDeskError;
use thiserror::Error;

/// Errors raised by dialog controllers before anything reaches a store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("dialog is not open")]
    DialogClosed,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a whole number, got {input:?}")]
    InvalidNumber { field: &'static str, input: String },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{0} cannot be changed here")]
    ReadOnlyField(&'static str),
}

impl From<ConsoleError> for OrgDeskError {
    fn from(err: ConsoleError) -> Self {
        OrgDeskError::Validation {
            message: err.to_string(),
        }
    }
}
