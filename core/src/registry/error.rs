//! Error types for registry operations

use thiserror::Error;

/// Errors from registry mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("timer '{id}' is already active")]
    DuplicateIdentifier { id: String },

    #[error("timer '{id}' is not active")]
    UnknownIdentifier { id: String },
}
