//! Error types for roster enumerations

use thiserror::Error;

/// Core roster errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A lookup that requires membership was given a foreign member
    #[error("the given {type_name} member does not belong to this enum")]
    NotAMember { type_name: String },
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
