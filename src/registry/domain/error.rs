//! Error types for registry domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryDomainError {
    /// The hospital name is blank (empty or whitespace only).
    #[error("hospital name must not be blank")]
    EmptyHospitalName,

    /// The patient name is blank (empty or whitespace only).
    #[error("patient name must not be blank")]
    EmptyPatientName,
}

/// Error returned while parsing a patient sex value from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sex value: {0}")]
pub struct ParseSexError(pub String);
