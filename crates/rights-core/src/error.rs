//! Error types for the rights entity model

use thiserror::Error;

/// Result type alias using ModelError
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while validating or constructing entities
///
/// Validation errors are always detected before any ledger write is
/// attempted, and each one names the offending field so the HTTP layer
/// can surface a field-keyed 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required attribute of an entity body is missing or empty
    #[error("`{0}` must be provided")]
    MissingField(&'static str),

    /// A required top-level request parameter is missing
    #[error("Missing required parameter: `{0}`")]
    MissingParameter(&'static str),

    /// A date attribute could not be parsed
    #[error("`{field}` is not a valid date: {value}")]
    InvalidDate {
        field: &'static str,
        value: String,
    },

    /// A key string is not valid base64-encoded Ed25519 key material
    #[error("`{0}` is not a valid Ed25519 key")]
    MalformedKey(&'static str),
}
