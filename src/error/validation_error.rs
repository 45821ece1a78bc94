//! Validation and configuration error types.
//!
//! This module provides [`ValidationError`] for the single failure a validator
//! reports, [`ErrorKind`] for classifying it, and [`ConfigError`] for mistakes
//! made while building a validator.

use std::fmt::{self, Display};

/// The category of a validation failure.
///
/// Every failure is reported as a human-readable message; the kind lets callers
/// branch on the failure without parsing that message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was absent.
    Required,
    /// The value is not the kind the validator expects (text or number).
    InvalidType,
    /// A length or value fell outside a `min`/`max` bound, or a sign
    /// requirement failed.
    Bounds,
    /// A number has a fractional part where an integer is required.
    Integer,
    /// The value is disallowed, or not among the allowed values.
    Membership,
    /// The value does not match a pattern (including `alpha`, `numeric`,
    /// `alnum` and `uuid`).
    Pattern,
    /// A URL or email check failed.
    Format,
}

impl ErrorKind {
    /// Returns the machine-readable code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::Bounds => "bounds",
            ErrorKind::Integer => "integer",
            ErrorKind::Membership => "membership",
            ErrorKind::Pattern => "pattern",
            ErrorKind::Format => "format",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The first failure found while validating a field or a schema.
///
/// Validation stops at the first failing rule, so a failed validation carries
/// exactly one `ValidationError`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new("age", "\"age\" should be positive", ErrorKind::Bounds);
///
/// assert_eq!(error.field, "age");
/// assert_eq!(error.kind.code(), "bounds");
/// assert_eq!(error.to_string(), "\"age\" should be positive");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Name of the field that failed.
    pub field: String,
    /// Human-readable error message.
    pub message: String,
    /// Category of the failure.
    pub kind: ErrorKind,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    /// Returns the machine-readable code of this error's kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// Errors cross thread boundaries in `Schema::validate_all`.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// An error raised while configuring a validator.
///
/// These are returned by builder calls that compile expressions; validation
/// itself never produces a `ConfigError`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A pattern passed to `pattern` failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern source as given.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}
