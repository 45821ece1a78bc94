//! Error types for validation failures.
//!
//! This module provides the single-failure [`ValidationError`] reported by
//! validators and schemas, and the construction-time [`ConfigError`].

mod validation_error;

pub use validation_error::{ConfigError, ErrorKind, ValidationError};
