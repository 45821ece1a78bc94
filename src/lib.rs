//! # Fieldcheck
//!
//! A small declarative validation library: build a [`Schema`] from named,
//! typed field validators and check untyped input objects against it.
//!
//! ## Overview
//!
//! Each field validator owns an ordered list of rules. Configuration calls
//! (`min`, `max`, `pattern`, `allow`, `url`, ...) each append one rule, and
//! validation runs the rules in that order, stopping at the first failure.
//! A schema visits its fields in order and likewise reports only the first
//! failing field, so every failure carries exactly one specific message.
//!
//! ## Core Types
//!
//! - [`TextValidator`] / [`text`]: string fields (length, pattern, membership,
//!   URL and email checks)
//! - [`NumberValidator`] / [`number`]: numeric fields (bounds, integrality, sign,
//!   membership)
//! - [`Schema`]: an ordered collection of field validators
//! - [`ValidationError`]: the single failure reported by a validation
//! - [`TldSet`]: the top-level domain lookup used by URL and email checks
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck::{number, text, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(text("username").alnum().required())
//!     .field(text("password").alnum().required())
//!     .field(number("age").min(18));
//!
//! let result = schema.validate(&json!({"username": "test12", "password": "test123", "age": 20}));
//! assert!(result.is_success());
//!
//! let error = schema.validate(&json!({})).into_result().unwrap_err();
//! assert_eq!(error.message, "\"username\" is a required field");
//! ```

pub mod error;
pub mod field;
pub mod schema;
pub mod tld;

pub use error::{ConfigError, ErrorKind, ValidationError};
pub use field::{
    number, text, EmailOptions, FieldValidator, NumberValidator, PatternOptions, TextValidator,
    UrlOptions,
};
pub use schema::Schema;
pub use tld::TldSet;

/// Outcome of validating a field or an input object.
///
/// `Success(())` means the value is valid; `Failure` carries the first error.
pub type ValidationResult = stillwater::Validation<(), ValidationError>;
