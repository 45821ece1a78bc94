//! Field validators.
//!
//! A field validator checks one named value of an input object against an
//! ordered list of rules. Two kinds exist:
//!
//! - [`TextValidator`], created with [`text`]
//! - [`NumberValidator`], created with [`number`]
//!
//! Both seed their rule list with a type check, append one rule per
//! configuration call, and stop at the first failing rule.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{number, text, EmailOptions};
//! use serde_json::json;
//!
//! let email = text("email").required().email(EmailOptions::new());
//! let score = number("score").min(0).max(100);
//!
//! assert!(email.validate(Some(&json!("test@example.org"))).is_success());
//! assert!(score.validate(Some(&json!(101))).is_failure());
//! ```

mod base;
mod format;
mod number;
mod text;
mod traits;

pub use format::{EmailOptions, UrlOptions};
pub use number::NumberValidator;
pub use text::{PatternOptions, TextValidator};
pub use traits::FieldValidator;

/// Creates a text validator for `field`.
pub fn text(field: impl Into<String>) -> TextValidator {
    TextValidator::new(field)
}

/// Creates a number validator for `field`.
pub fn number(field: impl Into<String>) -> NumberValidator {
    NumberValidator::new(field)
}
