//! The contract shared by text and number validators.
//!
//! This module provides the [`FieldValidator`] trait that lets a
//! [`Schema`](crate::Schema) hold validators of different kinds side by side.

use serde_json::Value;

use crate::ValidationResult;

/// A validator for one named field of an input object.
///
/// `Send + Sync` lets a fully configured schema be shared across threads and
/// stored as `Box<dyn FieldValidator>`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{number, text, FieldValidator};
/// use serde_json::json;
///
/// let validators: Vec<Box<dyn FieldValidator>> = vec![
///     Box::new(text("name").alpha().required()),
///     Box::new(number("age").integer()),
/// ];
///
/// assert!(validators[0].validate(Some(&json!("Ada"))).is_success());
/// assert!(validators[1].validate(None).is_success());
/// ```
pub trait FieldValidator: Send + Sync {
    /// The key this validator reads from an input object.
    fn field(&self) -> &str;

    /// Whether absence of the field is a failure.
    fn is_required(&self) -> bool;

    /// Validates a single value; `None` means the field is absent.
    ///
    /// Rules run in the order they were configured and the first failure is
    /// returned.
    fn validate(&self, value: Option<&Value>) -> ValidationResult;
}
