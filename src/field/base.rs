//! State shared by every field validator.
//!
//! [`FieldBase`] owns the field name, the requiredness flag and the
//! accumulated allow/disallow sets. Text and number validators embed it and
//! add their own rule lists on top.

use std::fmt::Display;

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ValidationError};
use crate::ValidationResult;

#[derive(Debug, Clone)]
pub(crate) struct FieldBase<T> {
    field: String,
    required: bool,
    allowed: Vec<T>,
    disallowed: Vec<T>,
}

impl<T: PartialEq> FieldBase<T> {
    pub(crate) fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            required: false,
            allowed: Vec::new(),
            disallowed: Vec::new(),
        }
    }

    pub(crate) fn field(&self) -> &str {
        &self.field
    }

    pub(crate) fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn set_required(&mut self) {
        self.required = true;
    }

    pub(crate) fn allowed(&self) -> &[T] {
        &self.allowed
    }

    pub(crate) fn disallowed(&self) -> &[T] {
        &self.disallowed
    }

    pub(crate) fn allow(&mut self, values: impl IntoIterator<Item = T>) {
        extend_unique(&mut self.allowed, values);
    }

    pub(crate) fn disallow(&mut self, values: impl IntoIterator<Item = T>) {
        extend_unique(&mut self.disallowed, values);
    }

    /// Fails when an allow-list exists and `value` is not on it.
    pub(crate) fn check_allowed<Q>(&self, value: &Q) -> Option<ValidationError>
    where
        T: PartialEq<Q>,
        Q: Display + ?Sized,
    {
        if self.allowed.is_empty() || self.allowed.iter().any(|a| a == value) {
            None
        } else {
            Some(self.membership_error(value))
        }
    }

    /// Fails when `value` is on the deny-list.
    pub(crate) fn check_disallowed<Q>(&self, value: &Q) -> Option<ValidationError>
    where
        T: PartialEq<Q>,
        Q: Display + ?Sized,
    {
        if self.disallowed.iter().any(|d| d == value) {
            Some(self.membership_error(value))
        } else {
            None
        }
    }

    /// Builds an error attributed to this field.
    pub(crate) fn error(&self, message: impl Into<String>, kind: ErrorKind) -> ValidationError {
        ValidationError::new(self.field.clone(), message, kind)
    }

    /// Applies the absence policy, then runs `rules` on a present value.
    ///
    /// An absent value never reaches the rules: it fails only when the field
    /// is required.
    pub(crate) fn run(
        &self,
        value: Option<&Value>,
        rules: impl FnOnce(&Value) -> Option<ValidationError>,
    ) -> ValidationResult {
        let failure = match value {
            None if self.required => Some(self.error(
                format!("\"{}\" is required", self.field),
                ErrorKind::Required,
            )),
            None => None,
            Some(value) => rules(value),
        };

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(()),
        }
    }

    fn membership_error<Q: Display + ?Sized>(&self, value: &Q) -> ValidationError {
        self.error(
            format!("\"{}\" is not allowed to be a value of \"{}\"", value, self.field),
            ErrorKind::Membership,
        )
    }
}

fn extend_unique<T: PartialEq>(set: &mut Vec<T>, values: impl IntoIterator<Item = T>) {
    for value in values {
        if !set.contains(&value) {
            set.push(value);
        }
    }
}

/// Returns the JSON type name for a value.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
