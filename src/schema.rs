//! Whole-object validation.
//!
//! This module provides [`Schema`], an ordered list of field validators that
//! is checked against one input object at a time. Fields are visited in the
//! order they were added and the first failing field ends validation.
//!
//! # Example
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
//! assert!(schema.validate(&json!({"username": "test12", "password": "test123", "age": 20})).is_success());
//! assert!(schema.validate(&json!({"username": "test"})).is_failure());
//! ```

use rayon::prelude::*;
use serde_json::Value;
use stillwater::Validation;
use tracing::{debug, trace};

use crate::error::{ErrorKind, ValidationError};
use crate::field::FieldValidator;
use crate::ValidationResult;

/// An ordered collection of field validators.
///
/// A schema is built once and then only read, so it can validate any number
/// of inputs, including from several threads at once.
///
/// Field names are expected to be distinct but this is not enforced; every
/// validator is run, in insertion order.
#[derive(Default)]
pub struct Schema {
    fields: Vec<Box<dyn FieldValidator>>,
}

impl Schema {
    /// Creates a schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schema from already boxed validators, keeping their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::{number, text, FieldValidator, Schema};
    ///
    /// let fields: Vec<Box<dyn FieldValidator>> = vec![
    ///     Box::new(text("name").required()),
    ///     Box::new(number("age")),
    /// ];
    /// let schema = Schema::from_fields(fields);
    /// assert_eq!(schema.len(), 2);
    /// ```
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn FieldValidator>>,
    {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Appends a field validator.
    pub fn field<F>(mut self, validator: F) -> Self
    where
        F: FieldValidator + 'static,
    {
        self.fields.push(Box::new(validator));
        self
    }

    /// Iterates over the field validators in order.
    pub fn fields(&self) -> impl Iterator<Item = &dyn FieldValidator> {
        self.fields.iter().map(|f| f.as_ref())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates an input object.
    ///
    /// Each field's value is looked up by name. A missing required field fails
    /// with `"<field>" is a required field`; a missing optional field is
    /// skipped; a present value (including `0`, `""`, `false` and `null`) is
    /// handed to the field's validator. The first failure is returned.
    ///
    /// A non-object input has no fields, so only required fields can fail.
    pub fn validate(&self, input: &Value) -> ValidationResult {
        for validator in &self.fields {
            let name = validator.field();
            let value = input.get(name);
            trace!(field = name, present = value.is_some(), "checking field");

            let result = match value {
                None if validator.is_required() => Validation::Failure(ValidationError::new(
                    name,
                    format!("\"{}\" is a required field", name),
                    ErrorKind::Required,
                )),
                None => continue,
                Some(value) => validator.validate(Some(value)),
            };

            if let Validation::Failure(error) = result {
                debug!(field = name, code = error.code(), "schema rejected input");
                return Validation::Failure(error);
            }
        }

        Validation::Success(())
    }

    /// Validates many input objects in parallel.
    ///
    /// Results are returned in the same order as `inputs`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::{number, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::new().field(number("n").positive());
    /// let results = schema.validate_all(&[json!({"n": 1}), json!({"n": -1})]);
    ///
    /// assert!(results[0].is_success());
    /// assert!(results[1].is_failure());
    /// ```
    pub fn validate_all(&self, inputs: &[Value]) -> Vec<ValidationResult> {
        inputs.par_iter().map(|input| self.validate(input)).collect()
    }
}

impl FromIterator<Box<dyn FieldValidator>> for Schema {
    fn from_iter<I: IntoIterator<Item = Box<dyn FieldValidator>>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}
