//! Numeric field validation.
//!
//! This module provides [`NumberValidator`] for validating numbers with
//! value bounds, integrality, sign requirements and membership lists.

use serde_json::Value;

use crate::error::{ErrorKind, ValidationError};
use crate::ValidationResult;

use super::base::{value_type_name, FieldBase};
use super::traits::FieldValidator;

/// A rule applied to numeric values.
#[derive(Debug, Clone, Copy)]
enum NumberRule {
    IsNumber,
    Min(f64),
    Max(f64),
    Integer,
    Positive,
    Negative,
    Allowed,
    Disallowed,
}

/// A validator for numeric fields.
///
/// Integers and floats are both accepted and compared as `f64`. Rules run in
/// configuration order after the implicit number type check, and the first
/// failure is reported.
///
/// # Example
///
/// ```rust
/// use fieldcheck::number;
/// use serde_json::json;
///
/// let age = number("age").min(18).max(130).integer();
///
/// assert!(age.validate(Some(&json!(30))).is_success());
/// assert!(age.validate(Some(&json!(12))).is_failure());
/// assert!(age.validate(Some(&json!(20.5))).is_failure());
/// assert!(age.validate(Some(&json!("30"))).is_failure());
/// assert!(age.validate(None).is_success());
/// ```
#[derive(Debug, Clone)]
pub struct NumberValidator {
    base: FieldBase<f64>,
    rules: Vec<NumberRule>,
}

impl NumberValidator {
    /// Creates an optional number validator for `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(field),
            rules: vec![NumberRule::IsNumber],
        }
    }

    /// Makes absence of the field a failure.
    pub fn required(mut self) -> Self {
        self.base.set_required();
        self
    }

    /// Accepts only the allowed values.
    ///
    /// Repeated calls add to one allow-list.
    pub fn allow<I, N>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        self.base.allow(values.into_iter().map(Into::into));
        self.rules.push(NumberRule::Allowed);
        self
    }

    /// Rejects the given values.
    pub fn disallow<I, N>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<f64>,
    {
        self.base.disallow(values.into_iter().map(Into::into));
        self.rules.push(NumberRule::Disallowed);
        self
    }

    /// Requires the value to be at least `min` (inclusive).
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.rules.push(NumberRule::Min(min.into()));
        self
    }

    /// Requires the value to be at most `max` (inclusive).
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.rules.push(NumberRule::Max(max.into()));
        self
    }

    /// Requires a value without a fractional part.
    ///
    /// `5.0` counts as an integer.
    pub fn integer(mut self) -> Self {
        self.rules.push(NumberRule::Integer);
        self
    }

    /// Requires a value greater than zero.
    pub fn positive(mut self) -> Self {
        self.rules.push(NumberRule::Positive);
        self
    }

    /// Requires a value less than zero.
    pub fn negative(mut self) -> Self {
        self.rules.push(NumberRule::Negative);
        self
    }

    /// The field name.
    pub fn field(&self) -> &str {
        self.base.field()
    }

    /// Whether the field is required.
    pub fn is_required(&self) -> bool {
        self.base.is_required()
    }

    /// Values accumulated by [`allow`](Self::allow).
    pub fn allowed_values(&self) -> &[f64] {
        self.base.allowed()
    }

    /// Values accumulated by [`disallow`](Self::disallow).
    pub fn disallowed_values(&self) -> &[f64] {
        self.base.disallowed()
    }

    /// Number of configured rules, including the type check.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Validates a value; `None` means the field is absent.
    pub fn validate(&self, value: Option<&Value>) -> ValidationResult {
        self.base.run(value, |value| {
            self.rules
                .iter()
                .find_map(|rule| self.check_rule(*rule, value))
        })
    }

    /// Checks a single rule and returns an error if it fails.
    fn check_rule(&self, rule: NumberRule, value: &Value) -> Option<ValidationError> {
        let field = self.base.field();

        if let NumberRule::IsNumber = rule {
            return match value {
                Value::Number(_) => None,
                other => Some(self.base.error(
                    format!("\"{}\" is not a number, got {}", field, value_type_name(other)),
                    ErrorKind::InvalidType,
                )),
            };
        }

        // IsNumber always runs first; serde_json numbers are always finite
        let n = value.as_f64()?;

        let bounds = |message: String| Some(self.base.error(message, ErrorKind::Bounds));

        match rule {
            NumberRule::IsNumber => None,
            NumberRule::Min(min) if n < min => {
                bounds(format!("\"{}\" should be at least {}, got {}", field, min, n))
            }
            NumberRule::Max(max) if n > max => {
                bounds(format!("\"{}\" should be at most {}, got {}", field, max, n))
            }
            NumberRule::Integer if n.fract() != 0.0 => Some(self.base.error(
                format!("\"{}\" should be an integer, got {}", field, n),
                ErrorKind::Integer,
            )),
            NumberRule::Positive if n <= 0.0 => {
                bounds(format!("\"{}\" should be positive, got {}", field, n))
            }
            NumberRule::Negative if n >= 0.0 => {
                bounds(format!("\"{}\" should be negative, got {}", field, n))
            }
            NumberRule::Allowed => self.base.check_allowed(&n),
            NumberRule::Disallowed => self.base.check_disallowed(&n),
            _ => None,
        }
    }
}

impl FieldValidator for NumberValidator {
    fn field(&self) -> &str {
        self.field()
    }

    fn is_required(&self) -> bool {
        self.is_required()
    }

    fn validate(&self, value: Option<&Value>) -> ValidationResult {
        self.validate(value)
    }
}
