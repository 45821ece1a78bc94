//! Text field validation.
//!
//! This module provides [`TextValidator`] for validating string values with
//! length bounds, patterns, membership lists and URL/email checks.

use std::sync::{Arc, LazyLock};

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::error::{ConfigError, ErrorKind, ValidationError};
use crate::tld::TldSet;
use crate::ValidationResult;

use super::base::{value_type_name, FieldBase};
use super::format::{check_email, check_url, EmailOptions, UrlOptions};
use super::traits::FieldValidator;

static ALPHA: LazyLock<Regex> = LazyLock::new(|| builtin(r"^[a-z]+$", true));
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| builtin(r"^[0-9]+$", false));
static ALNUM: LazyLock<Regex> = LazyLock::new(|| builtin(r"^[a-z0-9]+$", true));
static UUID: LazyLock<Regex> = LazyLock::new(|| {
    builtin(
        r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        false,
    )
});

fn builtin(pattern: &str, ignore_case: bool) -> Regex {
    compile(pattern, ignore_case).expect("built-in pattern is valid")
}

fn compile(pattern: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()
}

/// Options for [`TextValidator::pattern`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternOptions {
    ignore_case: bool,
}

impl PatternOptions {
    /// Case-sensitive matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets case-insensitive matching.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// A rule applied to text values.
#[derive(Debug, Clone)]
enum TextRule {
    IsText,
    MinLength(usize),
    MaxLength(usize),
    Pattern(Regex),
    Allowed,
    Disallowed,
    Url(UrlOptions),
    Email(EmailOptions),
}

/// A validator for text fields.
///
/// Every configuration call appends a rule; validation runs the rules in that
/// order and stops at the first failure. The first rule is always the implicit
/// string type check.
///
/// # Example
///
/// ```rust
/// use fieldcheck::text;
/// use serde_json::json;
///
/// let username = text("username").required().min(3).max(16).alnum();
///
/// assert!(username.validate(Some(&json!("ada42"))).is_success());
/// assert!(username.validate(Some(&json!("ab"))).is_failure());
/// assert!(username.validate(Some(&json!(42))).is_failure());
/// assert!(username.validate(None).is_failure());
/// ```
#[derive(Debug, Clone)]
pub struct TextValidator {
    base: FieldBase<String>,
    rules: Vec<TextRule>,
    tlds: Arc<TldSet>,
}

impl TextValidator {
    /// Creates an optional text validator for `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(field),
            rules: vec![TextRule::IsText],
            tlds: TldSet::iana(),
        }
    }

    /// Makes absence of the field a failure.
    pub fn required(mut self) -> Self {
        self.base.set_required();
        self
    }

    /// Accepts only the allowed values.
    ///
    /// Repeated calls add to one allow-list; every value allowed during
    /// configuration is accepted, regardless of call order.
    pub fn allow<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base.allow(values.into_iter().map(Into::into));
        self.rules.push(TextRule::Allowed);
        self
    }

    /// Rejects the given values.
    pub fn disallow<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base.disallow(values.into_iter().map(Into::into));
        self.rules.push(TextRule::Disallowed);
        self
    }

    /// Requires at least `min` characters.
    pub fn min(mut self, min: usize) -> Self {
        self.rules.push(TextRule::MinLength(min));
        self
    }

    /// Requires at most `max` characters.
    pub fn max(mut self, max: usize) -> Self {
        self.rules.push(TextRule::MaxLength(max));
        self
    }

    /// Requires `pattern` to match somewhere in the value.
    ///
    /// Anchor the pattern with `^`/`$` to match the whole value. Returns an
    /// error if the pattern does not compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::{text, PatternOptions};
    /// use serde_json::json;
    ///
    /// let code = text("code")
    ///     .pattern("[abc]+", PatternOptions::new().ignore_case(true))
    ///     .unwrap();
    ///
    /// assert!(code.validate(Some(&json!("ABC"))).is_success());
    /// assert!(code.validate(Some(&json!("hello"))).is_failure());
    /// ```
    pub fn pattern(mut self, pattern: &str, options: PatternOptions) -> Result<Self, ConfigError> {
        let regex =
            compile(pattern, options.ignore_case).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        self.rules.push(TextRule::Pattern(regex));
        Ok(self)
    }

    /// Like [`pattern`](Self::pattern), reusing the source of an existing regex.
    ///
    /// Builder flags of `regex` (such as case-insensitivity) are discarded;
    /// only `options` applies.
    pub fn pattern_from(self, regex: &Regex, options: PatternOptions) -> Result<Self, ConfigError> {
        self.pattern(regex.as_str(), options)
    }

    /// Requires only ASCII letters.
    pub fn alpha(mut self) -> Self {
        self.rules.push(TextRule::Pattern(ALPHA.clone()));
        self
    }

    /// Requires only ASCII digits.
    pub fn numeric(mut self) -> Self {
        self.rules.push(TextRule::Pattern(NUMERIC.clone()));
        self
    }

    /// Requires only ASCII letters and digits.
    pub fn alnum(mut self) -> Self {
        self.rules.push(TextRule::Pattern(ALNUM.clone()));
        self
    }

    /// Requires a hyphenated 8-4-4-4-12 hex UUID somewhere in the value.
    pub fn uuid(mut self) -> Self {
        self.rules.push(TextRule::Pattern(UUID.clone()));
        self
    }

    /// Requires a loosely URL-shaped value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldcheck::{text, UrlOptions};
    /// use serde_json::json;
    ///
    /// let dsn = text("dsn").url(UrlOptions::new().scheme("postgres"));
    ///
    /// assert!(dsn.validate(Some(&json!("postgres://server.com"))).is_success());
    /// assert!(dsn.validate(Some(&json!("https://example.org"))).is_failure());
    /// ```
    pub fn url(mut self, options: UrlOptions) -> Self {
        self.rules.push(TextRule::Url(options));
        self
    }

    /// Requires a loosely email-shaped value.
    pub fn email(mut self, options: EmailOptions) -> Self {
        self.rules.push(TextRule::Email(options));
        self
    }

    /// Replaces the top-level domain set used by `url` and `email`.
    pub fn tlds(mut self, tlds: Arc<TldSet>) -> Self {
        self.tlds = tlds;
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
    pub fn allowed_values(&self) -> &[String] {
        self.base.allowed()
    }

    /// Values accumulated by [`disallow`](Self::disallow).
    pub fn disallowed_values(&self) -> &[String] {
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
                .find_map(|rule| self.check_rule(rule, value))
        })
    }

    /// Checks a single rule and returns an error if it fails.
    fn check_rule(&self, rule: &TextRule, value: &Value) -> Option<ValidationError> {
        let field = self.base.field();

        if let TextRule::IsText = rule {
            return match value {
                Value::String(_) => None,
                other => Some(self.base.error(
                    format!("\"{}\" is not a string, got {}", field, value_type_name(other)),
                    ErrorKind::InvalidType,
                )),
            };
        }

        // IsText always runs first, so later rules only see strings
        let s = value.as_str()?;

        match rule {
            TextRule::IsText => None,
            TextRule::MinLength(min) => (s.chars().count() < *min).then(|| {
                self.base.error(
                    format!("\"{}\" should be at least {} characters long", field, min),
                    ErrorKind::Bounds,
                )
            }),
            TextRule::MaxLength(max) => (s.chars().count() > *max).then(|| {
                self.base.error(
                    format!("\"{}\" should not be more than {} characters long", field, max),
                    ErrorKind::Bounds,
                )
            }),
            TextRule::Pattern(regex) => (!regex.is_match(s)).then(|| {
                self.base.error(
                    format!("\"{}\" does not satisfy pattern \"{}\"", field, regex.as_str()),
                    ErrorKind::Pattern,
                )
            }),
            TextRule::Allowed => self.base.check_allowed(s),
            TextRule::Disallowed => self.base.check_disallowed(s),
            TextRule::Url(options) => check_url(s, options, &self.tlds)
                .err()
                .map(|v| self.base.error(v.message(field), ErrorKind::Format)),
            TextRule::Email(options) => check_email(s, options, &self.tlds)
                .err()
                .map(|v| self.base.error(v.message(field), ErrorKind::Format)),
        }
    }
}

impl FieldValidator for TextValidator {
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
