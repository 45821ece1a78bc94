//! Loose URL and email checks.
//!
//! These are heuristics, not RFC parsers: a value passes when it roughly has
//! the expected shape and, optionally, a known top-level domain.

use std::sync::LazyLock;

use regex::Regex;

use crate::tld::TldSet;

static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+://\w*:*\w*@?\w+:?\d*").expect("URL shape pattern is valid")
});

static ANY_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+://").expect("scheme pattern is valid"));

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.+]+@[\w.]+\.\w+").expect("email shape pattern is valid")
});

/// Options for [`TextValidator::url`](crate::TextValidator::url).
///
/// # Example
///
/// ```rust
/// use fieldcheck::UrlOptions;
///
/// let options = UrlOptions::new()
///     .scheme("postgres")
///     .basic_auth_required(true)
///     .verify_tlds(false);
/// ```
#[derive(Debug, Clone)]
pub struct UrlOptions {
    scheme: Option<String>,
    basic_auth_required: bool,
    verify_tlds: bool,
}

impl UrlOptions {
    /// Accepts any scheme, no auth part, and checks the top-level domain.
    pub fn new() -> Self {
        Self {
            scheme: None,
            basic_auth_required: false,
            verify_tlds: true,
        }
    }

    /// Requires the URL to use `scheme` (compared case-insensitively).
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Requires a `user:password@` part before the host.
    pub fn basic_auth_required(mut self, required: bool) -> Self {
        self.basic_auth_required = required;
        self
    }

    /// Enables or disables the top-level domain lookup.
    pub fn verify_tlds(mut self, verify: bool) -> Self {
        self.verify_tlds = verify;
        self
    }
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for [`TextValidator::email`](crate::TextValidator::email).
///
/// With several providers, the domain must equal any one of them.
///
/// # Example
///
/// ```rust
/// use fieldcheck::EmailOptions;
///
/// let options = EmailOptions::new()
///     .mail_provider("example.org")
///     .mail_provider("example.com")
///     .verify_tlds(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailOptions {
    mail_providers: Vec<String>,
    verify_tlds: bool,
}

impl EmailOptions {
    /// Accepts any provider and skips the top-level domain lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an accepted mail provider domain.
    pub fn mail_provider(mut self, provider: impl Into<String>) -> Self {
        self.mail_providers.push(provider.into());
        self
    }

    /// Adds several accepted mail provider domains.
    pub fn mail_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mail_providers
            .extend(providers.into_iter().map(Into::into));
        self
    }

    /// Enables or disables the top-level domain lookup.
    pub fn verify_tlds(mut self, verify: bool) -> Self {
        self.verify_tlds = verify;
        self
    }
}

/// Why a URL or email was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormatViolation {
    NotUrl,
    WrongScheme(String),
    MissingScheme,
    MissingAuth,
    UnknownTld,
    NotEmail,
    WrongProvider(Vec<String>),
}

impl FormatViolation {
    pub(crate) fn message(&self, field: &str) -> String {
        match self {
            FormatViolation::NotUrl => format!("\"{}\" is not a URL", field),
            FormatViolation::WrongScheme(scheme) => {
                format!("\"{}\" should start with \"{}://\"", field, scheme)
            }
            FormatViolation::MissingScheme => format!("\"{}\" should have a valid scheme", field),
            FormatViolation::MissingAuth => format!("\"{}\" needs an auth string", field),
            FormatViolation::UnknownTld => {
                format!("\"{}\" does not have a valid top-level domain name", field)
            }
            FormatViolation::NotEmail => format!("\"{}\" is not an email", field),
            FormatViolation::WrongProvider(providers) => format!(
                "\"{}\" should be an email address from {}",
                field,
                providers.join(" or ")
            ),
        }
    }
}

pub(crate) fn check_url(
    value: &str,
    options: &UrlOptions,
    tlds: &TldSet,
) -> Result<(), FormatViolation> {
    if !URL_SHAPE.is_match(value) {
        return Err(FormatViolation::NotUrl);
    }

    let rest = strip_scheme(value, options.scheme.as_deref()).ok_or_else(|| {
        match &options.scheme {
            Some(scheme) => FormatViolation::WrongScheme(scheme.clone()),
            None => FormatViolation::MissingScheme,
        }
    })?;

    let authority = rest.split_once('/').map_or(rest, |(authority, _)| authority);
    let parts: Vec<&str> = authority.split('@').collect();

    if options.basic_auth_required && parts.len() != 2 {
        return Err(FormatViolation::MissingAuth);
    }

    if options.verify_tlds {
        // split always yields at least one item
        let host_port = parts.last().copied().unwrap_or_default();
        let host = host_port.split(':').next().unwrap_or_default();
        if !tlds.contains(last_label(host)) {
            return Err(FormatViolation::UnknownTld);
        }
    }

    Ok(())
}

pub(crate) fn check_email(
    value: &str,
    options: &EmailOptions,
    tlds: &TldSet,
) -> Result<(), FormatViolation> {
    if !EMAIL_SHAPE.is_match(value) {
        return Err(FormatViolation::NotEmail);
    }

    if options.verify_tlds && !tlds.contains(last_label(value)) {
        return Err(FormatViolation::UnknownTld);
    }

    if !options.mail_providers.is_empty() {
        let domain = value.rsplit('@').next().unwrap_or_default();
        if !options.mail_providers.iter().any(|p| p == domain) {
            return Err(FormatViolation::WrongProvider(options.mail_providers.clone()));
        }
    }

    Ok(())
}

/// Returns what follows `scheme://`, or `None` when the prefix is missing.
fn strip_scheme<'a>(value: &'a str, scheme: Option<&str>) -> Option<&'a str> {
    match scheme {
        Some(scheme) => {
            let head = value.get(..scheme.len())?;
            let rest = value[scheme.len()..].strip_prefix("://")?;
            head.eq_ignore_ascii_case(scheme).then_some(rest)
        }
        None => ANY_SCHEME.find(value).map(|m| &value[m.end()..]),
    }
}

fn last_label(host: &str) -> &str {
    host.rsplit('.').next().unwrap_or_default()
}
