//! Top-level domain lookup.
//!
//! URL and email checks accept a host only when its last label is a known
//! top-level domain. [`TldSet`] holds those labels in uppercase; the built-in
//! set is created once per process and shared by every text validator.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// The root zone TLD table plus every assigned ISO 3166-1 country code.
const IANA_TLDS: &str = include_str!("tlds-alpha-by-domain.txt");

static IANA: LazyLock<Arc<TldSet>> = LazyLock::new(|| {
    Arc::new(TldSet::from_labels(
        IANA_TLDS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    ))
});

/// A read-only set of top-level domain labels.
///
/// Labels are stored uppercase and looked up case-insensitively.
///
/// # Example
///
/// ```rust
/// use fieldcheck::TldSet;
///
/// let tlds = TldSet::iana();
/// assert!(tlds.contains("org"));
/// assert!(!tlds.contains("notatld"));
///
/// let internal = TldSet::from_labels(["corp", "lan"]);
/// assert!(internal.contains("LAN"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TldSet {
    labels: HashSet<String>,
}

impl TldSet {
    /// Returns the process-wide built-in set.
    pub fn iana() -> Arc<TldSet> {
        Arc::clone(&IANA)
    }

    /// Builds a set from arbitrary labels.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|l| l.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Returns true if `label` is a known top-level domain.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(&label.to_ascii_uppercase())
    }

    /// Returns the number of labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the set holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
