//! Answer canonicalization.
//!
//! Every comparison between a player's answer and an accepted answer goes
//! through `normalize` on both sides: trimmed and lowercased, otherwise
//! exact.

use rustc_hash::FxHashSet;

/// Canonical form of an answer.
///
/// ```
/// use anatomy_quest::answers::normalize;
///
/// assert_eq!(normalize("  Left Ventricle \n"), "left ventricle");
/// assert_eq!(normalize(" Heart "), normalize("heart"));
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A set of accepted answers, stored normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSet {
    accepted: FxHashSet<String>,
}

impl AnswerSet {
    /// Build from raw accepted answers.
    pub fn new<S: AsRef<str>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            accepted: answers.into_iter().map(|a| normalize(a.as_ref())).collect(),
        }
    }

    /// Check a raw player answer.
    #[must_use]
    pub fn accepts(&self, answer: &str) -> bool {
        self.accepted.contains(&normalize(answer))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}
