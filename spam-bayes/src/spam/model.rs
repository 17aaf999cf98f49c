//! Word-frequency model
//!
//! A [`Model`] is a pair of [`FrequencyTable`]s, one per class, built once by
//! the trainer and read by the classifier.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::Label;

/// Token occurrence counts for one class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occurrences of `token`, zero when it was never seen.
    ///
    /// Lookups never insert the key.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Record one more occurrence of `token`
    pub fn increment(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(token, count)| (token.into(), count)).collect(),
        }
    }
}

/// Trained ham/spam word frequencies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub ham_words: FrequencyTable,
    pub spam_words: FrequencyTable,
}

impl Model {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tables(ham_words: FrequencyTable, spam_words: FrequencyTable) -> Self {
        Self {
            ham_words,
            spam_words,
        }
    }

    /// Table for one class
    pub fn words(&self, label: Label) -> &FrequencyTable {
        match label {
            Label::Ham => &self.ham_words,
            Label::Spam => &self.spam_words,
        }
    }

    /// Mutable table for one class
    pub fn words_mut(&mut self, label: Label) -> &mut FrequencyTable {
        match label {
            Label::Ham => &mut self.ham_words,
            Label::Spam => &mut self.spam_words,
        }
    }

    /// Ham and spam counts for `token`
    pub fn counts(&self, token: &str) -> (u64, u64) {
        (self.ham_words.count(token), self.spam_words.count(token))
    }

    pub fn is_empty(&self) -> bool {
        self.ham_words.is_empty() && self.spam_words.is_empty()
    }
}
