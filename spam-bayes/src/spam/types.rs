//! Spam types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate message
    Ham,
    /// Unsolicited message
    Spam,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `ham` nor `spam`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLabel(pub String);

impl FromStr for Label {
    type Err = UnrecognizedLabel;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ham" => Ok(Label::Ham),
            "spam" => Ok(Label::Spam),
            other => Err(UnrecognizedLabel(other.to_string())),
        }
    }
}

/// One labeled corpus entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord {
    /// True class of the message
    pub label: Label,
    /// Message text, without its line terminator
    pub text: String,
}

impl LabeledRecord {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Log-probabilities computed for one message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    /// Log-probability that the message is ham
    pub log_ham: f64,
    /// Log-probability that the message is spam
    pub log_spam: f64,
}

impl ClassScores {
    /// Spam only wins on a strictly greater score; ties fall to ham.
    pub fn label(&self) -> Label {
        if self.log_spam > self.log_ham {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}
