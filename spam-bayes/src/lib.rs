//! spam-bayes: naive-Bayes spam classifier for short text messages
//!
//! Learns per-class word frequencies from a labeled corpus and classifies new
//! messages by comparing their log-probabilities under each class.
//!
//! # Features
//!
//! - **Tokenizer**: punctuation/whitespace splitting with quote cleanup
//! - **Training**: one full pass over a `<label>\t<text>` corpus
//! - **Classification**: log-space naive Bayes with scaled smoothing for
//!   words seen in only one class
//! - **Evaluation**: accuracy over a labeled test set
//! - **Storage**: pluggable model store (JSON file or in-memory)
//!
//! # Example
//!
//! ```
//! use spam_bayes::spam::{classify, train, Label, LabeledRecord};
//!
//! let model = train(vec![
//!     LabeledRecord::new(Label::Ham, "Hello there"),
//!     LabeledRecord::new(Label::Spam, "WIN money now"),
//!     LabeledRecord::new(Label::Spam, "WIN cash now"),
//! ]);
//!
//! assert_eq!(classify("WIN now", &model), Label::Spam);
//! assert_eq!(classify("xyzzy plugh", &model), Label::Ham);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Tokenizer, model, trainer, classifier and evaluator
//! - [`corpus`]: Labeled corpus parsing
//! - [`storage`]: Model persistence backends
//! - [`commands`]: Train/test/classify operations used by the CLI

pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod spam;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{BayesError, Result};
