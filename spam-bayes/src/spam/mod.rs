//! Spam classification module
//!
//! Provides tokenization, word-frequency training, naive-Bayes scoring and
//! accuracy evaluation.

pub mod classifier;
pub mod evaluator;
pub mod model;
pub mod tokenizer;
pub mod trainer;
pub mod types;

pub use classifier::{classify, BayesianClassifier, CLASS_PRIOR, UNSEEN_COEFF};
pub use evaluator::{evaluate, EvaluationReport};
pub use model::{FrequencyTable, Model};
pub use tokenizer::tokenize;
pub use trainer::{train, train_records, Trainer};
pub use types::*;
