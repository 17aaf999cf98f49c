use thiserror::Error;

#[derive(Error, Debug)]
pub enum BayesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown label {label:?} on line {line_number}")]
    UnknownLabel { line_number: usize, label: String },

    #[error("Malformed record on line {line_number}: {line:?}")]
    MalformedRecord { line_number: usize, line: String },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Cannot compute accuracy of an empty test set")]
    EmptyTestSet,

    #[error("Invalid evaluation report: {correct} correct out of {total}")]
    InvalidReport { correct: usize, total: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BayesError>;
