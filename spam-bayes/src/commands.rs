//! Training, testing and single-text classification over a model store
//!
//! These are the operations behind the command-line flags. They take any
//! [`BufRead`] corpus and any [`ModelStore`], so they run the same against
//! files, stdin or in-memory fixtures.

use std::io::BufRead;
use tracing::info;

use crate::corpus::read_records;
use crate::error::Result;
use crate::spam::{classify, evaluate, train_records, EvaluationReport, Label, Model};
use crate::storage::ModelStore;

/// Train a fresh model from `corpus` and save it. Nothing is saved if any
/// line fails to parse.
pub fn train_command<R, S>(corpus: R, store: &mut S) -> Result<Model>
where
    R: BufRead,
    S: ModelStore + ?Sized,
{
    let model = train_records(read_records(corpus))?;
    store.save(&model)?;
    Ok(model)
}

/// Load the model and measure accuracy against `corpus`
pub fn test_command<R, S>(corpus: R, store: &S) -> Result<EvaluationReport>
where
    R: BufRead,
    S: ModelStore + ?Sized,
{
    let model = store.load()?;
    info!(
        ham_vocabulary = model.ham_words.len(),
        spam_vocabulary = model.spam_words.len(),
        "Model loaded"
    );
    evaluate(read_records(corpus), &model)
}

/// Load the model and label a single text
pub fn classify_command<S>(text: &str, store: &S) -> Result<Label>
where
    S: ModelStore + ?Sized,
{
    let model = store.load()?;
    Ok(classify(text, &model))
}
