//! Accuracy evaluation over a labeled test set

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use super::classifier::BayesianClassifier;
use super::model::Model;
use super::types::LabeledRecord;
use crate::error::{BayesError, Result};

/// Outcome of an evaluation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Predictions matching the true label
    pub correct: usize,
    /// Records evaluated
    pub total: usize,
    /// `correct / total`
    pub accuracy: f64,
}

impl EvaluationReport {
    /// Build a report, failing when there is nothing to divide by or when
    /// more predictions are correct than were made
    pub fn new(correct: usize, total: usize) -> Result<Self> {
        if total == 0 {
            return Err(BayesError::EmptyTestSet);
        }

        if correct > total {
            return Err(BayesError::InvalidReport { correct, total });
        }

        Ok(Self {
            correct,
            total,
            accuracy: correct as f64 / total as f64,
        })
    }

    pub fn incorrect(&self) -> usize {
        self.total.saturating_sub(self.correct)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correct: {}/{} ({:.2}%)",
            self.correct,
            self.total,
            self.accuracy * 100.0
        )
    }
}

/// Classify every record and compare with its true label.
///
/// The first bad record aborts the run.
pub fn evaluate<I>(records: I, model: &Model) -> Result<EvaluationReport>
where
    I: IntoIterator<Item = Result<LabeledRecord>>,
{
    let classifier = BayesianClassifier::new(model);
    let mut correct = 0;
    let mut incorrect = 0;

    for record in records {
        let record = record?;
        let guess = classifier.classify(&record.text);

        if guess == record.label {
            correct += 1;
        } else {
            incorrect += 1;
            debug!(expected = %record.label, %guess, text = %record.text, "Misclassified");
        }
    }

    let report = EvaluationReport::new(correct, correct + incorrect)?;
    info!(
        correct = report.correct,
        total = report.total,
        accuracy = report.accuracy,
        "Evaluation complete"
    );
    Ok(report)
}
