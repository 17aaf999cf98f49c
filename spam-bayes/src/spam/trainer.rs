//! Model training
//!
//! Every token of a labeled message goes into its class's frequency table.

use tracing::info;

use super::model::Model;
use super::tokenizer::tokenize;
use super::types::{Label, LabeledRecord};
use crate::error::Result;

/// Builds a [`Model`] from scratch, one record at a time
#[derive(Debug, Default)]
pub struct Trainer {
    model: Model,
    ham_messages: usize,
    spam_messages: usize,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the tokens of one message
    pub fn learn(&mut self, label: Label, text: &str) {
        let table = self.model.words_mut(label);
        for token in tokenize(text) {
            table.increment(token);
        }

        match label {
            Label::Ham => self.ham_messages += 1,
            Label::Spam => self.spam_messages += 1,
        }
    }

    pub fn finish(self) -> Model {
        info!(
            ham_messages = self.ham_messages,
            spam_messages = self.spam_messages,
            ham_vocabulary = self.model.ham_words.len(),
            spam_vocabulary = self.model.spam_words.len(),
            "Training complete"
        );
        self.model
    }
}

/// Train a model from already-parsed records
pub fn train<I>(records: I) -> Model
where
    I: IntoIterator<Item = LabeledRecord>,
{
    let mut trainer = Trainer::new();
    for record in records {
        trainer.learn(record.label, &record.text);
    }
    trainer.finish()
}

/// Train a model from a fallible record stream.
///
/// The first bad record (for example an unknown label) aborts training and
/// no model is returned.
pub fn train_records<I>(records: I) -> Result<Model>
where
    I: IntoIterator<Item = Result<LabeledRecord>>,
{
    let mut trainer = Trainer::new();
    for record in records {
        let record = record?;
        trainer.learn(record.label, &record.text);
    }
    Ok(trainer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BayesError;

    fn sample_records() -> Vec<LabeledRecord> {
        vec![
            LabeledRecord::new(Label::Ham, "Hello there"),
            LabeledRecord::new(Label::Spam, "WIN money now"),
            LabeledRecord::new(Label::Spam, "WIN cash now"),
        ]
    }

    #[test]
    fn test_train_builds_both_tables() {
        let model = train(sample_records());

        assert_eq!(model.ham_words.len(), 2);
        assert_eq!(model.ham_words.count("hello"), 1);
        assert_eq!(model.ham_words.count("there"), 1);

        assert_eq!(model.spam_words.len(), 4);
        assert_eq!(model.spam_words.count("win"), 2);
        assert_eq!(model.spam_words.count("money"), 1);
        assert_eq!(model.spam_words.count("now"), 2);
        assert_eq!(model.spam_words.count("cash"), 1);
    }

    #[test]
    fn test_repeated_word_counts_every_occurrence() {
        let model = train(vec![LabeledRecord::new(Label::Spam, "free free FREE")]);
        assert_eq!(model.spam_words.count("free"), 3);
    }

    #[test]
    fn test_train_empty_corpus() {
        let model = train(Vec::new());
        assert!(model.is_empty());
    }

    #[test]
    fn test_train_records_aborts_on_error() {
        let records = vec![
            Ok(LabeledRecord::new(Label::Ham, "fine")),
            Err(BayesError::UnknownLabel {
                line_number: 2,
                label: "eggs".to_string(),
            }),
            Ok(LabeledRecord::new(Label::Spam, "never reached")),
        ];

        let err = train_records(records).unwrap_err();
        assert!(matches!(err, BayesError::UnknownLabel { line_number: 2, .. }));
    }
}
