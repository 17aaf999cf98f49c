//! Labeled corpus reading
//!
//! A corpus holds one record per line: `<label>\t<text>`, where the label is
//! `ham` or `spam`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::error::{BayesError, Result};
use crate::spam::types::{Label, LabeledRecord};

/// Path argument meaning standard input
pub const STDIN_MARKER: &str = "-";

impl LabeledRecord {
    /// Parse one corpus line. `line_number` is 1-based and only used in errors.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self> {
        let line = strip_line_terminator(line);

        let (label, text) = line.split_once('\t').ok_or_else(|| BayesError::MalformedRecord {
            line_number,
            line: line.to_string(),
        })?;

        if text.contains('\t') {
            return Err(BayesError::MalformedRecord {
                line_number,
                line: line.to_string(),
            });
        }

        let label: Label = label.parse().map_err(|_| BayesError::UnknownLabel {
            line_number,
            label: label.to_string(),
        })?;

        Ok(Self::new(label, text))
    }
}

/// Remove one trailing `\n` or `\r\n`
fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Lazily parse records from a reader
pub fn read_records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<LabeledRecord>> {
    reader.lines().enumerate().map(|(index, line)| {
        let line = line?;
        LabeledRecord::parse_line(&line, index + 1)
    })
}

/// Where a corpus comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    Stdin,
    File(PathBuf),
}

impl CorpusSource {
    /// `-` selects standard input, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            CorpusSource::Stdin
        } else {
            CorpusSource::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CorpusSource::Stdin => "<stdin>".to_string(),
            CorpusSource::File(path) => path.display().to_string(),
        }
    }

    /// Resolve the source into a [`Corpus`] that can be read more than once.
    ///
    /// Standard input is drained into memory through `stdin` so a training
    /// pass and a test pass see the same lines. Files are reopened per pass.
    pub fn load<R: Read>(&self, mut stdin: R) -> Result<Corpus> {
        match self {
            CorpusSource::Stdin => {
                let mut data = Vec::new();
                stdin.read_to_end(&mut data)?;
                Ok(Corpus::Buffered(data))
            }
            CorpusSource::File(path) => Ok(Corpus::File(path.clone())),
        }
    }
}

/// A labeled corpus ready for one or more reading passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Corpus {
    Buffered(Vec<u8>),
    File(PathBuf),
}

impl Corpus {
    /// Open a fresh reader positioned at the first line
    pub fn reader(&self) -> Result<Box<dyn BufRead + '_>> {
        match self {
            Corpus::Buffered(data) => Ok(Box::new(Cursor::new(data.as_slice()))),
            Corpus::File(path) => Ok(Box::new(open_file(path)?)),
        }
    }
}

fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        BayesError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open corpus {}: {}", path.display(), e),
        ))
    })?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ham_line() {
        let record = LabeledRecord::parse_line("ham\tSee you later\n", 1).unwrap();
        assert_eq!(record, LabeledRecord::new(Label::Ham, "See you later"));
    }

    #[test]
    fn test_parse_spam_line_crlf() {
        let record = LabeledRecord::parse_line("spam\tWIN now\r\n", 1).unwrap();
        assert_eq!(record, LabeledRecord::new(Label::Spam, "WIN now"));
    }

    #[test]
    fn test_parse_line_without_terminator() {
        let record = LabeledRecord::parse_line("spam\tlast line", 9).unwrap();
        assert_eq!(record.text, "last line");
    }

    #[test]
    fn test_missing_tab_is_malformed() {
        let err = LabeledRecord::parse_line("ham no tab here", 3).unwrap_err();
        assert!(matches!(err, BayesError::MalformedRecord { line_number: 3, .. }));
    }

    #[test]
    fn test_extra_tab_is_malformed() {
        let err = LabeledRecord::parse_line("ham\tone\ttwo", 4).unwrap_err();
        assert!(matches!(err, BayesError::MalformedRecord { line_number: 4, .. }));
    }

    #[test]
    fn test_unknown_label() {
        let err = LabeledRecord::parse_line("eggs\tgreen", 5).unwrap_err();
        match err {
            BayesError::UnknownLabel { line_number, label } => {
                assert_eq!(line_number, 5);
                assert_eq!(label, "eggs");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_text_allowed() {
        let record = LabeledRecord::parse_line("ham\t", 1).unwrap();
        assert_eq!(record.text, "");
    }

    #[test]
    fn test_read_records_numbers_lines() {
        let input = "ham\tHello there\nspam\tWIN money now\nbogus\n";
        let results: Vec<_> = read_records(Cursor::new(input)).collect();

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[1].as_ref().unwrap(),
            &LabeledRecord::new(Label::Spam, "WIN money now")
        );
        assert!(matches!(
            results[2],
            Err(BayesError::MalformedRecord { line_number: 3, .. })
        ));
    }

    #[test]
    fn test_corpus_source_from_arg() {
        assert_eq!(CorpusSource::from_arg("-"), CorpusSource::Stdin);
        assert_eq!(
            CorpusSource::from_arg("corpus.txt"),
            CorpusSource::File(PathBuf::from("corpus.txt"))
        );
    }

    #[test]
    fn test_stdin_corpus_can_be_read_twice() {
        let stdin = Cursor::new("ham\tHello there\nspam\tWIN now\n");
        let corpus = CorpusSource::Stdin.load(stdin).unwrap();

        let first: Vec<_> = read_records(corpus.reader().unwrap()).collect();
        let second: Vec<_> = read_records(corpus.reader().unwrap()).collect();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(
            second[1].as_ref().unwrap(),
            &LabeledRecord::new(Label::Spam, "WIN now")
        );
    }

    #[test]
    fn test_file_corpus_ignores_stdin() {
        let source = CorpusSource::File(PathBuf::from("corpus.txt"));
        let corpus = source.load(Cursor::new("ham\tunused\n")).unwrap();
        assert_eq!(corpus, Corpus::File(PathBuf::from("corpus.txt")));
    }

    #[test]
    fn test_open_missing_file() {
        let corpus = Corpus::File(PathBuf::from("/nonexistent/corpus.txt"));
        let err = corpus.reader().err().unwrap();
        assert!(matches!(err, BayesError::Io(_)));
        assert!(err.to_string().contains("/nonexistent/corpus.txt"));
    }
}
