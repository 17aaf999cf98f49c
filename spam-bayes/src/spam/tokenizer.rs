//! Message tokenizer
//!
//! Splits text on a fixed set of punctuation and whitespace separators and
//! normalizes every piece into a lowercase word token.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of any of: space , . - – : ; & = + # ( ) | < … ^ [ ]
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ ,.\-–:;&=+#()|<…^\[\]]+").expect("valid separator pattern"));

static LEADING_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^['"“]+"#).expect("valid leading quote pattern"));

static TRAILING_APOSTROPHE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)'$").expect("valid trailing apostrophe pattern"));

/// Tokenize text into normalized words, in input order
pub fn tokenize(text: &str) -> Vec<String> {
    SEPARATORS.split(text).filter_map(normalize_word).collect()
}

/// Normalize a single separator-free piece, `None` if nothing is left
pub fn normalize_word(piece: &str) -> Option<String> {
    let word = LEADING_QUOTES.replace(piece, "");
    let word = TRAILING_APOSTROPHE.replace(&word, "$1");
    let word = word.to_lowercase();

    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("WIN money NOW"), vec!["win", "money", "now"]);
    }

    #[test]
    fn test_tokenize_collapses_separator_runs() {
        assert_eq!(
            tokenize("Call now...or never -- ok;;fine"),
            vec!["call", "now", "or", "never", "ok", "fine"]
        );
    }

    #[test]
    fn test_tokenize_all_separators() {
        let text = "a b,c.d-e–f:g;h&i=j+k#l(m)n|o<p…q^r[s]t";
        assert_eq!(
            tokenize(text),
            vec![
                "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
                "q", "r", "s", "t"
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,.;").is_empty());
    }

    #[test]
    fn test_strip_leading_quotes() {
        assert_eq!(tokenize("\"Hello 'there “friend"), vec!["hello", "there", "friend"]);
        assert_eq!(tokenize("''\"quoted"), vec!["quoted"]);
    }

    #[test]
    fn test_strip_single_trailing_apostrophe() {
        assert_eq!(tokenize("dogs' toys"), vec!["dogs", "toys"]);
        // Only one apostrophe, and only after a word character
        assert_eq!(tokenize("dogs''"), vec!["dogs''"]);
    }

    #[test]
    fn test_inner_apostrophe_kept() {
        assert_eq!(tokenize("Don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_quote_only_pieces_dropped() {
        assert!(tokenize("' \" “").is_empty());
    }

    #[test]
    fn test_other_punctuation_kept() {
        assert_eq!(tokenize("free! now?"), vec!["free!", "now?"]);
    }

    #[test]
    fn test_line_terminator_is_not_a_separator() {
        assert_eq!(tokenize("now\n"), vec!["now\n"]);
    }
}
