//! Sentence splitting and comma filtering for the sentence-filter tool.

use crate::domain::model::SentenceList;
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]").unwrap());

/// Splits on `.`, `!` and `?`, dropping the delimiters. Fragments are
/// trimmed and empty ones discarded.
pub fn split_into_sentences(text: &str) -> SentenceList {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keeps the sentences without a comma, in their original order.
pub fn filter_sentences(sentences: &[String]) -> SentenceList {
    sentences
        .iter()
        .filter(|sentence| !sentence.contains(','))
        .cloned()
        .collect()
}
