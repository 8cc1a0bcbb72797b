//! Keyword extraction by term frequency.

use crate::capabilities::StopWords;

use super::{FrequencyTable, content_words};

/// The `top_n` most frequent non-stop words, most frequent first.
///
/// Words with equal counts keep the order in which they first appear.
/// Returns fewer than `top_n` words when fewer distinct ones remain.
#[tracing::instrument(skip_all, fields(word_count = words.len(), top_n = top_n))]
pub fn extract_keywords(
    words: &[String],
    stop_words: &dyn StopWords,
    top_n: usize,
) -> Vec<String> {
    let table = FrequencyTable::from_words(content_words(words, stop_words));
    table
        .most_common(top_n)
        .into_iter()
        .map(|(word, _)| word.to_string())
        .collect()
}
