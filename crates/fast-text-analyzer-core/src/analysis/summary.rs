//! Extractive summarization by word-frequency sentence scoring.
//!
//! Every sentence scores the sum of document-wide frequencies of its
//! content words. The best `top_n` sentences are returned in document order,
//! joined by single spaces.

use crate::capabilities::{StopWords, WordTokenizer};

use super::{FrequencyTable, content_words, word_tokens};

/// Summarize `sentences` down to the `top_n` highest-scoring ones.
///
/// `words` is the document's lowercased alphanumeric word list. Each
/// sentence is re-tokenized with `tokenizer` for scoring. Falls back to the
/// first `top_n` sentences when every word is a stop word.
#[tracing::instrument(skip_all, fields(sentence_count = sentences.len(), top_n = top_n))]
pub fn summarize(
    sentences: &[String],
    words: &[String],
    tokenizer: &dyn WordTokenizer,
    stop_words: &dyn StopWords,
    top_n: usize,
) -> String {
    if sentences.is_empty() {
        return String::new();
    }

    let table = FrequencyTable::from_words(content_words(words, stop_words));
    if table.is_empty() {
        tracing::debug!("no content words, using leading sentences");
        return join_sentences(sentences, 0..top_n.min(sentences.len()));
    }

    let scores: Vec<usize> = sentences
        .iter()
        .map(|sentence| {
            word_tokens(tokenizer, sentence)
                .iter()
                .map(|w| table.get(w))
                .sum::<usize>()
        })
        .collect();

    // Stable sort: earlier sentences win ties.
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    ranked.truncate(top_n);
    ranked.sort_unstable();

    tracing::debug!(selected = ?ranked, "sentences selected");
    join_sentences(sentences, ranked)
}

fn join_sentences<I: IntoIterator<Item = usize>>(sentences: &[String], indices: I) -> String {
    indices
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
