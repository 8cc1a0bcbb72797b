//! Frequency-based text analysis.
//!
//! Each feature is a pure function in its own module, fed by the word and
//! sentence lists a [`TextAnalyzer`] computes once. [`run_full_analysis`]
//! builds an analyzer and gathers the requested features into one report.

pub mod keywords;
pub mod reports;
pub mod summary;

use std::collections::HashMap;

pub use reports::{AnalysisReport, ReportOptions};

use crate::analyzer::TextAnalyzer;
use crate::capabilities::{Capabilities, StopWords, WordTokenizer};
use crate::markdown;
use crate::text::is_alphanumeric_token;

/// Tokenize `text` and keep only alphanumeric tokens, lowercased.
pub fn word_tokens(tokenizer: &dyn WordTokenizer, text: &str) -> Vec<String> {
    tokenizer
        .tokenize(text)
        .into_iter()
        .filter(|t| is_alphanumeric_token(t))
        .map(|t| t.to_lowercase())
        .collect()
}

/// Words from `words` that are not stop words, in order.
pub fn content_words<'a>(
    words: &'a [String],
    stop_words: &'a dyn StopWords,
) -> impl Iterator<Item = &'a str> + 'a {
    words
        .iter()
        .map(String::as_str)
        .filter(|w| !stop_words.is_stop_word(w))
}

/// Word occurrence counts that remember first-occurrence order.
#[derive(Debug, Default)]
pub struct FrequencyTable<'a> {
    counts: HashMap<&'a str, usize>,
    first_seen: Vec<&'a str>,
}

impl<'a> FrequencyTable<'a> {
    /// Count every word yielded by `words`.
    pub fn from_words<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut table = Self::default();
        for word in words {
            let count = table.counts.entry(word).or_insert(0);
            if *count == 0 {
                table.first_seen.push(word);
            }
            *count += 1;
        }
        table
    }

    /// Occurrences of `word`; zero when absent.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    /// Up to `n` words, most frequent first; ties keep first-occurrence order.
    pub fn most_common(&self, n: usize) -> Vec<(&'a str, usize)> {
        let mut ranked: Vec<(&'a str, usize)> =
            self.first_seen.iter().map(|&w| (w, self.counts[w])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Analyze `input` and collect the sections named in `options`.
///
/// # Arguments
///
/// * `input` - The text to analyze.
/// * `strip_md` - If `true`, strip markdown formatting before analysis.
/// * `options` - Which optional sections to compute.
/// * `capabilities` - Tokenizer, segmenter, stop words, and detector to use.
#[tracing::instrument(skip(input, capabilities), fields(text_len = input.len(), strip_md))]
pub fn run_full_analysis(
    input: &str,
    strip_md: bool,
    options: &ReportOptions,
    capabilities: Capabilities,
) -> AnalysisReport {
    let prose = if strip_md {
        markdown::strip_to_prose(input)
    } else {
        input.to_string()
    };

    TextAnalyzer::with_capabilities(&prose, capabilities).report(options)
}
