//! The text analyzer.
//!
//! A [`TextAnalyzer`] tokenizes its input once, at construction, and then
//! answers any number of read-only queries over that fixed state.
//!
//! ```
//! use fast_text_analyzer_core::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new("Hello world. Hello again!");
//! assert_eq!(analyzer.word_count(), 4);
//! assert_eq!(analyzer.sentence_count(), 2);
//! assert_eq!(analyzer.unique_word_count(), 3);
//! ```

use std::collections::HashSet;

use crate::analysis::reports::{AnalysisReport, ReportOptions};
use crate::analysis::{keywords, summary, word_tokens};
use crate::capabilities::Capabilities;
use crate::readability::{self, ReadabilityReport};

/// Language reported when detection fails.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Analyzes one block of text.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    text: String,
    words: Vec<String>,
    sentences: Vec<String>,
    capabilities: Capabilities,
}

impl TextAnalyzer {
    /// Analyze `text` with the default capabilities.
    pub fn new(text: &str) -> Self {
        Self::with_capabilities(text, Capabilities::default())
    }

    /// Analyze `text` with caller-supplied capabilities.
    ///
    /// The text is trimmed, then split into lowercased alphanumeric words
    /// and sentences. Empty input is valid and yields empty lists.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn with_capabilities(text: &str, capabilities: Capabilities) -> Self {
        let text = text.trim().to_string();
        let words = word_tokens(capabilities.tokenizer.as_ref(), &text);
        let sentences = capabilities.segmenter.segment(&text);
        tracing::debug!(
            words = words.len(),
            sentences = sentences.len(),
            "text tokenized"
        );

        Self {
            text,
            words,
            sentences,
            capabilities,
        }
    }

    /// The trimmed input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased alphanumeric words, in document order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Sentences, in document order, with original text.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct words.
    pub fn unique_word_count(&self) -> usize {
        self.words.iter().collect::<HashSet<_>>().len()
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Detected language code, or [`UNKNOWN_LANGUAGE`] when detection fails.
    pub fn language(&self) -> String {
        match self.capabilities.detector.detect(&self.text) {
            Ok(code) => code,
            Err(err) => {
                tracing::debug!(error = %err, "language detection failed");
                UNKNOWN_LANGUAGE.to_string()
            }
        }
    }

    /// The `top_n` highest-scoring sentences, in document order.
    pub fn summarize(&self, top_n: usize) -> String {
        summary::summarize(
            &self.sentences,
            &self.words,
            self.capabilities.tokenizer.as_ref(),
            self.capabilities.stop_words.as_ref(),
            top_n,
        )
    }

    /// The `top_n` most frequent non-stop words, most frequent first.
    pub fn keywords(&self, top_n: usize) -> Vec<String> {
        keywords::extract_keywords(&self.words, self.capabilities.stop_words.as_ref(), top_n)
    }

    /// Flesch Reading Ease score; `0.0` without words or sentences.
    pub fn flesch_reading_score(&self) -> f64 {
        self.readability().score
    }

    /// Flesch Reading Ease score with its word, sentence and syllable counts.
    pub fn readability(&self) -> ReadabilityReport {
        readability::check_readability(&self.words, self.sentences.len())
    }

    /// Collect the sections selected by `options`.
    #[tracing::instrument(skip(self))]
    pub fn report(&self, options: &ReportOptions) -> AnalysisReport {
        AnalysisReport {
            words: self.word_count(),
            sentences: self.sentence_count(),
            unique_words: options.unique_words.then(|| self.unique_word_count()),
            language: options.language.then(|| self.language()),
            summary: options.summary.map(|n| self.summarize(n)),
            keywords: options.keywords.map(|n| self.keywords(n)),
            readability: options.readability.then(|| self.readability()),
        }
    }
}
