//! Report types for text analysis.

use serde::{Deserialize, Serialize};

use crate::readability::ReadabilityReport;

/// Default number of sentences in a summary.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Default number of keywords extracted.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Which optional sections an [`AnalysisReport`] should contain.
///
/// Word and sentence totals are always reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Count distinct words.
    pub unique_words: bool,
    /// Identify the language.
    pub language: bool,
    /// Summarize to this many sentences.
    pub summary: Option<usize>,
    /// Extract this many keywords.
    pub keywords: Option<usize>,
    /// Compute the Flesch Reading Ease score.
    pub readability: bool,
}

impl ReportOptions {
    /// Every section, with default summary and keyword sizes.
    pub const fn all() -> Self {
        Self {
            unique_words: true,
            language: true,
            summary: Some(DEFAULT_SUMMARY_SENTENCES),
            keywords: Some(DEFAULT_KEYWORD_COUNT),
            readability: true,
        }
    }
}

/// Results of analyzing one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of alphanumeric words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Number of distinct words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_words: Option<usize>,
    /// Detected language code, or `"unknown"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Extractive summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Most frequent non-stop words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Readability score and the counts behind it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
}
