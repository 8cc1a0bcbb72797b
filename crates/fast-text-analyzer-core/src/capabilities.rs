//! Pluggable NLP capabilities consumed by [`TextAnalyzer`](crate::TextAnalyzer).
//!
//! The analyzer never tokenizes, segments, or detects languages itself. It
//! asks the four capabilities bundled in [`Capabilities`], so tests and
//! embedders can swap any of them for their own implementation.
//!
//! | Capability | Default |
//! |---|---|
//! | [`WordTokenizer`] | [`UnicodeWordTokenizer`] (UAX #29 word boundaries) |
//! | [`SentenceSegmenter`] | [`RuleSegmenter`] (abbreviation-aware scanner) |
//! | [`StopWords`] | [`EnglishStopWords`] |
//! | [`LanguageDetector`] | [`WhatlangDetector`] (ISO 639-1 codes) |

use std::fmt;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{AnalysisError, AnalysisResult};
use crate::text;
use crate::word_lists::ENGLISH_STOP_WORDS;

/// Splits text into word and punctuation tokens.
pub trait WordTokenizer: fmt::Debug + Send + Sync {
    /// Tokenize `text`, in order of appearance.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits text into sentences, preserving each sentence's text.
pub trait SentenceSegmenter: fmt::Debug + Send + Sync {
    /// Segment `text` into sentences, in document order.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Membership test against a stop-word list.
pub trait StopWords: fmt::Debug + Send + Sync {
    /// Whether the lowercased `word` is a stop word.
    fn is_stop_word(&self, word: &str) -> bool;
}

/// Identifies the language a text is written in.
pub trait LanguageDetector: fmt::Debug + Send + Sync {
    /// Return a language code for `text`, or an error when it cannot be classified.
    fn detect(&self, text: &str) -> AnalysisResult<String>;
}

/// Word tokenizer following Unicode word boundaries (UAX #29).
///
/// Punctuation comes back as its own tokens; whitespace runs are dropped.
/// Contractions stay whole (`don't`), so the analyzer discards them.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Sentence segmenter backed by [`text::split_sentences`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text::split_sentences(text)
    }
}

/// The standard English stop-word list.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStopWords;

impl StopWords for EnglishStopWords {
    fn is_stop_word(&self, word: &str) -> bool {
        ENGLISH_STOP_WORDS.contains(word)
    }
}

/// Trigram language detector from the `whatlang` crate.
///
/// Reports two-letter ISO 639-1 codes (`"en"`, `"fr"`). Mandarin is
/// `"zh-cn"`. Languages without a two-letter code keep their ISO 639-3 code.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> AnalysisResult<String> {
        let info = whatlang::detect(text).ok_or(AnalysisError::UndetectableLanguage)?;
        let code = iso_639_1(info.lang());
        tracing::trace!(
            lang = code,
            confidence = info.confidence(),
            reliable = info.is_reliable(),
            "language detected"
        );
        Ok(code.to_string())
    }
}

/// Two-letter code for a `whatlang` language.
fn iso_639_1(lang: whatlang::Lang) -> &'static str {
    match lang {
        whatlang::Lang::Cmn => "zh-cn",
        // Iranian Persian; ISO 639-1 only codes the macrolanguage
        whatlang::Lang::Pes => "fa",
        other => isolang::Language::from_639_3(other.code())
            .and_then(|language| language.to_639_1())
            .unwrap_or_else(|| other.code()),
    }
}

/// The set of capabilities an analyzer runs on.
///
/// Cloning is cheap: every capability is shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Word tokenizer for the whole text and for individual sentences.
    pub tokenizer: Arc<dyn WordTokenizer>,
    /// Sentence segmenter.
    pub segmenter: Arc<dyn SentenceSegmenter>,
    /// Stop words excluded from summaries and keywords.
    pub stop_words: Arc<dyn StopWords>,
    /// Language identifier.
    pub detector: Arc<dyn LanguageDetector>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            tokenizer: Arc::new(UnicodeWordTokenizer),
            segmenter: Arc::new(RuleSegmenter),
            stop_words: Arc::new(EnglishStopWords),
            detector: Arc::new(WhatlangDetector),
        }
    }
}

impl Capabilities {
    /// Replace the word tokenizer.
    pub fn with_tokenizer<T: WordTokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    /// Replace the sentence segmenter.
    pub fn with_segmenter<S: SentenceSegmenter + 'static>(mut self, segmenter: S) -> Self {
        self.segmenter = Arc::new(segmenter);
        self
    }

    /// Replace the stop-word list.
    pub fn with_stop_words<W: StopWords + 'static>(mut self, stop_words: W) -> Self {
        self.stop_words = Arc::new(stop_words);
        self
    }

    /// Replace the language detector.
    pub fn with_detector<D: LanguageDetector + 'static>(mut self, detector: D) -> Self {
        self.detector = Arc::new(detector);
        self
    }
}
