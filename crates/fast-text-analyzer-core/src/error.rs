//! Error types for fast-text-analyzer-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by analysis capabilities.
///
/// None of these reach callers of [`TextAnalyzer`](crate::TextAnalyzer):
/// the analyzer converts them into its documented fallbacks.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The detector found no script or language signal in the text.
    #[error("could not identify the language of the input")]
    UndetectableLanguage,

    /// A language detector backend failed for another reason.
    #[error("language detector failed: {0}")]
    Detector(String),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
