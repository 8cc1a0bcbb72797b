//! Core library for fast-text-analyzer.
//!
//! This crate provides text statistics and lightweight NLP used by the
//! `fast-text-analyzer` CLI and any downstream consumers: word, sentence and
//! distinct-word counts, language identification, extractive summaries,
//! keyword extraction and Flesch Reading Ease scoring.
//!
//! # Modules
//!
//! - [`analyzer`] - The [`TextAnalyzer`] entry point
//! - [`analysis`] - Summaries, keywords and combined reports
//! - [`capabilities`] - Pluggable tokenizer, segmenter, stop words and detector
//! - [`readability`] - Flesch Reading Ease and syllable estimation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use fast_text_analyzer_core::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new("Rust is fast. Rust is safe.");
//! assert_eq!(analyzer.word_count(), 6);
//! assert_eq!(analyzer.sentence_count(), 2);
//! assert_eq!(analyzer.keywords(1), vec!["rust"]);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod analyzer;
pub mod capabilities;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod text;
pub mod word_lists;

pub use analysis::{AnalysisReport, ReportOptions};
pub use analyzer::{TextAnalyzer, UNKNOWN_LANGUAGE};
pub use capabilities::Capabilities;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
