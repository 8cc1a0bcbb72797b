//! Dictionaries for text analysis.
//!
//! Provides curated word sets used by sentence segmentation.

pub mod abbreviations;
