//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. Roughly 60-70 is plain English; below 30
//! reads like an academic paper.
//!
//! Syllables come from a vowel-group heuristic ([`count_syllables`]), not a
//! dictionary. Its known miscounts ("apple" is one syllable) are kept so
//! scores stay comparable between releases.

use serde::{Deserialize, Serialize};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score, rounded to two decimals.
    pub score: f64,
    /// Number of sentences scored.
    pub sentences: usize,
    /// Number of words scored.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
}

/// Score `words` spread over `sentences` sentences.
///
/// Returns a report with a score of exactly `0.0` when there are no words
/// or no sentences.
#[tracing::instrument(skip(words), fields(word_count = words.len()))]
pub fn check_readability(words: &[String], sentences: usize) -> ReadabilityReport {
    let word_count = words.len();
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let score = if word_count == 0 || sentences == 0 {
        0.0
    } else {
        let words_per_sentence = word_count as f64 / sentences as f64;
        let syllables_per_word = syllables as f64 / word_count as f64;
        // Unfused, left to right: published scores depend on the exact rounding.
        #[allow(clippy::suboptimal_flops)]
        let raw = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        round2(raw)
    };

    ReadabilityReport {
        score,
        sentences,
        words: word_count,
        syllables,
    }
}

/// Count syllables by counting vowel groups.
///
/// A leading vowel opens a group, and so does every vowel that follows a
/// consonant. A trailing `e` is treated as silent, but a non-empty word
/// never drops below one syllable. `y` always counts as a vowel.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let Some(&first) = chars.first() else {
        return 0;
    };

    let mut count = usize::from(VOWELS.contains(&first));
    count += chars
        .windows(2)
        .filter(|pair| VOWELS.contains(&pair[1]) && !VOWELS.contains(&pair[0]))
        .count();

    if word.ends_with('e') {
        count = count.saturating_sub(1).max(1);
    }

    count.max(1)
}

/// Round to two decimals, deciding on the exact binary value of `v`.
fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}
