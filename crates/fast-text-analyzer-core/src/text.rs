//! Text processing utilities.
//!
//! Sentence splitting and token classification shared by the default
//! capabilities and the analyzer.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Regex for decimal numbers (3.14, 2.5, etc.).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+$").expect("valid regex"));

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+$").expect("valid regex"));

/// Regex for email addresses.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+[A-Z]?$").expect("valid regex"));

/// Whether a token is entirely alphanumeric.
///
/// Empty tokens are not. A single punctuation character anywhere in the
/// token (`don't`, `3.14`, `e-mail`) disqualifies it.
pub fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Split text into sentences with abbreviation, decimal, URL, and email awareness.
///
/// Scans character by character and decides at each `.`, `!` or `?`
/// whether the surrounding context marks a real boundary. Each sentence is
/// returned trimmed, with its original casing and punctuation.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        // Keep runs of terminators ("?!", "...") together.
        let next_is_terminator = chars.get(i + 1).copied().is_some_and(is_sentence_terminator);
        if !is_sentence_terminator(ch) || next_is_terminator {
            continue;
        }

        let context = extract_context(&chars, i);
        if is_sentence_boundary(&context, &current) {
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
    }

    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, current: &str) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    char_after: Option<char>,
    second_char_after: Option<char>,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    SentenceContext {
        punctuation: chars[pos],
        word_before: get_word_before(chars, pos),
        char_after: chars.get(after_start).copied(),
        second_char_after: chars.get(after_start + 1).copied(),
        is_end_of_text: after_start >= chars.len(),
    }
}

/// The run of alphanumerics and periods immediately before `pos`.
fn get_word_before(chars: &[char], pos: usize) -> String {
    let start = chars[..pos]
        .iter()
        .rposition(|c| !(c.is_alphanumeric() || *c == '.'))
        .map_or(0, |p| p + 1);
    chars[start..pos].iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext, current_sentence: &str) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // ! and ? are boundaries unless the next sentence visibly continues lowercase
    if context.punctuation == '!' || context.punctuation == '?' {
        return check_next_char_capitalization(context);
    }

    if current_sentence.ends_with("..") {
        return context.char_after.is_some_and(char::is_uppercase);
    }

    if is_likely_abbreviation(&context.word_before) || is_likely_initial(&context.word_before) {
        return false;
    }

    if ends_with_url_or_email(current_sentence) {
        return false;
    }

    // Digit after period following a digit = decimal number (e.g., "3.14")
    if let Some(next_char) = context.char_after
        && next_char.is_ascii_digit()
        && context
            .word_before
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    match context.char_after {
        Some(c) if c.is_lowercase() => false,
        _ => true,
    }
}

fn check_next_char_capitalization(context: &SentenceContext) -> bool {
    match context.char_after {
        Some(c) if c.is_lowercase() => false,
        Some('"' | '\'') => context.second_char_after.is_none_or(|c| !c.is_lowercase()),
        _ => true,
    }
}

fn is_likely_abbreviation(word: &str) -> bool {
    let word_clean = word.trim_end_matches('.');
    if word_clean.is_empty() {
        return false;
    }
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single uppercase letter = likely initial ("John F. Kennedy")
    let mut chars = word_clean.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}

fn is_likely_initial(word: &str) -> bool {
    !word.is_empty() && INITIALS_PATTERN.is_match(word)
}

/// Whether the sentence-so-far ends inside a number, URL or e-mail address.
fn ends_with_url_or_email(sentence: &str) -> bool {
    let body = sentence.trim_end_matches('.');
    let last_word = body.split_whitespace().next_back().unwrap_or("");
    DECIMAL_PATTERN.is_match(last_word)
        || URL_PATTERN.is_match(last_word)
        || EMAIL_PATTERN.is_match(last_word)
}
