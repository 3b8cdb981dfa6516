//! Explanation engine: why a spam-flagged message looks like spam
//!
//! Five independent signals, evaluated on the trimmed message in a fixed
//! order. Each fired signal contributes exactly one `Reason`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{MessageSignals, Reason};
use crate::{
    EXCLAMATION_THRESHOLD, MAX_MESSAGE_CHARS, MIN_MESSAGE_CHARS, SPAM_KEYWORDS,
    UPPERCASE_RATIO_THRESHOLD,
};

lazy_static! {
    // Scheme is case-sensitive; "HTTP://" does not count
    static ref RE_URL: Regex = Regex::new(r"https?://").unwrap();

    // Letters only (L* categories); circled letters and roman numerals are not
    static ref RE_LETTER: Regex = Regex::new(r"\p{L}").unwrap();
}

/// Explain a spam classification. Total: never fails, may return nothing.
pub fn analyze(message: &str) -> Vec<Reason> {
    reasons_for(&measure(message))
}

/// Measure every signal on the trimmed message
pub fn measure(message: &str) -> MessageSignals {
    let text = message.trim();

    MessageSignals {
        keyword_hits: keyword_hits(text),
        uppercase_ratio: uppercase_ratio(text),
        exclamations: exclamation_count(text),
        has_url: contains_url(text),
        length: text.chars().count(),
    }
}

/// Turn measurements into reasons, in evaluation order
pub fn reasons_for(signals: &MessageSignals) -> Vec<Reason> {
    let mut reasons = Vec::new();

    if !signals.keyword_hits.is_empty() {
        reasons.push(Reason::SpamKeywords);
    }

    if signals
        .uppercase_ratio
        .is_some_and(|ratio| ratio > UPPERCASE_RATIO_THRESHOLD)
    {
        reasons.push(Reason::HighUppercaseRate);
    }

    if signals.exclamations >= EXCLAMATION_THRESHOLD {
        reasons.push(Reason::TooManyExclamations);
    }

    if signals.has_url {
        reasons.push(Reason::ContainsUrl);
    }

    // Short wins; a message is never both
    if signals.length < MIN_MESSAGE_CHARS {
        reasons.push(Reason::TooShort);
    } else if signals.length > MAX_MESSAGE_CHARS {
        reasons.push(Reason::QuiteLong);
    }

    reasons
}

/// Catalog keywords contained anywhere in the lowercased text
fn keyword_hits(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    SPAM_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}

/// Uppercase characters over letters. Uppercase symbols such as Ⓐ count
/// in the numerator only, so the ratio can exceed 1.0.
fn uppercase_ratio(text: &str) -> Option<f64> {
    let letters = RE_LETTER.find_iter(text).count();
    if letters == 0 {
        return None;
    }

    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    Some(upper as f64 / letters as f64)
}

fn exclamation_count(text: &str) -> usize {
    text.matches('!').count()
}

fn contains_url(text: &str) -> bool {
    RE_URL.is_match(text)
}

// =============================================================================
// TESTS
// =============================================================================
