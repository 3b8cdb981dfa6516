//! Signal measurements for the explanation engine

use serde::Serialize;

/// Raw values measured on a trimmed message (5 signals)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSignals {
    /// Catalog keywords found as lowercase substrings, catalog order
    pub keyword_hits: Vec<&'static str>,
    /// Uppercase chars / letters; None when there are no letters
    pub uppercase_ratio: Option<f64>,
    /// Number of '!' characters
    pub exclamations: usize,
    /// http:// or https:// present
    pub has_url: bool,
    /// Trimmed length in characters
    pub length: usize,
}
