//! Classification results and the verdict shown to callers

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{Label, Reason};

/// What a classifier says about one message
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    /// Probability mass of `label` (ham-confidence for ham): 0.0-1.0
    pub confidence: f64,
}

impl Classification {
    pub fn new(label: Label, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Label, confidence and explanation for one message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// When the message was evaluated
    pub timestamp: DateTime<Utc>,
    pub label: Label,
    pub confidence: f64,
    /// Empty unless `label` is spam
    pub reasons: Vec<Reason>,
}

impl Verdict {
    /// Create new verdict
    pub fn new(classification: Classification, reasons: Vec<Reason>) -> Self {
        Self {
            timestamp: Utc::now(),
            label: classification.label,
            confidence: classification.confidence,
            reasons,
        }
    }

    /// Confidence as a percentage, two decimals
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let headline = match self.label {
            Label::Spam => "This is spam",
            Label::Ham => "This is not spam",
        };
        let mut out = format!(
            "{} {} | confidence={}",
            self.label.emoji(),
            headline.color(self.label.color()).bold(),
            self.confidence_percent()
        );
        if !self.reasons.is_empty() {
            out.push_str("\n  Possible reasons:");
            for reason in &self.reasons {
                out.push_str(&format!("\n  - {}", reason.message().dimmed()));
            }
        }
        out
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let codes: Vec<&str> = self.reasons.iter().map(|r| r.code()).collect();
        format!(
            "label={} | confidence={:.4} | reasons={}",
            self.label,
            self.confidence,
            if codes.is_empty() { "-".to_string() } else { codes.join(",") }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parseable_string_spam() {
        let verdict = Verdict::new(
            Classification::new(Label::Spam, 0.9731),
            vec![Reason::SpamKeywords, Reason::ContainsUrl],
        );
        assert_eq!(
            verdict.to_parseable_string(),
            "label=spam | confidence=0.9731 | reasons=SPAM_KEYWORDS,CONTAINS_URL"
        );
    }

    #[test]
    fn test_parseable_string_ham() {
        let verdict = Verdict::new(Classification::new(Label::Ham, 0.8), vec![]);
        assert_eq!(
            verdict.to_parseable_string(),
            "label=ham | confidence=0.8000 | reasons=-"
        );
    }

    #[test]
    fn test_confidence_percent() {
        let verdict = Verdict::new(Classification::new(Label::Ham, 0.87654), vec![]);
        assert_eq!(verdict.confidence_percent(), "87.65%");
    }

    #[test]
    fn test_terminal_string_lists_reasons() {
        let verdict = Verdict::new(
            Classification::new(Label::Spam, 0.99),
            vec![Reason::TooShort],
        );
        let out = verdict.to_terminal_string();
        assert!(out.contains("This is spam"));
        assert!(out.contains(Reason::TooShort.message()));
    }

    #[test]
    fn test_json_labels_lowercase() {
        let verdict = Verdict::new(Classification::new(Label::Spam, 0.6), vec![Reason::QuiteLong]);
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["label"], "spam");
        assert_eq!(json["reasons"][0], "QUITE_LONG");
    }
}
