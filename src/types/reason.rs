//! Reason catalog for spam explanations
//! One variant per signal outcome, in evaluation order

use serde::{Deserialize, Serialize};

/// Why a spam-classified message looks like spam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// Contains at least one catalog keyword
    SpamKeywords,
    /// More than half of the letters are uppercase
    HighUppercaseRate,
    /// Three or more '!' characters
    TooManyExclamations,
    /// Contains an http:// or https:// link
    ContainsUrl,
    /// Fewer than 10 characters after trimming
    TooShort,
    /// More than 300 characters after trimming
    QuiteLong,
}

impl Reason {
    /// All reasons in evaluation order
    pub const ALL: [Reason; 6] = [
        Reason::SpamKeywords,
        Reason::HighUppercaseRate,
        Reason::TooManyExclamations,
        Reason::ContainsUrl,
        Reason::TooShort,
        Reason::QuiteLong,
    ];

    /// Get the code string (for logging and JSON)
    pub fn code(&self) -> &'static str {
        match self {
            Self::SpamKeywords => "SPAM_KEYWORDS",
            Self::HighUppercaseRate => "HIGH_UPPERCASE_RATE",
            Self::TooManyExclamations => "TOO_MANY_EXCLAMATIONS",
            Self::ContainsUrl => "CONTAINS_URL",
            Self::TooShort => "TOO_SHORT",
            Self::QuiteLong => "QUITE_LONG",
        }
    }

    /// Short catalog text
    pub fn description(&self) -> &'static str {
        match self {
            Self::SpamKeywords => "may contain spam keywords",
            Self::HighUppercaseRate => "high uppercase letter rate",
            Self::TooManyExclamations => "too many exclamation marks",
            Self::ContainsUrl => "contains a URL",
            Self::TooShort => "message is too short",
            Self::QuiteLong => "message is quite long",
        }
    }

    /// Full sentence shown to end users
    pub fn message(&self) -> &'static str {
        match self {
            Self::SpamKeywords => "The message may contain some spam keywords.",
            Self::HighUppercaseRate => "It may be because of the high uppercase letter rate.",
            Self::TooManyExclamations => "It may be because it contains too many exclamation marks.",
            Self::ContainsUrl => "It may be because the message contains a URL.",
            Self::TooShort => "This may be due to the message being too short.",
            Self::QuiteLong => "This may be due to the message being quite long.",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
