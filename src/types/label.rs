//! Classification labels

use serde::{Deserialize, Serialize};

/// The two classes a message can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate message
    Ham,
    /// Unsolicited / fraudulent message
    Spam,
}

impl Label {
    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }

    /// Get ANSI color name for terminal display
    pub fn color(&self) -> colored::Color {
        match self {
            Label::Ham => colored::Color::Green,
            Label::Spam => colored::Color::Red,
        }
    }

    /// Get emoji for label
    pub fn emoji(&self) -> &'static str {
        match self {
            Label::Ham => "✅",
            Label::Spam => "❌",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        };
        write!(f, "{}", name)
    }
}
