//! spamlens: spam classification with explanations
//!
//! CLI / HTTP → classifier → explanation engine → verdict

pub mod config;
pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// EXPLANATION THRESHOLDS
// =============================================================================

/// Uppercase letters / alphabetic letters must exceed this ratio
pub const UPPERCASE_RATIO_THRESHOLD: f64 = 0.5;

/// Minimum number of '!' characters for the exclamation signal
pub const EXCLAMATION_THRESHOLD: usize = 3;

/// Trimmed messages shorter than this (in characters) are "too short"
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Trimmed messages longer than this (in characters) are "quite long"
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Keywords matched as lowercase substrings, not whole words.
/// "nowhere" matches "now" on purpose.
pub const SPAM_KEYWORDS: &[&str] = &[
    "free",
    "win",
    "winner",
    "claim",
    "urgent",
    "prize",
    "congratulations",
    "offer",
    "click",
    "now",
];

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Spam probability above which the linear model predicts spam
pub const SPAM_DECISION_THRESHOLD: f64 = 0.5;

/// Model artifact format version this build understands
pub const MODEL_FORMAT_VERSION: u32 = 1;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
