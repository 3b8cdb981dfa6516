//! Classifier capability
//!
//! Anything that turns one message into `(label, confidence)`. The detector
//! only sees this trait, so tests can swap in a fixed classifier.

use crate::error::Result;
use crate::types::Classification;

/// Trait for all classifiers
pub trait Classifier: Send + Sync {
    /// Classify one message
    fn classify(&self, text: &str) -> Result<Classification>;

    /// Classifier name (for logging and /health)
    fn name(&self) -> &str;
}
