//! Detector: classifier + explanation engine → verdict

use std::sync::Arc;
use tracing::debug;

use crate::core::classifier::Classifier;
use crate::core::explain::analyze;
use crate::error::Result;
use crate::types::Verdict;

/// Classifies a message and explains spam verdicts
#[derive(Clone)]
pub struct SpamDetector {
    classifier: Arc<dyn Classifier>,
}

impl SpamDetector {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Name of the underlying classifier
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Classify, then explain only if the verdict is spam
    pub fn evaluate(&self, message: &str) -> Result<Verdict> {
        let classification = self.classifier.classify(message)?;

        let reasons = if classification.label.is_spam() {
            analyze(message)
        } else {
            Vec::new()
        };

        debug!(
            label = %classification.label,
            confidence = classification.confidence,
            reasons = reasons.len(),
            "Evaluated message"
        );

        Ok(Verdict::new(classification, reasons))
    }
}

impl std::fmt::Debug for SpamDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpamDetector")
            .field("classifier", &self.classifier.name())
            .finish()
    }
}
