//! Linear text model: TF-IDF features + logistic regression
//!
//! Consumes the JSON artifact written by the offline training job. Loaded
//! once at startup, read-only afterwards.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::core::classifier::Classifier;
use crate::error::{Result, SpamError};
use crate::types::{Classification, Label};
use crate::{MODEL_FORMAT_VERSION, SPAM_DECISION_THRESHOLD};

lazy_static! {
    // Same token rule the vectorizer was trained with: 2+ word chars
    static ref RE_TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Per-token parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    /// Inverse document frequency from training
    pub idf: f64,
    /// Logistic regression coefficient
    pub weight: f64,
}

/// On-disk model format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: u32,
    pub intercept: f64,
    pub vocabulary: HashMap<String, TermWeight>,
}

impl ModelArtifact {
    fn validate(&self) -> Result<()> {
        if self.version != MODEL_FORMAT_VERSION {
            return Err(SpamError::InvalidModel(format!(
                "unsupported format version {} (expected {})",
                self.version, MODEL_FORMAT_VERSION
            )));
        }
        if !self.intercept.is_finite() {
            return Err(SpamError::InvalidModel("intercept is not finite".to_string()));
        }
        if self.vocabulary.is_empty() {
            return Err(SpamError::InvalidModel("vocabulary is empty".to_string()));
        }
        for (token, term) in &self.vocabulary {
            if !term.idf.is_finite() || term.idf <= 0.0 {
                return Err(SpamError::InvalidModel(format!(
                    "token '{}' has invalid idf {}",
                    token, term.idf
                )));
            }
            if !term.weight.is_finite() {
                return Err(SpamError::InvalidModel(format!(
                    "token '{}' has non-finite weight",
                    token
                )));
            }
        }
        Ok(())
    }
}

/// Logistic regression over L2-normalized TF-IDF vectors
#[derive(Debug, Clone)]
pub struct LinearModel {
    intercept: f64,
    vocabulary: HashMap<String, TermWeight>,
    fingerprint: String,
}

impl LinearModel {
    /// Load and validate an artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let model = Self::from_slice(&bytes)?;
        info!(
            path = %path.display(),
            vocabulary = model.vocabulary_size(),
            fingerprint = %model.fingerprint(),
            "Loaded spam model"
        );
        Ok(model)
    }

    /// Parse and validate an artifact from bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        artifact.validate()?;

        let digest = Sha256::digest(bytes);
        let fingerprint = digest.iter().map(|b| format!("{:02x}", b)).collect();

        Ok(Self {
            intercept: artifact.intercept,
            vocabulary: artifact.vocabulary,
            fingerprint,
        })
    }

    /// SHA-256 of the artifact bytes, hex
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// P(spam | text)
    pub fn spam_probability(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();

        let mut counts: HashMap<&str, f64> = HashMap::new();
        for token in RE_TOKEN.find_iter(&lower) {
            *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
        }

        // (tf * idf, weight) for tokens the model knows
        let features: Vec<(f64, f64)> = counts
            .iter()
            .filter_map(|(token, tf)| {
                self.vocabulary
                    .get(*token)
                    .map(|term| (tf * term.idf, term.weight))
            })
            .collect();

        let norm = features.iter().map(|(x, _)| x * x).sum::<f64>().sqrt();
        let dot = if norm > 0.0 {
            features.iter().map(|(x, w)| (x / norm) * w).sum::<f64>()
        } else {
            0.0
        };

        sigmoid(self.intercept + dot)
    }
}

impl Classifier for LinearModel {
    fn classify(&self, text: &str) -> Result<Classification> {
        let p_spam = self.spam_probability(text);
        let classification = if p_spam > SPAM_DECISION_THRESHOLD {
            Classification::new(Label::Spam, p_spam)
        } else {
            Classification::new(Label::Ham, 1.0 - p_spam)
        };
        debug!(p_spam, label = %classification.label, "Linear model prediction");
        Ok(classification)
    }

    fn name(&self) -> &str {
        "linear-tfidf"
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

// =============================================================================
// TESTS
// =============================================================================
