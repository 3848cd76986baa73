//! Artifact-backed linear text classifier
//!
//! The artifact is a JSON export of a bag-of-n-grams linear model:
//!
//! ```json
//! {
//!   "name": "intent",
//!   "labels": ["PLAY", "FEED"],
//!   "ngram_range": [1, 2],
//!   "vocabulary": { "บอล": 0, "ขนม": 1 },
//!   "idf": [1.4, 1.2],
//!   "normalize": true,
//!   "coefficients": [[2.1, -0.3], [-0.4, 1.9]],
//!   "intercepts": [0.05, -0.05]
//! }
//! ```
//!
//! Text is split on whitespace, n-grams are joined with a single space and
//! looked up in `vocabulary`. Counts are optionally IDF-weighted and
//! L2-normalised. The score of each label is its intercept plus the dot
//! product with its coefficient row; the highest score wins and ties go to
//! the earliest label. Logistic-regression and multinomial naive-Bayes
//! exports both fit this shape.

use crate::classifier::TextClassifier;
use crate::error::NlpError;
use crate::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    #[serde(default = "default_name")]
    name: String,
    labels: Vec<String>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    lowercase: bool,
    vocabulary: HashMap<String, usize>,
    #[serde(default)]
    idf: Option<Vec<f64>>,
    #[serde(default)]
    normalize: bool,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

fn default_name() -> String {
    "linear".to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Immutable after load; safe to share across request handlers.
#[derive(Debug, Clone)]
pub struct LinearTextModel {
    artifact: ModelArtifact,
    fingerprint: String,
}

impl LinearTextModel {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let model = Self::from_slice(&bytes)?;
        let short_fingerprint = &model.fingerprint[..12];

        info!(
            path = %path.display(),
            model = %model.artifact.name,
            labels = model.artifact.labels.len(),
            features = model.feature_count(),
            fingerprint = short_fingerprint,
            "Loaded classifier artifact"
        );

        Ok(model)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Self::from_slice(raw.as_bytes())
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        validate(&artifact)?;

        Ok(Self {
            artifact,
            fingerprint: hex::encode(Sha256::digest(bytes)),
        })
    }

    /// SHA-256 of the artifact bytes, hex encoded
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn labels(&self) -> &[String] {
        &self.artifact.labels
    }

    pub fn feature_count(&self) -> usize {
        self.artifact.coefficients.first().map_or(0, Vec::len)
    }

    /// Per-label decision scores, in label order
    pub fn scores(&self, text: &str) -> Vec<(&str, f64)> {
        let features = self.features(text);

        self.artifact
            .labels
            .iter()
            .zip(&self.artifact.coefficients)
            .zip(&self.artifact.intercepts)
            .map(|((label, row), intercept)| {
                let dot: f64 = features.iter().map(|(idx, value)| row[*idx] * value).sum();
                (label.as_str(), intercept + dot)
            })
            .collect()
    }

    fn features(&self, text: &str) -> BTreeMap<usize, f64> {
        let lowered;
        let text = if self.artifact.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let (min_n, max_n) = self.artifact.ngram_range;
        let mut counts = BTreeMap::new();

        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&idx) = self.artifact.vocabulary.get(&term) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
        }

        if let Some(idf) = &self.artifact.idf {
            for (idx, value) in counts.iter_mut() {
                *value *= idf[*idx];
            }
        }

        if self.artifact.normalize {
            let norm = counts.values().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in counts.values_mut() {
                    *value /= norm;
                }
            }
        }

        counts
    }
}

impl TextClassifier for LinearTextModel {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn predict(&self, text: &str) -> Result<String> {
        let mut best: Option<(&str, f64)> = None;

        for (label, score) in self.scores(text) {
            if !score.is_finite() {
                return Err(NlpError::Prediction(format!(
                    "non-finite score for label '{}'",
                    label
                )));
            }
            // strict comparison keeps the earliest label on ties
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((label, score));
            }
        }

        best.map(|(label, _)| label.to_string())
            .ok_or_else(|| NlpError::Prediction("model has no labels".to_string()))
    }
}

fn validate(artifact: &ModelArtifact) -> Result<()> {
    let labels = artifact.labels.len();
    if labels == 0 {
        return Err(NlpError::InvalidModel("no labels".to_string()));
    }

    let (min_n, max_n) = artifact.ngram_range;
    if min_n == 0 || min_n > max_n {
        return Err(NlpError::InvalidModel(format!(
            "invalid ngram_range ({}, {})",
            min_n, max_n
        )));
    }

    if artifact.coefficients.len() != labels {
        return Err(NlpError::InvalidModel(format!(
            "{} coefficient rows for {} labels",
            artifact.coefficients.len(),
            labels
        )));
    }

    if artifact.intercepts.len() != labels {
        return Err(NlpError::InvalidModel(format!(
            "{} intercepts for {} labels",
            artifact.intercepts.len(),
            labels
        )));
    }

    let features = artifact.coefficients[0].len();
    if artifact.coefficients.iter().any(|row| row.len() != features) {
        return Err(NlpError::InvalidModel(
            "coefficient rows differ in length".to_string(),
        ));
    }

    if let Some((term, idx)) = artifact.vocabulary.iter().find(|(_, idx)| **idx >= features) {
        return Err(NlpError::InvalidModel(format!(
            "vocabulary term '{}' points at feature {} of {}",
            term, idx, features
        )));
    }

    if let Some(idf) = &artifact.idf {
        if idf.len() != features {
            return Err(NlpError::InvalidModel(format!(
                "{} idf weights for {} features",
                idf.len(),
                features
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY_MODEL: &str = r#"{
        "name": "toy-intent",
        "labels": ["PLAY", "FEED", "SLEEP"],
        "ngram_range": [1, 2],
        "vocabulary": {"บอล": 0, "ขนม": 1, "ฝันดี": 2, "ขอ ขนม": 3},
        "coefficients": [
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 1.5],
            [0.0, 0.0, 2.0, 0.0]
        ],
        "intercepts": [0.0, 0.0, 0.1]
    }"#;

    #[test]
    fn test_predicts_highest_score() {
        let model = LinearTextModel::from_json_str(TOY_MODEL).unwrap();

        assert_eq!(model.predict("โยน บอล มา").unwrap(), "PLAY");
        assert_eq!(model.predict("ฝันดี นะ").unwrap(), "SLEEP");
        assert_eq!(model.name(), "toy-intent");
        assert_eq!(model.feature_count(), 4);
    }

    #[test]
    fn test_bigram_features() {
        let model = LinearTextModel::from_json_str(TOY_MODEL).unwrap();

        // "ขอ ขนม" hits both the unigram and the bigram
        let scores = model.scores("ขอ ขนม");
        assert_eq!(scores[1], ("FEED", 2.5));
        assert_eq!(model.predict("ขอ ขนม").unwrap(), "FEED");
    }

    #[test]
    fn test_unknown_tokens_fall_to_intercepts() {
        let model = LinearTextModel::from_json_str(TOY_MODEL).unwrap();
        assert_eq!(model.predict("สวัสดีครับ").unwrap(), "SLEEP");
    }

    #[test]
    fn test_tie_goes_to_earliest_label() {
        let raw = r#"{
            "labels": ["POSITIVE", "NEGATIVE"],
            "vocabulary": {"ok": 0},
            "coefficients": [[1.0], [1.0]],
            "intercepts": [0.0, 0.0]
        }"#;
        let model = LinearTextModel::from_json_str(raw).unwrap();
        assert_eq!(model.predict("ok").unwrap(), "POSITIVE");
    }

    #[test]
    fn test_idf_and_normalize() {
        let raw = r#"{
            "labels": ["A", "B"],
            "vocabulary": {"x": 0, "y": 1},
            "idf": [3.0, 4.0],
            "normalize": true,
            "coefficients": [[1.0, 0.0], [0.0, 1.0]],
            "intercepts": [0.0, 0.0]
        }"#;
        let model = LinearTextModel::from_json_str(raw).unwrap();

        // tf-idf vector (3, 4) normalises to (0.6, 0.8)
        let scores = model.scores("x y");
        assert!((scores[0].1 - 0.6).abs() < 1e-9);
        assert!((scores[1].1 - 0.8).abs() < 1e-9);
        assert_eq!(model.predict("x y").unwrap(), "B");
    }

    #[test]
    fn test_lowercase_option() {
        let raw = r#"{
            "labels": ["A", "B"],
            "lowercase": true,
            "vocabulary": {"ball": 0},
            "coefficients": [[0.0], [1.0]],
            "intercepts": [0.5, 0.0]
        }"#;
        let model = LinearTextModel::from_json_str(raw).unwrap();
        assert_eq!(model.predict("BALL BALL").unwrap(), "B");
    }

    #[test]
    fn test_rejects_inconsistent_artifacts() {
        let cases = vec![
            r#"{"labels": [], "vocabulary": {}, "coefficients": [], "intercepts": []}"#,
            r#"{"labels": ["A"], "vocabulary": {}, "coefficients": [[1.0], [1.0]], "intercepts": [0.0]}"#,
            r#"{"labels": ["A"], "vocabulary": {}, "coefficients": [[1.0]], "intercepts": []}"#,
            r#"{"labels": ["A"], "vocabulary": {"x": 3}, "coefficients": [[1.0]], "intercepts": [0.0]}"#,
            r#"{"labels": ["A"], "ngram_range": [2, 1], "vocabulary": {}, "coefficients": [[1.0]], "intercepts": [0.0]}"#,
            r#"{"labels": ["A"], "vocabulary": {}, "idf": [1.0, 2.0], "coefficients": [[1.0]], "intercepts": [0.0]}"#,
            r#"{"labels": ["A", "B"], "vocabulary": {}, "coefficients": [[1.0], [1.0, 2.0]], "intercepts": [0.0, 0.0]}"#,
        ];

        for raw in cases {
            assert!(
                matches!(LinearTextModel::from_json_str(raw), Err(NlpError::InvalidModel(_))),
                "accepted: {}",
                raw
            );
        }
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = LinearTextModel::from_json_str(TOY_MODEL).unwrap();
        let b = LinearTextModel::from_json_str(TOY_MODEL).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn test_shipped_artifacts_load() {
        let root = env!("CARGO_MANIFEST_DIR");

        let intent = LinearTextModel::from_path(format!("{}/models/intent_model.json", root)).unwrap();
        let label = intent.predict("ขอ ขนม หน่อย").unwrap();
        assert!(intent.labels().contains(&label));

        let sentiment =
            LinearTextModel::from_path(format!("{}/models/sentiment_model.json", root)).unwrap();
        let label = sentiment.predict("ดีใจ มาก").unwrap();
        assert!(sentiment.labels().contains(&label));
    }
}
