//! Error types for the pet NLP service

use crate::classifier::ClassifierKind;
use thiserror::Error;

/// Result type alias for NLP operations
pub type Result<T> = std::result::Result<T, NlpError>;

#[derive(Error, Debug)]
pub enum NlpError {

    // =============================
    // Request Errors
    // =============================

    #[error("Text is required")]
    EmptyInput,

    // =============================
    // Classifier Errors
    // =============================

    #[error("{kind} classifier unavailable: {reason}")]
    ClassifierUnavailable {
        kind: ClassifierKind,
        reason: String,
    },

    #[error("Invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    // =============================
    // Setup Errors
    // =============================

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NlpError {
    /// Wrap any error raised on a classifier path, keeping which classifier failed.
    pub fn classifier_unavailable(kind: ClassifierKind, cause: impl std::fmt::Display) -> Self {
        NlpError::ClassifierUnavailable {
            kind,
            reason: cause.to_string(),
        }
    }
}
