//! Sentiment Resolver
//!
//! Direct delegation to the sentiment classifier. No keyword stage.

use crate::classifier::{ClassifierKind, TextClassifier};
use crate::error::NlpError;
use crate::Result;
use std::sync::Arc;

pub struct SentimentResolver {
    classifier: Arc<dyn TextClassifier>,
}

impl SentimentResolver {
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self { classifier }
    }

    pub fn resolve(&self, text: &str) -> Result<String> {
        self.classifier
            .predict(text)
            .map_err(|e| NlpError::classifier_unavailable(ClassifierKind::Sentiment, e))
    }
}
