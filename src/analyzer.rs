//! Text analyzer
//!
//! Runs the sentiment resolver and the hybrid intent resolver over the same
//! text and combines both into one record. The two paths are independent.

use crate::classifier::TextClassifier;
use crate::lexicon::KeywordLexicon;
use crate::models::TextAnalysis;
use crate::resolver::HybridIntentResolver;
use crate::sentiment::SentimentResolver;
use crate::Result;
use std::sync::Arc;
use tracing::info;

pub struct TextAnalyzer {
    sentiment: SentimentResolver,
    intent: HybridIntentResolver,
}

impl TextAnalyzer {
    pub fn new(sentiment: SentimentResolver, intent: HybridIntentResolver) -> Self {
        Self { sentiment, intent }
    }

    /// Wire both resolvers from their classifiers and a lexicon
    pub fn from_parts(
        lexicon: Arc<KeywordLexicon>,
        sentiment_classifier: Arc<dyn TextClassifier>,
        intent_classifier: Arc<dyn TextClassifier>,
    ) -> Self {
        Self::new(
            SentimentResolver::new(sentiment_classifier),
            HybridIntentResolver::new(lexicon, intent_classifier),
        )
    }

    pub fn intent_resolver(&self) -> &HybridIntentResolver {
        &self.intent
    }

    pub fn sentiment_resolver(&self) -> &SentimentResolver {
        &self.sentiment
    }

    pub fn analyze(&self, text: &str) -> Result<TextAnalysis> {
        let sentiment = self.sentiment.resolve(text)?;
        let resolution = self.intent.resolve(text)?;

        info!(
            sentiment = %sentiment,
            intent = %resolution.intent,
            method = %resolution.method,
            "Text analyzed"
        );

        Ok(TextAnalysis {
            text: text.to_string(),
            sentiment,
            resolution,
        })
    }
}
