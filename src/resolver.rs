//! Hybrid Intent Resolver
//!
//! KEYWORD → (miss) → MODEL
//!
//! The keyword stage is terminal when it hits; the intent classifier is only
//! consulted on a miss. Classifier failures surface as `ClassifierUnavailable`
//! and are never replaced by a default intent.

use crate::classifier::{ClassifierKind, TextClassifier};
use crate::error::NlpError;
use crate::lexicon::KeywordLexicon;
use crate::matcher::KeywordMatcher;
use crate::models::ResolutionResult;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

pub struct HybridIntentResolver {
    matcher: KeywordMatcher,
    classifier: Arc<dyn TextClassifier>,
}

impl HybridIntentResolver {
    pub fn new(lexicon: Arc<KeywordLexicon>, classifier: Arc<dyn TextClassifier>) -> Self {
        Self {
            matcher: KeywordMatcher::new(lexicon),
            classifier,
        }
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    /// Resolve the intent of `text`. Emptiness is checked by the caller.
    pub fn resolve(&self, text: &str) -> Result<ResolutionResult> {
        if let Some(hit) = self.matcher.find(text) {
            debug!(
                intent = hit.intent,
                keyword = hit.keyword,
                "Intent resolved by keyword"
            );
            return Ok(ResolutionResult::keyword(hit.intent, hit.keyword));
        }

        let intent = self
            .classifier
            .predict(text)
            .map_err(|e| NlpError::classifier_unavailable(ClassifierKind::Intent, e))?;

        debug!(
            intent = %intent,
            classifier = self.classifier.name(),
            "Intent resolved by model"
        );

        Ok(ResolutionResult::model(intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::testing::FailingClassifier;
    use crate::classifier::FixedClassifier;
    use crate::lexicon::LexiconEntry;
    use crate::models::ResolutionMethod;

    fn resolver_with(classifier: Arc<FixedClassifier>) -> HybridIntentResolver {
        HybridIntentResolver::new(Arc::new(KeywordLexicon::default()), classifier)
    }

    #[test]
    fn test_keyword_path_skips_classifier() {
        let classifier = Arc::new(FixedClassifier::new("SLEEP"));
        let resolver = resolver_with(classifier.clone());

        let result = resolver.resolve("หิว").unwrap();

        assert_eq!(result.intent, "FEED");
        assert_eq!(result.method, ResolutionMethod::Keyword);
        assert_eq!(result.matched_keyword.as_deref(), Some("หิว"));
        assert_eq!(result.trace, vec!["KEYWORD:FEED(หิว)".to_string()]);
        assert_eq!(classifier.call_count(), 0);
    }

    #[test]
    fn test_keyword_anywhere_in_text() {
        let classifier = Arc::new(FixedClassifier::new("SLEEP"));
        let resolver = resolver_with(classifier.clone());

        for (text, intent, keyword) in [
            ("วันนี้เหงาจัง", "COMFORT", "เหงา"),
            ("ไปวิ่งกัน", "PLAY", "วิ่ง"),
            ("แมวน่ารักมาก", "PET", "น่ารัก"),
        ] {
            let result = resolver.resolve(text).unwrap();
            assert_eq!(result.intent, intent);
            assert_eq!(result.matched_keyword.as_deref(), Some(keyword));
        }

        assert_eq!(classifier.call_count(), 0);
    }

    #[test]
    fn test_model_fallback() {
        let classifier = Arc::new(FixedClassifier::new("PET"));
        let resolver = resolver_with(classifier.clone());

        let result = resolver.resolve("สวัสดีครับ").unwrap();

        assert_eq!(result.intent, "PET");
        assert_eq!(result.method, ResolutionMethod::Model);
        assert!(result.matched_keyword.is_none());
        assert_eq!(result.trace, vec!["MODEL:PET".to_string()]);
        assert_eq!(classifier.call_count(), 1);
        assert_eq!(classifier.last_input().as_deref(), Some("สวัสดีครับ"));
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let lexicon = KeywordLexicon::new(vec![
            LexiconEntry::new("PLAY", ["บอล"]),
            LexiconEntry::new("FEED", ["ปลา"]),
        ])
        .unwrap();
        let classifier = Arc::new(FixedClassifier::new("SLEEP"));
        let resolver = HybridIntentResolver::new(Arc::new(lexicon), classifier);

        let result = resolver.resolve("ปลาหรือบอล").unwrap();
        assert_eq!(result.intent, "PLAY");
        assert_eq!(result.matched_keyword.as_deref(), Some("บอล"));
    }

    #[test]
    fn test_deterministic() {
        let classifier = Arc::new(FixedClassifier::new("COMFORT"));
        let resolver = resolver_with(classifier);

        for text in ["หิวแล้วอยากเล่น", "สวัสดีครับ"] {
            assert_eq!(resolver.resolve(text).unwrap(), resolver.resolve(text).unwrap());
        }
    }

    #[test]
    fn test_classifier_failure_is_surfaced() {
        let resolver = HybridIntentResolver::new(
            Arc::new(KeywordLexicon::default()),
            Arc::new(FailingClassifier),
        );

        match resolver.resolve("สวัสดีครับ") {
            Err(NlpError::ClassifierUnavailable { kind, reason }) => {
                assert_eq!(kind, ClassifierKind::Intent);
                assert!(reason.contains("model raised"));
            }
            other => panic!("expected ClassifierUnavailable, got {:?}", other),
        }

        // keyword path never touches the broken classifier
        assert_eq!(resolver.resolve("หิว").unwrap().intent, "FEED");
    }
}
