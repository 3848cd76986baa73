//! Pet NLP Service
//!
//! Classifies short Thai pet-interaction commands into:
//! - Sentiment: straight from the trained sentiment classifier
//! - Intent: hybrid resolution, keyword lexicon first, trained classifier on a miss
//!
//! Every intent result records which stage fired and a readable decision trace.
//!
//! FLOW:
//! TEXT → SENTIMENT ┐
//! TEXT → KEYWORD → (miss) → MODEL ┴→ ANALYSIS

pub mod analyzer;
pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod models;
pub mod resolver;
pub mod sentiment;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use analyzer::TextAnalyzer;
pub use classifier::{ClassifierKind, TextClassifier};
pub use resolver::HybridIntentResolver;
pub use sentiment::SentimentResolver;
