//! Classifier Capability
//!
//! Pre-trained text classifiers consumed as black boxes exposing
//! `predict(text) -> label`. Loaded once at startup and shared read-only.

use crate::error::NlpError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub mod linear;
pub use linear::LinearTextModel;

/// Which classifier a failure belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    Sentiment,
    Intent,
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClassifierKind::Sentiment => "sentiment",
            ClassifierKind::Intent => "intent",
        };
        write!(f, "{}", s)
    }
}

/// Trait for a trained text classifier.
///
/// Implementations must tolerate concurrent `predict` calls. A classifier that
/// cannot should be wrapped so that calls are serialized behind one lock.
pub trait TextClassifier: Send + Sync {
    fn name(&self) -> &str;

    fn predict(&self, text: &str) -> Result<String>;
}

/// Load an artifact-backed classifier. Any failure is reported as
/// `ClassifierUnavailable` for `kind`, which callers treat as fatal at startup.
pub fn load_classifier(
    kind: ClassifierKind,
    path: impl AsRef<Path>,
) -> Result<Arc<dyn TextClassifier>> {
    let path = path.as_ref();

    let model = LinearTextModel::from_path(path).map_err(|e| {
        NlpError::classifier_unavailable(
            kind,
            format!("failed to load {}: {}", path.display(), e),
        )
    })?;

    Ok(Arc::new(model))
}

/// Classifier that always answers with the same label.
///
/// Keeps the system functional without a trained artifact and doubles as a
/// test fixture: it counts calls and remembers the last input.
pub struct FixedClassifier {
    label: String,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl FixedClassifier {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().ok().and_then(|guard| guard.clone())
    }
}

impl TextClassifier for FixedClassifier {
    fn name(&self) -> &str {
        "fixed"
    }

    fn predict(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Ok(mut last) = self.last_input.lock() {
            *last = Some(text.to_string());
        }

        Ok(self.label.clone())
    }
}
