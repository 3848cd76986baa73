//! Keyword Lexicon
//!
//! Ordered mapping from intent label to trigger substrings.
//!
//! Declaration order is the priority order: an earlier entry beats a later one,
//! and inside an entry an earlier keyword beats a later one. The lexicon is an
//! ordered list rather than a map so that this rule never depends on a
//! container's iteration order.

use crate::error::NlpError;
use crate::Result;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Built-in trigger words, in priority order
const BUILTIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("PLAY", &["เล่น", "สนุก", "วิ่ง", "กระโดด"]),
    ("FEED", &["หิว", "กิน", "อาหาร", "ข้าว"]),
    ("SLEEP", &["ง่วง", "นอน", "พัก"]),
    ("PET", &["ลูบ", "กอด", "น่ารัก"]),
    ("COMFORT", &["เหงา", "เศร้า", "เครียด", "ท้อ"]),
];

lazy_static! {
    /// Shared built-in lexicon
    pub static ref DEFAULT_LEXICON: KeywordLexicon = KeywordLexicon::builtin();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub intent: String,
    pub keywords: Vec<String>,
}

impl LexiconEntry {
    pub fn new<I, S>(intent: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            intent: intent.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLexicon {
    entries: Vec<LexiconEntry>,
}

impl KeywordLexicon {
    /// Build a lexicon, rejecting duplicate or empty intent labels and empty keywords
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if entry.intent.is_empty() {
                return Err(NlpError::InvalidLexicon(
                    "intent label must not be empty".to_string(),
                ));
            }

            if !seen.insert(entry.intent.as_str()) {
                return Err(NlpError::InvalidLexicon(format!(
                    "intent '{}' declared more than once",
                    entry.intent
                )));
            }

            // "" is a substring of every text and would shadow everything after it
            if entry.keywords.iter().any(|kw| kw.is_empty()) {
                return Err(NlpError::InvalidLexicon(format!(
                    "intent '{}' has an empty keyword",
                    entry.intent
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The built-in pet-command lexicon
    pub fn builtin() -> Self {
        let entries = BUILTIN_KEYWORDS
            .iter()
            .map(|(intent, keywords)| LexiconEntry::new(*intent, keywords.iter().copied()))
            .collect();

        Self { entries }
    }

    /// Load a lexicon from a JSON array of `{ "intent", "keywords" }` objects
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            intents = lexicon.len(),
            "Loaded keyword lexicon"
        );

        Ok(lexicon)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let entries: Vec<LexiconEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexiconEntry> {
        self.entries.iter()
    }

    /// Intent labels in priority order
    pub fn intents(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.intent.as_str())
    }

    pub fn keywords_for(&self, intent: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.intent == intent)
            .map(|e| e.keywords.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}

impl<'a> IntoIterator for &'a KeywordLexicon {
    type Item = &'a LexiconEntry;
    type IntoIter = std::slice::Iter<'a, LexiconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
