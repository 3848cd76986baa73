//! Keyword Matcher
//!
//! Exact substring containment against the lexicon. First hit wins.

use crate::lexicon::KeywordLexicon;
use std::sync::Arc;

/// A keyword hit, borrowed from the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    pub intent: &'a str,
    pub keyword: &'a str,
}

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    lexicon: Arc<KeywordLexicon>,
}

impl KeywordMatcher {
    pub fn new(lexicon: Arc<KeywordLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &KeywordLexicon {
        &self.lexicon
    }

    /// Scan the lexicon in declaration order and return the first keyword
    /// contained in `text`. `None` means no keyword matched anywhere.
    ///
    /// Case- and whitespace-sensitive; no scoring, no longest-match preference.
    pub fn find<'a>(&'a self, text: &str) -> Option<KeywordMatch<'a>> {
        self.lexicon.iter().find_map(|entry| {
            entry
                .keywords
                .iter()
                .find(|kw| text.contains(kw.as_str()))
                .map(|kw| KeywordMatch {
                    intent: entry.intent.as_str(),
                    keyword: kw.as_str(),
                })
        })
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(Arc::new(KeywordLexicon::default()))
    }
}
