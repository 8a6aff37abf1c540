//! Intent Matching using keyword sets.
//!
//! Case-folds the user text and tests it for any keyword of each advice
//! category, in database order. The first category with a hit wins.
//! No scoring and no model: categories are checked in priority order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::advice::AdviceDatabase;
use super::fold_text;

/// Detected intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum Intent {
    /// A known advice category matched
    Category(String),
    /// Nothing matched; the fallback applies
    Fallback,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &str {
        match self {
            Intent::Category(name) => name,
            Intent::Fallback => "fallback",
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Intent::Category(name) => Some(name),
            Intent::Fallback => None,
        }
    }
}

/// Result of intent matching
#[derive(Debug, Clone)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Keywords of the winning category found in the text
    pub matched_keywords: Vec<String>,
}

impl IntentResult {
    fn fallback() -> Self {
        Self {
            intent: Intent::Fallback,
            matched_keywords: vec![],
        }
    }
}

/// Keyword intent matcher over a shared advice database
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    database: Arc<AdviceDatabase>,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new(Arc::new(AdviceDatabase::builtin()))
    }
}

impl IntentMatcher {
    pub fn new(database: Arc<AdviceDatabase>) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &AdviceDatabase {
        &self.database
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> IntentResult {
        let text = text.trim();

        if text.is_empty() {
            return IntentResult::fallback();
        }

        let folded = fold_text(text);

        for entry in self.database.entries() {
            let hits: Vec<String> = entry
                .keywords
                .iter()
                .filter(|kw| folded.contains(kw.as_str()))
                .cloned()
                .collect();

            if !hits.is_empty() {
                return IntentResult {
                    intent: Intent::Category(entry.category.clone()),
                    matched_keywords: hits,
                };
            }
        }

        IntentResult::fallback()
    }
}
