//! # Brain Module
//!
//! Non-LLM coaching logic: everything between a user message and the reply.
//!
//! ## Components
//! - `advice`: Advice database (category -> keywords, canned messages)
//! - `intent`: Keyword intent matching over the advice database
//! - `picker`: Uniform message selection with optional quote
//! - `quotes`: Quote book (built-in or `quotes.json`)
//! - `sentiment`: Lexicon compound sentiment score
//! - `mood`: Mood detection from keywords, sentiment and memory
//! - `coach`: Per-turn orchestrator

pub mod advice;
pub mod coach;
pub mod intent;
pub mod mood;
pub mod picker;
pub mod quotes;
pub mod sentiment;

/// Lower-cases `text` and maps typographic apostrophes (’ ‘) to `'`.
///
/// Every keyword and lexicon lookup goes through this, so "can’t" and
/// "can't" match the same entries.
pub fn fold_text(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}
