//! Response Picker.
//!
//! Given a category, picks one canned message uniformly at random and
//! optionally appends a quote.

use rand::seq::SliceRandom;
use rand::Rng;

use super::advice::AdviceDatabase;
use super::quotes::QuoteBook;

pub struct ResponsePicker<'a> {
    database: &'a AdviceDatabase,
    quotes: &'a QuoteBook,
    append_quote: bool,
}

impl<'a> ResponsePicker<'a> {
    pub fn new(database: &'a AdviceDatabase, quotes: &'a QuoteBook, append_quote: bool) -> Self {
        Self {
            database,
            quotes,
            append_quote,
        }
    }

    /// The bare message for `category`, or the fallback when the category is unknown.
    pub fn pick_message<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> &'a str {
        self.database
            .entry(category)
            .and_then(|entry| entry.messages.choose(rng))
            .map(String::as_str)
            .unwrap_or_else(|| self.database.fallback())
    }

    /// The full reply for `category`
    pub fn pick<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> String {
        let message = self.pick_message(category, rng);
        if self.append_quote && self.database.entry(category).is_some() {
            format!("{}\n\n**Quote:** _{}_", message, self.quotes.pick(rng))
        } else {
            message.to_string()
        }
    }
}
