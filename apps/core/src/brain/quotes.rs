//! Quote Book.
//!
//! A fixed pool of motivational quotes. The pool is the built-in list unless
//! a quotes file holding a non-empty JSON array of strings is present.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

pub const DEFAULT_QUOTES: &[&str] = &[
    "Small steps every day lead to big changes.",
    "You don’t have to be extreme, just consistent.",
    "Action cures fear — start tiny.",
    "Your future is decided by what you do today, not tomorrow.",
    "Rest is part of the process.",
];

#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: Vec<String>,
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl QuoteBook {
    /// Load quotes from `path`, keeping the defaults when the file is missing,
    /// unreadable, malformed or empty.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No quotes file at {:?}, using built-in quotes", path);
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).map_err(|e| e.to_string()));

        match parsed {
            Ok(quotes) if !quotes.is_empty() => Self { quotes },
            Ok(_) => {
                warn!("Quotes file {:?} is empty, using built-in quotes", path);
                Self::default()
            }
            Err(e) => {
                warn!("Failed to read quotes file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// Pick one quote uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.quotes
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(DEFAULT_QUOTES[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let book = QuoteBook::load_or_default(&dir.path().join("quotes.json"));
        assert_eq!(book.quotes().len(), DEFAULT_QUOTES.len());
    }

    #[test]
    fn test_file_replaces_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, r#"["Keep going.", "One more rep."]"#).unwrap();

        let book = QuoteBook::load_or_default(&path);
        assert_eq!(book.quotes(), &["Keep going.".to_string(), "One more rep.".to_string()]);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = book.pick(&mut rng);
            assert!(book.quotes().iter().any(|q| q == picked));
        }
    }

    #[test]
    fn test_malformed_or_empty_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        assert_eq!(QuoteBook::load_or_default(&path).quotes().len(), DEFAULT_QUOTES.len());

        fs::write(&path, "[]").unwrap();
        assert_eq!(QuoteBook::load_or_default(&path).quotes().len(), DEFAULT_QUOTES.len());
    }
}
