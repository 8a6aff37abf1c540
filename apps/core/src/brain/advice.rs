//! Advice Database.
//!
//! Static mapping from category to keywords and canned messages.
//! Built in by default, or loaded once from a JSON file at startup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;
use validator::Validate;

use super::fold_text;
use crate::error::AppError;
use crate::models::{AdviceEntry, AdviceFile};

/// Reply used when nothing in the user text matches a known keyword
pub const DEFAULT_FALLBACK: &str = "I'm here for motivation, focus, wellness and productivity. \
Tell me how you're feeling (e.g., *tired, stressed, happy*) or what you're struggling with, \
and I'll suggest something small you can do right now.";

/// (category, keywords, messages), in match-priority order
const BUILTIN: &[(&str, &[&str], &[&str])] = &[
    (
        "motivation",
        &[
            "unmotivat",
            "motivation",
            "no motivat",
            "give up",
            "giving up",
            "lazy",
            "discouraged",
            "inspire",
            "no drive",
        ],
        &[
            "Motivation follows action. Do the smallest possible version of the task for 2 minutes.",
            "Write down why this goal matters to you in one sentence, then take one step.",
            "Progress beats perfection. Pick one thing you can finish in the next 10 minutes.",
            "Think about how you'll feel tonight if you start now. Start with something tiny.",
        ],
    ),
    (
        "focus",
        &[
            "focus",
            "distract",
            "concentrat",
            "attention",
            "scattered",
            "can't think",
        ],
        &[
            "Put your phone in another room and set a 25-minute timer for a single task.",
            "Close every tab except the one you need. Write the next action on a sticky note.",
            "Try a 5-minute brain dump: write down everything on your mind, then pick one item.",
            "Work in short sprints: 15 minutes on, 3 minutes off, repeat three times.",
        ],
    ),
    (
        "wellness",
        &[
            "wellness",
            "health",
            "exercise",
            "insomnia",
            "can't sleep",
            "burnout",
            "burned out",
            "self-care",
            "relax",
            "meditat",
        ],
        &[
            "Drink a glass of water and take five slow breaths before your next task.",
            "Take a 10-minute walk outside. Fresh air resets more than you'd think.",
            "Set a wind-down alarm tonight: screens off 30 minutes before bed.",
            "Do a quick body scan: relax your jaw, drop your shoulders, unclench your hands.",
        ],
    ),
    (
        "productivity",
        &[
            "productiv",
            "procrastinat",
            "deadline",
            "to-do",
            "todo",
            "organize",
            "schedule",
            "efficien",
            "get things done",
        ],
        &[
            "List your top three tasks for today and do the hardest one first.",
            "Batch similar tasks together: answer all messages in one 20-minute block.",
            "Break the big task into steps that each take under 15 minutes.",
            "Time-block your calendar for the next two hours and protect that time.",
        ],
    ),
];

/// The loaded advice database. Read-only after construction.
#[derive(Debug, Clone)]
pub struct AdviceDatabase {
    entries: Vec<AdviceEntry>,
    fallback: String,
}

impl Default for AdviceDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AdviceDatabase {
    /// The built-in database (motivation, focus, wellness, productivity)
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(category, keywords, messages)| AdviceEntry {
                category: category.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                messages: messages.iter().map(|m| m.to_string()).collect(),
            })
            .collect();

        Self {
            entries,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// Build a database from a parsed advice file, validating and case-folding keywords.
    pub fn from_file_data(file: AdviceFile) -> Result<Self, AppError> {
        file.validate()?;

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(file.entries.len());

        for mut entry in file.entries {
            entry.validate()?;

            if !seen.insert(entry.category.clone()) {
                return Err(AppError::Validation(format!(
                    "Duplicate advice category: {}",
                    entry.category
                )));
            }

            entry.keywords = entry
                .keywords
                .iter()
                .map(|k| fold_text(k.trim()))
                .filter(|k| !k.is_empty())
                .collect();

            if entry.keywords.is_empty() {
                return Err(AppError::Validation(format!(
                    "Advice category '{}' has only blank keywords",
                    entry.category
                )));
            }

            entries.push(entry);
        }

        Ok(Self {
            entries,
            fallback: file.fallback,
        })
    }

    /// Load a database from a JSON advice file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let file: AdviceFile = serde_json::from_str(&raw)?;
        let db = Self::from_file_data(file)?;
        info!(
            "Loaded advice database from {:?} ({} categories)",
            path,
            db.entries.len()
        );
        Ok(db)
    }

    pub fn entries(&self) -> &[AdviceEntry] {
        &self.entries
    }

    pub fn entry(&self, category: &str) -> Option<&AdviceEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Category names in match-priority order
    #[allow(dead_code)]
    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.category.as_str()).collect()
    }
}
