//! Test Module
//!
//! Test suite for the life coach backend.
//!
//! ## Test Categories
//! - `brain_tests`: Intent matching, response picking, mood detection, coach turns
//! - `memory_tests`: Mood memory persistence, capacity and recency
//! - `config_tests`: Environment-driven configuration
//! - `actor_tests`: Coach actor behavior
//! - `session_tests`: Session loop over a scripted transport

pub mod config_tests;
pub mod memory_tests;

use crate::brain::coach::{Coach, CoachSettings};
use crate::brain::intent::IntentMatcher;
use crate::brain::mood::MoodDetector;
use crate::brain::quotes::QuoteBook;
use crate::memory::MoodMemory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// A coach with built-in advice, default quotes and memory under `dir`
pub fn test_coach(dir: &Path, settings: CoachSettings) -> Coach {
    Coach::new(
        IntentMatcher::default(),
        QuoteBook::default(),
        MoodDetector::default(),
        MoodMemory::load(dir.join("coach_memory.json"), 10),
        settings,
        StdRng::seed_from_u64(11),
    )
}
