//! Mood Memory Module
//!
//! Keeps the most recent detected or corrected moods in a JSON file so the
//! detector can penalize a mood that was just seen. Only the last
//! `capacity` records are kept; older ones are dropped first.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::brain::mood::Mood;
use crate::error::AppError;

/// Default number of records kept
pub const DEFAULT_CAPACITY: usize = 10;

/// Score adjustment for a mood seen inside the recency window
pub const RECENCY_PENALTY: f32 = -0.2;

/// A single remembered mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub mood: Mood,
    pub ts: DateTime<Utc>,
}

/// On-disk layout of the memory file
#[derive(Debug, Default, Serialize, Deserialize)]
struct MemoryFile {
    #[serde(default)]
    recent_moods: Vec<MoodRecord>,
}

/// File-backed store of recent moods
#[derive(Debug)]
pub struct MoodMemory {
    path: PathBuf,
    capacity: usize,
    records: Vec<MoodRecord>,
}

impl MoodMemory {
    /// Loads memory from `path`. A missing or unreadable file yields an empty memory.
    pub fn load(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let capacity = capacity.max(1);
        let mut records = Self::read_records(&path);

        if records.len() > capacity {
            let excess = records.len() - capacity;
            records.drain(..excess);
        }

        debug!("Loaded {} mood records from {:?}", records.len(), path);

        Self {
            path,
            capacity,
            records,
        }
    }

    fn read_records(path: &Path) -> Vec<MoodRecord> {
        if !path.exists() {
            return Vec::new();
        }

        let parsed = fs::read_to_string(path)
            .map_err(AppError::from)
            .and_then(|raw| serde_json::from_str::<MemoryFile>(&raw).map_err(AppError::from));

        match parsed {
            Ok(file) => file.recent_moods,
            Err(e) => {
                warn!("Ignoring unreadable mood memory {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    pub fn records(&self) -> &[MoodRecord] {
        &self.records
    }

    /// Records a mood at `now` and persists the memory.
    pub fn remember(&mut self, mood: Mood, now: DateTime<Utc>) -> Result<(), AppError> {
        self.records.push(MoodRecord { mood, ts: now });
        while self.records.len() > self.capacity {
            self.records.remove(0);
        }
        self.save()
    }

    /// Forgets every record and persists the empty memory.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.records.clear();
        self.save()?;
        info!("Mood memory cleared");
        Ok(())
    }

    /// Writes the memory file, creating its directory when needed.
    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = MemoryFile {
            recent_moods: self.records.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Timestamp of the most recent record for `mood`
    pub fn last_seen(&self, mood: Mood) -> Option<DateTime<Utc>> {
        self.records
            .iter()
            .rev()
            .find(|r| r.mood == mood)
            .map(|r| r.ts)
    }

    /// `RECENCY_PENALTY` if `mood` was last seen less than `window` before `now`, else 0.
    pub fn recency_penalty(&self, mood: Mood, now: DateTime<Utc>, window: Duration) -> f32 {
        match self.last_seen(mood) {
            Some(ts) if now.signed_duration_since(ts) < window => RECENCY_PENALTY,
            _ => 0.0,
        }
    }
}
