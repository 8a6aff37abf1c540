//! Mood Memory Tests

use crate::brain::mood::Mood;
use crate::memory::{MoodMemory, RECENCY_PENALTY};
use chrono::{Duration, TimeZone, Utc};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_capacity_keeps_newest() {
    let dir = tempdir().unwrap();
    let mut memory = MoodMemory::load(dir.path().join("coach_memory.json"), 10);
    let t0 = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();

    for i in 0..15 {
        let mood = if i < 14 { Mood::Neutral } else { Mood::Happy };
        memory
            .remember(mood, t0 + Duration::minutes(i))
            .expect("Failed to remember mood");
    }

    assert_eq!(memory.records().len(), 10);
    assert_eq!(memory.records()[0].ts, t0 + Duration::minutes(5));
    assert_eq!(memory.records()[9].mood, Mood::Happy);
}

#[test]
fn test_records_survive_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coach_memory.json");
    let ts = Utc.with_ymd_and_hms(2026, 1, 5, 8, 30, 0).unwrap();

    {
        let mut memory = MoodMemory::load(&path, 10);
        memory.remember(Mood::Stressed, ts).unwrap();
        memory.remember(Mood::Tired, ts + Duration::minutes(1)).unwrap();
    }

    let reloaded = MoodMemory::load(&path, 10);
    assert_eq!(reloaded.records().len(), 2);
    assert_eq!(reloaded.records()[0].mood, Mood::Stressed);
    assert_eq!(reloaded.records()[0].ts, ts);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"recent_moods\""));
    assert!(raw.contains("\"stressed\""));
}

#[test]
fn test_load_trims_to_capacity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coach_memory.json");
    let t0 = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();

    let mut memory = MoodMemory::load(&path, 10);
    for i in 0..6 {
        memory.remember(Mood::Sad, t0 + Duration::minutes(i)).unwrap();
    }

    let smaller = MoodMemory::load(&path, 3);
    assert_eq!(smaller.records().len(), 3);
    assert_eq!(smaller.records()[0].ts, t0 + Duration::minutes(3));
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coach_memory.json");
    fs::write(&path, "{ this is not json").unwrap();

    let memory = MoodMemory::load(&path, 10);
    assert!(memory.records().is_empty());
}

#[test]
fn test_missing_recent_moods_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coach_memory.json");
    fs::write(&path, "{}").unwrap();

    assert!(MoodMemory::load(&path, 10).records().is_empty());
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("state").join("coach_memory.json");

    let memory = MoodMemory::load(&path, 10);
    memory.save().expect("Failed to save memory");
    assert!(path.exists());
}

#[test]
fn test_reset_persists_empty_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coach_memory.json");

    let mut memory = MoodMemory::load(&path, 10);
    memory.remember(Mood::Happy, Utc::now()).unwrap();
    memory.reset().unwrap();

    assert!(memory.records().is_empty());
    assert!(MoodMemory::load(&path, 10).records().is_empty());
}

#[test]
fn test_recency_penalty_window() {
    let dir = tempdir().unwrap();
    let mut memory = MoodMemory::load(dir.path().join("coach_memory.json"), 10);
    let t0 = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
    let window = Duration::minutes(60);

    memory.remember(Mood::Sad, t0).unwrap();
    memory.remember(Mood::Sad, t0 + Duration::minutes(30)).unwrap();

    // Measured from the most recent sad record
    assert_eq!(
        memory.recency_penalty(Mood::Sad, t0 + Duration::minutes(80), window),
        RECENCY_PENALTY
    );
    assert_eq!(
        memory.recency_penalty(Mood::Sad, t0 + Duration::minutes(90), window),
        0.0
    );
    assert_eq!(memory.recency_penalty(Mood::Happy, t0, window), 0.0);
    assert_eq!(memory.last_seen(Mood::Sad), Some(t0 + Duration::minutes(30)));
}
