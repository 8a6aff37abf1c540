//! Coach configuration loaded from environment variables (and `.env`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;
use crate::memory::DEFAULT_CAPACITY;

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CoachConfig {
    /// Directory holding memory and quotes
    pub data_dir: PathBuf,
    pub memory_file: PathBuf,
    pub quotes_file: PathBuf,
    /// Optional advice database replacing the built-in one
    pub advice_file: Option<PathBuf>,
    /// Mood suggestions per reply
    #[validate(range(min = 1, max = 3))]
    pub suggestion_count: usize,
    pub append_quote: bool,
    /// Mood records kept in memory
    #[validate(range(min = 1, max = 100))]
    pub memory_capacity: usize,
    /// Window in which a repeated mood is penalized
    #[validate(range(min = 0, max = 1440))]
    pub recency_minutes: i64,
    pub log_format: LogFormat,
}

impl Default for CoachConfig {
    fn default() -> Self {
        let data_dir = PortablePathManager::data_dir();
        Self {
            memory_file: PortablePathManager::memory_file(&data_dir),
            quotes_file: PortablePathManager::quotes_file(&data_dir),
            data_dir,
            advice_file: None,
            suggestion_count: 3,
            append_quote: true,
            memory_capacity: DEFAULT_CAPACITY,
            recency_minutes: 60,
            log_format: LogFormat::Pretty,
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}

fn env_bool(key: &str, default: bool) -> Result<bool, AppError> {
    match env_var(key) {
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::Config(format!("{}={:?}: expected a boolean", key, raw))),
        },
        None => Ok(default),
    }
}

impl CoachConfig {
    /// Reads `COACH_*` variables over the defaults and validates the result.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let data_dir = env_var("COACH_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let memory_file = env_var("COACH_MEMORY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PortablePathManager::memory_file(&data_dir));
        let quotes_file = env_var("COACH_QUOTES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PortablePathManager::quotes_file(&data_dir));
        let log_format = match env_var("COACH_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        let config = Self {
            data_dir,
            memory_file,
            quotes_file,
            advice_file: env_var("COACH_ADVICE_FILE").map(PathBuf::from),
            suggestion_count: env_parse("COACH_SUGGESTIONS", defaults.suggestion_count)?,
            append_quote: env_bool("COACH_APPEND_QUOTE", defaults.append_quote)?,
            memory_capacity: env_parse("COACH_MEMORY_CAPACITY", defaults.memory_capacity)?,
            recency_minutes: env_parse("COACH_RECENCY_MINUTES", defaults.recency_minutes)?,
            log_format,
        };

        config.validate()?;
        Ok(config)
    }
}
