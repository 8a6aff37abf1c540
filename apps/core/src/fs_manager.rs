use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the mood memory inside the data directory
pub const MEMORY_FILENAME: &str = "coach_memory.json";

/// File name of the optional quotes list inside the data directory
pub const QUOTES_FILENAME: &str = "quotes.json";

pub struct PortablePathManager;

impl PortablePathManager {
    /// Working directory the coach runs from, or `.` if it cannot be read.
    pub fn root_dir() -> PathBuf {
        match std::env::current_dir() {
            Ok(path) => path,
            Err(e) => {
                warn!("Failed to get current directory: {}. Falling back to '.'", e);
                PathBuf::from(".")
            }
        }
    }

    /// Default data directory (./data).
    pub fn data_dir() -> PathBuf {
        Self::root_dir().join("data")
    }

    pub fn memory_file(data_dir: &Path) -> PathBuf {
        data_dir.join(MEMORY_FILENAME)
    }

    pub fn quotes_file(data_dir: &Path) -> PathBuf {
        data_dir.join(QUOTES_FILENAME)
    }

    /// Creates the data directory and the parent of the memory file if missing.
    pub fn init(data_dir: &Path, memory_file: &Path) -> Result<(), std::io::Error> {
        if !data_dir.exists() {
            info!("Creating data directory: {:?}", data_dir);
            fs::create_dir_all(data_dir)?;
        }

        if let Some(parent) = memory_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating memory directory: {:?}", parent);
                fs::create_dir_all(parent)?;
            }
        }

        Ok(())
    }
}
