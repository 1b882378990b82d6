use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Match;

/// File name of the in-progress match inside the data directory.
pub const CURRENT_FILE: &str = "current.json";

/// Get the current-match file path inside `data_dir`.
pub fn get_current_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CURRENT_FILE)
}

/// Load the in-progress match.
///
/// Returns `None` when there is nothing usable on disk: the file is missing,
/// unreadable, or not a valid match document. The caller then starts an empty
/// match, so a damaged file never blocks entry.
pub fn load_current(path: &Path) -> Option<Match> {
    if !path.exists() {
        crate::verbose_eprintln!("No current match at {}", path.display());
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            crate::buffered_eprintln!(
                "Warning: could not read current match at {}: {}",
                path.display(),
                e
            );
            return None;
        }
    };

    match serde_json::from_str::<Match>(&content) {
        Ok(m) => Some(m),
        Err(e) => {
            crate::buffered_eprintln!(
                "Warning: ignoring corrupt current match at {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

/// Save the in-progress match atomically.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_current(path: &Path, m: &Match) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, m).context("Failed to serialize current match")?;

    file.commit().context("Failed to save current match")?;

    crate::verbose_eprintln!("Saved current match to {}", path.display());
    Ok(())
}
