use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{History, Snapshot};

/// File name of the saved history inside the data directory.
pub const HISTORY_FILE: &str = "history.json";

/// Default file name for `history export`.
pub const DEFAULT_EXPORT_FILE: &str = "bowling-history.json";

/// Get the history file path inside `data_dir`.
pub fn get_history_path(data_dir: &Path) -> PathBuf {
    data_dir.join(HISTORY_FILE)
}

/// Load saved history.
///
/// Never fails: a missing file, unreadable file, invalid JSON or a document
/// that isn't an array all give an empty history. Individual entries that
/// don't parse are skipped with a warning and the rest are kept.
pub fn load_history(path: &Path) -> History {
    if !path.exists() {
        crate::verbose_eprintln!("No history at {}", path.display());
        return History::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            crate::buffered_eprintln!("Warning: could not read history at {}: {}", path.display(), e);
            return History::new();
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            crate::buffered_eprintln!(
                "Warning: ignoring corrupt history at {}: {}",
                path.display(),
                e
            );
            return History::new();
        }
    };

    let serde_json::Value::Array(items) = value else {
        crate::buffered_eprintln!(
            "Warning: ignoring history at {}: expected a list of saved matches",
            path.display()
        );
        return History::new();
    };

    let total = items.len();
    let entries: Vec<Snapshot> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<Snapshot>(item) {
            Ok(s) => Some(s),
            Err(e) => {
                crate::buffered_eprintln!("Warning: skipping saved match #{}: {}", i + 1, e);
                None
            }
        })
        .collect();

    crate::verbose_eprintln!(
        "Loaded {} of {} saved matches from {}",
        entries.len(),
        total,
        path.display()
    );

    History::from_entries(entries)
}

/// Save history atomically, creating the parent directory if needed.
pub fn save_history(path: &Path, history: &History) -> Result<()> {
    write_json(path, history).context("Failed to save history")?;
    crate::verbose_eprintln!("Saved {} matches to {}", history.len(), path.display());
    Ok(())
}

/// Write history as pretty JSON for download/backup. The file loads back
/// through [`load_history`].
pub fn export_history(path: &Path, history: &History) -> Result<()> {
    write_json(path, history)
        .with_context(|| format!("Failed to export history to {}", path.display()))
}

fn write_json(path: &Path, history: &History) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, history).context("Failed to serialize history")?;

    file.commit()
        .with_context(|| format!("Failed to commit {}", path.display()))?;

    Ok(())
}
