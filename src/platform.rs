//! Cross-platform state directory resolution.
//!
//! The stored dates live next to the config under `~/.lifecalc` when that is
//! writable, with fallbacks for locked-down homes and CI containers.

use crate::config::APP_DIR;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "lifecalc";

/// Places the dates may be kept, most preferred first: `~/.lifecalc`, the
/// platform data dir (`~/.local/share/lifecalc` on Linux), then `./.lifecalc`.
fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(home) = home::home_dir() {
        candidates.push(home.join(APP_DIR));
    }
    if let Some(data) = dirs::data_local_dir() {
        candidates.push(data.join(DATA_DIR_NAME));
    }
    candidates.push(PathBuf::from(APP_DIR));
    candidates
}

/// Resolve the directory holding `state.json`.
///
/// An override is used as-is and must be writable; otherwise the first
/// writable candidate wins.
pub fn get_state_dir(override_dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        ensure_writable(dir)?;
        return Ok(dir.clone());
    }

    for dir in candidate_dirs() {
        match ensure_writable(&dir) {
            Ok(()) => return Ok(dir),
            Err(e) => tracing::warn!(dir = %dir.display(), error = %e, "skipping state directory"),
        }
    }

    anyhow::bail!("No writable state directory found; set state.state_dir_override in the config")
}

/// Ensure a directory exists and is writable by the current user.
pub fn ensure_writable(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let test_path = dir.join(".write_test");
    fs::write(&test_path, b"test")
        .with_context(|| format!("Directory {} is not writable", dir.display()))?;

    // Antivirus on Windows sometimes holds the file; leaving it behind is harmless.
    let _ = fs::remove_file(&test_path);

    Ok(())
}

/// Lock and state JSON paths, respecting the config override.
pub fn state_paths(state_dir_override: Option<&PathBuf>) -> Result<(PathBuf, PathBuf)> {
    let state_dir = get_state_dir(state_dir_override)?;
    tracing::debug!(dir = %state_dir.display(), "resolved state directory");
    Ok((state_dir.join("state.lock"), state_dir.join("state.json")))
}
