//! Persisted scaffold state.
//! After every successful option resolution the resolved values are written
//! to a state file in the destination so that later update runs can reuse
//! them. Loading is tolerant: a malformed file or field never aborts a run.

use crate::error::{Error, Result};
use crate::options::OptionSet;
use log::{debug, warn};
use std::path::Path;

/// File name of the persisted state record inside the destination.
pub const STATE_FILE: &str = ".nitrogenrc.json";

/// Keyword that marks an already scaffolded destination in its package.json.
pub const PROJECT_KEYWORD: &str = "nitrogen";

/// Loads the raw persisted state from a previously scaffolded destination.
///
/// Returns `None` when no state file exists or the file as a whole is not
/// valid JSON; individual fields are validated later, during option
/// resolution, so one bad field cannot poison the others.
pub fn load_state<P: AsRef<Path>>(dest_dir: P) -> Option<serde_json::Value> {
    let state_path = dest_dir.as_ref().join(STATE_FILE);
    let content = std::fs::read_to_string(&state_path).ok()?;
    match serde_json::from_str(&content) {
        Ok(value) => {
            debug!("Loaded persisted state from {}", state_path.display());
            Some(value)
        }
        Err(e) => {
            warn!("Ignoring malformed state file {}: {}", state_path.display(), e);
            None
        }
    }
}

/// Persists the resolved options for future update runs. Transient fields
/// (`update_mode`) are excluded from serialization.
pub fn save_state<P: AsRef<Path>>(dest_dir: P, options: &OptionSet) -> Result<()> {
    let dest_dir = dest_dir.as_ref();
    std::fs::create_dir_all(dest_dir).map_err(Error::IoError)?;
    let state_path = dest_dir.join(STATE_FILE);
    let content = serde_json::to_string_pretty(options)
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    std::fs::write(&state_path, content).map_err(Error::IoError)?;
    debug!("Persisted state to {}", state_path.display());
    Ok(())
}

/// Checks whether the destination already contains a scaffolded project.
///
/// A destination counts as an existing project when its package.json lists
/// the project keyword. Unreadable or malformed files count as "no project".
pub fn is_existing_project<P: AsRef<Path>>(dest_dir: P) -> bool {
    let pkg_path = dest_dir.as_ref().join("package.json");
    let Ok(content) = std::fs::read_to_string(&pkg_path) else {
        return false;
    };
    let Ok(pkg) = serde_json::from_str::<serde_json::Value>(&content) else {
        return false;
    };
    pkg.get("keywords")
        .and_then(|k| k.as_array())
        .map(|keywords| keywords.iter().any(|k| k.as_str() == Some(PROJECT_KEYWORD)))
        .unwrap_or(false)
}
