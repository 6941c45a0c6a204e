//! Persisted user preferences
//!
//! Preferences live outside the rule-set config entirely: they are per-user
//! UI choices (currently just the locale) stored as JSON under the XDG config
//! directory. Writes go through a temp-file-then-rename so a crash mid-write
//! never leaves a truncated file; loads fall back to defaults on any missing
//! or unreadable file.

use crate::utils::get_config_dir;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

const PREFERENCES_FILE: &str = "preferences.json";

pub const DEFAULT_LOCALE: &str = "en";

/// Per-user preferences, independent of the rule-set config
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            locale: default_locale(),
        }
    }
}

fn preferences_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(PREFERENCES_FILE))
}

/// Loads preferences, or returns defaults when the file is absent or
/// unparseable. A corrupt file is not an error the user can act on.
pub fn load_preferences() -> Preferences {
    if let Some(path) = preferences_path()
        && let Ok(json) = std::fs::read_to_string(&path)
        && let Ok(prefs) = serde_json::from_str::<Preferences>(&json)
    {
        return prefs;
    }
    Preferences::default()
}

/// Saves preferences atomically: write to a temp file in the same directory,
/// then rename over the target.
pub fn save_preferences(prefs: &Preferences) -> std::io::Result<()> {
    let Some(path) = preferences_path() else {
        return Ok(());
    };
    let Some(dir) = path.parent() else {
        return Ok(());
    };

    let json = serde_json::to_string_pretty(prefs)?;
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(json.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(&path).map_err(|e| e.error)?;
    Ok(())
}
