//! Preference persistence.
//!
//! One JSON document under the app home directory holds the process-wide
//! preferences. Writes originate from a single toggle on the parameters
//! screen; last write wins.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};
use tracing::warn;

const APP_HOME_DIR: &str = ".genesisv";
const PREFERENCES_FILE: &str = "preferences.json";

fn default_rotation() -> bool {
    true
}

/// Persisted application preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppPreferences {
    /// Free screen rotation for render sessions. Enabled by default.
    #[serde(default = "default_rotation")]
    pub screen_rotation_enabled: bool,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            screen_rotation_enabled: true,
        }
    }
}

pub struct PreferencesStore {
    path: PathBuf,
    state: AppPreferences,
    dirty: bool,
}

impl PreferencesStore {
    pub fn load() -> Result<Self> {
        Self::load_from(storage_path()?)
    }

    /// Load from an explicit path. A missing file means first run and yields
    /// the defaults; an unparseable one falls back to them with a warning.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let state = match fs::read(&path) {
            Ok(data) => match serde_json::from_slice::<AppPreferences>(&data) {
                Ok(parsed) => parsed,
                Err(error) => {
                    warn!(?error, ?path, "failed to parse persisted preferences");
                    AppPreferences::default()
                }
            },
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    warn!(?error, ?path, "failed to read persisted preferences");
                }
                AppPreferences::default()
            }
        };

        Ok(Self {
            path,
            state,
            dirty: false,
        })
    }

    pub fn rotation_enabled(&self) -> bool {
        self.state.screen_rotation_enabled
    }

    /// Written by the parameters-screen toggle. Last write wins.
    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        if self.state.screen_rotation_enabled != enabled {
            self.state.screen_rotation_enabled = enabled;
            self.dirty = true;
        }
    }

    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        write_preferences(&self.path, &self.state)?;
        self.dirty = false;
        Ok(())
    }
}

impl Drop for PreferencesStore {
    fn drop(&mut self) {
        if self.dirty
            && let Err(error) = write_preferences(&self.path, &self.state)
        {
            warn!(?error, ?self.path, "failed to persist preferences during drop");
        }
    }
}

fn storage_path() -> Result<PathBuf> {
    if let Some(mut home) = dirs::home_dir() {
        home.push(APP_HOME_DIR);
        home.push(PREFERENCES_FILE);
        Ok(home)
    } else {
        let mut cwd = std::env::current_dir()?;
        cwd.push(PREFERENCES_FILE);
        Ok(cwd)
    }
}

fn write_preferences(path: &PathBuf, state: &AppPreferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "genesisv-prefs-{tag}-{}.json",
            std::process::id()
        ))
    }

    #[test]
    fn first_run_defaults_to_rotation_enabled() {
        let path = temp_store_path("default");
        let _ = fs::remove_file(&path);

        let store = PreferencesStore::load_from(path.clone()).unwrap();
        assert!(store.rotation_enabled());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn rotation_round_trips_across_reconstruction() {
        let path = temp_store_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = PreferencesStore::load_from(path.clone()).unwrap();
        store.set_rotation_enabled(false);
        store.save().unwrap();
        drop(store);

        let store = PreferencesStore::load_from(path.clone()).unwrap();
        assert!(!store.rotation_enabled());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unsaved_changes_flush_on_drop() {
        let path = temp_store_path("drop");
        let _ = fs::remove_file(&path);

        let mut store = PreferencesStore::load_from(path.clone()).unwrap();
        store.set_rotation_enabled(false);
        drop(store);

        let store = PreferencesStore::load_from(path.clone()).unwrap();
        assert!(!store.rotation_enabled());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let path = temp_store_path("corrupt");
        fs::write(&path, b"not json").unwrap();

        let store = PreferencesStore::load_from(path.clone()).unwrap();
        assert!(store.rotation_enabled());

        let _ = fs::remove_file(&path);
    }
}
