use crate::error::{NotesError, Result};
use crate::storage::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for hubnotes, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Storage key the note collection is kept under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Where `export` writes files when no directory is given
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            export_dir: None,
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotesError::Serialization)?;
        fs::write(config_path, content).map_err(NotesError::Io)?;
        Ok(())
    }

    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        // `<key>.json` would overwrite this file.
        if format!("{}.json", key) == CONFIG_FILENAME {
            return Err(NotesError::Validation(format!(
                "'{}' is reserved and cannot be used as a storage key",
                key
            )));
        }
        self.storage_key = key.to_string();
        Ok(())
    }

    /// An empty value clears the export directory.
    pub fn set_export_dir(&mut self, dir: &str) {
        self.export_dir = if dir.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        };
    }
}
