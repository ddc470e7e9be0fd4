//! YAML persistence for a list of hotkey settings.
//!
//! Loading is deliberately forgiving: each entry of the `hotkeys` list is
//! decoded on its own and entries that cannot be decoded are skipped with a
//! warning. Whatever survives is still untrusted and must go through the
//! reconciler before use.

use crate::error::ConfigError;
use crate::types::HotkeySetting;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used by [`HotkeyConfig::default_path`].
pub const HOTKEYS_FILE_NAME: &str = "hotkeys.yaml";

/// On-disk hotkey settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Hotkey entries in file order
    #[serde(default)]
    pub hotkeys: Vec<HotkeySetting>,
}

impl HotkeyConfig {
    pub fn new(hotkeys: Vec<HotkeySetting>) -> Self {
        Self { hotkeys }
    }

    /// Load hotkey settings from `path`.
    ///
    /// A missing or empty file yields an empty config. Well-formed YAML of the
    /// wrong shape is logged and also yields an empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read, and
    /// [`ConfigError::Parse`] if it is not valid YAML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Hotkey settings not found at {:?}, using none", path);
            return Ok(Self::default());
        }

        log::info!("Loading hotkey settings from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a settings document, skipping entries that cannot be decoded.
    pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml_ng::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: Value = serde_yaml_ng::from_str(contents)?;
        let entries = match &document {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(_) => match document.get("hotkeys") {
                None | Some(Value::Null) => return Ok(Self::default()),
                Some(Value::Sequence(entries)) => entries,
                Some(other) => {
                    log::warn!(
                        "Ignoring hotkey settings: 'hotkeys' is not a list (found {:?})",
                        other
                    );
                    return Ok(Self::default());
                }
            },
            _ => {
                log::warn!("Ignoring hotkey settings: top level is not a mapping");
                return Ok(Self::default());
            }
        };

        let mut hotkeys = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match serde_yaml_ng::from_value::<HotkeySetting>(entry.clone()) {
                Ok(setting) => hotkeys.push(setting),
                Err(e) => log::warn!("Skipping unreadable hotkey entry #{}: {}", index, e),
            }
        }

        log::debug!("Decoded {} of {} hotkey entries", hotkeys.len(), entries.len());
        Ok(Self { hotkeys })
    }

    /// Save hotkey settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Serialize)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(|e| ConfigError::io(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| ConfigError::io(path, e))?;

        log::info!("Saved {} hotkey settings to {:?}", self.hotkeys.len(), path);
        Ok(())
    }

    /// Per-user settings path for `app_name`, under the platform config
    /// directory. Falls back to a relative file name when there is none.
    pub fn default_path(app_name: &str) -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(app_name).join(HOTKEYS_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(HOTKEYS_FILE_NAME))
    }
}
