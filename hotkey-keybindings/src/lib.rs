//! Key combinations for hotkey settings.
//!
//! This crate provides:
//! - The `KeyCombo` representation of a setting's key fields
//! - Parsing and rendering of human-readable combos ("Ctrl+Shift+F5")
//! - The structural validity check used when reconciling settings
//! - A lookup registry from enabled combos to command names

pub mod parser;

pub use parser::{KeyCombo, Modifiers, ParseError, parse_key_combo};

use hotkey_config::HotkeySetting;
use std::collections::HashMap;

/// True if `setting` can be turned into a [`KeyCombo`].
///
/// Pure predicate over the setting's key fields; name and enabled state are
/// not inspected.
pub fn is_valid(setting: &HotkeySetting) -> bool {
    KeyCombo::from_setting(setting).is_ok()
}

/// Registry of enabled hotkeys mapping key combinations to command names.
#[derive(Debug, Default)]
pub struct HotkeyRegistry {
    /// Map of key combos to command names
    bindings: HashMap<KeyCombo, String>,
}

impl HotkeyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from hotkey settings.
    ///
    /// Disabled settings are skipped. Invalid settings are logged and
    /// skipped. When two settings share a combo the first one is kept.
    pub fn from_settings(settings: &[HotkeySetting]) -> Self {
        let mut registry = Self::new();

        log::debug!(
            "Building hotkey registry from {} settings",
            settings.len()
        );
        for setting in settings.iter().filter(|s| s.enabled) {
            match KeyCombo::from_setting(setting) {
                Ok(combo) => {
                    if let Some(existing) = registry.bindings.get(&combo) {
                        log::warn!(
                            "Hotkey {} for '{}' already bound to '{}', skipping",
                            combo,
                            setting.name,
                            existing
                        );
                        continue;
                    }
                    log::debug!("Registered hotkey: {} -> {}", combo, setting.name);
                    registry.bindings.insert(combo, setting.name.clone());
                }
                Err(e) => {
                    log::warn!("Invalid hotkey for '{}': {}", setting.name, e);
                }
            }
        }

        log::info!(
            "Hotkey registry initialized with {} bindings",
            registry.bindings.len()
        );
        registry
    }

    /// Look up the command name bound to `combo`.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&str> {
        self.bindings.get(combo).map(String::as_str)
    }

    /// Find the combo bound to a command name, if it is enabled.
    pub fn combo_for(&self, name: &str) -> Option<&KeyCombo> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == name)
            .map(|(combo, _)| combo)
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
