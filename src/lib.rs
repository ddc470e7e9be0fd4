//! Hotkey settings reconciliation.
//!
//! Merges untrusted hotkey settings into a fixed default catalog, producing a
//! total, collision-free set:
//!
//! - Unknown command names and invalid key combinations are dropped
//! - The first setting for a command wins
//! - Commands missing from the input fall back to their defaults
//! - A key combination already in use disables the later setting
//!
//! Types and persistence live in `hotkey-config`, key combination parsing and
//! validation in `hotkey-keybindings`; both are re-exported here.

pub mod error;
pub mod settings;

pub use error::HotkeySettingsError;
pub use settings::{HotkeySettings, MergeReport, reconcile};

pub use hotkey_config::{
    ConfigError, HOTKEYS_FILE_NAME, HotkeyConfig, HotkeySetting, KeyChord, KeyCode, defaults,
};
pub use hotkey_keybindings::{
    HotkeyRegistry, KeyCombo, Modifiers, ParseError, is_valid, parse_key_combo,
};
