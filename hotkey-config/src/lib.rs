//! Configuration types for hotkey settings.
//!
//! This crate provides the data model shared by the rest of the workspace:
//!
//! - `HotkeySetting`, `KeyChord` and `KeyCode` value types
//! - The factory-default hotkey catalog
//! - Forgiving YAML persistence of a hotkey list

pub mod config;
pub mod defaults;
pub mod error;
pub mod types;

pub use config::{HOTKEYS_FILE_NAME, HotkeyConfig};
pub use error::ConfigError;
pub use types::{HotkeySetting, KeyChord, KeyCode};
