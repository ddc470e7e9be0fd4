//! Hotkey data types.
//!
//! - `hotkey`: `HotkeySetting`, `KeyChord`
//! - `key_code`: `KeyCode` and the static key table

pub mod hotkey;
pub mod key_code;

pub use hotkey::{HotkeySetting, KeyChord};
pub use key_code::KeyCode;
