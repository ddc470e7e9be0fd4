//! Hotkey setting and key-chord types.

use super::key_code::KeyCode;
use serde::{Deserialize, Deserializer, Serialize};

/// A single named hotkey definition.
///
/// Every field carries a serde default so that partial entries in a settings
/// file still deserialize; validation happens later, when the settings are
/// reconciled against the default catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotkeySetting {
    /// Logical command name, e.g. "ParseAll". Used as the merge key.
    #[serde(default)]
    pub name: String,
    /// Primary key
    #[serde(default)]
    pub key1: KeyCode,
    /// Optional second stroke. A code of 0 means there is none.
    #[serde(
        default,
        deserialize_with = "deserialize_key2",
        skip_serializing_if = "Option::is_none"
    )]
    pub key2: Option<KeyCode>,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

fn deserialize_key2<'de, D>(deserializer: D) -> Result<Option<KeyCode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<KeyCode>::deserialize(deserializer)?.filter(|k| *k != KeyCode::NONE))
}

impl HotkeySetting {
    /// Create an enabled, unmodified binding of `name` to `key1`.
    pub fn new(name: impl Into<String>, key1: KeyCode) -> Self {
        Self {
            name: name.into(),
            key1,
            key2: None,
            alt: false,
            ctrl: false,
            shift: false,
            enabled: true,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_key2(mut self, key2: KeyCode) -> Self {
        self.key2 = Some(key2);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The second key, treating [`KeyCode::NONE`] as absent.
    pub fn second_key(&self) -> Option<KeyCode> {
        self.key2.filter(|k| *k != KeyCode::NONE)
    }

    /// The key combination of this setting, ignoring name and enabled state.
    pub fn chord(&self) -> KeyChord {
        KeyChord {
            key1: self.key1,
            key2: self.second_key(),
            alt: self.alt,
            ctrl: self.ctrl,
            shift: self.shift,
        }
    }

    /// True if both settings use the same key combination.
    pub fn is_key_equal(&self, other: &HotkeySetting) -> bool {
        self.chord() == other.chord()
    }
}

/// The key-combination part of a [`HotkeySetting`].
///
/// Two settings collide when their chords are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key1: KeyCode,
    pub key2: Option<KeyCode>,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}
