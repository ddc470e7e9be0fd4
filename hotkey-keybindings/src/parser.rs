//! Key combination parser.
//!
//! Converts between [`HotkeySetting`] key fields, human-readable strings such
//! as "Ctrl+Shift+F5" and the [`KeyCombo`] representation. A second stroke is
//! written after a space: "Ctrl+K C".

use hotkey_config::{HotkeySetting, KeyCode};
use std::fmt;
use thiserror::Error;

/// Error type for key parsing and validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty key combination")]
    Empty,

    #[error("Key combination ends with modifier, no key specified")]
    MissingKey,

    #[error("Multiple keys specified: already have key, found '{0}'")]
    MultipleKeys(String),

    #[error("Unknown key: '{0}'")]
    UnknownKey(String),

    #[error("Key code {0} has no key mapping")]
    UnmappableKeyCode(KeyCode),

    #[error("Modifier key {0} cannot be bound on its own")]
    ModifierAsKey(KeyCode),

    #[error("At most two keystrokes are supported, found {0}")]
    TooManyStrokes(usize),

    #[error("Second keystroke '{0}' cannot carry modifiers")]
    ModifierOnSecondStroke(String),
}

/// Set of active modifiers for a key combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A validated key combination (modifiers + key, optional second stroke).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: KeyCode,
    pub then: Option<KeyCode>,
}

impl KeyCombo {
    /// Build a combo from the key fields of a setting.
    ///
    /// This is the structural validity check for settings: it succeeds iff
    /// the primary key, and the second stroke when present, are mappable
    /// non-modifier keys.
    pub fn from_setting(setting: &HotkeySetting) -> Result<Self, ParseError> {
        let key = check_key(setting.key1)?;
        let then = setting.second_key().map(check_key).transpose()?;

        Ok(KeyCombo {
            modifiers: Modifiers {
                ctrl: setting.ctrl,
                alt: setting.alt,
                shift: setting.shift,
            },
            key,
            then,
        })
    }

    /// Create a setting named `name` that uses this combo.
    pub fn to_setting(&self, name: impl Into<String>, enabled: bool) -> HotkeySetting {
        HotkeySetting {
            name: name.into(),
            key1: self.key,
            key2: self.then,
            alt: self.modifiers.alt,
            ctrl: self.modifiers.ctrl,
            shift: self.modifiers.shift,
            enabled,
        }
    }
}

fn check_key(code: KeyCode) -> Result<KeyCode, ParseError> {
    if code.is_modifier() {
        Err(ParseError::ModifierAsKey(code))
    } else if !code.is_mappable() {
        Err(ParseError::UnmappableKeyCode(code))
    } else {
        Ok(code)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        parts.push(self.key.to_string());

        write!(f, "{}", parts.join("+"))?;
        if let Some(then) = self.then {
            write!(f, " {}", then)?;
        }
        Ok(())
    }
}

/// Parse a key combination string into a KeyCombo.
///
/// Supported format: "Modifier+Modifier+Key [Key]"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option`, `Menu` - Alt key
/// - `Shift` - Shift key
///
/// Keys are anything in the key table: `A`-`Z`, `0`-`9`, `F1`-`F24`,
/// `Enter`, `Escape`, `PageUp`, `` ` ``, `NumPad5`, etc. (case-insensitive).
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    let strokes: Vec<&str> = s.split_whitespace().collect();

    match strokes.as_slice() {
        [] => Err(ParseError::Empty),
        [first] => parse_stroke(first),
        [first, second] => {
            let mut combo = parse_stroke(first)?;
            let next = parse_stroke(second)?;
            if next.modifiers != Modifiers::default() {
                return Err(ParseError::ModifierOnSecondStroke(second.to_string()));
            }
            combo.then = Some(next.key);
            Ok(combo)
        }
        _ => Err(ParseError::TooManyStrokes(strokes.len())),
    }
}

/// Parse one "Modifier+...+Key" stroke.
fn parse_stroke(s: &str) -> Result<KeyCombo, ParseError> {
    let parts: Vec<&str> = s.split('+').map(str::trim).collect();

    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;

        // Check if this is a modifier
        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" | "menu" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError::MultipleKeys(part.to_string()));
            }
            key_part = Some(*part);
        } else if is_last {
            return Err(ParseError::MissingKey);
        }
    }

    let key_str = key_part.ok_or(ParseError::MissingKey)?;
    if key_str.is_empty() {
        return Err(ParseError::MissingKey);
    }
    let key =
        KeyCode::from_name(key_str).ok_or_else(|| ParseError::UnknownKey(key_str.to_string()))?;

    Ok(KeyCombo {
        modifiers,
        key,
        then: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyCode {
        KeyCode::from_char(c).unwrap()
    }

    #[test]
    fn test_simple_key() {
        let combo = parse_key_combo("A").unwrap();
        assert_eq!(combo.modifiers, Modifiers::default());
        assert_eq!(combo.key, key('A'));
        assert_eq!(combo.then, None);
    }

    #[test]
    fn test_ctrl_shift_key() {
        let combo = parse_key_combo("Ctrl+Shift+B").unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert!(!combo.modifiers.alt);
        assert_eq!(combo.key, key('B'));
    }

    #[test]
    fn test_function_key() {
        let combo = parse_key_combo("Alt+F5").unwrap();
        assert!(combo.modifiers.alt);
        assert_eq!(combo.key, KeyCode::F5);
    }

    #[test]
    fn test_case_insensitive() {
        let combo = parse_key_combo("ctrl+shift+pageup").unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert_eq!(combo.key, KeyCode::PAGE_UP);
    }

    #[test]
    fn test_modifier_aliases() {
        assert!(parse_key_combo("Control+A").unwrap().modifiers.ctrl);
        assert!(parse_key_combo("Option+A").unwrap().modifiers.alt);
        assert!(parse_key_combo("Menu+A").unwrap().modifiers.alt);
    }

    #[test]
    fn test_second_stroke() {
        let combo = parse_key_combo("Ctrl+K C").unwrap();
        assert!(combo.modifiers.ctrl);
        assert_eq!(combo.key, key('K'));
        assert_eq!(combo.then, Some(key('C')));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(parse_key_combo(""), Err(ParseError::Empty));
        assert_eq!(parse_key_combo("   "), Err(ParseError::Empty));
        assert_eq!(parse_key_combo("Ctrl"), Err(ParseError::MissingKey));
        assert_eq!(parse_key_combo("Ctrl+Shift"), Err(ParseError::MissingKey));
        assert_eq!(parse_key_combo("Ctrl+"), Err(ParseError::MissingKey));
        assert_eq!(
            parse_key_combo("A+B"),
            Err(ParseError::MultipleKeys("B".to_string()))
        );
        assert_eq!(
            parse_key_combo("Ctrl+Hyper"),
            Err(ParseError::UnknownKey("Hyper".to_string()))
        );
        assert_eq!(parse_key_combo("A B C"), Err(ParseError::TooManyStrokes(3)));
        assert_eq!(
            parse_key_combo("Ctrl+K Shift+C"),
            Err(ParseError::ModifierOnSecondStroke("Shift+C".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_key_combo("shift+ctrl+f5").unwrap().to_string(), "Ctrl+Shift+F5");
        assert_eq!(parse_key_combo("Alt+Esc").unwrap().to_string(), "Alt+Escape");
        assert_eq!(parse_key_combo("ctrl+k c").unwrap().to_string(), "Ctrl+K C");
    }

    #[test]
    fn test_from_setting_valid() {
        let setting = HotkeySetting::new("Run", KeyCode::F5).with_ctrl().with_key2(key('R'));
        let combo = KeyCombo::from_setting(&setting).unwrap();
        assert!(combo.modifiers.ctrl);
        assert_eq!(combo.key, KeyCode::F5);
        assert_eq!(combo.then, Some(key('R')));
        assert_eq!(combo.to_setting("Run", true), setting);
    }

    #[test]
    fn test_from_setting_rejects_unmappable_codes() {
        let setting = HotkeySetting::new("Run", KeyCode(0xFF));
        assert_eq!(
            KeyCombo::from_setting(&setting),
            Err(ParseError::UnmappableKeyCode(KeyCode(0xFF)))
        );

        let setting = HotkeySetting::new("Run", KeyCode::NONE);
        assert!(KeyCombo::from_setting(&setting).is_err());

        let setting = HotkeySetting::new("Run", KeyCode::F5).with_key2(KeyCode(0x1234));
        assert!(KeyCombo::from_setting(&setting).is_err());
    }

    #[test]
    fn test_from_setting_zero_second_key_is_single_stroke() {
        let setting = HotkeySetting::new("Run", KeyCode::F9).with_key2(KeyCode::NONE);
        let combo = KeyCombo::from_setting(&setting).unwrap();
        assert_eq!(combo.key, KeyCode::F9);
        assert_eq!(combo.then, None);
        assert_eq!(combo.to_string(), "F9");
    }

    #[test]
    fn test_from_setting_rejects_modifier_keys() {
        let setting = HotkeySetting::new("Run", KeyCode::SHIFT_KEY).with_ctrl();
        assert_eq!(
            KeyCombo::from_setting(&setting),
            Err(ParseError::ModifierAsKey(KeyCode::SHIFT_KEY))
        );

        let setting = HotkeySetting::new("Run", KeyCode::F5).with_key2(KeyCode::CONTROL_KEY);
        assert!(KeyCombo::from_setting(&setting).is_err());
    }
}
