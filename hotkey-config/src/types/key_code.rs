//! Virtual-key codes and the static key table.
//!
//! A [`KeyCode`] is a raw Windows-style virtual-key code. Only codes listed in
//! the key table are *mappable*; everything else (including the modifier keys
//! themselves) is rejected when a binding is validated.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A virtual-key code.
///
/// Stored as a `u32` so that out-of-range values read from a hand-edited
/// settings file survive deserialization and can be rejected by validation
/// instead of failing the whole load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// No key. Never valid as a binding key.
    pub const NONE: KeyCode = KeyCode(0);

    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);
    pub const END: KeyCode = KeyCode(0x23);
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);
    pub const INSERT: KeyCode = KeyCode(0x2D);
    pub const DELETE: KeyCode = KeyCode(0x2E);

    pub const F1: KeyCode = KeyCode(0x70);
    pub const F2: KeyCode = KeyCode(0x71);
    pub const F3: KeyCode = KeyCode(0x72);
    pub const F4: KeyCode = KeyCode(0x73);
    pub const F5: KeyCode = KeyCode(0x74);
    pub const F6: KeyCode = KeyCode(0x75);
    pub const F7: KeyCode = KeyCode(0x76);
    pub const F8: KeyCode = KeyCode(0x77);
    pub const F9: KeyCode = KeyCode(0x78);
    pub const F10: KeyCode = KeyCode(0x79);
    pub const F11: KeyCode = KeyCode(0x7A);
    pub const F12: KeyCode = KeyCode(0x7B);

    /// The `` ` `` / `~` key on a US layout.
    pub const BACKTICK: KeyCode = KeyCode(0xC0);

    pub const SHIFT_KEY: KeyCode = KeyCode(0x10);
    pub const CONTROL_KEY: KeyCode = KeyCode(0x11);
    pub const ALT_KEY: KeyCode = KeyCode(0x12);

    /// Key code for an ASCII letter or digit (`'a'`, `'Q'`, `'7'`).
    pub const fn from_char(c: char) -> Option<KeyCode> {
        match c {
            'A'..='Z' | '0'..='9' => Some(KeyCode(c as u32)),
            'a'..='z' => Some(KeyCode(c.to_ascii_uppercase() as u32)),
            _ => None,
        }
    }

    /// Canonical name of a mappable key, `None` for anything else.
    pub fn name(self) -> Option<&'static str> {
        KEY_TABLE
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }

    /// Look up a mappable key by name or alias (case-insensitive).
    ///
    /// Modifier keys are never returned.
    pub fn from_name(name: &str) -> Option<KeyCode> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        KEY_TABLE
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(code, _)| KeyCode(*code))
            .or_else(|| {
                KEY_ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|(_, code)| KeyCode(*code))
            })
    }

    /// True if this code is present in the key table.
    pub fn is_mappable(self) -> bool {
        self.name().is_some()
    }

    /// True for Shift, Control, Alt and the Windows keys, in any variant.
    pub fn is_modifier(self) -> bool {
        MODIFIER_KEYS.contains(&self.0)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

impl Serialize for KeyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u32(self.0),
        }
    }
}

/// Either representation accepted in a settings file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKeyCode {
    Code(u32),
    Name(String),
}

impl<'de> Deserialize<'de> for KeyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawKeyCode::deserialize(deserializer)? {
            RawKeyCode::Code(code) => KeyCode(code),
            RawKeyCode::Name(name) => KeyCode::from_name(&name).unwrap_or_else(|| {
                log::warn!("Unknown key name '{}' in hotkey settings", name);
                KeyCode::NONE
            }),
        })
    }
}

// ============================================================================
// Key table
// ============================================================================

const MODIFIER_KEYS: &[u32] = &[
    0x10, // Shift
    0x11, // Control
    0x12, // Alt (Menu)
    0x5B, // Left Windows
    0x5C, // Right Windows
    0xA0, 0xA1, // Left/Right Shift
    0xA2, 0xA3, // Left/Right Control
    0xA4, 0xA5, // Left/Right Alt
];

const KEY_TABLE: &[(u32, &str)] = &[
    // Editing and whitespace
    (0x08, "Backspace"),
    (0x09, "Tab"),
    (0x0D, "Enter"),
    (0x13, "Pause"),
    (0x14, "CapsLock"),
    (0x1B, "Escape"),
    (0x20, "Space"),
    // Navigation
    (0x21, "PageUp"),
    (0x22, "PageDown"),
    (0x23, "End"),
    (0x24, "Home"),
    (0x25, "Left"),
    (0x26, "Up"),
    (0x27, "Right"),
    (0x28, "Down"),
    (0x2C, "PrintScreen"),
    (0x2D, "Insert"),
    (0x2E, "Delete"),
    // Digits
    (0x30, "0"),
    (0x31, "1"),
    (0x32, "2"),
    (0x33, "3"),
    (0x34, "4"),
    (0x35, "5"),
    (0x36, "6"),
    (0x37, "7"),
    (0x38, "8"),
    (0x39, "9"),
    // Letters
    (0x41, "A"),
    (0x42, "B"),
    (0x43, "C"),
    (0x44, "D"),
    (0x45, "E"),
    (0x46, "F"),
    (0x47, "G"),
    (0x48, "H"),
    (0x49, "I"),
    (0x4A, "J"),
    (0x4B, "K"),
    (0x4C, "L"),
    (0x4D, "M"),
    (0x4E, "N"),
    (0x4F, "O"),
    (0x50, "P"),
    (0x51, "Q"),
    (0x52, "R"),
    (0x53, "S"),
    (0x54, "T"),
    (0x55, "U"),
    (0x56, "V"),
    (0x57, "W"),
    (0x58, "X"),
    (0x59, "Y"),
    (0x5A, "Z"),
    // Numeric keypad
    (0x60, "NumPad0"),
    (0x61, "NumPad1"),
    (0x62, "NumPad2"),
    (0x63, "NumPad3"),
    (0x64, "NumPad4"),
    (0x65, "NumPad5"),
    (0x66, "NumPad6"),
    (0x67, "NumPad7"),
    (0x68, "NumPad8"),
    (0x69, "NumPad9"),
    (0x6A, "Multiply"),
    (0x6B, "Add"),
    (0x6D, "Subtract"),
    (0x6E, "Decimal"),
    (0x6F, "Divide"),
    // Function keys
    (0x70, "F1"),
    (0x71, "F2"),
    (0x72, "F3"),
    (0x73, "F4"),
    (0x74, "F5"),
    (0x75, "F6"),
    (0x76, "F7"),
    (0x77, "F8"),
    (0x78, "F9"),
    (0x79, "F10"),
    (0x7A, "F11"),
    (0x7B, "F12"),
    (0x7C, "F13"),
    (0x7D, "F14"),
    (0x7E, "F15"),
    (0x7F, "F16"),
    (0x80, "F17"),
    (0x81, "F18"),
    (0x82, "F19"),
    (0x83, "F20"),
    (0x84, "F21"),
    (0x85, "F22"),
    (0x86, "F23"),
    (0x87, "F24"),
    // Locks
    (0x90, "NumLock"),
    (0x91, "ScrollLock"),
    // Punctuation by US-layout position
    (0xBA, ";"),
    (0xBB, "="),
    (0xBC, ","),
    (0xBD, "-"),
    (0xBE, "."),
    (0xBF, "/"),
    (0xC0, "`"),
    (0xDB, "["),
    (0xDC, "\\"),
    (0xDD, "]"),
    (0xDE, "'"),
];

const KEY_ALIASES: &[(&str, u32)] = &[
    ("back", 0x08),
    ("return", 0x0D),
    ("esc", 0x1B),
    ("spacebar", 0x20),
    ("pgup", 0x21),
    ("prior", 0x21),
    ("pgdn", 0x22),
    ("next", 0x22),
    ("arrowleft", 0x25),
    ("arrowup", 0x26),
    ("arrowright", 0x27),
    ("arrowdown", 0x28),
    ("prtsc", 0x2C),
    ("ins", 0x2D),
    ("del", 0x2E),
    ("scroll", 0x91),
    ("semicolon", 0xBA),
    ("oem1", 0xBA),
    ("equal", 0xBB),
    ("oemplus", 0xBB),
    ("comma", 0xBC),
    ("oemcomma", 0xBC),
    ("minus", 0xBD),
    ("oemminus", 0xBD),
    ("period", 0xBE),
    ("oemperiod", 0xBE),
    ("slash", 0xBF),
    ("oem2", 0xBF),
    ("backquote", 0xC0),
    ("backtick", 0xC0),
    ("oem3", 0xC0),
    ("bracketleft", 0xDB),
    ("oem4", 0xDB),
    ("backslash", 0xDC),
    ("oem5", 0xDC),
    ("bracketright", 0xDD),
    ("oem6", 0xDD),
    ("quote", 0xDE),
    ("oem7", 0xDE),
];
