//! Typed errors for hotkey settings.

use thiserror::Error;

/// Errors raised when building [`HotkeySettings`](crate::HotkeySettings).
///
/// Reconciling incoming settings never fails; only a broken default catalog
/// is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeySettingsError {
    /// Two entries of the default catalog share a command name.
    #[error("duplicate command '{name}' in default hotkey catalog")]
    DuplicateDefault {
        /// The repeated command name.
        name: String,
    },
}
