//! Reconciliation of incoming hotkey settings against the default catalog.
//!
//! The default catalog fixes the set of command names. Incoming settings
//! (from a settings file, a UI, anywhere) are untrusted: unknown names,
//! invalid key combinations and repeated names are dropped, and the result
//! always holds exactly one setting per default name. No two settings in the
//! result share an enabled key combination; a setting that collides with one
//! placed earlier is kept but disabled.

use crate::error::HotkeySettingsError;
use anyhow::Result;
use hotkey_config::{HotkeyConfig, HotkeySetting, KeyChord};
use std::collections::HashSet;
use std::path::Path;

/// Counts from a single reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Incoming settings placed in the result
    pub kept: usize,
    /// Default settings used because no incoming setting had their name
    pub filled: usize,
    /// Placed settings whose enabled flag was cleared by a collision
    pub disabled: usize,
    /// Incoming settings with a name not in the catalog
    pub dropped_foreign: usize,
    /// Incoming settings whose key combination is not valid
    pub dropped_invalid: usize,
    /// Incoming settings repeating a name already accepted
    pub dropped_duplicate: usize,
}

impl MergeReport {
    /// Total number of incoming settings that were discarded.
    pub fn dropped(&self) -> usize {
        self.dropped_foreign + self.dropped_invalid + self.dropped_duplicate
    }
}

/// Reconcile `incoming` against `defaults`.
///
/// Returns one setting per default. Incoming settings with a known name and
/// a valid key combination are placed first, in input order, keeping only the
/// first setting for each name. Defaults whose name was not supplied are then
/// appended in catalog order. Any setting whose key combination was already
/// placed is disabled. Empty input yields the defaults unchanged.
pub fn reconcile<I>(defaults: &[HotkeySetting], incoming: I) -> (Vec<HotkeySetting>, MergeReport)
where
    I: IntoIterator<Item = HotkeySetting>,
{
    let mut report = MergeReport::default();

    let known: HashSet<&str> = defaults.iter().map(|d| d.name.as_str()).collect();
    let mut supplied: HashSet<String> = HashSet::with_capacity(defaults.len());
    let mut candidates: Vec<HotkeySetting> = Vec::with_capacity(defaults.len());

    let mut received = 0usize;
    for candidate in incoming {
        received += 1;

        if !known.contains(candidate.name.as_str()) {
            log::debug!("Dropping hotkey for unknown command '{}'", candidate.name);
            report.dropped_foreign += 1;
            continue;
        }
        if let Err(e) = hotkey_keybindings::KeyCombo::from_setting(&candidate) {
            log::warn!("Dropping invalid hotkey for '{}': {}", candidate.name, e);
            report.dropped_invalid += 1;
            continue;
        }
        if !supplied.insert(candidate.name.clone()) {
            log::debug!("Dropping repeated hotkey for '{}'", candidate.name);
            report.dropped_duplicate += 1;
            continue;
        }
        candidates.push(candidate);
    }

    if received == 0 {
        return (defaults.to_vec(), report);
    }

    report.kept = candidates.len();
    let fills: Vec<HotkeySetting> = defaults
        .iter()
        .filter(|d| !supplied.contains(&d.name))
        .cloned()
        .collect();
    report.filled = fills.len();

    let mut placed: HashSet<KeyChord> = HashSet::with_capacity(defaults.len());
    let mut active = Vec::with_capacity(defaults.len());

    for mut setting in candidates.into_iter().chain(fills) {
        let collides = !placed.insert(setting.chord());
        if collides && setting.enabled {
            log::info!(
                "Disabling hotkey for '{}': key combination already in use",
                setting.name
            );
            setting.enabled = false;
            report.disabled += 1;
        }
        active.push(setting);
    }

    log::info!(
        "Reconciled {} incoming hotkeys: {} kept, {} filled from defaults, {} disabled, {} dropped",
        received,
        report.kept,
        report.filled,
        report.disabled,
        report.dropped()
    );
    (active, report)
}

/// The authoritative hotkey settings of an application.
///
/// Holds the default catalog for its whole lifetime, and the reconciled
/// settings once [`merge`](Self::merge) has been called. Reads before the
/// first merge return the defaults.
#[derive(Debug, Clone)]
pub struct HotkeySettings {
    defaults: Vec<HotkeySetting>,
    active: Option<Vec<HotkeySetting>>,
}

impl HotkeySettings {
    /// Create settings backed by the `defaults` catalog.
    ///
    /// # Errors
    ///
    /// Returns [`HotkeySettingsError::DuplicateDefault`] if two defaults share
    /// a name.
    pub fn new(defaults: Vec<HotkeySetting>) -> Result<Self, HotkeySettingsError> {
        let mut names = HashSet::with_capacity(defaults.len());
        for setting in &defaults {
            if !names.insert(setting.name.as_str()) {
                return Err(HotkeySettingsError::DuplicateDefault {
                    name: setting.name.clone(),
                });
            }
        }

        log::debug!("Hotkey catalog holds {} commands", defaults.len());
        Ok(Self {
            defaults,
            active: None,
        })
    }

    /// The current settings.
    pub fn settings(&self) -> &[HotkeySetting] {
        self.active.as_deref().unwrap_or(&self.defaults)
    }

    /// The default catalog.
    pub fn defaults(&self) -> &[HotkeySetting] {
        &self.defaults
    }

    /// The current setting for command `name`.
    pub fn get(&self, name: &str) -> Option<&HotkeySetting> {
        self.settings().iter().find(|s| s.name == name)
    }

    /// Replace the current settings with `incoming` reconciled against the
    /// defaults. Never fails; see [`reconcile`] for the rules.
    pub fn merge<I>(&mut self, incoming: I) -> MergeReport
    where
        I: IntoIterator<Item = HotkeySetting>,
    {
        let (active, report) = reconcile(&self.defaults, incoming);
        self.active = Some(active);
        report
    }

    /// Restore the default settings.
    pub fn reset(&mut self) {
        self.active = Some(self.defaults.clone());
    }

    /// Create settings from `defaults` and merge the file at `path` into them.
    ///
    /// A missing, unreadable or unparsable file is logged and leaves the
    /// defaults in place.
    pub fn load_from(defaults: Vec<HotkeySetting>, path: &Path) -> Result<Self> {
        let mut settings = Self::new(defaults)?;
        match HotkeyConfig::load_from(path) {
            Ok(config) => {
                settings.merge(config.hotkeys);
            }
            Err(e) => {
                log::error!("Failed to load hotkey settings, using defaults: {}", e);
                settings.reset();
            }
        }
        Ok(settings)
    }

    /// Save the current settings to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        HotkeyConfig::new(self.settings().to_vec()).save_to(path)?;
        Ok(())
    }
}

impl PartialEq for HotkeySettings {
    fn eq(&self, other: &Self) -> bool {
        self.settings() == other.settings()
    }
}

impl Eq for HotkeySettings {}
