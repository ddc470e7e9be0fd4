//! Loading and saving reconciled hotkey settings.

use hotkey_settings::{HotkeySetting, HotkeySettings, HotkeySettingsError, KeyCode, defaults};
use tempfile::TempDir;

#[test]
fn load_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let settings =
        HotkeySettings::load_from(defaults::hotkeys(), &dir.path().join("hotkeys.yaml")).unwrap();
    assert_eq!(settings.settings(), defaults::hotkeys().as_slice());
}

#[test]
fn save_and_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hotkeys.yaml");

    let mut settings = HotkeySettings::new(defaults::hotkeys()).unwrap();
    settings.merge(vec![
        HotkeySetting::new("ParseAll", KeyCode::F5).with_alt(),
        HotkeySetting::new("CodeExplorer", KeyCode::F5).with_alt(),
    ]);
    settings.save_to(&path).unwrap();

    let reloaded = HotkeySettings::load_from(defaults::hotkeys(), &path).unwrap();
    assert_eq!(reloaded, settings);
    assert!(!reloaded.get("CodeExplorer").unwrap().enabled);
}

#[test]
fn hand_edited_file_is_healed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hotkeys.yaml");
    std::fs::write(
        &path,
        r#"
hotkeys:
  - name: FindSymbol
    key1: F3
  - name: FindSymbol
    key1: F4
  - name: CodeExplorer
    key1: Hyper
    ctrl: true
  - name: TestExplorer
    key1: 9999
  - name: Obsolete
    key1: F6
  - 17
  - name: IndentModule
"#,
    )
    .unwrap();

    let settings = HotkeySettings::load_from(defaults::hotkeys(), &path).unwrap();
    let defaults = defaults::hotkeys();

    assert_eq!(settings.settings().len(), defaults.len());
    assert_eq!(
        settings.get("FindSymbol"),
        Some(&HotkeySetting::new("FindSymbol", KeyCode::F3))
    );
    for name in ["CodeExplorer", "TestExplorer", "IndentModule"] {
        let default = defaults.iter().find(|d| d.name == name).unwrap();
        assert_eq!(settings.get(name), Some(default), "{name}");
    }
    assert!(settings.get("Obsolete").is_none());
}

#[test]
fn zero_second_key_in_file_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hotkeys.yaml");
    std::fs::write(
        &path,
        r#"
hotkeys:
  - name: CodeExplorer
    key1: F9
    key2: 0
"#,
    )
    .unwrap();

    let settings = HotkeySettings::load_from(defaults::hotkeys(), &path).unwrap();
    assert_eq!(
        settings.get("CodeExplorer"),
        Some(&HotkeySetting::new("CodeExplorer", KeyCode::F9))
    );
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hotkeys.yaml");
    std::fs::write(&path, "hotkeys: [ {{ not yaml").unwrap();

    let settings = HotkeySettings::load_from(defaults::hotkeys(), &path).unwrap();
    assert_eq!(settings.settings(), defaults::hotkeys().as_slice());
}

#[test]
fn bad_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let catalog = vec![
        HotkeySetting::new("Run", KeyCode::F5),
        HotkeySetting::new("Run", KeyCode::F6),
    ];

    let err = HotkeySettings::load_from(catalog, &dir.path().join("hotkeys.yaml")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<HotkeySettingsError>(),
        Some(&HotkeySettingsError::DuplicateDefault {
            name: "Run".to_string()
        })
    );
}
