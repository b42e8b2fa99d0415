use std::fs;
use tempfile::TempDir;

use launcher_settings::cli::open_manager;
use launcher_settings::constants::storage;
use launcher_settings::{DesktopMode, Item, Page, PreferenceRecord};

#[test]
fn test_fresh_root_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let mut manager = open_manager(dir.path().to_path_buf());

    assert!(manager.load().unwrap());
    assert_eq!(manager.preferences(), Some(&PreferenceRecord::default()));
    assert!(manager.desktop_pages().is_empty());
    assert!(manager.dock().is_empty());
}

#[test]
fn test_corrupt_blob_loads_defaults_and_reports_failure() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(storage::SETTINGS_BLOB), "{ this is not json").unwrap();

    let mut manager = open_manager(dir.path().to_path_buf());
    assert!(!manager.load().unwrap());
    assert_eq!(manager.preferences(), Some(&PreferenceRecord::default()));
}

#[test]
fn test_blob_from_older_build_keeps_known_fields() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(storage::SETTINGS_BLOB),
        r#"{"iconSize":48,"desktopMode":"ShowAllApps","hiddenList":null,"someRemovedField":true}"#,
    )
    .unwrap();

    let mut manager = open_manager(dir.path().to_path_buf());
    assert!(manager.load().unwrap());
    let prefs = manager.preferences().unwrap();
    assert_eq!(prefs.icon_size, 48);
    assert_eq!(prefs.desktop_mode, DesktopMode::ShowAllApps);
    assert_eq!(prefs.desktop_grid_x, 4);
}

#[test]
fn test_save_and_reload_layout_and_sweep_icons() {
    let dir = TempDir::new().unwrap();
    let icons = dir.path().join(storage::ICON_DIR);
    fs::create_dir_all(&icons).unwrap();
    for id in ["kept", "dropped"] {
        fs::write(icons.join(format!("{id}.png")), b"png").unwrap();
    }

    let mut manager = open_manager(dir.path().to_path_buf());
    manager.load().unwrap();
    manager
        .desktop_pages_mut()
        .push(Page::new(vec![Item::shortcut("tel:1", Some("kept"), 1, 1)]));
    manager.set_swipe_down_gesture(3);

    let deleted = manager.commit_and_sweep().unwrap();
    assert_eq!(deleted.into_iter().collect::<Vec<_>>(), vec!["dropped".to_string()]);
    assert!(icons.join("kept.png").exists());
    assert!(!icons.join("dropped.png").exists());

    let mut reloaded = open_manager(dir.path().to_path_buf());
    reloaded.load().unwrap();
    assert_eq!(reloaded.desktop_pages(), manager.desktop_pages());
    assert_eq!(reloaded.preferences().unwrap().swipe_down, 3);
}

#[test]
fn test_unreadable_dock_fails_load_and_refuses_save() {
    let dir = TempDir::new().unwrap();
    let layout = dir.path().join("layout");
    fs::create_dir_all(&layout).unwrap();
    fs::write(layout.join("desktop.json"), "[[]]").unwrap();
    fs::write(layout.join("dock.json"), "[{").unwrap();

    let mut manager = open_manager(dir.path().to_path_buf());
    assert!(manager.load().is_err());
    assert!(!manager.is_initialized());

    assert_eq!(manager.save().unwrap(), None);
    assert_eq!(fs::read_to_string(layout.join("dock.json")).unwrap(), "[{");
    assert_eq!(fs::read_to_string(layout.join("desktop.json")).unwrap(), "[[]]");
    assert!(!dir.path().join(storage::SETTINGS_BLOB).exists());
}
