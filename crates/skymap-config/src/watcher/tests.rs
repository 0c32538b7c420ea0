//! Tests for the config file watcher.

use super::config_watcher::is_config_event;
use super::*;
use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    // The file may be created after the watcher starts.
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_skymap_test.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_with_existing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn debounce_is_configurable() {
    let watcher = ConfigWatcher::new(PathBuf::from("config.toml"))
        .unwrap()
        .with_debounce(Duration::from_millis(50));
    assert_eq!(watcher.debounce(), Duration::from_millis(50));
}

#[test]
fn modify_of_config_file_counts() {
    let event = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
        .add_path(PathBuf::from("/home/me/.config/skymap/config.toml"));
    assert!(is_config_event(&event, OsStr::new("config.toml")));
}

#[test]
fn create_of_config_file_counts() {
    let event = Event::new(EventKind::Create(CreateKind::File))
        .add_path(PathBuf::from("/tmp/skymap/config.toml"));
    assert!(is_config_event(&event, OsStr::new("config.toml")));
}

#[test]
fn other_files_are_ignored() {
    let event = Event::new(EventKind::Modify(ModifyKind::Any))
        .add_path(PathBuf::from("/tmp/skymap/config.toml.swp"));
    assert!(!is_config_event(&event, OsStr::new("config.toml")));
}

#[test]
fn removal_and_access_are_ignored() {
    let path = PathBuf::from("/tmp/skymap/config.toml");
    let removed = Event::new(EventKind::Remove(RemoveKind::File)).add_path(path.clone());
    let read = Event::new(EventKind::Access(AccessKind::Any)).add_path(path);
    assert!(!is_config_event(&removed, OsStr::new("config.toml")));
    assert!(!is_config_event(&read, OsStr::new("config.toml")));
}
