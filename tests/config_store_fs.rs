//! Config store against the real filesystem

use std::fs;

use noitaedit::config::ConfigStore;
use noitaedit::console::ScriptedConsole;
use noitaedit::fs::RealFs;
use noitaedit::platform::{FixedPlatform, Platform};
use noitaedit::PathResolver;
use tempfile::tempdir;

#[test]
fn test_ensure_creates_nested_dir_and_empty_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("appdata").join("NoitaEdit").join("setup.cf");
    let store = ConfigStore::new(RealFs, &file);

    let created = store.ensure_file_exists().unwrap();

    assert_eq!(created, file);
    assert!(file.is_file());
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn test_ensure_keeps_existing_content() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.cf");
    fs::write(&file, "savePath = \"/x\"\n").unwrap();
    let store = ConfigStore::new(RealFs, &file);

    store.ensure_file_exists().unwrap();
    store.ensure_file_exists().unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), "savePath = \"/x\"\n");
}

#[test]
fn test_set_then_get_round_trip() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.cf");
    let store = ConfigStore::new(RealFs, &file);

    store.set_value(&file, "k", "v").unwrap();

    assert_eq!(store.get_value(&file, "k").unwrap(), "v");
    assert_eq!(fs::read_to_string(&file).unwrap(), "k = \"v\"\n");
}

#[test]
fn test_update_in_place_keeps_order() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.cf");
    fs::write(&file, "a = 1\r\nsavePath = \"/old\"\r\nb = 2\r\n").unwrap();
    let store = ConfigStore::new(RealFs, &file);

    store.set_value(&file, "savePath", "/new").unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "a = 1\nsavePath = /new\nb = 2\n"
    );
    assert_eq!(store.get_value(&file, "savePath").unwrap(), "/new");
}

#[test]
fn test_non_text_file_reads_as_missing_key() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.cf");
    fs::write(&file, [0xc3, 0x28, b'\n']).unwrap();
    let store = ConfigStore::new(RealFs, &file);

    let err = store.get_value(&file, "savePath").unwrap_err();

    assert!(err.is_key_not_found());
}

#[test]
fn test_unescaped_value_is_stored_verbatim() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.cf");
    let store = ConfigStore::new(RealFs, &file);

    store.set_value(&file, "k", "a = \"b\"").unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), "k = \"a = \"b\"\"\n");
    assert_eq!(store.get_value(&file, "k").unwrap(), "a = \"b\"");
}

#[test]
fn test_set_on_non_text_file_appends() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.cf");
    fs::write(&file, b"a = \xff\n").unwrap();
    let store = ConfigStore::new(RealFs, &file);

    store.set_value(&file, "savePath", "/x").unwrap();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "a = \u{FFFD}\nsavePath = \"/x\"\n"
    );
}

#[test]
fn test_resolve_over_non_text_file_keeps_typed_path() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.cf");
    fs::write(&file, b"a = \xff\n").unwrap();
    let store = ConfigStore::new(RealFs, &file);
    let platform = FixedPlatform::new(Platform::Unsupported("haiku".into()), "/home/x");
    let console = ScriptedConsole::new(["/typed/path"]);
    let mut resolver = PathResolver::new(store, platform, console);

    assert_eq!(resolver.resolve_save_path().unwrap(), "/typed/path");
    assert_eq!(resolver.console().reads, 1);

    // The next run finds the stored entry without prompting
    let store = ConfigStore::new(RealFs, &file);
    assert_eq!(store.get_value(&file, "savePath").unwrap(), "/typed/path");
}
