//! Loading datasets from a locale directory tree.

use fakery_core::{DataError, DirectorySource, Layout, LocaleStore, GENERIC_LOCALE};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_directory_store_end_to_end() {
    let dir = TempDir::new().unwrap();
    write(&dir, "en_US/names.json", r#"{"last_name": ["Smith", "Jones"]}"#);
    write(&dir, "generic/cars/volvo.json", r#"[{"model": "XC90"}, {"model": "V60"}]"#);
    write(&dir, "generic/words.json", r#"{"adjectives": "not an array"}"#);

    let store = LocaleStore::new(DirectorySource::new(dir.path()))
        .with_layout_prefix("cars/", Layout::Rows)
        .with_fallback_locale("en_US");

    let names = store.load_for_locale("en_GB", "names").unwrap();
    assert_eq!(names.locale(), "en_US");
    assert_eq!(names.column("last_name").unwrap().len(), 2);

    let volvo = store.load_generic("cars/volvo").unwrap();
    assert_eq!(volvo.rows().len(), 2);
    assert_eq!(volvo.rows()[1]["model"], "V60");

    assert!(matches!(
        store.load_generic("words"),
        Err(DataError::DatasetParse { .. })
    ));
    assert!(matches!(
        store.load(GENERIC_LOCALE, "nothing"),
        Err(DataError::DatasetNotFound { .. })
    ));
}

#[test]
fn test_file_changes_after_load_are_not_seen() {
    let dir = TempDir::new().unwrap();
    write(&dir, "generic/jobs.json", r#"{"jobs": ["Baker"]}"#);

    let store = LocaleStore::new(DirectorySource::new(dir.path()));
    assert_eq!(store.load_generic("jobs").unwrap().column("jobs").unwrap(), ["Baker"]);

    write(&dir, "generic/jobs.json", r#"{"jobs": ["Baker", "Smith"]}"#);
    assert_eq!(store.load_generic("jobs").unwrap().column("jobs").unwrap().len(), 1);

    store.reset();
    assert_eq!(store.load_generic("jobs").unwrap().column("jobs").unwrap().len(), 2);
}
