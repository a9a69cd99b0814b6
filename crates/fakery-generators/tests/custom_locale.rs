//! Serving user-supplied locales from disk through the generator layouts.

use std::fs;
use std::sync::Arc;

use fakery_core::{DirectorySource, LocaleStore};
use fakery_generators::{configure, datasets, Faker, GeneratorError};
use tempfile::TempDir;

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn directory_store(dir: &TempDir) -> Arc<LocaleStore> {
    let store = configure(LocaleStore::new(DirectorySource::new(dir.path())))
        .with_fallback_locale("en_US");
    Arc::new(store)
}

#[test]
fn test_custom_locale_with_fallback() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "fr_FR/names.json",
        r#"{
            "first_name_male": ["Jean", "Luc"],
            "first_name_female": ["Claire", "Anne"],
            "last_name": ["Dubois", "Moreau"]
        }"#,
    );
    write(
        &dir,
        "en_US/names.json",
        r#"{
            "first_name_male": ["John"],
            "first_name_female": ["Jane"],
            "last_name": ["Smith"]
        }"#,
    );
    let store = directory_store(&dir);

    let mut french = Faker::with_seed(store.clone(), 5).in_locale("fr_FR");
    for _ in 0..20 {
        let last = french.last_name().unwrap();
        assert!(last == "Dubois" || last == "Moreau", "{last}");
    }

    let mut german = Faker::with_seed(store.clone(), 5).in_locale("de_DE");
    assert_eq!(german.last_name().unwrap(), "Smith");
    assert_eq!(german.name().unwrap().split_whitespace().count(), 2);
}

#[test]
fn test_custom_car_models_use_row_layout() {
    let dir = TempDir::new().unwrap();
    write(&dir, "generic/car.json", r#"{"car_makers": ["Volvo"]}"#);
    write(
        &dir,
        "generic/cars/volvo.json",
        r#"[{"model": "XC90"}, {"model": "V60"}]"#,
    );
    let mut faker = Faker::with_seed(directory_store(&dir), 8);

    let (make, model) = faker.car_make_and_model().unwrap();
    assert_eq!(make, "Volvo");
    assert!(model == "XC90" || model == "V60", "{model}");
}

#[test]
fn test_missing_generic_dataset_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut faker = Faker::with_seed(directory_store(&dir), 9);
    assert!(matches!(faker.job_title(), Err(GeneratorError::Data(_))));
    assert!(faker.store().load_generic(datasets::JOBS).is_err());
}

#[test]
fn test_empty_critical_column_is_reported() {
    let dir = TempDir::new().unwrap();
    write(&dir, "en_US/names.json", r#"{"last_name": []}"#);
    let mut faker = Faker::with_seed(directory_store(&dir), 10);
    assert!(matches!(
        faker.last_name(),
        Err(GeneratorError::EmptyData { .. })
    ));
}
