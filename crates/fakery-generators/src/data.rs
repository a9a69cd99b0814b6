//! Dataset ids and the compiled-in default locale data.
//!
//! ```text
//!   data/locales/
//!   ├── generic/            locale-independent tables
//!   │   ├── address.json
//!   │   ├── currency.json   (rows)
//!   │   ├── emoji.json      (rows)
//!   │   └── cars/<make>.json (rows)
//!   ├── en_US/
//!   └── en_GB/
//! ```
//!
//! The same tree can be served from disk with a `DirectorySource` pointing at
//! `data/locales`, which is how user-supplied locales are added.

use fakery_core::{DataError, DatasetSource, Layout, LocaleStore, GENERIC_LOCALE};

/// Dataset ids used by the domain generators.
pub mod datasets {
    pub const ADDRESS: &str = "address";
    pub const BEER: &str = "beer";
    pub const BOOK: &str = "book";
    pub const CAR: &str = "car";
    pub const CARS_PREFIX: &str = "cars/";
    pub const COLOR: &str = "color";
    pub const CURRENCY: &str = "currency";
    pub const EMOJI: &str = "emoji";
    pub const INTERNET: &str = "internet";
    pub const JOBS: &str = "jobs";
    pub const NAMES: &str = "names";
    pub const WINE: &str = "wine";
    pub const WORDS: &str = "words";
}

macro_rules! embedded {
    ($locale:literal, $dataset:literal) => {
        (
            $locale,
            $dataset,
            include_str!(concat!("../data/locales/", $locale, "/", $dataset, ".json")),
        )
    };
}

const EMBEDDED: &[(&str, &str, &str)] = &[
    embedded!("generic", "address"),
    embedded!("generic", "beer"),
    embedded!("generic", "book"),
    embedded!("generic", "car"),
    embedded!("generic", "cars/bmw"),
    embedded!("generic", "cars/ford"),
    embedded!("generic", "cars/honda"),
    embedded!("generic", "cars/hyundai"),
    embedded!("generic", "cars/mercedesbenz"),
    embedded!("generic", "cars/suzuki"),
    embedded!("generic", "cars/tata"),
    embedded!("generic", "cars/toyota"),
    embedded!("generic", "cars/volkswagen"),
    embedded!("generic", "color"),
    embedded!("generic", "currency"),
    embedded!("generic", "emoji"),
    embedded!("generic", "internet"),
    embedded!("generic", "jobs"),
    embedded!("generic", "wine"),
    embedded!("generic", "words"),
    embedded!("en_US", "address"),
    embedded!("en_US", "names"),
    embedded!("en_GB", "address"),
    embedded!("en_GB", "names"),
];

/// Dataset source over the data compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Locales with at least one embedded dataset, generic excluded.
    pub fn locales(&self) -> Vec<&'static str> {
        let mut locales: Vec<&'static str> = EMBEDDED
            .iter()
            .map(|(locale, _, _)| *locale)
            .filter(|locale| *locale != GENERIC_LOCALE)
            .collect();
        locales.sort_unstable();
        locales.dedup();
        locales
    }
}

impl DatasetSource for EmbeddedSource {
    fn read(&self, locale: &str, dataset: &str) -> Result<String, DataError> {
        EMBEDDED
            .iter()
            .find(|(l, d, _)| *l == locale && *d == dataset)
            .map(|(_, _, content)| content.to_string())
            .ok_or_else(|| DataError::DatasetNotFound {
                locale: locale.to_string(),
                dataset: dataset.to_string(),
            })
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Apply the dataset layouts the domain generators expect.
pub fn configure(store: LocaleStore) -> LocaleStore {
    store
        .with_layout(GENERIC_LOCALE, datasets::CURRENCY, Layout::Rows)
        .with_layout(GENERIC_LOCALE, datasets::EMOJI, Layout::Rows)
        .with_layout_prefix(datasets::CARS_PREFIX, Layout::Rows)
}

/// Store over the embedded data, falling back to `en_US` for locales that
/// ship no data of their own.
pub fn default_store() -> LocaleStore {
    configure(LocaleStore::new(EmbeddedSource)).with_fallback_locale(fakery_core::DEFAULT_LOCALE)
}
