//! Run configuration: optional TOML file merged under command-line flags.
//!
//! ```toml
//! locale = "en_GB"
//! seed = 42
//! data_dir = "./locales"
//! fallback_locale = "en_US"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use fakery_core::{DirectorySource, LocaleStore, DEFAULT_LOCALE};
use fakery_generators::{configure, default_store, Faker};
use serde::Deserialize;

/// Settings shared by the config file and the command line. Every field is
/// optional so the two sources can be layered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FakeryConfig {
    pub locale: Option<String>,
    pub seed: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub fallback_locale: Option<String>,
}

impl FakeryConfig {
    /// Load a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {path:?}"))
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Layer `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn merged_with(self, overrides: FakeryConfig) -> FakeryConfig {
        FakeryConfig {
            locale: overrides.locale.or(self.locale),
            seed: overrides.seed.or(self.seed),
            data_dir: overrides.data_dir.or(self.data_dir),
            fallback_locale: overrides.fallback_locale.or(self.fallback_locale),
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Locale store for this configuration.
    ///
    /// A data directory replaces the embedded datasets and only falls back
    /// when a fallback locale is configured; the embedded store falls back to
    /// `en_US` unless told otherwise.
    pub fn build_store(&self) -> anyhow::Result<LocaleStore> {
        match &self.data_dir {
            Some(dir) => {
                if !dir.is_dir() {
                    anyhow::bail!("Data directory {dir:?} does not exist");
                }
                tracing::debug!("Serving locale data from {}", dir.display());
                let store = configure(LocaleStore::new(DirectorySource::new(dir)));
                Ok(match &self.fallback_locale {
                    Some(fallback) => store.with_fallback_locale(fallback.clone()),
                    None => store,
                })
            }
            None => {
                let store = default_store();
                Ok(match &self.fallback_locale {
                    Some(fallback) => store.with_fallback_locale(fallback.clone()),
                    None => store,
                })
            }
        }
    }

    /// Faker bound to the configured locale, seeded when a seed is set.
    pub fn build_faker(&self) -> anyhow::Result<Faker> {
        let store = Arc::new(self.build_store()?);
        let faker = match self.seed {
            Some(seed) => Faker::with_seed(store, seed),
            None => Faker::new(store),
        };
        Ok(faker.in_locale(self.locale()))
    }
}
