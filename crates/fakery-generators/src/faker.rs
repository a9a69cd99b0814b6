//! The generator handle domain generators hang off.
//!
//! A `Faker` pairs one random source with a shared locale store:
//!
//! ```text
//!   Faker ──owns──► FakeRng            (one per caller, never shared)
//!     │
//!     └──shares──► Arc<LocaleStore>    (process-wide, load-once cache)
//! ```
//!
//! Every domain generator is an inherent method on `Faker` defined in its
//! own module under `generators/`.

use std::sync::Arc;

use fakery_core::{
    fill_digits, fill_letters, Distribution, FakeRng, LocaleDataset, LocaleStore, DEFAULT_LOCALE,
};

use crate::error::{GeneratorError, Result};

/// Seeded fake data generator bound to a locale.
///
/// Not `Clone`: a copy would carry the same random state and replay the
/// same values. For a second independent stream over the same data, build
/// another `Faker` from [`Faker::store`] with its own seed.
#[derive(Debug)]
pub struct Faker {
    rng: FakeRng,
    locale: String,
    store: Arc<LocaleStore>,
}

impl Faker {
    /// Create a generator seeded from the clock, using the default locale.
    pub fn new(store: Arc<LocaleStore>) -> Self {
        Self {
            rng: FakeRng::from_time(),
            locale: DEFAULT_LOCALE.to_string(),
            store,
        }
    }

    /// Create a reproducible generator.
    pub fn with_seed(store: Arc<LocaleStore>, seed: u64) -> Self {
        Self {
            rng: FakeRng::from_seed(seed),
            locale: DEFAULT_LOCALE.to_string(),
            store,
        }
    }

    /// Create a clock-seeded generator for `locale`.
    pub fn with_locale(store: Arc<LocaleStore>, locale: impl Into<String>) -> Self {
        Self::new(store).in_locale(locale)
    }

    /// Builder form of [`Faker::set_locale`].
    pub fn in_locale(mut self, locale: impl Into<String>) -> Self {
        self.set_locale(locale);
        self
    }

    /// Switch the locale used by all locale-specific lookups.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        tracing::debug!("Faker locale set to {}", self.locale);
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn store(&self) -> &Arc<LocaleStore> {
        &self.store
    }

    /// Direct access to the random source.
    pub fn rng(&mut self) -> &mut FakeRng {
        &mut self.rng
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Uniformly pick an element, `None` for an empty list.
    pub fn random_from_list<'a, T>(&mut self, list: &'a [T]) -> Option<&'a T> {
        self.rng.pick(list)
    }

    /// Uniformly pick a string, empty for an empty list.
    pub fn pick<S: AsRef<str>>(&mut self, list: &[S]) -> String {
        self.random_from_list(list)
            .map(|s| s.as_ref().to_string())
            .unwrap_or_default()
    }

    /// Uniformly pick a string different from `exclude`, empty if none is left.
    pub fn pick_excluding<S: AsRef<str>>(&mut self, list: &[S], exclude: &str) -> String {
        let remaining: Vec<&str> = list
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| *s != exclude)
            .collect();
        self.pick(&remaining)
    }

    /// Pick from a column whose absence would make the whole entity
    /// meaningless.
    pub fn require(&mut self, data: &LocaleDataset, key: &str) -> Result<String> {
        let column = data.column(key)?;
        self.random_from_list(column)
            .cloned()
            .ok_or_else(|| GeneratorError::EmptyData {
                dataset: data.dataset().to_string(),
                key: key.to_string(),
            })
    }

    /// Weighted draw; an invalid distribution fails loudly.
    pub fn sample_weighted<'a, T>(&mut self, distribution: &'a Distribution<T>) -> Result<&'a T> {
        Ok(distribution.sample(&mut self.rng)?)
    }

    // ========================================================================
    // Numbers and patterns
    // ========================================================================

    /// Uniform integer in `[low, high)`.
    pub fn int_between(&mut self, low: i64, high: i64) -> Result<i64> {
        Ok(self.rng.int_between(low, high)?)
    }

    /// Replace every `#` in `pattern` with a digit.
    pub fn digit_sequence(&mut self, pattern: &str) -> String {
        fill_digits(pattern, &mut self.rng)
    }

    /// Replace every `@` in `pattern` with an uppercase letter, optionally
    /// bounded to `A..=bound`.
    pub fn letter_sequence(&mut self, pattern: &str, bound: Option<char>) -> Result<String> {
        Ok(fill_letters(pattern, &mut self.rng, bound)?)
    }

    /// Random string of digits of the given length.
    pub fn numerify(&mut self, length: usize) -> String {
        (0..length)
            .filter_map(|_| char::from_digit(self.rng.digit(), 10))
            .collect()
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Load a locale-independent dataset.
    pub fn load_generic(&self, dataset: &str) -> Result<Arc<LocaleDataset>> {
        Ok(self.store.load_generic(dataset)?)
    }

    /// Load a dataset for an explicit locale.
    pub fn load_for_locale(&self, locale: &str, dataset: &str) -> Result<Arc<LocaleDataset>> {
        Ok(self.store.load_for_locale(locale, dataset)?)
    }

    /// Load a dataset for this generator's current locale.
    pub fn load_locale(&self, dataset: &str) -> Result<Arc<LocaleDataset>> {
        self.load_for_locale(&self.locale, dataset)
    }

    /// Language half of the locale, `en` for `en_US`.
    pub fn language(&self) -> &str {
        self.locale
            .split_once('_')
            .map_or(self.locale.as_str(), |(lang, _)| lang)
    }

    /// Region half of the locale, `US` for `en_US`.
    pub fn region(&self) -> Option<&str> {
        self.locale.split_once('_').map(|(_, region)| region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded;
    use fakery_core::{DataError, DistributionEntry, MemorySource};

    #[test]
    fn test_locale_defaults_and_switch() {
        let mut faker = seeded(1);
        assert_eq!(faker.locale(), "en_US");
        assert_eq!(faker.language(), "en");
        assert_eq!(faker.region(), Some("US"));

        faker.set_locale("en_GB");
        assert_eq!(faker.locale(), "en_GB");
        assert_eq!(faker.region(), Some("GB"));

        let faker = faker.in_locale("fr");
        assert_eq!(faker.language(), "fr");
        assert_eq!(faker.region(), None);
    }

    #[test]
    fn test_pick_handles_empty_lists() {
        let mut faker = seeded(2);
        let empty: [&str; 0] = [];
        assert_eq!(faker.pick(&empty), "");
        assert!(faker.random_from_list(&empty).is_none());
        assert_eq!(faker.pick(&["only"]), "only");
    }

    #[test]
    fn test_pick_excluding_never_returns_excluded() {
        let mut faker = seeded(3);
        let list = ["a", "b", "c"];
        for _ in 0..200 {
            assert_ne!(faker.pick_excluding(&list, "b"), "b");
        }
        assert_eq!(faker.pick_excluding(&["x"], "x"), "");
    }

    #[test]
    fn test_require_distinguishes_missing_and_empty() {
        let store = LocaleStore::new(
            MemorySource::new().with("generic", "things", r#"{"empty": [], "full": ["x"]}"#),
        );
        let mut faker = Faker::with_seed(Arc::new(store), 4);
        let data = faker.load_generic("things").unwrap();

        assert_eq!(faker.require(&data, "full").unwrap(), "x");
        assert!(matches!(
            faker.require(&data, "empty"),
            Err(GeneratorError::EmptyData { .. })
        ));
        assert!(matches!(
            faker.require(&data, "absent"),
            Err(GeneratorError::Data(DataError::MissingKey { .. }))
        ));
    }

    #[test]
    fn test_sample_weighted_rejects_invalid_distribution() {
        let mut faker = seeded(5);
        let bad = Distribution::new(vec![DistributionEntry {
            outcome: "x".to_string(),
            weight: 0.5,
        }]);
        assert!(matches!(
            faker.sample_weighted(&bad),
            Err(GeneratorError::Data(DataError::InvalidDistribution { .. }))
        ));
    }

    #[test]
    fn test_int_between_rejects_inverted_range() {
        let mut faker = seeded(6);
        assert!(faker.int_between(10, 5).is_err());
        let n = faker.int_between(5, 10).unwrap();
        assert!((5..10).contains(&n));
    }

    #[test]
    fn test_numerify_length() {
        let mut faker = seeded(7);
        let digits = faker.numerify(12);
        assert_eq!(digits.len(), 12);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        for _ in 0..20 {
            assert_eq!(a.digit_sequence("###-###"), b.digit_sequence("###-###"));
        }
    }

    #[test]
    fn test_second_faker_shares_store_not_stream() {
        let mut a = seeded(11);
        let mut b = Faker::with_seed(Arc::clone(a.store()), 12);
        assert!(Arc::ptr_eq(a.store(), b.store()));

        let from_a: Vec<String> = (0..10).map(|_| a.numerify(8)).collect();
        let from_b: Vec<String> = (0..10).map(|_| b.numerify(8)).collect();
        assert_ne!(from_a, from_b);
    }
}
