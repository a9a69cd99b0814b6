//! Error taxonomy shared by every primitive in the core crate.

/// Error type for data store, sampler and filler operations.
///
/// Load failures are cached per (locale, dataset) pair and handed back to
/// every later caller, so the error carries owned, cloneable context instead
/// of wrapping `std::io::Error` or `serde_json::Error` directly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// No backing data exists for the pair
    #[error("Dataset not found: {dataset} (locale: {locale})")]
    DatasetNotFound { locale: String, dataset: String },

    /// Backing data exists but could not be read
    #[error("Failed to read dataset {dataset} (locale: {locale}): {message}")]
    DatasetRead {
        locale: String,
        dataset: String,
        message: String,
    },

    /// Backing data exists but does not parse as the expected layout
    #[error("Failed to parse dataset {dataset} (locale: {locale}): {message}")]
    DatasetParse {
        locale: String,
        dataset: String,
        message: String,
    },

    /// Column key absent from a loaded dataset
    #[error("Key '{key}' not found in dataset '{dataset}'")]
    MissingKey { dataset: String, key: String },

    /// Weights do not sum to 1.00 after rounding to two decimals
    #[error("Weighted distribution validation failed, weight: {rounded_sum:.2}")]
    InvalidDistribution { rounded_sum: f64 },

    /// A weight outside `(0, 1]`
    #[error("Weight {weight} at entry {index} is not in (0, 1]")]
    WeightOutOfRange { index: usize, weight: f64 },

    /// An encoded `item<sep>weight` entry could not be split, parsed or has
    /// a weight outside `(0, 1]`
    #[error("Invalid weighted entry '{entry}' in key '{key}'")]
    InvalidWeight { key: String, entry: String },

    /// Malformed numeric range request
    #[error("Invalid range: [{low}, {high})")]
    InvalidRange { low: i64, high: i64 },

    /// Upper bound for letter filling is not a single letter A-Z
    #[error("Invalid letter bound: {0}")]
    InvalidLetterBound(char),
}
