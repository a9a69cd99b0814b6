//! Error type for domain generators.

use fakery_core::DataError;

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Failure from the data store, sampler or fillers
    #[error(transparent)]
    Data(#[from] DataError),

    /// Card type without a known number layout
    #[error("Unsupported card type: {0}")]
    UnsupportedCardType(String),

    /// Data required for a whole entity is present but empty
    #[error("No '{key}' data in dataset '{dataset}'")]
    EmptyData { dataset: String, key: String },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
