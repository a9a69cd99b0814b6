//! Core engine for the fakery synthetic data generator.
//!
//! This crate provides the primitives every domain generator is built on:
//!
//! - [`FakeRng`] - seedable random source
//! - [`LocaleStore`] - lazy, load-once cache of locale datasets
//! - [`Distribution`] - validated weighted sampling
//! - [`Template`] / [`Registry`] - `{{placeholder}}` expansion
//! - [`fill_digits`] / [`fill_letters`] - `#` and `@` pattern fillers
//!
//! # Architecture
//!
//! ```text
//! fakery-core (this crate)
//!    │
//!    ├── FakeRng ──────────────┐
//!    ├── LocaleStore           │
//!    │     └── DatasetSource   │
//!    ├── Distribution ◄────────┤
//!    ├── Template / Registry   │
//!    └── pattern fillers ◄─────┘
//!
//! fakery-generators (domain generators, algorithmic generators)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fakery_core::{Distribution, FakeRng, LocaleStore, MemorySource, GENERIC_LOCALE};
//!
//! let source = MemorySource::new().with(
//!     GENERIC_LOCALE,
//!     "internet",
//!     r#"{"tlds": ["com:0.7", "org:0.3"]}"#,
//! );
//! let store = LocaleStore::new(source);
//! let mut rng = FakeRng::from_seed(42);
//!
//! let data = store.load_generic("internet").unwrap();
//! let tlds: Arc<Distribution> = data.weighted("tlds", ":").unwrap();
//! let tld = tlds.sample(&mut rng).unwrap();
//! assert!(tld == "com" || tld == "org");
//! ```

pub mod distribution;
pub mod error;
pub mod pattern;
pub mod rng;
pub mod store;
pub mod template;

// Re-exports for convenience
pub use distribution::{Distribution, DistributionEntry};
pub use error::DataError;
pub use pattern::{fill_digits, fill_letters};
pub use rng::FakeRng;
pub use store::{
    DatasetKey, DatasetSource, DirectorySource, Layout, LocaleDataset, LocaleStore, MemorySource,
    Row, DEFAULT_LOCALE, GENERIC_LOCALE,
};
pub use template::{Registry, Segment, Template};
