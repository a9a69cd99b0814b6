//! Fakery
//!
//! A weighted, template-driven synthetic data generator: realistic names,
//! addresses, credit cards, books, cars and more, drawn from locale datasets
//! and reproducible from a seed.
//!
//! # Crates
//!
//! - `fakery_core` - random source, locale store, weighted distributions,
//!   `{{placeholder}}` templates and pattern fillers
//! - `fakery_generators` - the `Faker` handle, domain entities and the
//!   Luhn / ISBN / color algorithms
//!
//! # CLI Usage
//!
//! ```bash
//! # Five reproducible people as JSON lines
//! fakery person --count 5 --seed 42
//!
//! # British addresses as pretty text
//! fakery address --locale en_GB --format text
//!
//! # Custom locale tree on disk, falling back to en_US
//! fakery name --data-dir ./locales --locale fr_FR --fallback-locale en_US
//! ```

pub mod config;
pub mod record;

pub use config::FakeryConfig;
pub use record::{EntityKind, OutputFormat, Record};

// Re-export member crates for convenience
pub use fakery_core as core;
pub use fakery_generators as generators;
