//! Domain and algorithmic fake data generators.
//!
//! Built on `fakery-core`, this crate adds:
//!
//! - [`Faker`] - seeded generator handle bound to a locale
//! - [`generators`] - person, address, internet, credit card, car, beer,
//!   wine, book, color, currency, emoji, blood, os and user agent data
//! - [`algorithms`] - Luhn, ISBN and color conversions
//! - [`data`] - compiled-in `generic`, `en_US` and `en_GB` datasets
//!
//! # Architecture
//!
//! ```text
//! fakery-generators (this crate)
//!    │
//!    ├── Faker ───────► fakery_core::FakeRng
//!    │     │
//!    │     └── Arc<LocaleStore> ◄── data::default_store()
//!    │                                 └── EmbeddedSource
//!    ├── generators/*   (impl Faker blocks + entity structs)
//!    └── algorithms/*   (pure checksum and color math)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fakery_generators::{algorithms::luhn_check, default_store, Faker};
//!
//! let mut faker = Faker::with_seed(Arc::new(default_store()), 7);
//! let person = faker.person().unwrap();
//! assert!(person.name.contains(&person.first_name));
//!
//! let card = faker.credit_card().unwrap();
//! assert!(luhn_check(&card.number));
//! ```

pub mod algorithms;
pub mod data;
pub mod entity;
pub mod error;
pub mod faker;
pub mod generators;
pub mod text;

// Re-exports for convenience
pub use data::{configure, datasets, default_store, EmbeddedSource};
pub use entity::Entity;
pub use error::{GeneratorError, Result};
pub use faker::Faker;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, LazyLock};

    use fakery_core::LocaleStore;

    use crate::{default_store, Faker};

    static STORE: LazyLock<Arc<LocaleStore>> = LazyLock::new(|| Arc::new(default_store()));

    /// Seeded faker over the embedded data, sharing one store across tests.
    pub fn seeded(seed: u64) -> Faker {
        Faker::with_seed(Arc::clone(&STORE), seed)
    }
}
