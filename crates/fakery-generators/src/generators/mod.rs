//! Domain generators.
//!
//! Each module adds inherent methods to [`Faker`](crate::Faker) and, where
//! the domain has one, an entity struct bundling a consistent set of fields.

pub mod address;
pub mod beer;
pub mod binary_string;
pub mod blood;
pub mod book;
pub mod car;
pub mod color;
pub mod credit_card;
pub mod currency;
pub mod emoji;
pub mod internet;
pub mod os;
pub mod person;
pub mod user_agent;
pub mod wine;
pub mod words;

pub use address::Address;
pub use beer::Beer;
pub use blood::Blood;
pub use book::Book;
pub use car::Car;
pub use color::Color;
pub use credit_card::{CardType, CreditCard};
pub use currency::Currency;
pub use emoji::Emoji;
pub use os::Platform;
pub use person::{Gender, Job, Person};
pub use wine::Wine;
