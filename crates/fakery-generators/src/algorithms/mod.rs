//! Checksum and color math with no data dependencies.

pub mod color;
pub mod isbn;
pub mod luhn;

pub use color::{closest_named_color, hsl_to_rgb, luminance, shade, Hsl, Rgb};
pub use isbn::{generate_isbn10, generate_isbn13, validate_isbn, validate_isbn10, validate_isbn13};
pub use luhn::{complete_luhn, luhn_check};
