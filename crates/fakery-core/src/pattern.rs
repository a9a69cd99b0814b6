//! Pattern fillers for fixed-format codes (plates, postal codes, card numbers).
//!
//! - `#` is replaced with a digit; the first `#` never yields `0`
//! - `@` is replaced with an uppercase letter, optionally bounded

use crate::{DataError, FakeRng};

/// Marker replaced with a random digit.
pub const DIGIT_MARKER: char = '#';
/// Marker replaced with a random uppercase letter.
pub const LETTER_MARKER: char = '@';

/// Replace every `#` left to right with a digit, the first one from 1-9.
pub fn fill_digits(pattern: &str, rng: &mut FakeRng) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut first = true;

    for c in pattern.chars() {
        if c != DIGIT_MARKER {
            result.push(c);
            continue;
        }
        let digit = if first {
            first = false;
            rng.nonzero_digit()
        } else {
            rng.digit()
        };
        // Digits 0-9 always map to a char
        result.extend(char::from_digit(digit, 10));
    }

    result
}

/// Replace every `@` left to right with an uppercase letter.
///
/// With `upper_bound`, letters are drawn from `A..=upper_bound`; a bound
/// outside `A-Z` is rejected before any letter is drawn.
pub fn fill_letters(
    pattern: &str,
    rng: &mut FakeRng,
    upper_bound: Option<char>,
) -> Result<String, DataError> {
    if let Some(bound) = upper_bound {
        if !bound.is_ascii_uppercase() {
            return Err(DataError::InvalidLetterBound(bound));
        }
    }

    let mut result = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c != LETTER_MARKER {
            result.push(c);
            continue;
        }
        let letter = match upper_bound {
            Some(bound) => rng.letter_up_to(bound)?,
            None => rng.random_letter(),
        };
        result.push(letter);
    }

    Ok(result)
}
