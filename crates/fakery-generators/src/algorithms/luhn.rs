//! Luhn mod-10 checksum.

use fakery_core::FakeRng;

/// Validate a numeric string with the Luhn algorithm.
///
/// Empty or non-numeric input is invalid.
pub fn luhn_check(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let mut sum = 0;
    for (i, c) in number.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}

/// Extend `prefix` with random digits to `length`, choosing the final digit
/// by trying 0-9 until the Luhn check passes.
///
/// Exactly one final digit satisfies the check for any numeric body. A
/// non-numeric prefix can never pass and gets a `0` check digit.
pub fn complete_luhn(prefix: &str, length: usize, rng: &mut FakeRng) -> String {
    let body_len = length.saturating_sub(1).max(prefix.len());
    let mut body = prefix.to_string();
    while body.len() < body_len {
        body.extend(char::from_digit(rng.digit(), 10));
    }

    ('0'..='9')
        .map(|check| format!("{body}{check}"))
        .find(|candidate| luhn_check(candidate))
        .unwrap_or_else(|| {
            tracing::warn!("Luhn prefix '{prefix}' is not numeric");
            format!("{body}0")
        })
}
