//! ISBN-10 and ISBN-13 check digits.

use fakery_core::FakeRng;

/// Validate an ISBN of either length, ignoring hyphens and spaces.
pub fn validate_isbn(isbn: &str) -> bool {
    let stripped: String = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();
    match stripped.chars().count() {
        10 => validate_isbn10(&stripped),
        13 => validate_isbn13(&stripped),
        _ => false,
    }
}

/// Validate a bare 10-character ISBN: nine digits then a digit or `X`.
pub fn validate_isbn10(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().collect();
    let [body @ .., last] = chars.as_slice() else {
        return false;
    };
    if body.len() != 9 {
        return false;
    }

    let mut sum = 0;
    for (i, c) in body.iter().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += digit * (10 - i as u32);
    }

    let check = match last {
        'X' | 'x' => 10,
        c => match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        },
    };

    (sum + check) % 11 == 0
}

/// Validate a bare 13-digit ISBN.
pub fn validate_isbn13(isbn: &str) -> bool {
    let digits: Option<Vec<u32>> = isbn.chars().map(|c| c.to_digit(10)).collect();
    match digits {
        Some(digits) if digits.len() == 13 => isbn13_check(&digits[..12]) == digits[12],
        _ => false,
    }
}

/// Generate a hyphenated ISBN-10 (`x-xxx-xxxxx-x`).
pub fn generate_isbn10(rng: &mut FakeRng) -> String {
    let digits: Vec<u32> = (0..9).map(|_| rng.digit()).collect();
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    let check = match (11 - sum % 11) % 11 {
        10 => 'X',
        d => char::from_digit(d, 10).unwrap_or('0'),
    };

    let mut isbn = digits_to_string(&digits);
    isbn.push(check);
    hyphenate(&isbn, &[1, 3, 5, 1])
}

/// Generate a hyphenated ISBN-13 (`xxx-x-xxx-xxxxx-x`) with a 978 or 979
/// book prefix.
pub fn generate_isbn13(rng: &mut FakeRng) -> String {
    let prefix: [u32; 3] = if rng.nonzero_digit() > 7 {
        [9, 7, 9]
    } else {
        [9, 7, 8]
    };

    let mut digits = prefix.to_vec();
    digits.extend((0..9).map(|_| rng.digit()));
    digits.push(isbn13_check(&digits));

    hyphenate(&digits_to_string(&digits), &[3, 1, 3, 5, 1])
}

fn isbn13_check(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

/// Split an ASCII string into hyphen-joined groups of the given sizes.
fn hyphenate(s: &str, groups: &[usize]) -> String {
    let mut parts = Vec::with_capacity(groups.len());
    let mut rest = s;
    for &size in groups {
        let (head, tail) = rest.split_at(size.min(rest.len()));
        parts.push(head);
        rest = tail;
    }
    parts.join("-")
}
