//! Seedable random source.
//!
//! One `FakeRng` belongs to one logical generator session. It is `Send` but
//! deliberately not shared: concurrent callers each own their own instance,
//! which is what keeps seeded runs reproducible.

use crate::DataError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const UPPER_ALPHA: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Pseudo-random source producing uniform floats and bounded integers.
#[derive(Debug, Clone)]
pub struct FakeRng {
    rng: StdRng,
    seed: u64,
}

impl FakeRng {
    /// Create a deterministic source. Two sources built from the same seed
    /// produce identical sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from the wall clock.
    pub fn from_time() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        tracing::debug!("Seeding random source from clock: {seed}");
        Self::from_seed(seed)
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in [0, 1).
    pub fn uniform01(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in [0, n).
    pub fn int_below(&mut self, n: usize) -> Result<usize, DataError> {
        if n == 0 {
            return Err(DataError::InvalidRange { low: 0, high: 0 });
        }
        Ok(self.rng.random_range(0..n))
    }

    /// Uniform integer in [low, high).
    ///
    /// An empty or inverted range is an error rather than a silent zero.
    pub fn int_between(&mut self, low: i64, high: i64) -> Result<i64, DataError> {
        if high <= low {
            return Err(DataError::InvalidRange { low, high });
        }
        Ok(self.rng.random_range(low..high))
    }

    /// Random digit 0-9.
    pub fn digit(&mut self) -> u32 {
        self.rng.random_range(0..10)
    }

    /// Random digit 1-9.
    pub fn nonzero_digit(&mut self) -> u32 {
        self.rng.random_range(1..10)
    }

    /// Index 0 or 1 for a two-way choice.
    pub fn coin(&mut self) -> usize {
        if self.uniform01() <= 0.5 {
            0
        } else {
            1
        }
    }

    /// Roll a six-sided die, 1-6.
    pub fn roll_dice(&mut self) -> u32 {
        self.rng.random_range(1..=6)
    }

    /// Pick one of exactly two values.
    pub fn one_of<'a, T>(&mut self, choices: &'a [T; 2]) -> &'a T {
        &choices[self.coin()]
    }

    /// Uniformly pick an element, `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.random_range(0..items.len()))
    }

    /// Random integer with exactly `length` decimal digits.
    pub fn integer_of_length(&mut self, length: u32) -> Result<i64, DataError> {
        match length {
            n if n == 0 || n > 18 => Err(DataError::InvalidRange {
                low: 0,
                high: i64::from(length),
            }),
            1 => Ok(i64::from(self.digit())),
            _ => {
                let low = 10i64.pow(length - 1);
                self.int_between(low, low * 10)
            }
        }
    }

    /// Random float whose integral part lies in [low, high - 1) with up to
    /// `max_decimals` fractional digits.
    pub fn float_between(
        &mut self,
        max_decimals: u32,
        low: i64,
        high: i64,
    ) -> Result<f64, DataError> {
        let value = self.int_between(low, high - 1)? as f64;
        if max_decimals == 0 {
            return Ok(value);
        }
        let scale = 10i64.pow(max_decimals.min(9));
        let decimals = self.int_between(0, scale)? as f64 / scale as f64;
        Ok(value + decimals)
    }

    /// Random uppercase letter A-Z.
    pub fn random_letter(&mut self) -> char {
        char::from(UPPER_ALPHA[self.rng.random_range(0..UPPER_ALPHA.len())])
    }

    /// Random uppercase letter in `A..=bound`.
    pub fn letter_up_to(&mut self, bound: char) -> Result<char, DataError> {
        let idx = UPPER_ALPHA
            .iter()
            .position(|&c| char::from(c) == bound)
            .ok_or(DataError::InvalidLetterBound(bound))?;
        Ok(char::from(UPPER_ALPHA[self.rng.random_range(0..=idx)]))
    }

    /// Random uppercase hexadecimal character.
    pub fn random_hex_char(&mut self) -> char {
        char::from(HEX_CHARS[self.rng.random_range(0..HEX_CHARS.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = FakeRng::from_seed(42);
        let mut b = FakeRng::from_seed(42);
        for _ in 0..1000 {
            assert_eq!(a.uniform01().to_bits(), b.uniform01().to_bits());
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_uniform01_in_unit_range() {
        let mut rng = FakeRng::from_seed(7);
        for _ in 0..10_000 {
            let v = rng.uniform01();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_int_below_rejects_zero() {
        let mut rng = FakeRng::from_seed(1);
        assert!(matches!(
            rng.int_below(0),
            Err(DataError::InvalidRange { .. })
        ));
        for _ in 0..1000 {
            assert!(rng.int_below(5).unwrap() < 5);
        }
    }

    #[test]
    fn test_int_between_bounds() {
        let mut rng = FakeRng::from_seed(3);
        for _ in 0..1000 {
            let v = rng.int_between(10, 20).unwrap();
            assert!((10..20).contains(&v));
        }
    }

    #[test]
    fn test_int_between_inverted_range_fails() {
        let mut rng = FakeRng::from_seed(3);
        assert_eq!(
            rng.int_between(20, 10),
            Err(DataError::InvalidRange { low: 20, high: 10 })
        );
        assert!(rng.int_between(5, 5).is_err());
    }

    #[test]
    fn test_nonzero_digit_never_zero() {
        let mut rng = FakeRng::from_seed(9);
        for _ in 0..1000 {
            let d = rng.nonzero_digit();
            assert!((1..=9).contains(&d));
        }
    }

    #[test]
    fn test_roll_dice_range() {
        let mut rng = FakeRng::from_seed(11);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[rng.roll_dice() as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn test_integer_of_length() {
        let mut rng = FakeRng::from_seed(5);
        for _ in 0..200 {
            let v = rng.integer_of_length(4).unwrap();
            assert!((1000..10_000).contains(&v));
        }
        assert!(rng.integer_of_length(0).is_err());
    }

    #[test]
    fn test_float_between() {
        let mut rng = FakeRng::from_seed(5);
        for _ in 0..200 {
            let v = rng.float_between(2, 5, 24).unwrap();
            assert!((5.0..24.0).contains(&v));
        }
    }

    #[test]
    fn test_letter_up_to() {
        let mut rng = FakeRng::from_seed(13);
        for _ in 0..500 {
            let c = rng.letter_up_to('G').unwrap();
            assert!(('A'..='G').contains(&c));
        }
        assert_eq!(
            rng.letter_up_to('g'),
            Err(DataError::InvalidLetterBound('g'))
        );
    }

    #[test]
    fn test_random_hex_char() {
        let mut rng = FakeRng::from_seed(14);
        for _ in 0..500 {
            let c = rng.random_hex_char();
            assert!(c.is_ascii_hexdigit() && !c.is_ascii_lowercase(), "{c}");
        }
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = FakeRng::from_seed(1);
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng.pick(&["only"]), Some(&"only"));
    }
}
