//! Random bit strings.

use crate::faker::Faker;

impl Faker {
    /// Bit string of `length` characters, always starting with `1`.
    pub fn binary_string(&mut self, length: usize) -> String {
        if length == 0 {
            return String::new();
        }
        let mut bits = String::with_capacity(length);
        bits.push('1');
        for _ in 1..length {
            bits.push(*self.rng().one_of(&['0', '1']));
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::seeded;

    #[test]
    fn test_binary_string() {
        let mut faker = seeded(2);
        assert_eq!(faker.binary_string(0), "");
        assert_eq!(faker.binary_string(1), "1");
        for length in [2, 8, 64] {
            let bits = faker.binary_string(length);
            assert_eq!(bits.len(), length);
            assert!(bits.starts_with('1'));
            assert!(bits.chars().all(|c| c == '0' || c == '1'));
        }
    }
}
