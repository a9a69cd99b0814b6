//! Weighted distributions with validated probabilities.
//!
//! A distribution is an ordered list of `(outcome, weight)` entries whose
//! weights, rounded to two decimals, must sum to exactly 1.00. Sampling walks
//! the entries in declared order accumulating weight, so declaration order
//! decides which entry owns a floating-point boundary but not the long-run
//! frequencies.

use crate::{DataError, FakeRng};
use serde::{Deserialize, Serialize};

/// One weighted outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry<T = String> {
    pub outcome: T,
    pub weight: f64,
}

/// Ordered set of weighted outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution<T = String> {
    entries: Vec<DistributionEntry<T>>,
}

impl<T> Distribution<T> {
    /// Create a distribution from entries. Validation happens on sampling.
    pub fn new(entries: Vec<DistributionEntry<T>>) -> Self {
        Self { entries }
    }

    /// Create a distribution from `(outcome, weight)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(outcome, weight)| DistributionEntry { outcome, weight })
                .collect(),
        }
    }

    /// Entries in declared order.
    pub fn entries(&self) -> &[DistributionEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum the weights, round to two decimals and compare against 1.00.
    ///
    /// Returns whether the distribution is valid together with the rounded
    /// sum for diagnostics. Every weight must also lie in `(0, 1]`, so a set
    /// of out-of-range weights that happens to sum to 1.00 is still invalid.
    pub fn validate(&self) -> (bool, f64) {
        let sum: f64 = self.entries.iter().map(|e| e.weight).sum();
        let rounded = (sum * 100.0).round() / 100.0;
        let in_range = self.entries.iter().all(|e| is_probability(e.weight));
        (in_range && rounded == 1.0, rounded)
    }

    /// Like [`validate`](Self::validate) but as a `Result`, naming the first
    /// out-of-range weight when there is one.
    pub fn ensure_valid(&self) -> Result<(), DataError> {
        if let Some(index) = self.entries.iter().position(|e| !is_probability(e.weight)) {
            return Err(DataError::WeightOutOfRange {
                index,
                weight: self.entries[index].weight,
            });
        }
        match self.validate() {
            (true, _) => Ok(()),
            (false, rounded_sum) => Err(DataError::InvalidDistribution { rounded_sum }),
        }
    }

    /// Draw one outcome.
    pub fn sample(&self, rng: &mut FakeRng) -> Result<&T, DataError> {
        self.ensure_valid()?;
        let u = rng.uniform01();
        // Validation rejects empty distributions
        self.outcome_at(u)
            .ok_or(DataError::InvalidDistribution { rounded_sum: 0.0 })
    }

    /// Outcome owning the point `u` in [0, 1) of the cumulative weights,
    /// `None` for an empty distribution.
    pub fn outcome_at(&self, u: f64) -> Option<&T> {
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.weight;
            if u < cumulative {
                return Some(&entry.outcome);
            }
        }
        // Rounding can leave u at or above the final cumulative weight
        self.entries.last().map(|e| &e.outcome)
    }
}

fn is_probability(weight: f64) -> bool {
    weight > 0.0 && weight <= 1.0
}

impl Distribution<String> {
    /// Parse `"item<sep>weight"` strings, e.g. `"com:0.45"`, into a validated
    /// distribution. `key` only labels errors.
    ///
    /// The weight is taken after the last separator so items may themselves
    /// contain the separator.
    pub fn parse_encoded(key: &str, items: &[String], sep: &str) -> Result<Self, DataError> {
        let mut entries = Vec::with_capacity(items.len());

        for item in items {
            let invalid = || DataError::InvalidWeight {
                key: key.to_string(),
                entry: item.clone(),
            };
            let (outcome, weight) = item.rsplit_once(sep).ok_or_else(invalid)?;
            let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
            if !is_probability(weight) {
                tracing::warn!("Weighted array [key: {key}] has out-of-range weight in '{item}'");
                return Err(invalid());
            }
            entries.push(DistributionEntry {
                outcome: outcome.to_string(),
                weight,
            });
        }

        let distribution = Self { entries };
        if let (false, sum) = distribution.validate() {
            tracing::warn!("Weighted array [key: {key}] didn't validate - weight {sum:.2}");
            return Err(DataError::InvalidDistribution { rounded_sum: sum });
        }
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn transmissions() -> Distribution<&'static str> {
        Distribution::from_pairs([
            ("Automatic", 0.35),
            ("Manual", 0.22),
            ("CVT", 0.15),
            ("DCT", 0.12),
            ("AMT", 0.10),
            ("IMT", 0.05),
            ("Triptronic", 0.01),
        ])
    }

    #[test]
    fn test_validate_accepts_rounded_sum() {
        let (ok, sum) = transmissions().validate();
        assert!(ok);
        assert_eq!(sum, 1.0);

        // 0.1 + 0.2 + 0.7 is not exactly 1.0 in binary floating point
        let d = Distribution::from_pairs([("a", 0.1), ("b", 0.2), ("c", 0.7)]);
        assert!(d.validate().0);
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let d = Distribution::from_pairs([("a", 0.5), ("b", 0.4)]);
        let (ok, sum) = d.validate();
        assert!(!ok);
        assert_eq!(sum, 0.9);

        let mut rng = FakeRng::from_seed(1);
        assert_eq!(
            d.sample(&mut rng),
            Err(DataError::InvalidDistribution { rounded_sum: 0.9 })
        );
    }

    #[test]
    fn test_empty_distribution_is_invalid() {
        let d: Distribution<String> = Distribution::new(Vec::new());
        assert!(d.is_empty());
        assert!(d.ensure_valid().is_err());
    }

    #[test]
    fn test_outcome_at_boundaries() {
        let d = Distribution::from_pairs([("a", 0.5), ("b", 0.3), ("c", 0.2)]);
        assert_eq!(d.outcome_at(0.0), Some(&"a"));
        assert_eq!(d.outcome_at(0.4999), Some(&"a"));
        assert_eq!(d.outcome_at(0.5), Some(&"b"));
        assert_eq!(d.outcome_at(0.8), Some(&"c"));
        // Fallback to the last entry
        assert_eq!(d.outcome_at(0.999_999_999), Some(&"c"));
        assert_eq!(d.outcome_at(1.0), Some(&"c"));

        let empty: Distribution<&str> = Distribution::new(Vec::new());
        assert_eq!(empty.outcome_at(0.3), None);
    }

    #[test]
    fn test_out_of_range_weights_are_rejected() {
        let d = Distribution::from_pairs([("a", -0.5), ("b", 1.5)]);
        let (ok, sum) = d.validate();
        assert!(!ok);
        assert_eq!(sum, 1.0);
        assert_eq!(
            d.ensure_valid(),
            Err(DataError::WeightOutOfRange {
                index: 0,
                weight: -0.5
            })
        );
        let mut rng = FakeRng::from_seed(3);
        assert!(d.sample(&mut rng).is_err());

        let zero = Distribution::from_pairs([("zero", 0.0), ("b", 1.0)]);
        assert!(!zero.validate().0);
        assert_eq!(
            zero.ensure_valid(),
            Err(DataError::WeightOutOfRange {
                index: 0,
                weight: 0.0
            })
        );
    }

    #[test]
    fn test_sampling_frequencies() {
        let d = transmissions();
        let mut rng = FakeRng::from_seed(2024);
        let draws = 100_000;
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for _ in 0..draws {
            *counts.entry(*d.sample(&mut rng).unwrap()).or_default() += 1;
        }

        for entry in d.entries() {
            let observed = counts.get(entry.outcome).copied().unwrap_or(0) as f64 / draws as f64;
            assert!(
                (observed - entry.weight).abs() < 0.02,
                "{}: observed {observed}, expected {}",
                entry.outcome,
                entry.weight
            );
        }
    }

    #[test]
    fn test_parse_encoded() {
        let items: Vec<String> = ["com:0.5", "org:0.3", "net:0.2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let d = Distribution::parse_encoded("tlds", &items, ":").unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.entries()[1].outcome, "org");
        assert_eq!(d.entries()[1].weight, 0.3);
    }

    #[test]
    fn test_parse_encoded_errors() {
        let bad_weight = vec!["com:abc".to_string()];
        assert!(matches!(
            Distribution::parse_encoded("tlds", &bad_weight, ":"),
            Err(DataError::InvalidWeight { .. })
        ));

        let no_sep = vec!["com".to_string()];
        assert!(matches!(
            Distribution::parse_encoded("tlds", &no_sep, ":"),
            Err(DataError::InvalidWeight { .. })
        ));

        let out_of_range = vec!["com:-0.5".to_string(), "org:1.5".to_string()];
        assert!(matches!(
            Distribution::parse_encoded("tlds", &out_of_range, ":"),
            Err(DataError::InvalidWeight { entry, .. }) if entry == "com:-0.5"
        ));

        let zero = vec!["com:0".to_string(), "org:1.0".to_string()];
        assert!(matches!(
            Distribution::parse_encoded("tlds", &zero, ":"),
            Err(DataError::InvalidWeight { .. })
        ));

        let short = vec!["com:0.5".to_string(), "org:0.3".to_string()];
        assert!(matches!(
            Distribution::parse_encoded("tlds", &short, ":"),
            Err(DataError::InvalidDistribution { .. })
        ));
    }
}
