//! Adjectives and adverbs.

use crate::data::datasets;
use crate::error::Result;
use crate::faker::Faker;

impl Faker {
    pub fn adjective(&mut self) -> Result<String> {
        self.word("adjectives")
    }

    pub fn adjective_positive(&mut self) -> Result<String> {
        self.word("adjectives_positive")
    }

    pub fn adjective_negative(&mut self) -> Result<String> {
        self.word("adjectives_negative")
    }

    pub fn adverb(&mut self) -> Result<String> {
        self.word("adverbs")
    }

    fn word(&mut self, key: &str) -> Result<String> {
        let data = self.load_generic(datasets::WORDS)?;
        Ok(self.pick(data.column_or_empty(key)))
    }
}
