//! Emoji from the row-oriented emoji table.

use fakery_core::Row;
use serde::Serialize;

use crate::data::datasets;
use crate::entity::Entity;
use crate::error::{GeneratorError, Result};
use crate::faker::Faker;
use crate::text::capitalize;

const ALIAS_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emoji {
    pub symbol: String,
    pub category: String,
    pub description: String,
    pub alias: String,
}

impl Entity for Emoji {}

impl Faker {
    pub fn emoji_symbol(&mut self) -> Result<String> {
        Ok(self.emoji()?.symbol)
    }

    pub fn emoji_category(&mut self) -> Result<String> {
        Ok(self.emoji()?.category)
    }

    /// Title-cased description, e.g. `Grinning Face`.
    pub fn emoji_description(&mut self) -> Result<String> {
        Ok(self.emoji()?.description)
    }

    pub fn emoji_alias(&mut self) -> Result<String> {
        Ok(self.emoji()?.alias)
    }

    /// Emoji with one of its aliases.
    pub fn emoji(&mut self) -> Result<Emoji> {
        let row = self.emoji_row()?;
        let field = |key: &str| row.get(key).cloned().unwrap_or_default();

        let aliases = field("aliases");
        let aliases: Vec<&str> = aliases.split(ALIAS_SEPARATOR).collect();
        Ok(Emoji {
            symbol: field("symbol"),
            category: field("category"),
            description: capitalize(&field("description")),
            alias: self.pick(&aliases),
        })
    }

    fn emoji_row(&mut self) -> Result<Row> {
        let data = self.load_generic(datasets::EMOJI)?;
        self.random_from_list(data.rows())
            .cloned()
            .ok_or_else(|| GeneratorError::EmptyData {
                dataset: datasets::EMOJI.to_string(),
                key: "rows".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded;

    #[test]
    fn test_emoji_alias_is_one_of_row_aliases() {
        let mut faker = seeded(1);
        let data = faker.load_generic(datasets::EMOJI).unwrap();
        for _ in 0..50 {
            let emoji = faker.emoji().unwrap();
            let row = data
                .rows()
                .iter()
                .find(|row| row.get("symbol") == Some(&emoji.symbol))
                .unwrap();
            let aliases: Vec<&str> = row["aliases"].split('|').collect();
            assert!(aliases.contains(&emoji.alias.as_str()));
            assert!(!emoji.alias.contains('|'));
            assert_eq!(row["category"], emoji.category);
        }
    }

    #[test]
    fn test_emoji_description_is_title_case() {
        let mut faker = seeded(2);
        for _ in 0..20 {
            let description = faker.emoji_description().unwrap();
            assert!(description
                .split(' ')
                .filter_map(|w| w.chars().next())
                .all(|c| !c.is_lowercase()));
        }
    }

    #[test]
    fn test_emoji_symbol_not_empty() {
        let mut faker = seeded(3);
        assert!(!faker.emoji_symbol().unwrap().is_empty());
        assert!(!faker.emoji_category().unwrap().is_empty());
        assert!(!faker.emoji_alias().unwrap().is_empty());
    }
}
