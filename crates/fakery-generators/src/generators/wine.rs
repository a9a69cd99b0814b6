//! Wine names, regions and tasting notes.

use chrono::Datelike;
use serde::Serialize;

use crate::data::datasets;
use crate::entity::Entity;
use crate::error::Result;
use crate::faker::Faker;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wine {
    pub name: String,
    pub varietal: String,
    pub region: String,
    pub country: String,
    pub vintage: String,
    pub alcohol: String,
    pub body: String,
    pub acidity: String,
    pub tannins: String,
    pub sweetness: String,
}

impl Entity for Wine {}

/// Split `"Area, Sub-area, Country"` into region and country.
fn split_region(entry: &str) -> (String, String) {
    let parts: Vec<&str> = entry.splitn(3, ',').collect();
    match parts.as_slice() {
        [area, sub_area, country] => (
            format!("{},{}", area.trim(), sub_area.trim_end()),
            country.trim().to_string(),
        ),
        _ => (entry.trim().to_string(), String::new()),
    }
}

impl Faker {
    pub fn wine_name(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::WINE)?;
        self.require(&data, "wine_names")
    }

    pub fn wine_varietal(&mut self) -> Result<String> {
        self.wine_column("wine_varietals")
    }

    /// Raw region entry, `"Area, Sub-area, Country"`.
    pub fn wine_region(&mut self) -> Result<String> {
        self.wine_column("wine_regions")
    }

    pub fn wine_body(&mut self) -> Result<String> {
        self.wine_column("wine_bodies")
    }

    pub fn wine_acidity(&mut self) -> Result<String> {
        self.wine_column("wine_acidities")
    }

    pub fn wine_tannins(&mut self) -> Result<String> {
        self.wine_column("wine_tannins")
    }

    pub fn wine_sweetness(&mut self) -> Result<String> {
        self.wine_column("wine_sweetness")
    }

    /// Vintage year within the last fifty years.
    pub fn wine_vintage(&mut self) -> Result<String> {
        let year = i64::from(chrono::Utc::now().year());
        Ok(self.int_between(year - 50, year - 1)?.to_string())
    }

    pub fn wine_alcohol(&mut self) -> Result<String> {
        Ok(format!("{:.1}%", self.rng().float_between(2, 5, 24)?))
    }

    pub fn wine(&mut self) -> Result<Wine> {
        let name = self.wine_name()?;
        let varietal = self.wine_varietal()?;
        let (region, country) = split_region(&self.wine_region()?);

        Ok(Wine {
            name,
            varietal,
            region,
            country,
            vintage: self.wine_vintage()?,
            alcohol: self.wine_alcohol()?,
            body: self.wine_body()?,
            acidity: self.wine_acidity()?,
            tannins: self.wine_tannins()?,
            sweetness: self.wine_sweetness()?,
        })
    }

    fn wine_column(&mut self, key: &str) -> Result<String> {
        let data = self.load_generic(datasets::WINE)?;
        Ok(self.pick(data.column_or_empty(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded;

    #[test]
    fn test_split_region() {
        assert_eq!(
            split_region("Napa Valley, California, United States"),
            ("Napa Valley, California".to_string(), "United States".to_string())
        );
        assert_eq!(
            split_region("Tuscany, Chianti, Italy, extra"),
            ("Tuscany, Chianti".to_string(), "Italy, extra".to_string())
        );
        assert_eq!(split_region("Nowhere"), ("Nowhere".to_string(), String::new()));
    }

    #[test]
    fn test_wine_entity() {
        let mut faker = seeded(1);
        let year = i64::from(chrono::Utc::now().year());
        for _ in 0..50 {
            let wine = faker.wine().unwrap();
            assert!(!wine.name.is_empty());
            assert!(!wine.country.is_empty());
            assert!(!wine.region.ends_with(&wine.country));
            let vintage: i64 = wine.vintage.parse().unwrap();
            assert!((year - 50..year - 1).contains(&vintage));
            let alcohol: f64 = wine.alcohol.trim_end_matches('%').parse().unwrap();
            assert!((5.0..=23.0).contains(&alcohol));
        }
    }
}
