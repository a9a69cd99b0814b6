//! Beer names, styles and brewing figures.

use serde::Serialize;

use crate::data::datasets;
use crate::entity::Entity;
use crate::error::Result;
use crate::faker::Faker;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Beer {
    pub name: String,
    pub style: String,
    pub hops: String,
    pub malt: String,
    pub ibu: String,
    pub blg: String,
    pub alcohol: String,
}

impl Entity for Beer {}

impl Faker {
    pub fn beer_name(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::BEER)?;
        self.require(&data, "beer_names")
    }

    pub fn beer_style(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::BEER)?;
        Ok(self.pick(data.column_or_empty("beer_styles")))
    }

    pub fn beer_hops(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::BEER)?;
        Ok(format!("{} Hops", self.pick(data.column_or_empty("beer_hops"))))
    }

    pub fn beer_malt(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::BEER)?;
        Ok(format!("{} Malt", self.pick(data.column_or_empty("beer_malts"))))
    }

    /// Bitterness, `10 IBU` to `99 IBU`.
    pub fn beer_ibu(&mut self) -> Result<String> {
        Ok(format!("{} IBU", self.int_between(10, 100)?))
    }

    /// Gravity in degrees Balling, e.g. `12.4°Blg`.
    pub fn beer_blg(&mut self) -> Result<String> {
        Ok(format!("{:.1}°Blg", self.rng().float_between(2, 5, 20)?))
    }

    pub fn beer_alcohol(&mut self) -> Result<String> {
        Ok(format!("{:.1}%", self.rng().float_between(2, 2, 10)?))
    }

    pub fn beer(&mut self) -> Result<Beer> {
        Ok(Beer {
            name: self.beer_name()?,
            style: self.beer_style()?,
            hops: self.beer_hops()?,
            malt: self.beer_malt()?,
            ibu: self.beer_ibu()?,
            blg: self.beer_blg()?,
            alcohol: self.beer_alcohol()?,
        })
    }
}
