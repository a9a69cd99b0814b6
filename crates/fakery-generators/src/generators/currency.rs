//! Currencies from the row-oriented currency table.

use fakery_core::Row;
use serde::Serialize;

use crate::data::datasets;
use crate::entity::Entity;
use crate::error::{GeneratorError, Result};
use crate::faker::Faker;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Currency {
    pub name: String,
    pub code: String,
    pub country: String,
    pub amount: f64,
}

impl Entity for Currency {}

impl Faker {
    pub fn currency_code(&mut self) -> Result<String> {
        Ok(field(&self.currency_row()?, "code"))
    }

    pub fn currency_name(&mut self) -> Result<String> {
        Ok(field(&self.currency_row()?, "currency"))
    }

    pub fn currency_country(&mut self) -> Result<String> {
        Ok(field(&self.currency_row()?, "country"))
    }

    /// Amount between 1 and 1000 with a fraction in steps of 0.05.
    pub fn currency_amount(&mut self) -> Result<f64> {
        let whole = self.int_between(1, 1000)? as f64;
        let fraction = (0..100)
            .step_by(5)
            .find(|_| self.rng().roll_dice() == 6)
            .map_or(0.0, |cents| f64::from(cents) / 100.0);
        Ok(whole + fraction)
    }

    /// Currency whose name, code and country come from the same row.
    pub fn currency(&mut self) -> Result<Currency> {
        let row = self.currency_row()?;
        Ok(Currency {
            name: field(&row, "currency"),
            code: field(&row, "code"),
            country: field(&row, "country"),
            amount: self.currency_amount()?,
        })
    }

    fn currency_row(&mut self) -> Result<Row> {
        let data = self.load_generic(datasets::CURRENCY)?;
        self.random_from_list(data.rows())
            .cloned()
            .ok_or_else(|| GeneratorError::EmptyData {
                dataset: datasets::CURRENCY.to_string(),
                key: "rows".to_string(),
            })
    }
}

fn field(row: &Row, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}
