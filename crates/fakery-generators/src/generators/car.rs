//! Cars, per-make model tables and registration plates.

use std::sync::LazyLock;

use chrono::Datelike;
use fakery_core::Distribution;
use serde::Serialize;

use crate::data::datasets;
use crate::entity::Entity;
use crate::error::{GeneratorError, Result};
use crate::faker::Faker;
use crate::text::normalize;

static TRANSMISSIONS: LazyLock<Distribution<&'static str>> = LazyLock::new(|| {
    Distribution::from_pairs([
        ("Automatic", 0.35),
        ("Manual", 0.22),
        ("CVT", 0.15),
        ("DCT", 0.12),
        ("AMT", 0.10),
        ("IMT", 0.05),
        ("Triptronic", 0.01),
    ])
});

const PLATE_FORMATS: [&str; 20] = [
    "@@ ####",
    "@@-##-@@-####",
    "@@## @@@",
    "@@@ ####",
    "@@-###-@@",
    "@@-####",
    "####-@@-@@",
    "@@ ## ####",
    "@@ ## @@@",
    "@-###-@@",
    "@@@-##-####",
    "@@-@@-####",
    "@@-##-@@-####",
    "@@@-###-@@",
    "###-@@-####",
    "@@-###-@@@",
    "@@-####-@@",
    "@ ### @@",
    "@@@ ## ####",
    "@@-@@-##-####",
];

const FIRST_MODEL_YEAR: i64 = 1990;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub category: String,
    pub series: String,
    /// Fuel type
    #[serde(rename = "type")]
    pub fuel_type: String,
    pub transmission: String,
    pub year: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plate: String,
}

impl Entity for Car {}

impl Faker {
    pub fn car_make(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::CAR)?;
        self.require(&data, "car_makers")
    }

    /// Model of a random make.
    pub fn car_model(&mut self) -> Result<String> {
        Ok(self.car_make_and_model()?.1)
    }

    pub fn car_make_and_model(&mut self) -> Result<(String, String)> {
        let make = self.car_make()?;
        let model = self.car_model_for(&make)?;
        Ok((make, model))
    }

    /// Model from the `cars/<make>` row table.
    pub fn car_model_for(&mut self, make: &str) -> Result<String> {
        let dataset = format!("{}{}", datasets::CARS_PREFIX, normalize(make));
        let data = self.load_generic(&dataset)?;
        self.random_from_list(data.rows())
            .and_then(|row| row.get("model").cloned())
            .ok_or_else(|| GeneratorError::EmptyData {
                dataset: dataset.clone(),
                key: "model".to_string(),
            })
    }

    /// Body category, usually with an adjective such as `Compact SUV`.
    pub fn car_category(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::CAR)?;
        let category = self.pick(data.column_or_empty("car_categories"));
        if self.rng().roll_dice() < 6 {
            let adjective = self.pick(data.column_or_empty("car_category_adjectives"));
            if !adjective.is_empty() && adjective != category {
                return Ok(format!("{adjective} {category}"));
            }
        }
        Ok(category)
    }

    pub fn car_series(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::CAR)?;
        Ok(self.pick(data.column_or_empty("car_series")))
    }

    pub fn car_fuel_type(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::CAR)?;
        Ok(self.pick(data.column_or_empty("car_fuel_types")))
    }

    pub fn car_transmission(&mut self) -> Result<String> {
        Ok(self.sample_weighted(&*TRANSMISSIONS)?.to_string())
    }

    pub fn car_plate(&mut self) -> Result<String> {
        let format = self.pick(&PLATE_FORMATS);
        let digits = self.digit_sequence(&format);
        self.letter_sequence(&digits, None)
    }

    pub fn car(&mut self) -> Result<Car> {
        let (make, model) = self.car_make_and_model()?;
        Ok(Car {
            make,
            model,
            category: self.car_category()?,
            series: self.car_series()?,
            fuel_type: self.car_fuel_type()?,
            transmission: self.car_transmission()?,
            year: self.int_between(FIRST_MODEL_YEAR, i64::from(chrono::Utc::now().year()))?,
            plate: self.car_plate()?,
        })
    }
}
