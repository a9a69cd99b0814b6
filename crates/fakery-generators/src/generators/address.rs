//! Cities, streets, postal codes and the combined Address entity.

use std::sync::LazyLock;

use fakery_core::{Distribution, Registry, Template};
use serde::Serialize;

use crate::data::datasets;
use crate::entity::Entity;
use crate::error::{GeneratorError, Result};
use crate::faker::Faker;

static CITY_FORMATS: LazyLock<Distribution<Template>> = LazyLock::new(|| {
    Distribution::from_pairs([
        (Template::parse("{{cityPrefix}} {{firstName}}{{citySuffix}}"), 0.50),
        (Template::parse("{{firstName}}{{citySuffix}}"), 0.40),
        (Template::parse("{{lastName}}{{citySuffix}}"), 0.10),
    ])
});

static STREET_ADDRESS_FORMATS: LazyLock<[Template; 2]> = LazyLock::new(|| {
    [
        Template::parse("{{buildingNumber}} {{buildingName}} {{streetName}}"),
        Template::parse("{{buildingNumber}} {{streetName}}"),
    ]
});

const BUILDING_NUMBER_FORMATS: [&str; 10] = [
    "##",
    "@-##",
    "###",
    "##@",
    "#####",
    "###@",
    "@-###",
    "##-###",
    "## - Tower @",
    "### - Tower @",
];
const SECONDARY_ADDRESS_FORMATS: [&str; 2] = ["Apt.", "Suite"];
const BUILDING_LETTER_BOUND: char = 'G';
const POST_CODE_FORMATS: [&str; 3] = ["#####", "######", "#####-####"];
const ZIP_CODE_FORMATS: [&str; 2] = ["#####", "#####-####"];

/// Only one of firstName/lastName is expanded per city.
fn city_registry() -> Registry<Faker, GeneratorError> {
    Registry::<Faker, GeneratorError>::new()
        .with("cityPrefix", |f| {
            let data = f.load_generic(datasets::ADDRESS)?;
            Ok(f.pick(data.column_or_empty("city_prefixes")))
        })
        .with("firstName", Faker::first_name)
        .with("lastName", Faker::last_name)
        .with("citySuffix", |f| {
            let data = f.load_generic(datasets::ADDRESS)?;
            Ok(f.pick(data.column_or_empty("city_suffixes")))
        })
        .exclusive(&["firstName", "lastName"])
}

fn street_registry() -> Registry<Faker, GeneratorError> {
    Registry::<Faker, GeneratorError>::new()
        .with("buildingNumber", Faker::building_number)
        .with("buildingName", Faker::building_name)
        .with("streetName", Faker::street_name)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub building: String,
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(rename = "zip", skip_serializing_if = "String::is_empty")]
    pub zip_code: String,
    pub country: String,
    pub full_address: String,
}

impl Entity for Address {}

impl Faker {
    pub fn city(&mut self) -> Result<String> {
        let format = self.sample_weighted(&*CITY_FORMATS)?;
        let city = format.resolve(&city_registry(), self)?;
        Ok(city.trim().to_string())
    }

    /// Building number such as `#42`, `Apt. C-118` or `Suite 12 - Tower B`.
    pub fn building_number(&mut self) -> Result<String> {
        let format = self.pick(&BUILDING_NUMBER_FORMATS);
        let secondary = match self.rng().coin() {
            1 => Some(self.pick(&SECONDARY_ADDRESS_FORMATS)),
            _ => None,
        };
        let digits = self.digit_sequence(&format);
        let value = self.letter_sequence(&digits, Some(BUILDING_LETTER_BOUND))?;

        Ok(match secondary {
            Some(secondary) => format!("{secondary} {value}"),
            None => format!("#{value}"),
        })
    }

    pub fn building_name(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::ADDRESS)?;
        let name = match self.rng().coin() {
            1 => self.first_name()?,
            _ => self.last_name()?,
        };
        let suffix = self.pick(data.column_or_empty("building_suffixes"));
        Ok(format!("{name} {suffix}").trim().to_string())
    }

    /// Street named after a person; `Rue` streets read `Rue de <name>`.
    pub fn street_name(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::ADDRESS)?;
        let suffix = self.pick(data.column_or_empty("street_suffixes"));

        let mut name = match self.rng().coin() {
            1 => self.first_name()?,
            _ => self.last_name()?,
        };
        if self.rng().roll_dice() == 6 {
            name = self.name()?;
        }

        Ok(match suffix.as_str() {
            "Rue" => format!("Rue de {name}"),
            _ => format!("{name} {suffix}").trim().to_string(),
        })
    }

    pub fn street_address(&mut self) -> Result<String> {
        let formats = &*STREET_ADDRESS_FORMATS;
        let idx = self.rng().int_below(formats.len())?;
        Ok(formats[idx].resolve(&street_registry(), self)?)
    }

    pub fn state(&mut self) -> Result<String> {
        let data = self.load_locale(datasets::ADDRESS)?;
        Ok(self.pick(data.column_or_empty("states")))
    }

    pub fn state_abbr(&mut self) -> Result<String> {
        let data = self.load_locale(datasets::ADDRESS)?;
        Ok(self.pick(data.column_or_empty("state_abbrevs")))
    }

    pub fn post_code(&mut self) -> String {
        let format = self.pick(&POST_CODE_FORMATS);
        self.digit_sequence(&format)
    }

    /// US style zip code, five digits with an optional `+4` block.
    pub fn zip_code(&mut self) -> String {
        let format = self.pick(&ZIP_CODE_FORMATS);
        self.digit_sequence(&format)
    }

    pub fn country(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::ADDRESS)?;
        Ok(self.pick(data.column_or_empty("countries")))
    }

    pub fn country_code(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::ADDRESS)?;
        Ok(self.pick(data.column_or_empty("country_codes")))
    }

    /// Country matching the region half of the current locale, empty when
    /// the locale has no region or the region is unknown.
    pub fn locale_country(&self) -> Result<String> {
        let Some(region) = self.region() else {
            return Ok(String::new());
        };
        let region = region.to_uppercase();
        let data = self.load_generic(datasets::ADDRESS)?;
        let codes = data.column_or_empty("country_codes");
        let countries = data.column_or_empty("countries");

        Ok(codes
            .iter()
            .position(|code| *code == region)
            .and_then(|idx| countries.get(idx))
            .cloned()
            .unwrap_or_default())
    }

    pub fn address(&mut self) -> Result<Address> {
        let formats = &*STREET_ADDRESS_FORMATS;
        let idx = self.rng().int_below(formats.len())?;
        let with_building = formats[idx].contains("buildingName");

        let number = self.building_number()?;
        let building = if with_building {
            self.building_name()?
        } else {
            String::new()
        };
        let street = self.street_name()?;
        let city = self.city()?;
        let state = self.state()?;

        let (postal_code, zip_code) = if self.locale() == "en_US" {
            (String::new(), self.zip_code())
        } else {
            (self.post_code(), String::new())
        };
        let code = if zip_code.is_empty() {
            &postal_code
        } else {
            &zip_code
        };
        let country = self.locale_country()?;

        let full_address = if building.is_empty() {
            format!("{number}, {street} {city} - {code}, {state}, {country}")
        } else {
            format!("{number} {building}, {street}, {city} - {code}, {state}, {country}")
        };

        Ok(Address {
            number,
            building,
            street,
            city,
            state,
            postal_code,
            zip_code,
            country,
            full_address,
        })
    }
}
