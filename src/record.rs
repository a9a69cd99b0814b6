//! Entity kinds the CLI can generate and how a generated record is printed.

use anyhow::Context;
use clap::ValueEnum;
use fakery_generators::{Entity, Faker};
use serde_json::Value;

/// Length of generated binary strings.
const BINARY_STRING_LENGTH: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    /// Full person with consistent name, username and email
    Person,
    /// Full name from a weighted name format
    Name,
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Email address
    Email,
    /// Username
    Username,
    /// Job title
    Job,
    /// Full address
    Address,
    /// City name
    City,
    /// Street address
    StreetAddress,
    /// Country name
    Country,
    /// Car with make, model, category and plate
    Car,
    /// Beer with style, hops, malt, IBU, BLG and alcohol
    Beer,
    /// Wine with varietal, region and vintage
    Wine,
    /// Book with title, publisher and ISBN
    Book,
    /// Book title
    BookTitle,
    /// ISBN-10 or ISBN-13
    Isbn,
    /// Color with hex, RGB, HSL and nearest named color
    Color,
    /// Hex color code
    HexColor,
    /// Credit card with Luhn-valid number
    CreditCard,
    /// Luhn-valid credit card number
    CreditCardNumber,
    /// Currency with name, code, country and amount
    Currency,
    /// Emoji with category, description and alias
    Emoji,
    /// Browser user agent string
    UserAgent,
    /// Blood type
    Blood,
    /// Binary string with a leading 1
    BinaryString,
    /// Top-level domain
    Tld,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One compact JSON value per line
    #[default]
    Json,
    /// Display string (pretty JSON for entities, plain value otherwise)
    Text,
}

/// A generated value ready to print in either output format.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    json: Value,
    text: String,
}

impl Record {
    pub fn from_entity<E: Entity>(entity: &E) -> anyhow::Result<Self> {
        Ok(Self {
            json: serde_json::to_value(entity).context("Failed to serialize entity")?,
            text: entity.to_display_string(),
        })
    }

    pub fn from_text(text: String) -> Self {
        Self {
            json: Value::String(text.clone()),
            text,
        }
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.json.to_string(),
            OutputFormat::Text => self.text.clone(),
        }
    }
}

impl EntityKind {
    /// Generate one record of this kind.
    pub fn generate(self, faker: &mut Faker) -> anyhow::Result<Record> {
        let record = match self {
            EntityKind::Person => Record::from_entity(&faker.person()?)?,
            EntityKind::Name => Record::from_text(faker.name()?),
            EntityKind::FirstName => Record::from_text(faker.first_name()?),
            EntityKind::LastName => Record::from_text(faker.last_name()?),
            EntityKind::Email => Record::from_text(faker.email()?),
            EntityKind::Username => Record::from_text(faker.username()?),
            EntityKind::Job => Record::from_entity(&faker.job()?)?,
            EntityKind::Address => Record::from_entity(&faker.address()?)?,
            EntityKind::City => Record::from_text(faker.city()?),
            EntityKind::StreetAddress => Record::from_text(faker.street_address()?),
            EntityKind::Country => Record::from_text(faker.country()?),
            EntityKind::Car => Record::from_entity(&faker.car()?)?,
            EntityKind::Beer => Record::from_entity(&faker.beer()?)?,
            EntityKind::Wine => Record::from_entity(&faker.wine()?)?,
            EntityKind::Book => Record::from_entity(&faker.book()?)?,
            EntityKind::BookTitle => Record::from_text(faker.book_title()?),
            EntityKind::Isbn => Record::from_text(faker.book_isbn()),
            EntityKind::Color => Record::from_entity(&faker.color()?)?,
            EntityKind::HexColor => Record::from_text(faker.hex_color()?),
            EntityKind::CreditCard => Record::from_entity(&faker.credit_card()?)?,
            EntityKind::CreditCardNumber => {
                let card_type = faker.credit_card_type()?;
                Record::from_text(faker.credit_card_number_for(card_type)?)
            }
            EntityKind::Currency => Record::from_entity(&faker.currency()?)?,
            EntityKind::Emoji => Record::from_entity(&faker.emoji()?)?,
            EntityKind::UserAgent => Record::from_text(faker.user_agent()?),
            EntityKind::Blood => Record::from_entity(&faker.blood())?,
            EntityKind::BinaryString => Record::from_text(faker.binary_string(BINARY_STRING_LENGTH)),
            EntityKind::Tld => Record::from_text(faker.tld()?),
            EntityKind::Adjective => Record::from_text(faker.adjective()?),
            EntityKind::Adverb => Record::from_text(faker.adverb()?),
        };
        Ok(record)
    }
}
