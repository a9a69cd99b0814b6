//! Luhn-valid card numbers and the CreditCard entity.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Datelike;
use fakery_core::Distribution;
use serde::Serialize;

use crate::algorithms::{complete_luhn, luhn_check};
use crate::entity::Entity;
use crate::error::{GeneratorError, Result};
use crate::faker::Faker;

static CARD_TYPES: LazyLock<Distribution<CardType>> = LazyLock::new(|| {
    Distribution::from_pairs([
        (CardType::Visa, 0.4),
        (CardType::MasterCard, 0.4),
        (CardType::Amex, 0.1),
        (CardType::Discover, 0.1),
    ])
});

const DISCOVER_PREFIXES: [&str; 8] = ["6011", "65", "644", "645", "646", "647", "648", "649"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardType {
    #[serde(rename = "VISA")]
    Visa,
    MasterCard,
    #[serde(rename = "AMEX")]
    Amex,
    Discover,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Visa => "VISA",
            CardType::MasterCard => "MasterCard",
            CardType::Amex => "AMEX",
            CardType::Discover => "Discover",
        }
    }

    /// Total number of digits including the check digit.
    pub fn number_length(&self) -> usize {
        match self {
            CardType::Amex => 15,
            _ => 16,
        }
    }

    pub fn cvv_length(&self) -> usize {
        match self {
            CardType::Amex => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "visa" => Ok(CardType::Visa),
            "mastercard" => Ok(CardType::MasterCard),
            "amex" => Ok(CardType::Amex),
            "discover" => Ok(CardType::Discover),
            _ => Err(GeneratorError::UnsupportedCardType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditCard {
    pub number: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub cvv: String,
    pub expiry_date: String,
    pub name: String,
}

impl CreditCard {
    pub fn validate(&self) -> bool {
        luhn_check(&self.number)
    }
}

impl Entity for CreditCard {}

impl Faker {
    pub fn credit_card_type(&mut self) -> Result<CardType> {
        Ok(*self.sample_weighted(&*CARD_TYPES)?)
    }

    /// Luhn-valid number for a card type name such as `"visa"` or `"AMEX"`.
    pub fn credit_card_number(&mut self, card_type: &str) -> Result<String> {
        let card_type = card_type.parse::<CardType>()?;
        self.credit_card_number_for(card_type)
    }

    pub fn credit_card_number_for(&mut self, card_type: CardType) -> Result<String> {
        let prefix = match card_type {
            CardType::Visa => "4".to_string(),
            CardType::MasterCard => {
                if self.rng().coin() == 0 {
                    self.int_between(51, 56)?.to_string()
                } else {
                    self.int_between(2221, 2721)?.to_string()
                }
            }
            CardType::Amex => self.rng().one_of(&["34", "37"]).to_string(),
            CardType::Discover => self.pick(&DISCOVER_PREFIXES),
        };
        Ok(complete_luhn(&prefix, card_type.number_length(), self.rng()))
    }

    pub fn credit_card_cvv(&mut self, card_type: CardType) -> String {
        self.numerify(card_type.cvv_length())
    }

    /// Expiry date `MM/YY` between one and ten years from now.
    pub fn credit_card_expiry_date(&mut self) -> Result<String> {
        let month = self.int_between(1, 13)?;
        let current_year = i64::from(chrono::Utc::now().year());
        let year = self.int_between(current_year + 1, current_year + 11)?;
        Ok(format!("{month:02}/{:02}", year % 100))
    }

    pub fn credit_card(&mut self) -> Result<CreditCard> {
        let card_type = self.credit_card_type()?;
        Ok(CreditCard {
            number: self.credit_card_number_for(card_type)?,
            card_type,
            cvv: self.credit_card_cvv(card_type),
            expiry_date: self.credit_card_expiry_date()?,
            name: self.name()?,
        })
    }
}
