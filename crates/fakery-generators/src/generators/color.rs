//! Color names and the Color entity.

use serde::Serialize;

use crate::algorithms::{closest_named_color, hsl_to_rgb, Hsl, Rgb};
use crate::data::datasets;
use crate::entity::Entity;
use crate::error::Result;
use crate::faker::Faker;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    #[serde(rename = "closest_name", skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Entity for Color {}

impl Faker {
    /// Adjective plus color, e.g. `Dusty Rose`.
    pub fn color_name(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::COLOR)?;
        let adjective = self.pick(data.column_or_empty("color_adjectives"));
        let name = self.pick(data.column_or_empty("color_names"));
        Ok(format!("{adjective} {name}").trim().to_string())
    }

    /// Plain color name without an adjective.
    pub fn safe_color_name(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::COLOR)?;
        Ok(self.pick(data.column_or_empty("color_names")))
    }

    pub fn hex_color(&mut self) -> Result<String> {
        Ok(format!("#{:06X}", self.rng().int_below(0xFFFFFF)?))
    }

    pub fn rgb(&mut self) -> Result<Rgb> {
        let mut channel = || -> Result<u8> { Ok(self.rng().int_below(256)? as u8) };
        Ok(Rgb::new(channel()?, channel()?, channel()?))
    }

    pub fn hsl(&mut self) -> Result<Hsl> {
        Ok(Hsl {
            h: self.rng().int_below(360)? as u16,
            s: self.rng().int_below(101)? as u8,
            l: self.rng().int_below(101)? as u8,
        })
    }

    /// `r,g,b` string.
    pub fn rgb_color(&mut self) -> Result<String> {
        Ok(self.rgb()?.to_string())
    }

    /// `h,s,l` string.
    pub fn hsl_color(&mut self) -> Result<String> {
        Ok(self.hsl()?.to_string())
    }

    /// Random HSL color with its RGB and hex forms and nearest name.
    pub fn color(&mut self) -> Result<Color> {
        let hsl = self.hsl()?;
        let rgb = hsl_to_rgb(hsl);
        Ok(Color {
            hex: rgb.to_hex(),
            rgb: rgb.to_string(),
            hsl: hsl.to_string(),
            name: closest_named_color(rgb),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded;

    #[test]
    fn test_color_names() {
        let mut faker = seeded(1);
        let data = faker.load_generic(datasets::COLOR).unwrap();
        for _ in 0..20 {
            let safe = faker.safe_color_name().unwrap();
            assert!(data.column("color_names").unwrap().contains(&safe));
            assert_eq!(faker.color_name().unwrap().split(' ').count(), 2);
        }
    }

    #[test]
    fn test_hex_color_format() {
        let mut faker = seeded(2);
        for _ in 0..100 {
            let hex = faker.hex_color().unwrap();
            assert_eq!(hex.len(), 7);
            assert!(Rgb::from_hex(&hex).is_some(), "{hex}");
        }
    }

    #[test]
    fn test_rgb_and_hsl_strings() {
        let mut faker = seeded(3);
        let rgb = faker.rgb_color().unwrap();
        assert_eq!(rgb.split(',').count(), 3);
        let hsl: Vec<u32> = faker
            .hsl_color()
            .unwrap()
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        assert!(hsl[0] < 360 && hsl[1] <= 100 && hsl[2] <= 100);
    }

    #[test]
    fn test_color_entity_is_consistent() {
        let mut faker = seeded(4);
        for _ in 0..100 {
            let color = faker.color().unwrap();
            let rgb = Rgb::from_hex(&color.hex).unwrap();
            assert_eq!(rgb.to_string(), color.rgb);
            assert!(!color.name.is_empty());
        }
    }
}
