//! Blood groups.

use serde::Serialize;

use crate::entity::Entity;
use crate::faker::Faker;

const BLOOD_TYPES: [&str; 4] = ["A", "B", "AB", "O"];
const RH_FACTORS: [&str; 2] = ["+", "-"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blood {
    #[serde(rename = "type")]
    pub blood_type: String,
    pub rh_factor: String,
}

impl Entity for Blood {
    fn to_display_string(&self) -> String {
        format!("{}{}", self.blood_type, self.rh_factor)
    }
}

impl Faker {
    /// Blood group with Rh factor, e.g. `AB-`.
    pub fn blood_type(&mut self) -> String {
        self.blood().to_display_string()
    }

    pub fn blood(&mut self) -> Blood {
        let blood_type = self.pick(&BLOOD_TYPES);
        let rh_factor = self.rng().one_of(&RH_FACTORS).to_string();
        Blood {
            blood_type,
            rh_factor,
        }
    }
}
