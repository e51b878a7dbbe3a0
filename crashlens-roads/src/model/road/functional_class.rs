use super::HighwayCategory;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// simplified 1-7 road importance code in the style of the VDOT functional
/// classification. serialized as the strings "1" through "7".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FunctionalClass {
    /// interstates and freeways
    #[serde(rename = "1")]
    One,
    /// other freeways and expressways
    #[serde(rename = "2")]
    Two,
    /// other principal arterials
    #[serde(rename = "3")]
    Three,
    /// minor arterials
    #[serde(rename = "4")]
    Four,
    /// major collectors
    #[serde(rename = "5")]
    Five,
    /// minor collectors
    #[serde(rename = "6")]
    Six,
    /// local roads, and the fallback for anything unrecognized
    #[serde(rename = "7")]
    Seven,
}

impl FunctionalClass {
    pub const ALL: [FunctionalClass; 7] = [
        FunctionalClass::One,
        FunctionalClass::Two,
        FunctionalClass::Three,
        FunctionalClass::Four,
        FunctionalClass::Five,
        FunctionalClass::Six,
        FunctionalClass::Seven,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FunctionalClass::One => "1",
            FunctionalClass::Two => "2",
            FunctionalClass::Three => "3",
            FunctionalClass::Four => "4",
            FunctionalClass::Five => "5",
            FunctionalClass::Six => "6",
            FunctionalClass::Seven => "7",
        }
    }

    /// classifies an optional raw highway tag. a missing tag is local.
    pub fn from_highway_tag(tag: Option<&str>) -> FunctionalClass {
        match tag {
            Some(t) => match t.parse::<HighwayCategory>() {
                Ok(category) => FunctionalClass::from(&category),
                Err(_) => FunctionalClass::Seven,
            },
            None => FunctionalClass::Seven,
        }
    }
}

impl From<&HighwayCategory> for FunctionalClass {
    fn from(value: &HighwayCategory) -> Self {
        use HighwayCategory as H;
        match value {
            H::Motorway | H::MotorwayLink => FunctionalClass::One,
            H::Trunk | H::TrunkLink => FunctionalClass::Two,
            H::Primary | H::PrimaryLink => FunctionalClass::Three,
            H::Secondary | H::SecondaryLink => FunctionalClass::Four,
            H::Tertiary | H::TertiaryLink => FunctionalClass::Five,
            H::Unclassified => FunctionalClass::Six,
            H::Residential | H::LivingStreet | H::Service | H::Other(_) => FunctionalClass::Seven,
        }
    }
}

impl Display for FunctionalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
