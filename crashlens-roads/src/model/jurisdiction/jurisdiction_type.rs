use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Virginia administers counties and independent cities as peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionType {
    County,
    City,
}

impl FromStr for JurisdictionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "county" => Ok(Self::County),
            "city" => Ok(Self::City),
            _ => Err(format!("unknown jurisdiction type '{s}'")),
        }
    }
}

impl Display for JurisdictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JurisdictionType::County => write!(f, "county"),
            JurisdictionType::City => write!(f, "city"),
        }
    }
}
