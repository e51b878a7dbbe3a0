use serde::{de::Visitor, Deserialize, Deserializer, Serialize};
use std::{fmt::Display, str::FromStr};

/// the OSM `highway` tag values this crate distinguishes. any other value is
/// carried through as [`HighwayCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HighwayCategory {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    LivingStreet,
    Service,
    Other(String),
}

/// the categories requested from the Overpass API, in query order.
pub const QUERY_CATEGORIES: [HighwayCategory; 11] = [
    HighwayCategory::Motorway,
    HighwayCategory::MotorwayLink,
    HighwayCategory::Trunk,
    HighwayCategory::TrunkLink,
    HighwayCategory::Primary,
    HighwayCategory::PrimaryLink,
    HighwayCategory::Secondary,
    HighwayCategory::SecondaryLink,
    HighwayCategory::Tertiary,
    HighwayCategory::TertiaryLink,
    HighwayCategory::Unclassified,
];

impl HighwayCategory {
    pub fn as_str(&self) -> &str {
        use HighwayCategory as H;
        match self {
            H::Motorway => "motorway",
            H::MotorwayLink => "motorway_link",
            H::Trunk => "trunk",
            H::TrunkLink => "trunk_link",
            H::Primary => "primary",
            H::PrimaryLink => "primary_link",
            H::Secondary => "secondary",
            H::SecondaryLink => "secondary_link",
            H::Tertiary => "tertiary",
            H::TertiaryLink => "tertiary_link",
            H::Unclassified => "unclassified",
            H::Residential => "residential",
            H::LivingStreet => "living_street",
            H::Service => "service",
            H::Other(s) => s.as_str(),
        }
    }
}

impl FromStr for HighwayCategory {
    type Err = String;

    /// never fails; unrecognized tag values become [`HighwayCategory::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use HighwayCategory as H;
        let category = match s.trim() {
            "motorway" => H::Motorway,
            "motorway_link" => H::MotorwayLink,
            "trunk" => H::Trunk,
            "trunk_link" => H::TrunkLink,
            "primary" => H::Primary,
            "primary_link" => H::PrimaryLink,
            "secondary" => H::Secondary,
            "secondary_link" => H::SecondaryLink,
            "tertiary" => H::Tertiary,
            "tertiary_link" => H::TertiaryLink,
            "unclassified" => H::Unclassified,
            "residential" => H::Residential,
            "living_street" => H::LivingStreet,
            "service" => H::Service,
            other => H::Other(String::from(other)),
        };
        Ok(category)
    }
}

impl Display for HighwayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct HighwayCategoryVisitor;

impl Visitor<'_> for HighwayCategoryVisitor {
    type Value = HighwayCategory;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an OSM highway tag value such as 'motorway' or 'tertiary_link'")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        HighwayCategory::from_str(v).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for HighwayCategory {
    fn deserialize<D>(deserializer: D) -> Result<HighwayCategory, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HighwayCategoryVisitor)
    }
}

impl Serialize for HighwayCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{HighwayCategory, QUERY_CATEGORIES};
    use std::str::FromStr;

    #[test]
    fn test_query_categories_round_trip_through_tag_text() {
        for category in QUERY_CATEGORIES.iter() {
            let parsed = HighwayCategory::from_str(category.as_str()).unwrap();
            assert_eq!(&parsed, category);
        }
    }

    #[test]
    fn test_unrecognized_tag_is_other() {
        let parsed = HighwayCategory::from_str("footway").unwrap();
        assert_eq!(parsed, HighwayCategory::Other(String::from("footway")));
        assert_eq!(parsed.to_string(), "footway");
    }

    #[test]
    fn test_deserialize_from_config_text() {
        let parsed: Vec<HighwayCategory> =
            serde_json::from_str(r#"["motorway", "living_street", "track"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                HighwayCategory::Motorway,
                HighwayCategory::LivingStreet,
                HighwayCategory::Other(String::from("track"))
            ]
        );
    }
}
