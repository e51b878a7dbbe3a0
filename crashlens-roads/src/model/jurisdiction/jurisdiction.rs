use super::{BoundingBox, JurisdictionType};
use serde::{Deserialize, Serialize};

/// static reference data for a Virginia county or independent city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub jurisdiction_type: JurisdictionType,
    /// 3-digit county/city FIPS code within Virginia
    pub fips: String,
    /// map center as [lat, lon]
    pub center: [f64; 2],
    /// suggested web map zoom level
    pub zoom: u8,
    pub bbox: BoundingBox,
}
