use super::FunctionalClass;
use crate::model::{geometry_ops::Vertex, overpass::OsmWayId};
use serde::{Deserialize, Serialize};

/// a normalized road segment. optional OSM tags that were absent upstream
/// are carried as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadRecord {
    pub id: OsmWayId,
    /// explicit name, else route reference, else "Unnamed <highway>"
    pub name: String,
    /// raw OSM highway tag value
    pub highway: String,
    pub func_class: FunctionalClass,
    #[serde(rename = "ref")]
    pub route_ref: String,
    pub lanes: String,
    pub maxspeed: String,
    pub surface: String,
    /// length in miles, rounded to 3 decimal places
    pub length: f64,
    pub coords: Vec<Vertex>,
}
