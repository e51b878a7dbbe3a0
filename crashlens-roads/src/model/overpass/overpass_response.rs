use super::{FetchError, OsmWayId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// decoded `[out:json]` payload of an Overpass API query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<RawElement>,
}

/// a single element of an Overpass response. only ways queried with
/// `out geom` carry a geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub id: OsmWayId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<GeometryPoint>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryPoint {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassResponse {
    /// decodes a parsed response body. a body without an `elements`
    /// collection is reported separately from one that fails to decode.
    pub fn try_from_json(
        endpoint: &str,
        value: serde_json::Value,
    ) -> Result<OverpassResponse, FetchError> {
        match value.get("elements") {
            Some(serde_json::Value::Array(_)) => {}
            _ => {
                return Err(FetchError::MissingElements {
                    endpoint: String::from(endpoint),
                })
            }
        }
        serde_json::from_value(value).map_err(|e| FetchError::MalformedBody {
            endpoint: String::from(endpoint),
            message: e.to_string(),
        })
    }
}

impl RawElement {
    pub fn is_way(&self) -> bool {
        self.element_type == "way"
    }

    /// ways with at least one geometry vertex are usable as roads.
    pub fn has_geometry(&self) -> bool {
        self.geometry.as_ref().map(|g| !g.is_empty()).unwrap_or(false)
    }

    /// a tag value exactly as given upstream. empty or whitespace-only
    /// values are absent.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .as_ref()
            .and_then(|t| t.get(key))
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}
