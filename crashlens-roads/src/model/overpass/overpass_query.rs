use super::TagFilter;
use crate::model::{jurisdiction::BoundingBox, road::HighwayCategory};
use itertools::Itertools;
use std::fmt::Display;

/// a union query for highway ways inside a bounding box, written in the
/// Overpass API Language described at
/// <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide>.
/// the rendered query requests JSON output with embedded way geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassQuery {
    bbox: BoundingBox,
    filters: Vec<TagFilter>,
    /// server-side `[timeout:N]` directive, in seconds
    timeout_seconds: u64,
    /// server-side `[maxsize:N]` directive, in bytes
    max_size_bytes: Option<u64>,
}

impl OverpassQuery {
    pub fn new(
        bbox: BoundingBox,
        categories: &[HighwayCategory],
        timeout_seconds: u64,
        max_size_bytes: Option<u64>,
    ) -> OverpassQuery {
        let filters = categories
            .iter()
            .map(|c| TagFilter::highway(c.as_str()))
            .collect_vec();
        OverpassQuery {
            bbox,
            filters,
            timeout_seconds,
            max_size_bytes,
        }
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn filters(&self) -> &[TagFilter] {
        &self.filters
    }
}

impl Display for OverpassQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[out:json][timeout:{}]", self.timeout_seconds)?;
        if let Some(max_size) = self.max_size_bytes {
            write!(f, "[maxsize:{max_size}]")?;
        }
        let bbox = self.bbox.to_overpass_bbox();
        let ways = self
            .filters
            .iter()
            .map(|filter| format!("way{filter}{bbox};"))
            .join("\n");
        write!(f, ";({ways});out body geom;")
    }
}
