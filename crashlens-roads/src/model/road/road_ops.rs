use super::{FcBreakdown, FunctionalClass, JurisdictionDataset, RoadRecord, DATASET_VERSION};
use crate::model::{
    geometry_ops::{self, Vertex},
    jurisdiction::Jurisdiction,
    overpass::{OverpassResponse, RawElement},
};
use chrono::{DateTime, Utc};

/// builds the dataset for a jurisdiction from a fetched Overpass response,
/// stamped with the current time.
pub fn process(response: &OverpassResponse, jurisdiction: &Jurisdiction) -> JurisdictionDataset {
    process_at(response, jurisdiction, Utc::now())
}

/// builds the dataset for a jurisdiction with an explicit generation time.
///
/// only way elements with a non-empty geometry become roads; everything else
/// is dropped. the total mileage sums the unrounded road lengths before
/// rounding to 2 decimal places.
pub fn process_at(
    response: &OverpassResponse,
    jurisdiction: &Jurisdiction,
    generated: DateTime<Utc>,
) -> JurisdictionDataset {
    let mut fc_breakdown = FcBreakdown::default();
    let mut total_miles = 0.0;
    let mut roads = Vec::with_capacity(response.elements.len());

    for element in response
        .elements
        .iter()
        .filter(|e| e.is_way() && e.has_geometry())
    {
        let (road, miles) = to_road_record(element);
        fc_breakdown.increment(&road.func_class);
        total_miles += miles;
        roads.push(road);
    }

    let dropped = response.elements.len() - roads.len();
    if dropped > 0 {
        log::debug!(
            "{}: dropped {dropped} element(s) that are not ways with geometry",
            jurisdiction.id
        );
    }

    JurisdictionDataset {
        jurisdiction: jurisdiction.id.clone(),
        jurisdiction_name: jurisdiction.name.clone(),
        generated,
        version: String::from(DATASET_VERSION),
        road_count: roads.len(),
        total_miles: geometry_ops::round_to(total_miles, 2),
        fc_breakdown,
        roads,
    }
}

/// normalizes a way into a road record, also returning its unrounded length in miles.
pub fn to_road_record(element: &RawElement) -> (RoadRecord, f64) {
    let highway = element.tag("highway");
    let coords: Vec<Vertex> = element
        .geometry
        .iter()
        .flatten()
        .map(|p| Vertex(p.lat, p.lon))
        .collect();
    let miles = geometry_ops::polyline_miles(&coords);
    let record = RoadRecord {
        id: element.id,
        name: road_name(element),
        highway: highway.map(String::from).unwrap_or_default(),
        func_class: FunctionalClass::from_highway_tag(highway),
        route_ref: tag_or_empty(element, "ref"),
        lanes: tag_or_empty(element, "lanes"),
        maxspeed: tag_or_empty(element, "maxspeed"),
        surface: tag_or_empty(element, "surface"),
        length: geometry_ops::round_to(miles, 3),
        coords,
    };
    (record, miles)
}

/// display name: the `name` tag, else the `ref` tag, else "Unnamed <highway>".
pub fn road_name(element: &RawElement) -> String {
    element
        .tag("name")
        .or_else(|| element.tag("ref"))
        .map(String::from)
        .unwrap_or_else(|| format!("Unnamed {}", element.tag("highway").unwrap_or_default()))
}

fn tag_or_empty(element: &RawElement, key: &str) -> String {
    element.tag(key).map(String::from).unwrap_or_default()
}
