use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// earth radius used for all road lengths, in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// a road vertex as a (latitude, longitude) pair in degrees. serializes as a
/// two-element JSON array `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex(pub f64, pub f64);

impl Vertex {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

impl From<&Vertex> for Coord<f64> {
    fn from(value: &Vertex) -> Self {
        Coord {
            x: value.lon(),
            y: value.lat(),
        }
    }
}

/// great-circle distance between two coordinates (x=lon, y=lat, degrees), in miles.
pub fn haversine_miles(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.y.to_radians().cos() * b.y.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_MILES * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// sums the haversine distance between consecutive vertices of a polyline.
///
/// # Arguments
/// * `vertices` - ordered (lat, lon) vertices
///
/// # Returns
/// the polyline length in miles, or 0 when fewer than two vertices are given
pub fn polyline_miles(vertices: &[Vertex]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }
    let linestring: LineString<f64> = vertices.iter().map(Coord::from).collect();
    linestring
        .lines()
        .map(|line| haversine_miles(line.start, line.end))
        .sum()
}

/// rounds a value to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
