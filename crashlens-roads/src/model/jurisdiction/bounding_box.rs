use geo::{coord, Rect};
use serde::{Deserialize, Serialize};

/// geographic extent of a jurisdiction. serialized in the registry as
/// `[west, south, east, north]` in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox(Rect<f64>);

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<BoundingBox, String> {
        let west = check_range(west, -180.0, 180.0).map_err(|e| format!("invalid west: {e}"))?;
        let east = check_range(east, -180.0, 180.0).map_err(|e| format!("invalid east: {e}"))?;
        let south = check_range(south, -90.0, 90.0).map_err(|e| format!("invalid south: {e}"))?;
        let north = check_range(north, -90.0, 90.0).map_err(|e| format!("invalid north: {e}"))?;
        if !(west < east) {
            Err(format!(
                "bbox: west must be less than east, but found [{west},{east}]"
            ))
        } else if !(south < north) {
            Err(format!(
                "bbox: south must be less than north, but found [{south},{north}]"
            ))
        } else {
            let rect = Rect::new(coord! { x: west, y: south }, coord! { x: east, y: north });
            Ok(BoundingBox(rect))
        }
    }

    pub fn west(&self) -> f64 {
        self.0.min().x
    }

    pub fn south(&self) -> f64 {
        self.0.min().y
    }

    pub fn east(&self) -> f64 {
        self.0.max().x
    }

    pub fn north(&self) -> f64 {
        self.0.max().y
    }

    /// renders the box in the Overpass QL `(south,west,north,east)` order.
    pub fn to_overpass_bbox(&self) -> String {
        format!(
            "({},{},{},{})",
            self.south(),
            self.west(),
            self.north(),
            self.east()
        )
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = String;

    fn try_from(value: [f64; 4]) -> Result<Self, Self::Error> {
        let [west, south, east, north] = value;
        BoundingBox::new(west, south, east, north)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(value: BoundingBox) -> Self {
        [value.west(), value.south(), value.east(), value.north()]
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            self.west(),
            self.south(),
            self.east(),
            self.north()
        )
    }
}

fn check_range(v: f64, min: f64, max: f64) -> Result<f64, String> {
    if !v.is_finite() || v < min || max < v {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;

    #[test]
    fn test_overpass_order() {
        let bbox = BoundingBox::new(-77.6604, 37.3862, -77.1462, 37.7234).unwrap();
        assert_eq!(
            bbox.to_overpass_bbox(),
            "(37.3862,-77.6604,37.7234,-77.1462)"
        );
    }

    #[test]
    fn test_deserialize_array() {
        let bbox: BoundingBox =
            serde_json::from_str("[-77.6604, 37.3862, -77.1462, 37.7234]").unwrap();
        assert_eq!(bbox.west(), -77.6604);
        assert_eq!(bbox.south(), 37.3862);
        assert_eq!(bbox.east(), -77.1462);
        assert_eq!(bbox.north(), 37.7234);
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        // north of 90 degrees is not a latitude
        let result: Result<BoundingBox, _> =
            serde_json::from_str("[-77.3278, 37.2652, -77.2576, 97.3337]");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_inverted_box() {
        assert!(BoundingBox::new(-77.1, 37.3, -77.6, 37.7).is_err());
        assert!(BoundingBox::new(-77.6, 37.7, -77.1, 37.3).is_err());
    }
}
