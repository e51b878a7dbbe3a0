use super::{FcBreakdown, RoadRecord};
use crate::util::serde_ops::timestamp_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// schema version written into every dataset file.
pub const DATASET_VERSION: &str = "1.0";

/// the processed roads of one jurisdiction, persisted as a single unit and
/// always replaced whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionDataset {
    pub jurisdiction: String,
    pub jurisdiction_name: String,
    #[serde(with = "timestamp_millis")]
    pub generated: DateTime<Utc>,
    pub version: String,
    pub road_count: usize,
    /// sum of unrounded road lengths, rounded to 2 decimal places
    pub total_miles: f64,
    pub fc_breakdown: FcBreakdown,
    pub roads: Vec<RoadRecord>,
}
