use crate::model::road::JurisdictionDataset;
use crate::util::serde_ops::timestamp_millis;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const MANIFEST_VERSION: &str = "1.0";

/// the shared index of persisted jurisdiction datasets. fields this crate
/// does not know about are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub generated: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub jurisdictions: IndexMap<String, ManifestEntry>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// summary row for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    #[serde(default)]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_miles: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_version() -> String {
    String::from(MANIFEST_VERSION)
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            generated: String::new(),
            version: default_version(),
            jurisdictions: IndexMap::new(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Manifest {
    /// sets the entry for a jurisdiction from its freshly written dataset and
    /// refreshes the top-level generation timestamp. the previous entry is
    /// replaced whole.
    pub fn record(
        &mut self,
        jurisdiction_id: &str,
        dataset: &JurisdictionDataset,
        now: DateTime<Utc>,
    ) {
        let entry = ManifestEntry::from(dataset);
        self.jurisdictions
            .insert(String::from(jurisdiction_id), entry);
        self.generated = timestamp_millis::format(&now);
    }

    pub fn get(&self, jurisdiction_id: &str) -> Option<&ManifestEntry> {
        self.jurisdictions.get(jurisdiction_id)
    }
}

impl From<&JurisdictionDataset> for ManifestEntry {
    fn from(dataset: &JurisdictionDataset) -> Self {
        ManifestEntry {
            available: true,
            last_updated: Some(timestamp_millis::format(&dataset.generated)),
            road_count: Some(dataset.road_count),
            total_miles: Some(dataset.total_miles),
            extra: serde_json::Map::new(),
        }
    }
}
