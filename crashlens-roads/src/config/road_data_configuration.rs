use crate::model::{road::HighwayCategory, road::QUERY_CATEGORIES, RoadDataError};
use crate::util::serde_ops::duration_text;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// defines behaviors for a road data generation run. every field has a
/// default, so a configuration file only needs to name what it overrides.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RoadDataConfiguration {
    /// overpass API interpreter endpoints in priority order
    pub overpass_servers: Vec<String>,
    /// wall-clock limit on a single request
    #[serde(with = "duration_text")]
    pub request_timeout: Duration,
    /// wait between failed attempts against the same server
    #[serde(with = "duration_text")]
    pub retry_delay: Duration,
    /// attempts per server before failing over to the next one
    pub max_attempts: usize,
    /// pacing between jurisdictions, to stay under server rate limits
    #[serde(with = "duration_text")]
    pub jurisdiction_delay: Duration,
    pub query_timeout_seconds: u64,
    pub query_max_size_bytes: Option<u64>,
    pub categories: Vec<HighwayCategory>,
    pub output_directory: String,
    /// alternate jurisdiction table, replacing the embedded Virginia table
    pub jurisdictions_file: Option<String>,
}

impl Default for RoadDataConfiguration {
    fn default() -> Self {
        Self {
            overpass_servers: vec![
                String::from("https://overpass-api.de/api/interpreter"),
                String::from("https://overpass.kumi.systems/api/interpreter"),
                String::from("https://maps.mail.ru/osm/tools/overpass/api/interpreter"),
            ],
            request_timeout: Duration::from_secs(120),
            retry_delay: Duration::from_secs(5),
            max_attempts: 3,
            jurisdiction_delay: Duration::from_secs(10),
            query_timeout_seconds: 120,
            query_max_size_bytes: None,
            categories: QUERY_CATEGORIES.to_vec(),
            output_directory: String::from("data"),
            jurisdictions_file: None,
        }
    }
}

impl RoadDataConfiguration {
    pub fn validate(&self) -> Result<(), RoadDataError> {
        if self.overpass_servers.is_empty() {
            Err(RoadDataError::ConfigurationError(String::from(
                "at least one overpass server is required",
            )))
        } else if self.max_attempts == 0 {
            Err(RoadDataError::ConfigurationError(String::from(
                "max_attempts must be at least 1",
            )))
        } else if self.categories.is_empty() {
            Err(RoadDataError::ConfigurationError(String::from(
                "at least one highway category is required",
            )))
        } else {
            Ok(())
        }
    }
}

impl TryFrom<&String> for RoadDataConfiguration {
    type Error = RoadDataError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: RoadDataConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RoadDataError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                RoadDataError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RoadDataError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                RoadDataError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(RoadDataError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
