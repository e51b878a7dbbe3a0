use super::{FetchError, OverpassQuery, OverpassResponse, OverpassTransport};
use crate::{
    config::RoadDataConfiguration,
    model::{
        jurisdiction::{Jurisdiction, JurisdictionRegistry},
        road::HighwayCategory,
    },
};
use std::time::Duration;

/// fetches highway geometry for a jurisdiction from a priority-ordered list
/// of Overpass servers. each server is retried a fixed number of times before
/// failing over to the next; the first server to return an `elements`
/// collection wins.
pub struct OverpassClient<T: OverpassTransport> {
    transport: T,
    endpoints: Vec<String>,
    max_attempts: usize,
    retry_delay: Duration,
    categories: Vec<HighwayCategory>,
    query_timeout_seconds: u64,
    query_max_size_bytes: Option<u64>,
}

impl<T: OverpassTransport> OverpassClient<T> {
    pub fn new(transport: T, conf: &RoadDataConfiguration) -> OverpassClient<T> {
        OverpassClient {
            transport,
            endpoints: conf.overpass_servers.clone(),
            max_attempts: conf.max_attempts,
            retry_delay: conf.retry_delay,
            categories: conf.categories.clone(),
            query_timeout_seconds: conf.query_timeout_seconds,
            query_max_size_bytes: conf.query_max_size_bytes,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_query(&self, jurisdiction: &Jurisdiction) -> OverpassQuery {
        OverpassQuery::new(
            jurisdiction.bbox,
            &self.categories,
            self.query_timeout_seconds,
            self.query_max_size_bytes,
        )
    }

    /// fetches all road ways inside the bounding box of a jurisdiction.
    ///
    /// # Arguments
    /// * `registry` - jurisdiction table used to resolve the identifier
    /// * `jurisdiction_id` - identifier such as `henrico`
    ///
    /// # Returns
    /// the first successful server response, [`FetchError::UnknownJurisdiction`]
    /// without any network call when the identifier is not in the registry,
    /// or [`FetchError::AllEndpointsFailed`] when no server succeeded.
    pub fn fetch(
        &self,
        registry: &JurisdictionRegistry,
        jurisdiction_id: &str,
    ) -> Result<OverpassResponse, FetchError> {
        let jurisdiction = registry
            .get(jurisdiction_id)
            .ok_or_else(|| FetchError::UnknownJurisdiction(String::from(jurisdiction_id)))?;
        let query = self.build_query(jurisdiction).to_string();
        log::debug!("overpass query for {jurisdiction_id}: {query}");

        self.endpoints
            .iter()
            .find_map(|endpoint| {
                log::info!("  Trying {}...", server_name(endpoint));
                let attempt = self
                    .fetch_with_retry(endpoint, &query, self.max_attempts)
                    .and_then(|body| OverpassResponse::try_from_json(endpoint, body));
                match attempt {
                    Ok(response) => Some(response),
                    Err(e) => {
                        log::warn!("  {e}");
                        None
                    }
                }
            })
            .ok_or(FetchError::AllEndpointsFailed(self.endpoints.len()))
    }

    /// posts the query to one server until it returns a JSON body or the
    /// attempts run out, sleeping `retry_delay` between failed attempts.
    pub fn fetch_with_retry(
        &self,
        endpoint: &str,
        payload: &str,
        max_attempts: usize,
    ) -> Result<serde_json::Value, FetchError> {
        let mut last_error: Option<FetchError> = None;
        for attempt in 1..=max_attempts {
            let result = self.transport.post_query(endpoint, payload).and_then(|body| {
                serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
                    FetchError::MalformedBody {
                        endpoint: String::from(endpoint),
                        message: e.to_string(),
                    }
                })
            });
            match result {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!("  Attempt {attempt}/{max_attempts} failed: {e}");
                    if attempt < max_attempts {
                        log::info!(
                            "  Waiting {} before retry...",
                            humantime::format_duration(self.retry_delay)
                        );
                        std::thread::sleep(self.retry_delay);
                    }
                    last_error = Some(e);
                }
            }
        }
        Err(FetchError::RetriesExhausted {
            endpoint: String::from(endpoint),
            attempts: max_attempts,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| String::from("no attempts were made")),
        })
    }
}

/// short label for log lines, the first label of the endpoint host name.
fn server_name(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| {
            url.host_str()
                .and_then(|host| host.split('.').next())
                .map(String::from)
        })
        .unwrap_or_else(|| String::from(endpoint))
}
