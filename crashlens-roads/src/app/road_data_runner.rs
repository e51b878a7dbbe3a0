use super::BatchSummary;
use crate::model::{
    jurisdiction::{Jurisdiction, JurisdictionRegistry},
    overpass::{OverpassClient, OverpassTransport},
    road::{road_ops, JurisdictionDataset},
    storage::RoadDataStore,
    RoadDataError,
};
use kdam::{Bar, BarExt};
use std::time::Duration;

/// sequences fetch, process and persist for each requested jurisdiction.
/// jurisdictions run one at a time, in the order given; a failure is
/// recorded against its jurisdiction and never stops the batch.
pub struct RoadDataRunner<'a, T: OverpassTransport> {
    registry: &'a JurisdictionRegistry,
    client: OverpassClient<T>,
    store: RoadDataStore,
    jurisdiction_delay: Duration,
}

impl<'a, T: OverpassTransport> RoadDataRunner<'a, T> {
    pub fn new(
        registry: &'a JurisdictionRegistry,
        client: OverpassClient<T>,
        store: RoadDataStore,
        jurisdiction_delay: Duration,
    ) -> RoadDataRunner<'a, T> {
        RoadDataRunner {
            registry,
            client,
            store,
            jurisdiction_delay,
        }
    }

    pub fn client(&self) -> &OverpassClient<T> {
        &self.client
    }

    pub fn store(&self) -> &RoadDataStore {
        &self.store
    }

    /// runs the batch.
    ///
    /// # Arguments
    /// * `jurisdiction_ids` - identifiers to process in order. when empty,
    ///   every jurisdiction in the registry is processed in table order.
    ///
    /// # Returns
    /// the successes and failures of the batch
    pub fn run(&self, jurisdiction_ids: &[String]) -> BatchSummary {
        let ids = if jurisdiction_ids.is_empty() {
            let all = self.registry.ids();
            log::info!("Processing ALL {} jurisdictions...", all.len());
            all
        } else {
            log::info!("Processing {} jurisdiction(s)...", jurisdiction_ids.len());
            jurisdiction_ids.to_vec()
        };
        let n = ids.len();

        let mut bar = match Bar::builder().total(n).desc("road data").build() {
            Ok(bar) => Some(bar),
            Err(e) => {
                log::warn!("error building progress bar: {e}");
                None
            }
        };

        let mut summary = BatchSummary::default();
        for (idx, id) in ids.iter().enumerate() {
            let position = format!("[{}/{n}]", idx + 1);
            let is_last = idx + 1 == n;
            match self.registry.get(id) {
                None => {
                    log::warn!("{position} SKIP: Unknown jurisdiction \"{id}\"");
                    summary.record_failure(id, format!("unknown jurisdiction '{id}'"));
                }
                Some(jurisdiction) => {
                    log::info!("{position} {}", jurisdiction.name);
                    match self.client.fetch(self.registry, id) {
                        Err(e) => {
                            log::error!("  FAILED: Could not fetch data ({e})");
                            summary.record_failure(id, e.to_string());
                        }
                        Ok(response) => {
                            log::info!("  Received {} elements", response.elements.len());
                            let dataset = road_ops::process(&response, jurisdiction);
                            log::info!(
                                "  Processed {} roads ({} miles)",
                                dataset.road_count,
                                dataset.total_miles
                            );
                            match self.persist(id, &dataset) {
                                Ok(()) => {
                                    log::info!("  SUCCESS");
                                    summary.record_success(id);
                                }
                                Err(e) => {
                                    log::error!("  FAILED: Could not save data ({e})");
                                    summary.record_failure(id, e.to_string());
                                }
                            }
                            if !is_last {
                                self.pace(jurisdiction);
                            }
                        }
                    }
                }
            }
            if let Some(b) = bar.as_mut() {
                let _ = b.update(1);
            }
        }
        if bar.is_some() {
            eprintln!();
        }

        log::info!("{summary}");
        summary
    }

    fn persist(&self, id: &str, dataset: &JurisdictionDataset) -> Result<(), RoadDataError> {
        let path = self.store.save(dataset)?;
        log::info!("  Saved {}", path.display());
        self.store.update_manifest(id, dataset)?;
        log::info!("  Updated manifest.json");
        Ok(())
    }

    fn pace(&self, previous: &Jurisdiction) {
        if self.jurisdiction_delay.is_zero() {
            return;
        }
        log::info!(
            "  Waiting {} after {} before next jurisdiction...",
            humantime::format_duration(self.jurisdiction_delay),
            previous.id
        );
        std::thread::sleep(self.jurisdiction_delay);
    }
}
