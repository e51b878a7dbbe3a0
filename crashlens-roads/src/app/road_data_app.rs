use super::{BatchSummary, RoadDataRunner};
use crate::{
    config::RoadDataConfiguration,
    model::{
        jurisdiction::JurisdictionRegistry,
        overpass::{OverpassClient, ReqwestTransport},
        storage::RoadDataStore,
        RoadDataError,
    },
};
use clap::Parser;

/// Command line tool that downloads OpenStreetMap highways for Virginia
/// jurisdictions from the Overpass API and writes per-jurisdiction road
/// datasets plus a summary manifest
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct RoadDataApp {
    /// jurisdiction identifiers to process, such as `henrico`. processes every
    /// known jurisdiction when none are given.
    pub jurisdictions: Vec<String>,
    #[arg(long, help = "path to a .toml or .json file with road data parameters")]
    pub configuration_file: Option<String>,
    #[arg(long, help = "output path for road datasets and the manifest")]
    pub output_directory: Option<String>,
}

impl RoadDataApp {
    /// loads configuration and the jurisdiction table, then runs the batch.
    /// only setup failures are returned as errors; failures of individual
    /// jurisdictions are reported in the summary.
    pub fn run(&self) -> Result<BatchSummary, RoadDataError> {
        let mut conf = match &self.configuration_file {
            None => Ok(RoadDataConfiguration::default()),
            Some(f) => {
                log::info!("reading road data configuration from {f}");
                RoadDataConfiguration::try_from(f)
            }
        }?;
        if let Some(output_directory) = &self.output_directory {
            conf.output_directory = output_directory.clone();
        }

        let registry = match &conf.jurisdictions_file {
            None => JurisdictionRegistry::virginia(),
            Some(f) => {
                log::info!("reading jurisdictions from {f}");
                JurisdictionRegistry::from_file(f)
            }
        }?;
        log::info!("loaded {} jurisdictions", registry.len());

        let transport = ReqwestTransport::new(conf.request_timeout)?;
        let client = OverpassClient::new(transport, &conf);
        let store = RoadDataStore::new(&conf.output_directory);
        log::info!("writing road data to {}", store.output_directory().display());

        let runner = RoadDataRunner::new(&registry, client, store, conf.jurisdiction_delay);
        Ok(runner.run(&self.jurisdictions))
    }
}
