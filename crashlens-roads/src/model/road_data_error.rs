use super::{overpass::FetchError, storage::StorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadDataError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading jurisdiction registry: {0}")]
    RegistryError(String),
    #[error("failure fetching road data: {source}")]
    FetchError {
        #[from]
        source: FetchError,
    },
    #[error("failure persisting road data: {source}")]
    StorageError {
        #[from]
        source: StorageError,
    },
}
