mod manifest;
mod road_data_store;
mod storage_error;

pub use manifest::{Manifest, ManifestEntry, MANIFEST_VERSION};
pub use road_data_store::RoadDataStore;
pub use storage_error::StorageError;
