use super::{Manifest, StorageError};
use crate::{model::road::JurisdictionDataset, util::fs::create_dirs};
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::Permissions,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

const ROADS_DIRECTORY: &str = "roads";
const MANIFEST_FILENAME: &str = "manifest.json";

/// file-backed storage for jurisdiction datasets and the shared manifest.
///
/// layout under the output directory:
///
/// ```text
/// <output>/manifest.json
/// <output>/roads/<jurisdiction id>.json
/// ```
///
/// every write goes to a temporary file in the destination directory which
/// then replaces the target by rename, so readers never observe a partially
/// written document. a single writer is assumed.
#[derive(Debug, Clone)]
pub struct RoadDataStore {
    output_directory: PathBuf,
}

impl RoadDataStore {
    pub fn new<P: AsRef<Path>>(output_directory: P) -> RoadDataStore {
        RoadDataStore {
            output_directory: output_directory.as_ref().to_path_buf(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn dataset_path(&self, jurisdiction_id: &str) -> PathBuf {
        self.output_directory
            .join(ROADS_DIRECTORY)
            .join(format!("{jurisdiction_id}.json"))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_directory.join(MANIFEST_FILENAME)
    }

    /// writes a dataset as formatted JSON, fully replacing any previous file
    /// for the same jurisdiction.
    ///
    /// # Returns
    /// the path of the written dataset file
    pub fn save(&self, dataset: &JurisdictionDataset) -> Result<PathBuf, StorageError> {
        let path = self.dataset_path(&dataset.jurisdiction);
        write_json_atomic(&path, dataset)?;
        Ok(path)
    }

    /// read-modify-write of the manifest: bootstraps it when missing, replaces
    /// the entry for `jurisdiction_id` and refreshes the top-level timestamp.
    pub fn update_manifest(
        &self,
        jurisdiction_id: &str,
        dataset: &JurisdictionDataset,
    ) -> Result<(), StorageError> {
        let mut manifest = self.load_manifest()?;
        manifest.record(jurisdiction_id, dataset, Utc::now());
        write_json_atomic(&self.manifest_path(), &manifest)
    }

    pub fn load_dataset(&self, jurisdiction_id: &str) -> Result<JurisdictionDataset, StorageError> {
        read_json(&self.dataset_path(jurisdiction_id))
    }

    /// reads the manifest, or an empty one when no manifest has been written yet.
    pub fn load_manifest(&self) -> Result<Manifest, StorageError> {
        let path = self.manifest_path();
        if path.exists() {
            read_json(&path)
        } else {
            log::debug!("no manifest at {path:?}, starting a new one");
            Ok(Manifest::default())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let directory = path.parent().unwrap_or(Path::new("."));
    create_dirs(directory)?;
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let write_error = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(directory).map_err(write_error)?;
    tmp.write_all(&bytes).map_err(write_error)?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(path).map_err(|source| StorageError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// permissions for a replacement file: those of the file being replaced, or
/// world-readable for a new file. temp files are created owner-only.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::RoadDataStore;
    use crate::model::road::{FcBreakdown, FunctionalClass, JurisdictionDataset};
    use chrono::{TimeZone, Utc};

    fn dataset(id: &str, road_count: usize) -> JurisdictionDataset {
        let mut fc_breakdown = FcBreakdown::default();
        (0..road_count).for_each(|_| fc_breakdown.increment(&FunctionalClass::Seven));
        JurisdictionDataset {
            jurisdiction: String::from(id),
            jurisdiction_name: String::from("Henrico County"),
            generated: Utc.with_ymd_and_hms(2026, 5, 4, 3, 2, 1).unwrap(),
            version: String::from("1.0"),
            road_count,
            total_miles: 1.25,
            fc_breakdown,
            roads: vec![],
        }
    }

    #[test]
    fn test_paths() {
        let store = RoadDataStore::new("data");
        assert_eq!(
            store.dataset_path("henrico"),
            std::path::Path::new("data/roads/henrico.json")
        );
        assert_eq!(store.manifest_path(), std::path::Path::new("data/manifest.json"));
    }

    #[test]
    fn test_save_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = RoadDataStore::new(dir.path().join("nested").join("data"));

        let path = store.save(&dataset("henrico", 5)).unwrap();
        assert!(path.is_file());
        store.save(&dataset("henrico", 2)).unwrap();

        let loaded = store.load_dataset("henrico").unwrap();
        assert_eq!(loaded, dataset("henrico", 2));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"roadCount\": 2"), "{text}");
        assert_eq!(text.matches("\"jurisdiction\"").count(), 1);

        // no stray temporary files are left next to the dataset
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_update_manifest_bootstraps_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = RoadDataStore::new(dir.path());
        assert!(store.load_manifest().unwrap().jurisdictions.is_empty());

        store.update_manifest("henrico", &dataset("henrico", 5)).unwrap();
        let first = store.load_manifest().unwrap();
        assert_eq!(first.version, "1.0");
        assert!(!first.generated.is_empty());
        assert_eq!(first.get("henrico").unwrap().road_count, Some(5));

        store.update_manifest("henrico", &dataset("henrico", 7)).unwrap();
        let second = store.load_manifest().unwrap();
        assert_eq!(second.jurisdictions.len(), 1);
        let entry = second.get("henrico").unwrap();
        assert!(entry.available);
        assert_eq!(entry.road_count, Some(7));
        assert_eq!(entry.total_miles, Some(1.25));
        assert_eq!(entry.last_updated.as_deref(), Some("2026-05-04T03:02:01.000Z"));
    }

    #[test]
    fn test_update_manifest_preserves_other_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = RoadDataStore::new(dir.path());
        let existing = serde_json::json!({
            "generated": "2024-01-01T00:00:00.000Z",
            "version": "1.0",
            "publisher": "crash lens",
            "jurisdictions": {
                "fairfax": { "available": true, "roadCount": 40, "totalMiles": 12.5 }
            }
        });
        std::fs::write(store.manifest_path(), existing.to_string()).unwrap();

        store.update_manifest("henrico", &dataset("henrico", 3)).unwrap();
        let manifest = store.load_manifest().unwrap();
        assert_ne!(manifest.generated, "2024-01-01T00:00:00.000Z");
        assert_eq!(manifest.extra["publisher"], "crash lens");
        assert_eq!(manifest.get("fairfax").unwrap().road_count, Some(40));
        assert_eq!(manifest.get("henrico").unwrap().road_count, Some(3));
    }

    #[test]
    fn test_corrupt_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RoadDataStore::new(dir.path());
        std::fs::write(store.manifest_path(), "{ not json").unwrap();
        assert!(store
            .update_manifest("henrico", &dataset("henrico", 1))
            .is_err());
        assert_eq!(
            std::fs::read_to_string(store.manifest_path()).unwrap(),
            "{ not json"
        );
    }

    #[test]
    fn test_load_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = RoadDataStore::new(dir.path());
        assert!(store.load_dataset("henrico").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_written_files_are_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let mode = |p: &std::path::Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;

        let dir = tempfile::tempdir().unwrap();
        let store = RoadDataStore::new(dir.path());
        let path = store.save(&dataset("henrico", 2)).unwrap();
        assert_eq!(mode(&path), 0o644);
        store.update_manifest("henrico", &dataset("henrico", 2)).unwrap();
        assert_eq!(mode(&store.manifest_path()), 0o644);

        // an existing file keeps its mode when replaced
        std::fs::set_permissions(store.manifest_path(), std::fs::Permissions::from_mode(0o640))
            .unwrap();
        store.update_manifest("henrico", &dataset("henrico", 4)).unwrap();
        assert_eq!(mode(&store.manifest_path()), 0o640);
        store.save(&dataset("henrico", 4)).unwrap();
        assert_eq!(mode(&path), 0o644);
    }
}
