use crate::model::storage::StorageError;
use std::path::Path;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), StorageError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|source| StorageError::CreateDirectory {
            path: dirspath.to_path_buf(),
            source,
        })
    } else {
        Ok(())
    }
}
