use crate::dataset::error::DatasetError;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_DATASET_PATH: &str = "Assets/DataSeries.csv";

/// Dataset location used when none is configured, relative to the working directory.
pub fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

/// Fails with [`DatasetError::NotFound`] unless `path` is an existing regular file.
pub fn ensure_dataset_exists(path: &Path) -> Result<(), DatasetError> {
    match std::fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_file() {
                return Err(DatasetError::NotFound(path.to_path_buf()));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(DatasetError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(DatasetError::Read(path.to_path_buf(), e)),
    }
}
