use crate::dataset::error::DatasetError;
use crate::model::error::TrainingError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Dataset not found: '{0}'")]
    DatasetNotFound(PathBuf),

    #[error("No data found for region '{region}' in '{path}'")]
    NoDataForRegion { region: String, path: PathBuf },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Dataset(DatasetError),

    #[error(transparent)]
    Training(#[from] TrainingError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

// Missing files and empty regions are lifted to their own variants so callers can
// tell them apart from a malformed dataset.
impl From<DatasetError> for PredictionError {
    fn from(error: DatasetError) -> Self {
        match error {
            DatasetError::NotFound(path) => PredictionError::DatasetNotFound(path),
            DatasetError::NoDataForRegion { region, path } => {
                PredictionError::NoDataForRegion { region, path }
            }
            other => PredictionError::Dataset(other),
        }
    }
}
