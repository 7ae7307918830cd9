use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Cannot fit a model without training rows")]
    EmptyTrainingSet,

    #[error("Got {labels} labels for {rows} training rows")]
    LabelCountMismatch { rows: usize, labels: usize },

    #[error("Training row {row} contains a non-finite value")]
    NonFiniteFeature { row: usize },
}
