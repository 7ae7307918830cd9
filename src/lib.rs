mod dataset;
mod error;
mod model;
mod prediction;
mod regions;
mod types;
mod utils;
mod weatherlens;

pub use error::PredictionError;
pub use weatherlens::*;

pub use dataset::dataset_loader::DatasetLoader;
pub use dataset::dataset_writer::write_observations;
pub use dataset::DATASET_COLUMNS;

pub use model::logistic_regression::LogisticRegression;
pub use model::training_config::TrainingConfig;

pub use prediction::prediction_engine::PredictionEngine;
pub use prediction::region_averages::RegionAverages;

pub use regions::resolve_region::{resolve_region, resolve_region_in};

pub use types::feature_vector::{FeatureVector, MODEL_FEATURE_COUNT};
pub use types::lat_lon::LatLon;
pub use types::measurement_overrides::MeasurementOverrides;
pub use types::observation::HistoricalObservation;
pub use types::prediction_request::{IntoQueryDate, PredictionRequest};
pub use types::prediction_result::{PredictionResult, QueryFeatures};
pub use types::rain_outlook::RainOutlook;
pub use types::reference_region::{ReferenceRegion, REFERENCE_REGIONS};
pub use types::time_features::TimeFeatures;

pub use utils::default_dataset_path;

pub use dataset::error::DatasetError;
pub use model::error::TrainingError;
