use crate::dataset::dataset_loader::DatasetLoader;
use crate::error::PredictionError;
use crate::model::logistic_regression::LogisticRegression;
use crate::model::training_config::TrainingConfig;
use crate::prediction::region_averages::RegionAverages;
use crate::regions::resolve_region::resolve_region;
use crate::types::feature_vector::{FeatureVector, MODEL_FEATURE_COUNT};
use crate::types::lat_lon::LatLon;
use crate::types::observation::HistoricalObservation;
use crate::types::prediction_request::PredictionRequest;
use crate::types::prediction_result::{PredictionResult, QueryFeatures};
use crate::types::rain_outlook::RainOutlook;
use crate::types::reference_region::ReferenceRegion;
use crate::types::time_features::TimeFeatures;
use log::info;
use std::path::Path;

/// Synchronous prediction pipeline: resolve region, load its rows, fill missing
/// measurements with regional means, fit a fresh classifier and score the query.
///
/// Holds only configuration. Every call re-reads the dataset and retrains from
/// scratch, so calls are independent and may run concurrently.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    loader: DatasetLoader,
    training: TrainingConfig,
}

struct PreparedQuery {
    region: &'static ReferenceRegion,
    observations: Vec<HistoricalObservation>,
    query: FeatureVector,
}

impl PredictionEngine {
    pub fn new(dataset_path: &Path, training: TrainingConfig) -> Self {
        Self {
            loader: DatasetLoader::new(dataset_path),
            training,
        }
    }

    pub fn dataset_path(&self) -> &Path {
        self.loader.path()
    }

    pub fn training_config(&self) -> &TrainingConfig {
        &self.training
    }

    /// Scores one request.
    ///
    /// # Errors
    ///
    /// * [`PredictionError::InvalidInput`] if a coordinate or override is NaN or infinite.
    /// * [`PredictionError::DatasetNotFound`] if the dataset file does not exist.
    /// * [`PredictionError::NoDataForRegion`] if the resolved region has no rows.
    /// * [`PredictionError::Dataset`] / [`PredictionError::Training`] for malformed data.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
        let prepared = self.prepare(request)?;

        let (rows, labels): (Vec<[f64; MODEL_FEATURE_COUNT]>, Vec<bool>) = prepared
            .observations
            .iter()
            .map(FeatureVector::from_observation)
            .map(|row| (row.model_inputs(), row.label == Some(true)))
            .unzip();
        let model = LogisticRegression::fit(&rows, &labels, &self.training)?;

        let probability = model.probability(&prepared.query.model_inputs());
        let classification = RainOutlook::from_probability(probability);
        info!(
            "Predicted {} ({:.4}) for region {} from {} rows",
            classification,
            probability,
            prepared.region.name,
            rows.len()
        );

        Ok(PredictionResult {
            region: prepared.region.name.to_string(),
            probability,
            classification,
            features: prepared.query,
        })
    }

    /// The query point a prediction for `request` would score, without fitting a model.
    pub fn query_features(&self, request: &PredictionRequest) -> Result<QueryFeatures, PredictionError> {
        let prepared = self.prepare(request)?;
        Ok(QueryFeatures {
            region: prepared.region.name.to_string(),
            features: prepared.query,
        })
    }

    fn prepare(&self, request: &PredictionRequest) -> Result<PreparedQuery, PredictionError> {
        request.ensure_finite()?;

        let time = TimeFeatures::from_datetime(&request.date);
        let LatLon(latitude, longitude) = request.location;
        let region = resolve_region(latitude, longitude);
        info!(
            "Resolved ({}, {}) to region {}{}",
            latitude,
            longitude,
            region.name,
            if request.overrides.is_empty() {
                ", all measurements from regional averages"
            } else {
                ""
            }
        );

        let observations = self.loader.load_region(region.name)?;
        let averages = RegionAverages::from_observations(&observations).ok_or_else(|| {
            PredictionError::NoDataForRegion {
                region: region.name.to_string(),
                path: self.dataset_path().to_path_buf(),
            }
        })?;
        let query = averages.query_vector(&request.overrides, time);

        Ok(PreparedQuery {
            region,
            observations,
            query,
        })
    }
}
