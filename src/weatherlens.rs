//! This module provides the main entry point for requesting rain forecasts.
//! It resolves coordinates to a reference region and runs the prediction engine
//! on a blocking worker thread so async callers are not stalled by model fitting.

use crate::error::PredictionError;
use crate::model::training_config::TrainingConfig;
use crate::prediction::prediction_engine::PredictionEngine;
use crate::regions::resolve_region::resolve_region;
use crate::types::lat_lon::LatLon;
use crate::types::measurement_overrides::MeasurementOverrides;
use crate::types::prediction_request::PredictionRequest;
use crate::types::prediction_result::{PredictionResult, QueryFeatures};
use crate::types::reference_region::ReferenceRegion;
use crate::utils::default_dataset_path;
use bon::bon;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;
use tokio::task;

/// The main client for rain forecasts.
///
/// The client only holds configuration: the dataset location and the training
/// hyper-parameters. Each prediction re-reads the dataset and fits a new model, so
/// a single client can serve concurrent requests without any locking.
///
/// Create an instance using [`WeatherLens::new()`] to read `Assets/DataSeries.csv`
/// relative to the working directory, or [`WeatherLens::with_dataset()`] for any
/// other location.
///
/// # Examples
///
/// ```rust
/// use weatherlens::{TrainingConfig, WeatherLens};
///
/// let client = WeatherLens::with_dataset("/srv/weather/DataSeries.csv")
///     .with_training_config(TrainingConfig::builder().max_iterations(500).build());
/// assert_eq!(client.training_config().max_iterations, 500);
/// ```
#[derive(Debug, Clone)]
pub struct WeatherLens {
    engine: Arc<PredictionEngine>,
}

impl Default for WeatherLens {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl WeatherLens {
    /// Creates a client reading the default dataset path.
    pub fn new() -> Self {
        Self::with_dataset(default_dataset_path())
    }

    /// Creates a client reading the dataset at `path`.
    ///
    /// The path is not checked here; a missing file surfaces as
    /// [`PredictionError::DatasetNotFound`] on the first prediction.
    pub fn with_dataset(path: impl AsRef<Path>) -> Self {
        Self {
            engine: Arc::new(PredictionEngine::new(
                path.as_ref(),
                TrainingConfig::default(),
            )),
        }
    }

    /// Replaces the model hyper-parameters.
    pub fn with_training_config(self, training: TrainingConfig) -> Self {
        Self {
            engine: Arc::new(PredictionEngine::new(self.engine.dataset_path(), training)),
        }
    }

    pub fn dataset_path(&self) -> &Path {
        self.engine.dataset_path()
    }

    pub fn training_config(&self) -> &TrainingConfig {
        self.engine.training_config()
    }

    /// The reference region a location maps to. Never fails.
    pub fn resolve_region(&self, location: LatLon) -> &'static ReferenceRegion {
        resolve_region(location.0, location.1)
    }

    /// Predicts the chance of rain at a location and time.
    ///
    /// Measurements that are not supplied are replaced by the average over the
    /// resolved region's historical rows.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.date(DateTime<Utc>)`: **Required.** When the forecast is for.
    /// * `.location(LatLon)`: **Required.** Where the forecast is for.
    /// * `.temperature(f64)`: Optional. Air temperature in K.
    /// * `.humidity(f64)`: Optional. Specific humidity in kg/kg.
    /// * `.wind_speed(f64)`: Optional. Wind speed in m/s.
    /// * `.shortwave_radiation(f64)`: Optional. Downward shortwave radiation in W/m².
    /// * `.longwave_radiation(f64)`: Optional. Downward longwave radiation in W/m².
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::DatasetNotFound`] if the dataset file is missing,
    /// [`PredictionError::NoDataForRegion`] if it holds no rows for the resolved
    /// region and [`PredictionError::InvalidInput`] for NaN or infinite inputs.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use weatherlens::{LatLon, PredictionError, WeatherLens};
    /// # use chrono::{TimeZone, Utc};
    /// #
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), PredictionError> {
    /// let client = WeatherLens::new();
    /// let date = Utc.with_ymd_and_hms(2024, 8, 2, 15, 0, 0).unwrap();
    ///
    /// let forecast = client
    ///     .predict()
    ///     .date(date)
    ///     .location(LatLon(29.95, -90.07)) // New Orleans
    ///     .humidity(0.019)
    ///     .call()
    ///     .await?;
    ///
    /// println!("{}: {} ({:.0}%)", forecast.region, forecast.classification, forecast.probability * 100.0);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn predict(
        &self,
        date: DateTime<Utc>,
        location: LatLon,
        temperature: Option<f64>,
        humidity: Option<f64>,
        wind_speed: Option<f64>,
        shortwave_radiation: Option<f64>,
        longwave_radiation: Option<f64>,
    ) -> Result<PredictionResult, PredictionError> {
        let request = PredictionRequest::new(date, location).with_overrides(MeasurementOverrides {
            temperature,
            humidity,
            wind_speed,
            shortwave_radiation,
            longwave_radiation,
        });
        self.predict_request(request).await
    }

    /// Same as [`WeatherLens::predict`] for an already assembled request.
    pub async fn predict_request(
        &self,
        request: PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let engine = Arc::clone(&self.engine);
        task::spawn_blocking(move || engine.predict(&request)).await?
    }

    /// Returns the query point a prediction would score, without fitting a model.
    ///
    /// Takes the same arguments as [`WeatherLens::predict`].
    #[builder]
    pub async fn features(
        &self,
        date: DateTime<Utc>,
        location: LatLon,
        temperature: Option<f64>,
        humidity: Option<f64>,
        wind_speed: Option<f64>,
        shortwave_radiation: Option<f64>,
        longwave_radiation: Option<f64>,
    ) -> Result<QueryFeatures, PredictionError> {
        let request = PredictionRequest::new(date, location).with_overrides(MeasurementOverrides {
            temperature,
            humidity,
            wind_speed,
            shortwave_radiation,
            longwave_radiation,
        });
        let engine = Arc::clone(&self.engine);
        task::spawn_blocking(move || engine.query_features(&request)).await?
    }
}
