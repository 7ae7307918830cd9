use crate::types::observation::HistoricalObservation;
use crate::types::time_features::TimeFeatures;
use serde::{Deserialize, Serialize};

/// Number of continuous measurements the classifier is trained on.
pub const MODEL_FEATURE_COUNT: usize = 5;

/// The derived features of one observation or of the query point.
///
/// Only the five continuous measurements reach the classifier (see
/// [`FeatureVector::model_inputs`]); the cyclical time features are carried along
/// but are not part of the trained feature set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub air_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub shortwave_radiation: f64,
    pub longwave_radiation: f64,
    pub time: TimeFeatures,
    /// Whether precipitation occurred. `None` for the query point.
    pub label: Option<bool>,
}

impl FeatureVector {
    /// Builds a labelled training row from a historical observation.
    pub fn from_observation(observation: &HistoricalObservation) -> Self {
        Self {
            air_temperature: observation.temperature,
            humidity: observation.humidity,
            wind_speed: observation.wind_speed(),
            shortwave_radiation: observation.shortwave_radiation,
            longwave_radiation: observation.longwave_radiation,
            time: TimeFeatures {
                sin_hour: observation.sin_hour,
                cos_hour: observation.cos_hour,
                sin_day: observation.sin_day,
                cos_day: observation.cos_day,
            },
            label: Some(observation.had_precipitation()),
        }
    }

    /// The inputs fed to the classifier, in training order.
    pub fn model_inputs(&self) -> [f64; MODEL_FEATURE_COUNT] {
        [
            self.air_temperature,
            self.humidity,
            self.wind_speed,
            self.shortwave_radiation,
            self.longwave_radiation,
        ]
    }
}
