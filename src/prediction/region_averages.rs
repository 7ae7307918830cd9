use crate::types::feature_vector::FeatureVector;
use crate::types::measurement_overrides::MeasurementOverrides;
use crate::types::observation::HistoricalObservation;
use crate::types::time_features::TimeFeatures;
use serde::{Deserialize, Serialize};

/// Arithmetic means of the model inputs over one region's historical rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionAverages {
    pub temperature: f64,
    pub humidity: f64,
    /// Mean of the per-row derived wind speed, not the speed of the mean wind.
    pub wind_speed: f64,
    pub shortwave_radiation: f64,
    pub longwave_radiation: f64,
}

impl RegionAverages {
    /// `None` when there are no observations to average.
    pub fn from_observations(observations: &[HistoricalObservation]) -> Option<Self> {
        if observations.is_empty() {
            return None;
        }
        let n = observations.len() as f64;
        let mean = |field: fn(&HistoricalObservation) -> f64| -> f64 {
            observations.iter().map(field).sum::<f64>() / n
        };
        Some(Self {
            temperature: mean(|o| o.temperature),
            humidity: mean(|o| o.humidity),
            wind_speed: mean(HistoricalObservation::wind_speed),
            shortwave_radiation: mean(|o| o.shortwave_radiation),
            longwave_radiation: mean(|o| o.longwave_radiation),
        })
    }

    /// Builds the unlabelled query point, preferring caller-supplied measurements.
    pub fn query_vector(&self, overrides: &MeasurementOverrides, time: TimeFeatures) -> FeatureVector {
        FeatureVector {
            air_temperature: overrides.temperature.unwrap_or(self.temperature),
            humidity: overrides.humidity.unwrap_or(self.humidity),
            wind_speed: overrides.wind_speed.unwrap_or(self.wind_speed),
            shortwave_radiation: overrides
                .shortwave_radiation
                .unwrap_or(self.shortwave_radiation),
            longwave_radiation: overrides
                .longwave_radiation
                .unwrap_or(self.longwave_radiation),
            time,
            label: None,
        }
    }
}
