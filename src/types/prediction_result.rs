use crate::types::feature_vector::FeatureVector;
use crate::types::rain_outlook::RainOutlook;
use serde::{Deserialize, Serialize};

/// Outcome of a single prediction request.
///
/// Created fresh per request. Storing it is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Name of the reference region the query coordinates resolved to.
    pub region: String,
    /// Probability of precipitation, within `[0, 1]`.
    pub probability: f64,
    pub classification: RainOutlook,
    /// The query point as it was scored, with regional averages filled in.
    pub features: FeatureVector,
}

impl PredictionResult {
    /// Renders the result as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The query point for a location and date, before any model is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFeatures {
    pub region: String,
    pub features: FeatureVector,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time_features::TimeFeatures;

    #[test]
    fn test_json_uses_display_labels() -> Result<(), serde_json::Error> {
        let result = PredictionResult {
            region: "Mississippi".to_string(),
            probability: 0.6,
            classification: RainOutlook::ChanceOfRain,
            features: FeatureVector {
                air_temperature: 299.0,
                humidity: 0.017,
                wind_speed: 2.5,
                shortwave_radiation: 420.0,
                longwave_radiation: 395.0,
                time: TimeFeatures::from_parts(15, 200),
                label: None,
            },
        };

        let json = result.to_json_pretty()?;
        assert!(json.contains("\"classification\": \"Chance of rain\""));
        assert!(json.contains("\"region\": \"Mississippi\""));

        let parsed: PredictionResult = serde_json::from_str(&json)?;
        assert_eq!(parsed.classification, RainOutlook::ChanceOfRain);
        assert_eq!(parsed.features.label, None);
        Ok(())
    }
}
