use serde::{Deserialize, Serialize};

/// Caller-supplied measurements for a prediction.
///
/// Every field left as `None` is replaced by the average of that measurement over
/// the resolved region's historical rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementOverrides {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub shortwave_radiation: Option<f64>,
    pub longwave_radiation: Option<f64>,
}

impl MeasurementOverrides {
    /// True when no measurement was supplied.
    pub fn is_empty(&self) -> bool {
        self.named_values().iter().all(|(_, value)| value.is_none())
    }

    /// The overrides paired with their field names, in feature order.
    pub fn named_values(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("wind_speed", self.wind_speed),
            ("shortwave_radiation", self.shortwave_radiation),
            ("longwave_radiation", self.longwave_radiation),
        ]
    }

    /// Name of the first supplied value that is NaN or infinite, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        self.named_values()
            .into_iter()
            .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(MeasurementOverrides::default().is_empty());
        let humid = MeasurementOverrides {
            humidity: Some(0.02),
            ..Default::default()
        };
        assert!(!humid.is_empty());
    }

    #[test]
    fn test_first_non_finite_reports_field_order() {
        let overrides = MeasurementOverrides {
            temperature: Some(300.0),
            wind_speed: Some(f64::NAN),
            longwave_radiation: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(overrides.first_non_finite(), Some("wind_speed"));
        assert_eq!(MeasurementOverrides::default().first_non_finite(), None);
    }
}
