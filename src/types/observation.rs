//! One row of a region's historical dataset.

use serde::{Deserialize, Serialize};

/// A single hourly observation for a region, as produced by the batch collector.
///
/// Field order matches the column order of the dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalObservation {
    /// Region name, matched case-insensitively against [`crate::ReferenceRegion::name`].
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub year: i32,
    pub month: u32,
    /// Hour of day, 0..=23.
    pub hour: u32,
    /// Precipitation rate. Any value above zero counts as rain.
    pub precipitation: f64,
    /// Near-surface air temperature (K).
    pub temperature: f64,
    /// Specific humidity (kg/kg).
    pub humidity: f64,
    /// Northward wind component (m/s).
    pub wind_north: f64,
    /// Eastward wind component (m/s).
    pub wind_east: f64,
    /// Downward shortwave radiation (W/m²).
    pub shortwave_radiation: f64,
    /// Downward longwave radiation (W/m²).
    pub longwave_radiation: f64,
    pub sin_hour: f64,
    pub cos_hour: f64,
    pub sin_day: f64,
    pub cos_day: f64,
}

impl HistoricalObservation {
    /// Horizontal wind speed derived from the two wind components.
    pub fn wind_speed(&self) -> f64 {
        self.wind_north.hypot(self.wind_east)
    }

    pub fn had_precipitation(&self) -> bool {
        self.precipitation > 0.0
    }
}
