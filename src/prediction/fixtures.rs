//! Synthetic datasets shared by the engine and client tests.

use crate::dataset::dataset_writer::write_observations;
use crate::types::observation::HistoricalObservation;
use crate::types::time_features::TimeFeatures;
use std::path::{Path, PathBuf};

/// Texas rows with a mean temperature of exactly 295 K and a constant 5 m/s wind.
/// It rains exactly when humidity is at least 0.013.
pub(crate) fn texas_rows(count: usize) -> Vec<HistoricalObservation> {
    (0..count)
        .map(|i| {
            let step = ((i / 2) % 6) as f64;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            let humidity = 0.010 + 0.001 * step;
            row("Texas", 31.97, -99.9, (i % 24) as u32, 295.0 + sign * step, humidity)
        })
        .collect()
}

pub(crate) fn florida_rows(count: usize) -> Vec<HistoricalObservation> {
    (0..count)
        .map(|i| {
            let humidity = 0.014 + 0.001 * (i % 4) as f64;
            row("Florida", 27.66, -81.52, (i % 24) as u32, 305.0, humidity)
        })
        .collect()
}

fn row(
    region: &str,
    latitude: f64,
    longitude: f64,
    hour: u32,
    temperature: f64,
    humidity: f64,
) -> HistoricalObservation {
    let time = TimeFeatures::from_parts(hour, 180);
    HistoricalObservation {
        region: region.to_string(),
        latitude,
        longitude,
        year: 2022,
        month: 6,
        hour,
        precipitation: if humidity >= 0.01299 { 0.00025 } else { 0.0 },
        temperature,
        humidity,
        wind_north: 3.0,
        wind_east: 4.0,
        shortwave_radiation: 150.0 + 10.0 * f64::from(hour),
        longwave_radiation: 380.0,
        sin_hour: time.sin_hour,
        cos_hour: time.cos_hour,
        sin_day: time.sin_day,
        cos_day: time.cos_day,
    }
}

/// Writes 100 Texas rows followed by 40 Florida rows into `dir`.
pub(crate) fn write_gulf_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("DataSeries.csv");
    let mut rows = texas_rows(100);
    rows.extend(florida_rows(40));
    write_observations(&path, &rows).expect("fixture dataset should be writable");
    path
}
