//! Predicts the chance of rain for a few Gulf Coast cities.
//!
//! Pass a dataset path as the first argument, otherwise a small synthetic
//! dataset is generated in a temporary directory.

use chrono::{TimeZone, Utc};
use std::env;
use std::error::Error;
use std::path::PathBuf;
use weatherlens::{
    write_observations, HistoricalObservation, LatLon, PredictionError, TimeFeatures, WeatherLens,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let scratch = tempfile::tempdir()?;
    let path = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => synthetic_dataset(scratch.path().join("DataSeries.csv"))?,
    };

    let client = WeatherLens::with_dataset(&path);
    let date = Utc.with_ymd_and_hms(2024, 6, 18, 15, 0, 0).unwrap();

    for (city, location) in [
        // Houston is closer to the Louisiana centroid than to the Texas one.
        ("Houston", LatLon(29.76, -95.37)),
        ("Tampa", LatLon(27.95, -82.46)),
        ("Jackson", LatLon(32.30, -90.18)),
    ] {
        let forecast = client
            .predict()
            .date(date)
            .location(location)
            .call()
            .await?;
        println!(
            "{city:<8} -> {:<10} {:>5.1}%  {}",
            forecast.region,
            forecast.probability * 100.0,
            forecast.classification
        );
    }

    // Supplying a measurement replaces the regional average for that input.
    let humid = client
        .predict()
        .date(date)
        .location(LatLon(29.76, -95.37))
        .humidity(0.021)
        .temperature(304.0)
        .call()
        .await?;
    println!("\nHouston, humid afternoon:");
    println!("{}", humid.to_json_pretty()?);

    Ok(())
}

fn synthetic_dataset(path: PathBuf) -> Result<PathBuf, PredictionError> {
    let regions = [
        ("Florida", 27.66, -81.52, 301.0, 0.016),
        ("Louisiana", 31.24, -92.15, 300.0, 0.015),
        ("Mississippi", 32.35, -89.40, 297.0, 0.013),
        ("Texas", 31.97, -99.90, 299.0, 0.011),
    ];
    let mut rows = Vec::new();
    for (region, latitude, longitude, temperature, humidity) in regions {
        for i in 0..96u32 {
            let hour = i % 24;
            let day = 150 + i / 24;
            let swing = f64::from(i % 7) - 3.0;
            let time = TimeFeatures::from_parts(hour, day);
            let q = humidity + 0.001 * swing;
            rows.push(HistoricalObservation {
                region: region.to_string(),
                latitude,
                longitude,
                year: 2023,
                month: 6,
                hour,
                precipitation: if q > humidity + 0.001 { 0.0004 } else { 0.0 },
                temperature: temperature + swing,
                humidity: q,
                wind_north: 2.0 + 0.3 * swing,
                wind_east: -1.5,
                shortwave_radiation: (f64::from(hour) - 6.0).max(0.0) * 60.0,
                longwave_radiation: 390.0 + 2.0 * swing,
                sin_hour: time.sin_hour,
                cos_hour: time.cos_hour,
                sin_day: time.sin_day,
                cos_day: time.cos_day,
            });
        }
    }
    write_observations(&path, &rows)?;
    Ok(path)
}
