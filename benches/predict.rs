use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use weatherlens::{
    resolve_region, write_observations, HistoricalObservation, LatLon, PredictionEngine,
    PredictionRequest, TimeFeatures, TrainingConfig, WeatherLens,
};

fn write_dataset(path: &Path, rows_per_region: u32) {
    let mut rows = Vec::new();
    for region in ["Louisiana", "Texas"] {
        for i in 0..rows_per_region {
            let hour = i % 24;
            let time = TimeFeatures::from_parts(hour, 1 + i / 24 % 365);
            let humidity = 0.010 + 0.0005 * f64::from(i % 13);
            rows.push(HistoricalObservation {
                region: region.to_string(),
                latitude: 31.0,
                longitude: -92.0,
                year: 2021,
                month: 1 + i / 720 % 12,
                hour,
                precipitation: if humidity > 0.014 { 0.0002 } else { 0.0 },
                temperature: 290.0 + f64::from(i % 17),
                humidity,
                wind_north: 1.0,
                wind_east: f64::from(i % 5),
                shortwave_radiation: 40.0 * f64::from(hour % 12),
                longwave_radiation: 370.0 + f64::from(i % 9),
                sin_hour: time.sin_hour,
                cos_hour: time.cos_hour,
                sin_day: time.sin_day,
                cos_day: time.cos_day,
            });
        }
    }
    write_observations(path, &rows).expect("bench dataset should be writable");
}

fn bench_predict(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("DataSeries.csv");
    write_dataset(&path, 2_000);

    let date = Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap();
    let request = PredictionRequest::new(date, LatLon(30.98, -91.96));
    let engine = PredictionEngine::new(&path, TrainingConfig::default());
    let client = WeatherLens::with_dataset(&path);
    let rt = tokio::runtime::Runtime::new().expect("runtime");

    c.bench_function("resolve_region", |b| {
        b.iter(|| resolve_region(black_box(30.98), black_box(-91.96)))
    });
    c.bench_function("engine_predict", |b| {
        b.iter(|| engine.predict(black_box(&request)))
    });
    c.bench_function("engine_query_features", |b| {
        b.iter(|| engine.query_features(black_box(&request)))
    });
    c.bench_function("client_predict", |b| {
        b.to_async(&rt).iter(|| client.predict_request(black_box(request)))
    });
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
