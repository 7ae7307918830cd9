//! Shows the query point a forecast would be scored on, without training a model.
//!
//! Usage: `cargo run --example feature_set -- <dataset.csv> [date] [lat] [lon]`

use std::env;
use weatherlens::{LatLon, PredictionError, PredictionRequest, WeatherLens};

#[tokio::main]
async fn main() -> Result<(), PredictionError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("usage: feature_set <dataset.csv> [date] [lat] [lon]");
        return Ok(());
    };
    let date = PredictionRequest::parse_date(args.get(1).map_or("2024-07-04 18:00:00", String::as_str))?;
    let coordinate = |index: usize, default: f64| -> Result<f64, PredictionError> {
        args.get(index).map_or(Ok(default), |s| {
            s.parse()
                .map_err(|_| PredictionError::InvalidInput(format!("not a number: '{s}'")))
        })
    };
    let location = LatLon(coordinate(2, 30.69)?, coordinate(3, -88.04)?);

    let request = PredictionRequest::new(date, location);
    request.validate()?;

    let client = WeatherLens::with_dataset(path);
    println!("{:?} resolves to {}", location, client.resolve_region(location).name);

    let query = client.features().date(date).location(location).call().await?;
    println!("{:#?}", query.features);

    Ok(())
}
