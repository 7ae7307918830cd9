use crate::dataset::error::DatasetError;
use crate::dataset::DATASET_COLUMNS;
use crate::types::observation::HistoricalObservation;
use log::info;
use polars::prelude::*;
use std::path::Path;

/// Writes observations in the dataset file format read by
/// [`crate::DatasetLoader`]: a header line followed by one comma-separated row per
/// observation, columns in [`DATASET_COLUMNS`] order.
///
/// Values are written as given; cyclical time columns are not recomputed.
pub fn write_observations(
    path: &Path,
    observations: &[HistoricalObservation],
) -> Result<(), DatasetError> {
    let floats = |field: fn(&HistoricalObservation) -> f64| -> Vec<f64> {
        observations.iter().map(field).collect()
    };
    let names = DATASET_COLUMNS;

    let mut df = DataFrame::new(vec![
        Column::new(
            names[0].into(),
            observations
                .iter()
                .map(|o| o.region.as_str())
                .collect::<Vec<_>>(),
        ),
        Column::new(names[1].into(), floats(|o| o.latitude)),
        Column::new(names[2].into(), floats(|o| o.longitude)),
        Column::new(
            names[3].into(),
            observations.iter().map(|o| o.year).collect::<Vec<i32>>(),
        ),
        Column::new(
            names[4].into(),
            observations.iter().map(|o| o.month).collect::<Vec<u32>>(),
        ),
        Column::new(
            names[5].into(),
            observations.iter().map(|o| o.hour).collect::<Vec<u32>>(),
        ),
        Column::new(names[6].into(), floats(|o| o.precipitation)),
        Column::new(names[7].into(), floats(|o| o.temperature)),
        Column::new(names[8].into(), floats(|o| o.humidity)),
        Column::new(names[9].into(), floats(|o| o.wind_north)),
        Column::new(names[10].into(), floats(|o| o.wind_east)),
        Column::new(names[11].into(), floats(|o| o.shortwave_radiation)),
        Column::new(names[12].into(), floats(|o| o.longwave_radiation)),
        Column::new(names[13].into(), floats(|o| o.sin_hour)),
        Column::new(names[14].into(), floats(|o| o.cos_hour)),
        Column::new(names[15].into(), floats(|o| o.sin_day)),
        Column::new(names[16].into(), floats(|o| o.cos_day)),
    ])?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| DatasetError::WriteIo(path.to_path_buf(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| DatasetError::WriteCsv(path.to_path_buf(), e))?;

    info!("Wrote {} observations to {:?}", df.height(), path);
    Ok(())
}
