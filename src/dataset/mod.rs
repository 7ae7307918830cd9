pub mod dataset_loader;
pub mod dataset_writer;
pub mod error;

/// Column names of the dataset, in file order. Header names in the file itself are
/// ignored; columns are mapped by position.
pub const DATASET_COLUMNS: [&str; 17] = [
    "region",
    "latitude",
    "longitude",
    "year",
    "month",
    "hour",
    "precipitation",
    "temperature",
    "humidity",
    "wind_north",
    "wind_east",
    "shortwave_radiation",
    "longwave_radiation",
    "sin_hour",
    "cos_hour",
    "sin_day",
    "cos_day",
];
