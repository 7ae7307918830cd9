use crate::dataset::error::DatasetError;
use crate::dataset::DATASET_COLUMNS;
use crate::types::observation::HistoricalObservation;
use crate::utils::ensure_dataset_exists;
use log::{debug, info};
use polars::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads one region's rows out of the historical dataset file.
///
/// Nothing is cached: every call re-reads and re-parses the file.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
    scratch_dir: Option<PathBuf>,
}

impl DatasetLoader {
    pub fn new(path: &Path) -> DatasetLoader {
        DatasetLoader {
            path: path.to_path_buf(),
            scratch_dir: None,
        }
    }

    /// Places scratch copies in `dir` instead of the system temp directory.
    pub fn with_scratch_dir(mut self, dir: &Path) -> DatasetLoader {
        self.scratch_dir = Some(dir.to_path_buf());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch_dir.as_deref()
    }

    /// Loads every row whose first field names `region` (case-insensitive, quotes and
    /// surrounding whitespace ignored).
    ///
    /// Matching lines are copied under a canonical header into a scratch file which
    /// is then parsed by polars. The scratch file is removed when this returns,
    /// whether parsing succeeded or not.
    pub fn load_region(&self, region: &str) -> Result<Vec<HistoricalObservation>, DatasetError> {
        ensure_dataset_exists(&self.path)?;
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| DatasetError::Read(self.path.clone(), e))?;

        let mut lines = raw.lines();
        let header = lines.next().unwrap_or_default();
        let matching: Vec<&str> = lines
            .filter(|line| belongs_to_region(line, region))
            .collect();

        if matching.is_empty() {
            return Err(DatasetError::NoDataForRegion {
                region: region.to_string(),
                path: self.path.clone(),
            });
        }

        let found = header.split(',').count();
        if found != DATASET_COLUMNS.len() {
            return Err(DatasetError::SchemaMismatch {
                path: self.path.clone(),
                expected: DATASET_COLUMNS.len(),
                found,
            });
        }

        info!(
            "Found {} rows for region {} in {:?}",
            matching.len(),
            region,
            self.path
        );

        let scratch = write_scratch_copy(&matching, self.scratch_dir())?;
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(scratch.path().to_path_buf()))
            .map_err(|e| DatasetError::CsvParse {
                region: region.to_string(),
                source: e,
            })?
            .finish()
            .map_err(|e| DatasetError::CsvParse {
                region: region.to_string(),
                source: e,
            })?;
        drop(scratch);

        debug!("Parsed frame of shape {:?} for region {}", df.shape(), region);
        frame_to_observations(&df)
    }
}

fn belongs_to_region(line: &str, region: &str) -> bool {
    line.split(',')
        .next()
        .map(|field| field.trim().trim_matches('"').trim())
        .is_some_and(|name| name.eq_ignore_ascii_case(region))
}

fn write_scratch_copy(rows: &[&str], dir: Option<&Path>) -> Result<NamedTempFile, DatasetError> {
    let mut contents = DATASET_COLUMNS.join(",");
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }

    let mut scratch = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new(),
    }
    .map_err(DatasetError::ScratchFile)?;
    scratch
        .write_all(contents.as_bytes())
        .map_err(DatasetError::ScratchFile)?;
    scratch.flush().map_err(DatasetError::ScratchFile)?;
    Ok(scratch)
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>, DatasetError> {
    let column = df
        .column(name)
        .map_err(|e| DatasetError::ColumnNotFound(name.to_string(), e))?;
    let values = column.str().map_err(|e| DatasetError::ColumnType {
        column: name.to_string(),
        expected: "text",
        source: e,
    })?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .map(|s| s.trim().to_string())
                .ok_or_else(|| DatasetError::MissingValue {
                    column: name.to_string(),
                    row,
                })
        })
        .collect()
}

// Integer-looking columns are widened, text that is not a number becomes null.
fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, DatasetError> {
    let column = df
        .column(name)
        .map_err(|e| DatasetError::ColumnNotFound(name.to_string(), e))?;
    let cast = column
        .cast(&DataType::Float64)
        .map_err(|e| DatasetError::ColumnType {
            column: name.to_string(),
            expected: "f64",
            source: e,
        })?;
    let values = cast.f64().map_err(|e| DatasetError::ColumnType {
        column: name.to_string(),
        expected: "f64",
        source: e,
    })?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| DatasetError::MissingValue {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}

fn frame_to_observations(df: &DataFrame) -> Result<Vec<HistoricalObservation>, DatasetError> {
    macro_rules! floats {
        ($name:expr) => {
            float_column(df, $name)?
        };
    }

    let region = string_column(df, "region")?;
    let latitude = floats!("latitude");
    let longitude = floats!("longitude");
    let year = floats!("year");
    let month = floats!("month");
    let hour = floats!("hour");
    let precipitation = floats!("precipitation");
    let temperature = floats!("temperature");
    let humidity = floats!("humidity");
    let wind_north = floats!("wind_north");
    let wind_east = floats!("wind_east");
    let shortwave_radiation = floats!("shortwave_radiation");
    let longwave_radiation = floats!("longwave_radiation");
    let sin_hour = floats!("sin_hour");
    let cos_hour = floats!("cos_hour");
    let sin_day = floats!("sin_day");
    let cos_day = floats!("cos_day");

    Ok(region
        .into_iter()
        .enumerate()
        .map(|(row, region)| HistoricalObservation {
            region,
            latitude: latitude[row],
            longitude: longitude[row],
            year: year[row].round() as i32,
            month: month[row].round() as u32,
            hour: hour[row].round() as u32,
            precipitation: precipitation[row],
            temperature: temperature[row],
            humidity: humidity[row],
            wind_north: wind_north[row],
            wind_east: wind_east[row],
            shortwave_radiation: shortwave_radiation[row],
            longwave_radiation: longwave_radiation[row],
            sin_hour: sin_hour[row],
            cos_hour: cos_hour[row],
            sin_day: sin_day[row],
            cos_day: cos_day[row],
        })
        .collect())
}
