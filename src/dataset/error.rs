use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset not found: '{0}'")]
    NotFound(PathBuf),

    #[error("Failed to read dataset '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("No data found for region '{region}' in '{path}'")]
    NoDataForRegion { region: String, path: PathBuf },

    #[error("Dataset '{path}' has {found} columns, expected {expected}")]
    SchemaMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Failed to write scratch copy of dataset")]
    ScratchFile(#[source] std::io::Error),

    #[error("Parsing error processing CSV data for region '{region}'")]
    CsvParse {
        region: String,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' could not be read as {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Missing or non-numeric value in column '{column}' at data row {row}")]
    MissingValue { column: String, row: usize },

    #[error("I/O error writing dataset '{0}'")]
    WriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing dataset '{0}'")]
    WriteCsv(PathBuf, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
