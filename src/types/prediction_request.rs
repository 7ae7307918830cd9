//! The request record handed to the prediction engine, plus the boundary checks a
//! transport layer runs before building one.

use crate::error::PredictionError;
use crate::types::lat_lon::LatLon;
use crate::types::measurement_overrides::MeasurementOverrides;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date-times accepted as the moment a forecast is for.
///
/// Naive values are taken to already be in UTC, as the dataset's hours are.
pub trait IntoQueryDate {
    fn into_query_date(self) -> DateTime<Utc>;
}

impl IntoQueryDate for DateTime<Utc> {
    fn into_query_date(self) -> DateTime<Utc> {
        self
    }
}

impl IntoQueryDate for NaiveDateTime {
    fn into_query_date(self) -> DateTime<Utc> {
        self.and_utc()
    }
}

/// Everything needed to score one query point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub date: DateTime<Utc>,
    pub location: LatLon,
    #[serde(default)]
    pub overrides: MeasurementOverrides,
}

impl PredictionRequest {
    pub fn new(date: impl IntoQueryDate, location: LatLon) -> Self {
        Self {
            date: date.into_query_date(),
            location,
            overrides: MeasurementOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: MeasurementOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Boundary validation: coordinates must lie within [-90, 90] / [-180, 180] and
    /// every supplied measurement must be finite.
    ///
    /// The engine does not call this; resolving an out-of-range coordinate is
    /// well-defined, so rejecting it is a policy for the caller's transport layer.
    pub fn validate(&self) -> Result<(), PredictionError> {
        let LatLon(latitude, longitude) = self.location;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PredictionError::InvalidInput(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PredictionError::InvalidInput(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        self.ensure_finite()
    }

    /// Rejects NaN or infinite numbers anywhere in the request.
    pub(crate) fn ensure_finite(&self) -> Result<(), PredictionError> {
        let LatLon(latitude, longitude) = self.location;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(PredictionError::InvalidInput(format!(
                "coordinates ({latitude}, {longitude}) are not finite"
            )));
        }
        if let Some(field) = self.overrides.first_non_finite() {
            return Err(PredictionError::InvalidInput(format!(
                "{field} override is not a finite number"
            )));
        }
        Ok(())
    }

    /// Parses a query date as received from a transport layer.
    ///
    /// Accepts RFC 3339 (`2024-06-01T14:00:00Z`, `2024-06-01T14:00:00+02:00`),
    /// naive `2024-06-01 14:00:00` / `2024-06-01T14:00:00` (taken as UTC) and a bare
    /// `2024-06-01` (midnight UTC).
    pub fn parse_date(input: &str) -> Result<DateTime<Utc>, PredictionError> {
        let input = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| PredictionError::InvalidInput(format!("unrecognised date '{input}'")))
    }
}
