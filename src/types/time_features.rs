//! Cyclical encodings of the hour of day and the day of year.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const HOURS_PER_DAY: f64 = 24.0;
// Leap years are not corrected for; day 366 wraps slightly past a full turn.
const DAYS_PER_YEAR: f64 = 365.0;

/// Sine/cosine pairs placing the hour and the day of year on a unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeFeatures {
    pub sin_hour: f64,
    pub cos_hour: f64,
    pub sin_day: f64,
    pub cos_day: f64,
}

impl TimeFeatures {
    /// `hour` is 0..=23, `day_of_year` is the 1-based ordinal day.
    pub fn from_parts(hour: u32, day_of_year: u32) -> Self {
        let hour_angle = 2.0 * PI * f64::from(hour) / HOURS_PER_DAY;
        let day_angle = 2.0 * PI * f64::from(day_of_year) / DAYS_PER_YEAR;
        Self {
            sin_hour: hour_angle.sin(),
            cos_hour: hour_angle.cos(),
            sin_day: day_angle.sin(),
            cos_day: day_angle.cos(),
        }
    }

    pub fn from_datetime(datetime: &DateTime<Utc>) -> Self {
        Self::from_parts(datetime.hour(), datetime.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_midnight_on_new_year() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let features = TimeFeatures::from_datetime(&dt);
        assert!(features.sin_hour.abs() < EPS);
        assert!((features.cos_hour - 1.0).abs() < EPS);
        assert!((features.sin_day - (2.0 * PI / 365.0).sin()).abs() < EPS);
        assert!((features.cos_day - (2.0 * PI / 365.0).cos()).abs() < EPS);
    }

    #[test]
    fn test_six_pm_is_three_quarters_of_a_turn() {
        let features = TimeFeatures::from_parts(18, 100);
        assert!((features.sin_hour + 1.0).abs() < EPS);
        assert!(features.cos_hour.abs() < EPS);
    }

    #[test]
    fn test_leap_day_uses_365_day_year() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(dt.ordinal(), 366);
        let features = TimeFeatures::from_datetime(&dt);
        let expected = (2.0 * PI * 366.0 / 365.0).sin();
        assert!((features.sin_day - expected).abs() < EPS);
    }
}
