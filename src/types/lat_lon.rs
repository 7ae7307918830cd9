use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are plain decimal degrees; no range is enforced here.
///
/// # Examples
///
/// ```
/// use weatherlens::LatLon;
///
/// let houston = LatLon(29.7604, -95.3698);
/// assert_eq!(houston.latitude(), 29.7604);
/// assert_eq!(houston.longitude(), -95.3698);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(self) -> f64 {
        self.0
    }

    pub fn longitude(self) -> f64 {
        self.1
    }
}
