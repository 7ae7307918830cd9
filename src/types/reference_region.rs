//! The fixed set of reference regions that partition the historical dataset.

use serde::Serialize;

/// A named reference point. Rows of the historical dataset are keyed by this name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRegion {
    /// Region name as it appears in the first column of the dataset (e.g. "Texas").
    pub name: &'static str,
    /// Latitude of the region centroid in decimal degrees.
    pub latitude: f64,
    /// Longitude of the region centroid in decimal degrees.
    pub longitude: f64,
}

impl ReferenceRegion {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }

    /// Straight-line distance to a point, treating degrees as planar coordinates.
    pub fn degree_distance(&self, latitude: f64, longitude: f64) -> f64 {
        let d_lat = self.latitude - latitude;
        let d_lon = self.longitude - longitude;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

/// Centroids of the regions covered by the historical dataset, in lookup order.
pub const REFERENCE_REGIONS: [ReferenceRegion; 5] = [
    ReferenceRegion::new("Alabama", 32.318231, -86.902298),
    ReferenceRegion::new("Florida", 27.664827, -81.515754),
    ReferenceRegion::new("Louisiana", 31.244823, -92.145024),
    ReferenceRegion::new("Mississippi", 32.354668, -89.398528),
    ReferenceRegion::new("Texas", 31.968599, -99.901813),
];
