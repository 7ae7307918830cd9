use crate::types::reference_region::{ReferenceRegion, REFERENCE_REGIONS};
use ordered_float::OrderedFloat;

/// Returns the reference region whose centroid is closest to the given point.
///
/// Distance is Euclidean in degree-space. Equidistant regions resolve to the one
/// listed first in [`REFERENCE_REGIONS`]. Any input is accepted: out-of-range
/// coordinates still have a nearest centroid, and NaN coordinates resolve to the
/// first region.
///
/// # Examples
///
/// ```
/// use weatherlens::resolve_region;
///
/// // Houston
/// assert_eq!(resolve_region(29.7604, -95.3698).name, "Louisiana");
/// // Dallas
/// assert_eq!(resolve_region(32.7767, -96.7970).name, "Texas");
/// ```
pub fn resolve_region(latitude: f64, longitude: f64) -> &'static ReferenceRegion {
    let [first, rest @ ..] = &REFERENCE_REGIONS;
    nearest(std::iter::once(first).chain(rest), latitude, longitude).unwrap_or(first)
}

/// Same as [`resolve_region`] over an arbitrary table. `None` only for an empty table.
pub fn resolve_region_in(
    regions: &[ReferenceRegion],
    latitude: f64,
    longitude: f64,
) -> Option<&ReferenceRegion> {
    nearest(regions.iter(), latitude, longitude)
}

// `min_by_key` keeps the first of several equal minima; OrderedFloat sorts NaN last.
fn nearest<'a>(
    regions: impl Iterator<Item = &'a ReferenceRegion>,
    latitude: f64,
    longitude: f64,
) -> Option<&'a ReferenceRegion> {
    regions.min_by_key(|region| OrderedFloat(region.degree_distance(latitude, longitude)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroids_resolve_to_themselves() {
        for region in &REFERENCE_REGIONS {
            let resolved = resolve_region(region.latitude, region.longitude);
            assert_eq!(resolved.name, region.name);
        }
    }

    #[test]
    fn test_nearby_points() {
        // Miami
        assert_eq!(resolve_region(25.7617, -80.1918).name, "Florida");
        // Jackson, MS
        assert_eq!(resolve_region(32.2988, -90.1848).name, "Mississippi");
        // Montgomery, AL
        assert_eq!(resolve_region(32.3792, -86.3077).name, "Alabama");
        // Baton Rouge
        assert_eq!(resolve_region(30.4515, -91.1871).name, "Louisiana");
    }

    #[test]
    fn test_ties_resolve_to_first_in_table_order() {
        let table = [
            ReferenceRegion::new("North", 1.0, 0.0),
            ReferenceRegion::new("South", -1.0, 0.0),
            ReferenceRegion::new("East", 0.0, 1.0),
        ];
        let resolved = resolve_region_in(&table, 0.0, 0.0).map(|r| r.name);
        assert_eq!(resolved, Some("North"));

        let reordered = [table[2], table[1], table[0]];
        let resolved = resolve_region_in(&reordered, 0.0, 0.0).map(|r| r.name);
        assert_eq!(resolved, Some("East"));
    }

    #[test]
    fn test_out_of_range_and_nan_do_not_panic() {
        // No longitude wrap-around in degree-space.
        assert_eq!(resolve_region(120.0, 400.0).name, "Florida");
        assert_eq!(resolve_region(f64::NAN, -90.0).name, "Alabama");
        assert_eq!(resolve_region(f64::INFINITY, 0.0).name, "Alabama");
    }

    #[test]
    fn test_empty_table_has_no_nearest() {
        assert!(resolve_region_in(&[], 10.0, 10.0).is_none());
    }
}
