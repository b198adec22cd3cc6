//! Great-circle distance using the haversine formula.
//!
//! The Earth is treated as a sphere of mean radius, so results can be
//! off by up to about 0.5% against an ellipsoidal model. That is well
//! within what urban-scale queries need.

use crate::location::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Returns the great-circle distance between two points in meters.
///
/// The result is symmetric in its arguments and exactly `0.0` for
/// coincident points.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (lat_a, lng_a) = a.to_radians();
    let (lat_b, lng_b) = b.to_radians();

    // abs() keeps the result bit-identical when the arguments swap.
    let d_lat = (lat_b - lat_a).abs();
    let d_lng = (lng_b - lng_a).abs();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.min(1.0).sqrt().asin()
}
