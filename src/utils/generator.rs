//! Random point generation around a location.
//!
//! Used to build synthetic heatmap layers. Sampling is not meant to be
//! cryptographically secure; any [`Rng`] will do, and callers that need
//! reproducible output pass a seeded one.

use std::f64::consts::PI;

use rand::Rng;
use uuid::Builder;

use crate::feature::NamedFeature;
use crate::haversine::EARTH_RADIUS_METERS;
use crate::location::GeoPoint;

/// Floor for `cos(latitude)` when stretching longitude offsets. Keeps
/// samples finite for centers at or next to a pole.
const MIN_COS_LATITUDE: f64 = 1e-6;

/// Draws a point with uniform areal density from the disc of
/// `radius_meters` around `center`.
///
/// The disc is laid out on the local tangent plane, which is accurate
/// for radii well under ~50 km away from the poles. Longitude offsets
/// are divided by `cos(latitude)` to account for converging meridians.
/// Near a pole that factor is clamped, the output latitude is clamped
/// to ±90 and the longitude is wrapped into `-180..=180`.
pub fn sample_uniform_point_in_disc<R: Rng + ?Sized>(
    center: &GeoPoint,
    radius_meters: f64,
    rng: &mut R,
) -> GeoPoint {
    let (lat0, lng0) = center.to_radians();
    let angular_radius = radius_meters / EARTH_RADIUS_METERS;

    let u: f64 = rng.gen();
    let v: f64 = rng.gen();

    // sqrt(u) spreads samples evenly over the area instead of the radius.
    let rho = angular_radius * u.sqrt();
    let theta = 2.0 * PI * v;

    let d_lat = rho * theta.sin();
    let d_lng = rho * theta.cos() / lat0.cos().max(MIN_COS_LATITUDE);

    let latitude = (lat0 + d_lat).to_degrees().clamp(-90.0, 90.0);
    let longitude = wrap_longitude((lng0 + d_lng).to_degrees());

    GeoPoint::new(latitude, longitude)
}

/// Generates `count` unnamed point features uniformly spread over the
/// disc of `radius_meters` around `center`.
///
/// Ids are UUIDs drawn from `rng`, so a seeded generator yields the
/// same ids every run.
pub fn generate_features_near<R: Rng + ?Sized>(
    center: &GeoPoint,
    radius_meters: f64,
    count: usize,
    rng: &mut R,
) -> Vec<NamedFeature> {
    debug!(
        "generating {} points within {} m of {:?}",
        count, radius_meters, center
    );
    (0..count)
        .map(|_| {
            let location = sample_uniform_point_in_disc(center, radius_meters, rng);
            let id = Builder::from_random_bytes(rng.gen()).into_uuid();
            NamedFeature::point(id.to_string(), None, location)
        })
        .collect()
}

/// Wraps a longitude in degrees into `-180..=180`.
fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}
