//! Struct definitions and implementations for [`GeoPoint`].
//!
//! Every facility, sector and airbase on the map is reduced to a single
//! `GeoPoint` before any distance is computed.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`GeoPoint`] is a position on the WGS84 datum in degrees. There is
/// no altitude; all queries are made on the surface of a sphere.
///
/// Coordinates are wrapped in [`OrderedFloat`] so points can be compared,
/// hashed, and used as map keys.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    /// The latitude of the point, `-90..=90`.
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the point, `-180..=180`.
    pub longitude: OrderedFloat<f64>,
}

impl GeoPoint {
    /// Creates a point from a latitude and a longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Creates a point from a GeoJSON position, which is ordered
    /// `[longitude, latitude]`. Extra members such as an altitude are
    /// ignored.
    ///
    /// Returns [`None`] if the position has fewer than two members or
    /// the resulting point is not valid.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [longitude, latitude, ..] => {
                let point = GeoPoint::new(*latitude, *longitude);
                point.is_valid().then_some(point)
            }
            _ => None,
        }
    }

    /// Returns the point as a GeoJSON position `[longitude, latitude]`.
    pub fn to_position(&self) -> Vec<f64> {
        vec![*self.longitude, *self.latitude]
    }

    /// Returns true if both coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&*self.latitude)
            && (-180.0..=180.0).contains(&*self.longitude)
    }

    /// Returns `(latitude, longitude)` in radians.
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}
