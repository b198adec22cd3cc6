//! Definition of the [`Geometry`] type, implemented by a tagged enum.
//!
//! The variants and their field layout follow GeoJSON so a geometry
//! object can be read straight from a `FeatureCollection` document.
//! Positions are `[longitude, latitude, ...]`.

use serde::{Deserialize, Serialize};

use super::location::GeoPoint;

/// A GeoJSON position. Kept as a vector so malformed positions (too
/// few members) still parse and are rejected when a location is asked
/// for.
pub type Position = Vec<f64>;

/// The shape of a feature.
///
/// Only [`Geometry::Point`] takes part in proximity queries; every
/// other shape has no single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
}

impl Geometry {
    /// Creates a point geometry.
    pub fn point(location: GeoPoint) -> Self {
        Geometry::Point {
            coordinates: location.to_position(),
        }
    }

    /// Returns the location of a point geometry.
    ///
    /// Returns [`None`] for non-point shapes and for points whose
    /// position is missing a coordinate or is out of range.
    pub fn location(&self) -> Option<GeoPoint> {
        match self {
            Geometry::Point { coordinates } => GeoPoint::from_position(coordinates),
            Geometry::MultiPoint { .. }
            | Geometry::LineString { .. }
            | Geometry::MultiLineString { .. }
            | Geometry::Polygon { .. }
            | Geometry::MultiPolygon { .. } => None,
        }
    }
}
