//! Result types of nearest queries, and the [`Airbase`] type they are
//! often asked about.
use serde::{Deserialize, Serialize};

use super::feature::{AsLocation, NamedFeature};
use super::location::GeoPoint;

/// The outcome of a nearest query over a feature collection.
///
/// Both fields are [`None`] when no candidate was eligible: the
/// collection was empty, every candidate lacked a point location, or
/// every candidate sat exactly on the query point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NearestResult<'a> {
    /// The nearest feature, borrowed from the scanned collection.
    pub feature: Option<&'a NamedFeature>,

    /// Great-circle distance to `feature` in meters.
    pub distance_meters: Option<f64>,
}

impl<'a> NearestResult<'a> {
    /// A result with no eligible candidate.
    pub fn none() -> Self {
        NearestResult {
            feature: None,
            distance_meters: None,
        }
    }

    /// A result pointing at `feature`.
    pub fn found(feature: &'a NamedFeature, distance_meters: f64) -> Self {
        NearestResult {
            feature: Some(feature),
            distance_meters: Some(distance_meters),
        }
    }

    /// Returns true if a candidate was found.
    pub fn is_found(&self) -> bool {
        self.feature.is_some()
    }
}

/// One of the fixed airbases the dashboard is centred on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airbase {
    pub name: String,
    pub location: GeoPoint,
}

impl Airbase {
    /// Creates an airbase.
    pub fn new(name: &str, location: GeoPoint) -> Self {
        Airbase {
            name: name.to_string(),
            location,
        }
    }

    /// Returns the airbase as a named point feature, id'd by its
    /// position in the airbase list.
    pub fn to_feature(&self, index: usize) -> NamedFeature {
        NamedFeature::point(index.to_string(), Some(&self.name), self.location)
    }
}

impl AsLocation for Airbase {
    fn as_location(&self) -> Option<GeoPoint> {
        self.location.as_location()
    }
}

/// The outcome of a nearest airbase query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NearestAirbase<'a> {
    pub airbase: Option<&'a Airbase>,
    pub distance_meters: Option<f64>,
}
