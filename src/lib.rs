//! Facility Proximity Library.
//! Handles nearest-facility queries and synthetic point sampling for the
//! airbase dashboard map layers.
//!
//! Queries are pure functions of their inputs: pass a point and the
//! collections to search, get back borrowed results. Data loading is
//! the only fallible part and lives in [`sources`].

#[macro_use]
extern crate log;

pub mod types {
    pub mod feature;
    pub mod geometry;
    pub mod kind;
    pub mod location;
    pub mod nearest;
}

pub mod utils {
    pub mod format;
    pub mod generator;
    pub mod haversine;
}

pub mod algorithms {
    pub mod heatmap;
    pub mod proximity;
}

pub mod sources {
    pub mod error;
    pub mod geojson;
    pub mod overpass;
}

pub mod data;

pub use algorithms::*;
pub use types::*;
pub use utils::*;

pub use feature::{AsLocation, AttributeValue, FeatureCollection, MapLayer, NamedFeature};
pub use geometry::Geometry;
pub use kind::FacilityKind;
pub use location::GeoPoint;
pub use nearest::{Airbase, NearestAirbase, NearestResult};
pub use sources::error::SourceError;
