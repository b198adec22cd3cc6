//! Struct definitions and implementations for objects that can be
//! placed on the map.
//!
//! The most generic form is [`NamedFeature`]: an id, an optional name,
//! a [`Geometry`] and a bag of scalar attributes. Features are grouped
//! into a [`FeatureCollection`], and collections are shown on the map
//! as a [`MapLayer`].
//!
//! Since several things can be measured from (features, airbases, bare
//! points), we use an [`AsLocation`] trait so proximity functions can
//! be agnostic of the type they are scanning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::geometry::Geometry;
use super::location::GeoPoint;

/// Gives access to the single point location of an object, if it has
/// one.
pub trait AsLocation {
    /// Returns [`None`] when the object cannot be reduced to one valid
    /// point.
    fn as_location(&self) -> Option<GeoPoint>;
}

impl AsLocation for GeoPoint {
    fn as_location(&self) -> Option<GeoPoint> {
        self.is_valid().then_some(*self)
    }
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// A scalar attribute value. Attributes are carried through unchanged
/// and never interpreted by proximity queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// A located, optionally named map entity such as a school, a hospital
/// or a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFeature {
    /// Unique within the owning collection only. Ids coming from
    /// OpenStreetMap look like `node/388311374`.
    pub id: String,

    /// Human-readable label. Presentation treats [`None`] and an empty
    /// string the same way ("not found").
    pub name: Option<String>,

    /// The shape of the feature. Only points can be measured.
    pub geometry: Geometry,

    /// Free-form attributes, e.g. `population` for sectors or
    /// `intensity` for heatmap samples.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl NamedFeature {
    /// Creates a point feature without attributes.
    pub fn point(id: impl Into<String>, name: Option<&str>, location: GeoPoint) -> Self {
        NamedFeature {
            id: id.into(),
            name: name.map(str::to_string),
            geometry: Geometry::point(location),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute, replacing any previous value under `key`.
    pub fn with_attribute(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Returns the location of the feature if it is a valid point.
    pub fn location(&self) -> Option<GeoPoint> {
        self.geometry.location()
    }

    /// Returns the name unless it is absent or blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Returns a numeric attribute.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.attributes.get(key) {
            Some(AttributeValue::Number(value)) => Some(*value),
            _ => None,
        }
    }
}

impl AsLocation for NamedFeature {
    fn as_location(&self) -> Option<GeoPoint> {
        self.location()
    }
}

/// An ordered sequence of features. Order carries no meaning except
/// that ties in nearest queries go to the earlier feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<NamedFeature>,
}

impl FeatureCollection {
    /// Creates a collection from a vector of features.
    pub fn new(features: Vec<NamedFeature>) -> Self {
        FeatureCollection { features }
    }

    /// Appends a feature.
    pub fn push(&mut self, feature: NamedFeature) {
        self.features.push(feature);
    }

    /// Returns the number of features, point or not.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the collection holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates over the features in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, NamedFeature> {
        self.features.iter()
    }

    /// Finds a feature by id.
    pub fn get(&self, id: &str) -> Option<&NamedFeature> {
        self.features.iter().find(|feature| feature.id == id)
    }
}

impl FromIterator<NamedFeature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = NamedFeature>>(iter: I) -> Self {
        FeatureCollection::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a NamedFeature;
    type IntoIter = std::slice::Iter<'a, NamedFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

/// A named collection as shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    /// Layer ids carry the facility kind, e.g. `schools-dhaka`.
    pub id: String,
    pub name: String,
    pub data: FeatureCollection,
    pub visible: bool,
}

impl MapLayer {
    /// Creates a layer.
    pub fn new(id: &str, name: &str, data: FeatureCollection, visible: bool) -> Self {
        MapLayer {
            id: id.to_string(),
            name: name.to_string(),
            data,
            visible,
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod feature_type_tests {
    use super::*;

    #[test]
    fn test_display_name_filters_blank() {
        let location = GeoPoint::new(23.873, 90.404);
        let named = NamedFeature::point("1", Some("Uttara Sector 1"), location);
        let blank = NamedFeature::point("2", Some("  "), location);
        let unnamed = NamedFeature::point("3", None, location);

        assert_eq!(named.display_name(), Some("Uttara Sector 1"));
        assert_eq!(blank.display_name(), None);
        assert_eq!(unnamed.display_name(), None);
    }

    #[test]
    fn test_attributes() {
        let sector = NamedFeature::point("1", Some("Uttara Sector 1"), GeoPoint::new(23.873, 90.404))
            .with_attribute("population", 25000.0)
            .with_attribute("district", "Dhaka");

        assert_eq!(sector.number("population"), Some(25000.0));
        assert_eq!(sector.number("district"), None);
        assert_eq!(
            sector.attributes.get("district"),
            Some(&AttributeValue::Text("Dhaka".to_string()))
        );
    }

    #[test]
    fn test_collection_lookup() {
        let collection: FeatureCollection = (0..3)
            .map(|i| {
                NamedFeature::point(i.to_string(), None, GeoPoint::new(i as f64, 90.0))
            })
            .collect();

        assert_eq!(collection.len(), 3);
        assert_eq!(
            collection.get("2").and_then(NamedFeature::location),
            Some(GeoPoint::new(2.0, 90.0))
        );
        assert!(collection.get("3").is_none());
        assert_eq!(collection.iter().count(), 3);
    }

    #[test]
    fn test_invalid_point_has_no_location() {
        assert_eq!(GeoPoint::new(95.0, 0.0).as_location(), None);
    }
}
