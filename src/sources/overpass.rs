//! Reading OpenStreetMap Overpass API results.
//!
//! Nodes are placed at their own coordinates. Ways and relations are
//! placed at the `center` Overpass adds when queried with `out center`;
//! without it they are dropped.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::SourceError;
use crate::feature::{FeatureCollection, NamedFeature};
use crate::location::GeoPoint;

/// Attribute key holding the facility label, e.g. `Fire Station`.
pub const TYPE_ATTRIBUTE: &str = "type";

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Center {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Element {
    Node {
        id: u64,
        lat: Option<f64>,
        lon: Option<f64>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Way {
        id: u64,
        center: Option<Center>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Relation {
        id: u64,
        center: Option<Center>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    #[serde(other)]
    Other,
}

impl Element {
    /// Returns `(id, location, tags)`, or [`None`] for elements that
    /// cannot be placed.
    fn placed(&self) -> Option<(String, GeoPoint, &BTreeMap<String, String>)> {
        let (id, location, tags) = match self {
            Element::Node { id, lat, lon, tags } => {
                (format!("node/{id}"), GeoPoint::new((*lat)?, (*lon)?), tags)
            }
            Element::Way { id, center, tags } => {
                let center = center.as_ref()?;
                (format!("way/{id}"), GeoPoint::new(center.lat, center.lon), tags)
            }
            Element::Relation { id, center, tags } => {
                let center = center.as_ref()?;
                (
                    format!("relation/{id}"),
                    GeoPoint::new(center.lat, center.lon),
                    tags,
                )
            }
            Element::Other => return None,
        };
        location.is_valid().then_some((id, location, tags))
    }
}

/// Parses Overpass JSON into point features labelled `label`.
///
/// The name is the English name tag, else the plain name tag, else
/// `Unnamed <label>`. Elements named "unknown" are dropped.
pub fn parse_elements(json: &str, label: &str) -> Result<FeatureCollection, SourceError> {
    let response: OverpassResponse = serde_json::from_str(json)?;
    let total = response.elements.len();

    let collection: FeatureCollection = response
        .elements
        .iter()
        .filter_map(|element| {
            let (id, location, tags) = element.placed()?;
            let name = display_name(tags, label);
            if name.to_lowercase() == "unknown" {
                debug!("dropping {} named {}", id, name);
                return None;
            }
            Some(
                NamedFeature::point(id, Some(name.as_str()), location)
                    .with_attribute(TYPE_ATTRIBUTE, label),
            )
        })
        .collect();

    info!(
        "Parsed {} {} features from {} Overpass elements",
        collection.len(),
        label,
        total
    );
    Ok(collection)
}

fn display_name(tags: &BTreeMap<String, String>, label: &str) -> String {
    ["name:en", "name"]
        .iter()
        .filter_map(|key| tags.get(*key))
        .find(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| format!("Unnamed {label}"))
}

#[cfg(test)]
mod overpass_tests {
    use super::*;
    use crate::feature::AttributeValue;

    const STATIONS: &str = r#"{
        "version": 0.6,
        "elements": [
            { "type": "node", "id": 1, "lat": 23.8523935, "lon": 90.3987611, "tags": { "amenity": "fire_station", "name": "Fire Station HSIA" } },
            { "type": "node", "id": 2, "lat": 23.7139723, "lon": 90.4980671, "tags": { "amenity": "fire_station", "name": "Unknown" } },
            { "type": "node", "id": 3, "lat": 23.7216219, "lon": 90.3903229, "tags": { "name": "অর্ফানেজ", "name:en": "Lalbagh Fire Station" } },
            { "type": "way", "id": 4, "center": { "lat": 23.8522552, "lon": 90.3985385 }, "nodes": [1, 2, 3, 1], "tags": { "building": "yes" } },
            { "type": "way", "id": 5, "nodes": [1, 2], "tags": { "name": "No center" } },
            { "type": "relation", "id": 6, "center": { "lat": 23.8076934, "lon": 90.3675797 }, "members": [], "tags": { "name": "Training Complex" } },
            { "type": "area", "id": 7 }
        ]
    }"#;

    #[test]
    fn test_parse_fire_stations() {
        let stations = parse_elements(STATIONS, "Fire Station").unwrap();
        let names: Vec<_> = stations
            .iter()
            .map(|station| station.name.as_deref().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "Fire Station HSIA",
                "Lalbagh Fire Station",
                "Unnamed Fire Station",
                "Training Complex"
            ]
        );

        let way = stations.get("way/4").unwrap();
        assert_eq!(way.location(), Some(GeoPoint::new(23.8522552, 90.3985385)));
        assert_eq!(
            way.attributes.get(TYPE_ATTRIBUTE),
            Some(&AttributeValue::Text("Fire Station".to_string()))
        );
        assert!(stations.get("relation/6").is_some());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_elements(r#"{ "elements": 3 }"#, "Fire Station"),
            Err(SourceError::Json(_))
        ));
    }
}
