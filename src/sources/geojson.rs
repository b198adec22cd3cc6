//! Reading feature collections from GeoJSON.
//!
//! The `name` property becomes the feature name and every other scalar
//! property becomes an attribute. Features without a geometry, or with
//! a geometry type we do not model, are dropped.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::SourceError;
use crate::feature::{AttributeValue, FeatureCollection, NamedFeature};
use crate::geometry::Geometry;

/// Property holding the feature name.
const NAME_PROPERTY: &str = "name";

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Value>,
}

/// Parses a GeoJSON `FeatureCollection` document.
pub fn parse_feature_collection(json: &str) -> Result<FeatureCollection, SourceError> {
    let document: RawDocument = serde_json::from_str(json)?;
    into_collection(document)
}

/// Reads a GeoJSON `FeatureCollection` document.
pub fn read_feature_collection<R: Read>(reader: R) -> Result<FeatureCollection, SourceError> {
    let document: RawDocument = serde_json::from_reader(reader)?;
    into_collection(document)
}

/// Loads a GeoJSON `FeatureCollection` from a file.
pub fn load_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection, SourceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    debug!("Loading GeoJSON from {}", path.display());
    read_feature_collection(BufReader::new(File::open(path)?))
}

fn into_collection(document: RawDocument) -> Result<FeatureCollection, SourceError> {
    if document.kind != "FeatureCollection" {
        return Err(SourceError::NotAFeatureCollection(document.kind));
    }

    let total = document.features.len();
    let collection: FeatureCollection = document
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| into_feature(index, raw))
        .collect();

    if collection.len() < total {
        debug!(
            "dropped {} of {} features without a supported geometry",
            total - collection.len(),
            total
        );
    }
    Ok(collection)
}

fn into_feature(index: usize, raw: RawFeature) -> Option<NamedFeature> {
    let geometry: Geometry = serde_json::from_value(raw.geometry?).ok()?;

    let id = match raw.id {
        Some(Value::String(id)) => id,
        Some(Value::Number(id)) => id.to_string(),
        _ => index.to_string(),
    };

    let mut name = None;
    let mut attributes = BTreeMap::new();
    for (key, value) in raw.properties.unwrap_or_default() {
        if key == NAME_PROPERTY {
            name = value.as_str().filter(|name| !name.is_empty()).map(str::to_string);
            continue;
        }
        let value = match value {
            Value::Bool(value) => AttributeValue::Bool(value),
            Value::Number(value) => match value.as_f64() {
                Some(value) => AttributeValue::Number(value),
                None => continue,
            },
            Value::String(value) => AttributeValue::Text(value),
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        attributes.insert(key, value);
    }

    Some(NamedFeature {
        id,
        name,
        geometry,
        attributes,
    })
}
