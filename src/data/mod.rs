//! Reference datasets bundled with the library.
//!
//! Each dataset is built on first use and shared read-only afterwards.

use once_cell::sync::Lazy;

use crate::{
    feature::{FeatureCollection, MapLayer, NamedFeature},
    location::GeoPoint,
    nearest::Airbase,
    sources::overpass,
};

/// Attribute key for estimated population.
pub const POPULATION_ATTRIBUTE: &str = "population";

/// Overpass snapshot of fire stations around Dhaka.
const FIRE_STATIONS_JSON: &str = include_str!("fire_stations.json");

static AIRBASES: Lazy<Vec<Airbase>> = Lazy::new(|| {
    vec![
        Airbase::new(
            "Hazrat Shahjalal Int. Airport (HSIA)",
            GeoPoint::new(23.8436, 90.3973),
        ),
        Airbase::new("Tejgaon Air Base", GeoPoint::new(23.7800, 90.4090)),
        Airbase::new("Mirpur Cantonment", GeoPoint::new(23.8150, 90.3660)),
    ]
});

/// (name, latitude, longitude, population)
const UTTARA_SECTORS: [(&str, f64, f64, f64); 12] = [
    ("Uttara Sector 1", 23.873, 90.404, 25_000.0),
    ("Uttara Sector 2", 23.876, 90.399, 22_000.0),
    ("Uttara Sector 3", 23.871, 90.395, 30_000.0),
    ("Uttara Sector 4", 23.875, 90.389, 28_000.0),
    ("Uttara Sector 5", 23.867, 90.392, 26_000.0),
    ("Uttara Sector 6", 23.865, 90.399, 32_000.0),
    ("Uttara Sector 7", 23.869, 90.406, 35_000.0),
    ("Uttara Sector 10", 23.864, 90.385, 40_000.0),
    ("Uttara Sector 11", 23.877, 90.413, 38_000.0),
    ("Uttara Sector 12", 23.882, 90.408, 33_000.0),
    ("Uttara Sector 13", 23.880, 90.383, 29_000.0),
    ("Uttara Sector 14", 23.885, 90.390, 27_000.0),
];

const KEY_AREAS: [(&str, f64, f64, f64); 8] = [
    ("Cantonment Thana", 23.805, 90.402, 180_000.0),
    ("Pallabi", 23.822, 90.366, 360_000.0),
    ("ECB Chattor", 23.824, 90.406, 50_000.0),
    ("DOHS Mirpur", 23.836, 90.378, 60_000.0),
    ("Khilkhet", 23.834, 90.428, 130_000.0),
    ("Tejgaon Industrial Area", 23.765, 90.403, 75_000.0),
    ("Bashundhara R/A", 23.815, 90.425, 150_000.0),
    ("Tejgaon Thana", 23.759, 90.393, 220_000.0),
];

static SECTORS: Lazy<FeatureCollection> = Lazy::new(|| populated_points(&UTTARA_SECTORS));

static AREAS: Lazy<FeatureCollection> = Lazy::new(|| populated_points(&KEY_AREAS));

static FIRE_STATIONS: Lazy<FeatureCollection> = Lazy::new(|| {
    overpass::parse_elements(FIRE_STATIONS_JSON, "Fire Station").unwrap_or_else(|err| {
        error!("Bundled fire station data is unreadable: {}", err);
        FeatureCollection::default()
    })
});

/// The three airbases the dashboard is centred on.
pub fn airbases() -> &'static [Airbase] {
    &AIRBASES
}

/// Uttara sectors, with estimated population.
pub fn uttara_sectors() -> &'static FeatureCollection {
    &SECTORS
}

/// Key areas around the airbases, with estimated population.
pub fn key_areas() -> &'static FeatureCollection {
    &AREAS
}

/// Fire stations in and around Dhaka.
pub fn fire_stations() -> &'static FeatureCollection {
    &FIRE_STATIONS
}

/// Returns the airbases as a visible point layer.
pub fn airbase_layer() -> MapLayer {
    let data = airbases()
        .iter()
        .enumerate()
        .map(|(index, airbase)| airbase.to_feature(index))
        .collect();
    MapLayer::new("airbases-dhaka", "Air Bases in Dhaka", data, true)
}

/// Returns every bundled dataset as a map layer. Only the airbase
/// layer starts visible.
pub fn reference_layers() -> Vec<MapLayer> {
    vec![
        airbase_layer(),
        MapLayer::new(
            "fire-stations-dhaka",
            "Fire Stations in Dhaka",
            fire_stations().clone(),
            false,
        ),
        MapLayer::new("uttara-sectors", "Uttara Sectors", uttara_sectors().clone(), false),
        MapLayer::new("key-areas-dhaka", "Key Areas in Dhaka", key_areas().clone(), false),
    ]
}

fn populated_points(rows: &[(&str, f64, f64, f64)]) -> FeatureCollection {
    rows.iter()
        .enumerate()
        .map(|(index, (name, latitude, longitude, population))| {
            NamedFeature::point(index.to_string(), Some(*name), GeoPoint::new(*latitude, *longitude))
                .with_attribute(POPULATION_ATTRIBUTE, *population)
        })
        .collect()
}
