//! Synthetic heatmap layers.
//!
//! A heatmap layer is a cloud of sampled points around each airbase.
//! The number of points grows with the site's intensity, a value in
//! `[0, 1]`, and every point carries that intensity as an attribute so
//! the map can weight it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    feature::{FeatureCollection, MapLayer},
    generator::generate_features_near,
    nearest::Airbase,
};

/// Attribute key carrying a sample's intensity.
pub const INTENSITY_ATTRIBUTE: &str = "intensity";

/// Intensity used for airbases missing from a lookup table.
pub const DEFAULT_INTENSITY: f64 = 0.5;

/// How densely to sample around each site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Radius of the sampled disc around each site.
    pub radius_meters: f64,

    /// Points generated for an intensity of 0.
    pub min_points: usize,

    /// Points generated for an intensity of 1.
    pub max_points: usize,
}

impl HeatmapConfig {
    /// Traffic congestion layer driven by night-time light levels.
    pub const fn traffic() -> Self {
        HeatmapConfig {
            radius_meters: 7_000.0,
            min_points: 200,
            max_points: 1_500,
        }
    }

    /// Urban heat island layer driven by land surface temperature.
    pub const fn land_surface_temperature() -> Self {
        HeatmapConfig {
            radius_meters: 7_000.0,
            min_points: 200,
            max_points: 2_000,
        }
    }

    /// Reads a config from JSON. Missing fields take the
    /// [`HeatmapConfig::traffic`] values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of points to sample for `intensity`.
    ///
    /// Intensity is clamped to `[0, 1]`; a NaN intensity counts as 0.
    pub fn point_count(&self, intensity: f64) -> usize {
        let intensity = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        let span = self.max_points.saturating_sub(self.min_points) as f64;
        self.min_points + (intensity * span).floor() as usize
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        HeatmapConfig::traffic()
    }
}

/// Scales each airbase's latest night-time light reading against the
/// range of every positive reading in all the histories.
///
/// Airbases with an empty history are skipped. Without a positive
/// reading, or when every positive reading is the same, there is no
/// range to scale against and no site is returned.
///
/// # Returns
/// `(airbase, intensity)` sites in input order. A latest reading below
/// the positive minimum gives a negative intensity, which
/// [`HeatmapConfig::point_count`] clamps.
pub fn night_light_intensities<'a>(
    histories: &[(&'a Airbase, &[f64])],
) -> Vec<(&'a Airbase, f64)> {
    let positive = histories
        .iter()
        .flat_map(|(_, readings)| readings.iter().copied())
        .filter(|reading| *reading > 0.0);
    let (min, max) = positive.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), reading| {
        (min.min(reading), max.max(reading))
    });

    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        debug!("No night-time light range to scale against ({} .. {})", min, max);
        return Vec::new();
    }

    histories
        .iter()
        .filter_map(|(airbase, readings)| {
            let latest = readings.last()?;
            Some((*airbase, (latest - min) / range))
        })
        .collect()
}

/// Fixed land surface temperature intensities per airbase. Tejgaon is
/// the most industrial and dense.
pub fn land_surface_temperature_intensity(airbase_name: &str) -> f64 {
    match airbase_name {
        "Tejgaon Air Base" => 0.9,
        "Hazrat Shahjalal Int. Airport (HSIA)" => 0.7,
        "Mirpur Cantonment" => 0.4,
        _ => DEFAULT_INTENSITY,
    }
}

/// Builds a heatmap layer from `(airbase, intensity)` sites.
///
/// # Arguments
/// * `id` - Layer id.
/// * `name` - Layer display name.
/// * `sites` - Airbases to sample around, with an intensity in `[0, 1]`.
/// * `config` - Radius and point counts.
/// * `rng` - Random source; seed it for reproducible layers.
///
/// # Returns
/// A hidden layer holding every sample, site by site.
pub fn generate_heatmap_layer<R: Rng + ?Sized>(
    id: &str,
    name: &str,
    sites: &[(&Airbase, f64)],
    config: &HeatmapConfig,
    rng: &mut R,
) -> MapLayer {
    info!("Generating heatmap layer {}", id);
    let mut data = FeatureCollection::default();
    for (airbase, intensity) in sites {
        let count = config.point_count(*intensity);
        debug!(
            "{}: intensity {:.3}, {} points",
            airbase.name, intensity, count
        );
        let samples = generate_features_near(&airbase.location, config.radius_meters, count, rng);
        for sample in samples {
            data.push(sample.with_attribute(INTENSITY_ATTRIBUTE, *intensity));
        }
    }
    info!("Heatmap layer {} holds {} points", id, data.len());
    MapLayer::new(id, name, data, false)
}

/// Builds the traffic congestion layer.
///
/// `night_lights` pairs each airbase with its night-time light readings,
/// oldest first; see [`night_light_intensities`] for the scaling.
pub fn traffic_layer<R: Rng + ?Sized>(
    night_lights: &[(&Airbase, &[f64])],
    rng: &mut R,
) -> MapLayer {
    let sites = night_light_intensities(night_lights);
    generate_heatmap_layer(
        "traffic-heatmap",
        "Traffic Congestion Heatmap",
        &sites,
        &HeatmapConfig::traffic(),
        rng,
    )
}

/// Builds the urban heat island layer from the fixed per-airbase
/// intensities.
pub fn land_surface_temperature_layer<R: Rng + ?Sized>(
    airbases: &[Airbase],
    rng: &mut R,
) -> MapLayer {
    let sites: Vec<(&Airbase, f64)> = airbases
        .iter()
        .map(|airbase| (airbase, land_surface_temperature_intensity(&airbase.name)))
        .collect();
    generate_heatmap_layer(
        "lst-heatmap",
        "Urban Heat Island (LST)",
        &sites,
        &HeatmapConfig::land_surface_temperature(),
        rng,
    )
}
