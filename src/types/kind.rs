//! Definition for the [`FacilityKind`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

/// The categories of point data shown on the dashboard.
///
/// Any `Eq + Hash` label can key a per-kind nearest query; this enum is
/// the one the bundled layers use.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    School,
    Hospital,
    FireStation,
    Airbase,
    Sector,
}

impl FacilityKind {
    /// The fragment that layer ids of this kind contain, e.g. a
    /// `schools-dhaka` layer holds schools.
    pub fn layer_fragment(&self) -> &'static str {
        match self {
            FacilityKind::School => "schools",
            FacilityKind::Hospital => "hospitals",
            FacilityKind::FireStation => "fire-stations",
            FacilityKind::Airbase => "airbases",
            FacilityKind::Sector => "sectors",
        }
    }

    /// Human-readable singular label.
    pub fn label(&self) -> &'static str {
        match self {
            FacilityKind::School => "School",
            FacilityKind::Hospital => "Hospital",
            FacilityKind::FireStation => "Fire Station",
            FacilityKind::Airbase => "Airbase",
            FacilityKind::Sector => "Sector",
        }
    }
}
