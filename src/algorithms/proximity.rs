//! Nearest-facility queries.
//!
//! Every query is a linear scan over the candidates using the haversine
//! distance. Collections on the dashboard hold hundreds to low
//! thousands of points, so no spatial index is built.
//!
//! Feature queries skip candidates that sit exactly on the query point,
//! so "nearest school to this school" never answers with the school
//! itself. Airbase queries do not.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    feature::{AsLocation, FeatureCollection, MapLayer, NamedFeature},
    haversine,
    kind::FacilityKind,
    location::GeoPoint,
    nearest::{Airbase, NearestAirbase, NearestResult},
};

/// Finds the feature in `candidates` nearest to `source`.
///
/// # Arguments
/// * `source` - The point to measure from.
/// * `candidates` - The features to search.
///
/// # Returns
/// The nearest feature and its distance in meters, or
/// [`NearestResult::none`] if no candidate is eligible.
///
/// Candidates without a valid point location are skipped, as are
/// candidates at a distance of exactly zero. When several candidates
/// are equally near, the first one in collection order wins.
///
/// # Time Complexity
/// *O*(*n*) in the number of candidates.
pub fn find_nearest<'a>(source: &GeoPoint, candidates: &'a FeatureCollection) -> NearestResult<'a> {
    find_nearest_among(source, candidates)
}

/// Like [`find_nearest`], over any sequence of features.
pub fn find_nearest_among<'a>(
    source: &GeoPoint,
    candidates: impl IntoIterator<Item = &'a NamedFeature>,
) -> NearestResult<'a> {
    match scan(source, candidates, true) {
        Some((feature, distance)) => NearestResult::found(feature, distance),
        None => NearestResult::none(),
    }
}

/// Finds the feature nearest to another feature.
///
/// A source without a point location (a polygon sector, a malformed
/// point) has no nearest feature. The source may itself be one of the
/// candidates; it is excluded by the zero-distance rule.
pub fn find_nearest_to_feature<'a>(
    source: &NamedFeature,
    candidates: &'a FeatureCollection,
) -> NearestResult<'a> {
    match source.location() {
        Some(location) => find_nearest(&location, candidates),
        None => {
            debug!("source feature {} has no point location", source.id);
            NearestResult::none()
        }
    }
}

/// Finds the nearest feature across several layers in one scan.
///
/// Layers are scanned in the given order, so ties go to the earlier
/// layer.
pub fn find_nearest_in_layers<'a>(
    source: &GeoPoint,
    layers: impl IntoIterator<Item = &'a MapLayer>,
) -> NearestResult<'a> {
    find_nearest_among(source, layers.into_iter().flat_map(|layer| layer.data.iter()))
}

/// Finds the nearest feature of each kind.
///
/// Each collection is searched independently with [`find_nearest`];
/// the result for one kind never depends on another. If a kind appears
/// more than once, the last collection given for it wins.
pub fn find_nearest_across_kinds<'a, K: Eq + Hash>(
    source: &GeoPoint,
    collections: impl IntoIterator<Item = (K, &'a FeatureCollection)>,
) -> HashMap<K, NearestResult<'a>> {
    collections
        .into_iter()
        .map(|(kind, collection)| (kind, find_nearest(source, collection)))
        .collect()
}

/// Returns the layers holding facilities of `kind`, judged by layer id.
pub fn layers_of_kind(
    layers: &[MapLayer],
    kind: FacilityKind,
) -> impl Iterator<Item = &MapLayer> {
    layers
        .iter()
        .filter(move |layer| layer.id.contains(kind.layer_fragment()))
}

/// Finds the nearest feature of each requested kind, searching every
/// layer whose id names that kind.
///
/// This is what the sector inspector shows: nearest school and nearest
/// hospital for the clicked sector.
pub fn find_nearest_by_layer_kind<'a>(
    source: &GeoPoint,
    layers: &'a [MapLayer],
    kinds: &[FacilityKind],
) -> HashMap<FacilityKind, NearestResult<'a>> {
    kinds
        .iter()
        .map(|kind| {
            let nearest = find_nearest_in_layers(source, layers_of_kind(layers, *kind));
            debug!(
                "nearest {}: {:?} at {:?} m",
                kind.label(),
                nearest.feature.map(|feature| &feature.id),
                nearest.distance_meters
            );
            (*kind, nearest)
        })
        .collect()
}

/// Finds the airbase nearest to `source`.
///
/// Unlike feature queries, an airbase at distance zero is a valid
/// answer: a point on the airbase is zero meters from it.
pub fn find_nearest_airbase<'a>(source: &GeoPoint, airbases: &'a [Airbase]) -> NearestAirbase<'a> {
    match scan(source, airbases, false) {
        Some((airbase, distance)) => NearestAirbase {
            airbase: Some(airbase),
            distance_meters: Some(distance),
        },
        None => NearestAirbase::default(),
    }
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

/// Scans `candidates` for the one nearest to `source`.
///
/// Comparison is strict, so the first of several equally near
/// candidates is kept.
fn scan<'a, T: AsLocation + 'a>(
    source: &GeoPoint,
    candidates: impl IntoIterator<Item = &'a T>,
    skip_coincident: bool,
) -> Option<(&'a T, f64)> {
    if !source.is_valid() {
        debug!("query point {:?} is not a valid location", source);
        return None;
    }

    let mut nearest: Option<(&'a T, f64)> = None;
    let mut skipped = 0;
    for candidate in candidates {
        let location = match candidate.as_location() {
            Some(location) => location,
            None => {
                skipped += 1;
                continue;
            }
        };
        let distance = haversine::distance_meters(source, &location);
        if skip_coincident && distance == 0.0 {
            continue;
        }
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((candidate, distance));
        }
    }

    if skipped > 0 {
        debug!("skipped {} candidates without a point location", skipped);
    }
    nearest
}

#[cfg(test)]
mod proximity_tests {
    use super::*;
    use crate::geometry::Geometry;

    fn point(id: &str, latitude: f64, longitude: f64) -> NamedFeature {
        NamedFeature::point(id, Some(id), GeoPoint::new(latitude, longitude))
    }

    fn polygon(id: &str) -> NamedFeature {
        NamedFeature {
            id: id.to_string(),
            name: Some(id.to_string()),
            geometry: Geometry::Polygon {
                coordinates: vec![vec![
                    vec![90.0, 23.0],
                    vec![90.1, 23.0],
                    vec![90.1, 23.1],
                    vec![90.0, 23.0],
                ]],
            },
            attributes: Default::default(),
        }
    }

    #[test]
    fn test_nearest_on_equator() {
        let source = GeoPoint::new(0.0, 0.0);
        let candidates = FeatureCollection::new(vec![point("C", 0.0, 2.0), point("B", 0.0, 1.0)]);

        let nearest = find_nearest(&source, &candidates);
        assert_eq!(nearest.feature.map(|f| f.id.as_str()), Some("B"));
        assert_eq!(
            nearest.distance_meters,
            Some(haversine::distance_meters(&source, &GeoPoint::new(0.0, 1.0)))
        );
    }

    #[test]
    fn test_empty_collection() {
        let empty = FeatureCollection::default();
        let nearest = find_nearest(&GeoPoint::new(23.8, 90.4), &empty);
        assert_eq!(nearest, NearestResult::none());
        assert!(!nearest.is_found());
    }

    #[test]
    fn test_self_exclusion() {
        let source = point("self", 23.873, 90.404);
        let alone = FeatureCollection::new(vec![source.clone()]);
        assert_eq!(find_nearest_to_feature(&source, &alone), NearestResult::none());

        let with_neighbour = FeatureCollection::new(vec![source.clone(), point("other", 23.876, 90.399)]);
        let nearest = find_nearest_to_feature(&source, &with_neighbour);
        assert_eq!(nearest.feature.map(|f| f.id.as_str()), Some("other"));
    }

    #[test]
    fn test_ties_go_to_first() {
        let source = GeoPoint::new(0.0, 0.0);
        let candidates = FeatureCollection::new(vec![
            point("east", 0.0, 1.0),
            point("west", 0.0, -1.0),
        ]);
        assert_eq!(
            find_nearest(&source, &candidates).feature.map(|f| f.id.as_str()),
            Some("east")
        );

        let reversed = FeatureCollection::new(candidates.features.iter().rev().cloned().collect());
        assert_eq!(
            find_nearest(&source, &reversed).feature.map(|f| f.id.as_str()),
            Some("west")
        );
    }

    #[test]
    fn test_non_point_candidates_are_skipped() {
        let source = GeoPoint::new(23.05, 90.05);
        let mut malformed = point("malformed", 0.0, 0.0);
        malformed.geometry = Geometry::Point {
            coordinates: vec![90.05],
        };
        let candidates = FeatureCollection::new(vec![
            polygon("area"),
            malformed,
            point("far", 23.5, 90.5),
        ]);

        let nearest = find_nearest(&source, &candidates);
        assert_eq!(nearest.feature.map(|f| f.id.as_str()), Some("far"));

        let only_polygons = FeatureCollection::new(vec![polygon("a"), polygon("b")]);
        assert_eq!(find_nearest(&source, &only_polygons), NearestResult::none());
    }

    #[test]
    fn test_unnamed_candidates_are_eligible() {
        let source = GeoPoint::new(23.8, 90.4);
        let unnamed = NamedFeature::point("1", None, GeoPoint::new(23.801, 90.4));
        let candidates = FeatureCollection::new(vec![unnamed, point("named", 23.9, 90.4)]);

        let nearest = find_nearest(&source, &candidates);
        assert_eq!(nearest.feature.map(|f| f.id.as_str()), Some("1"));
        assert_eq!(nearest.feature.and_then(NamedFeature::display_name), None);
    }

    #[test]
    fn test_polygon_source_has_no_nearest() {
        let candidates = FeatureCollection::new(vec![point("a", 23.0, 90.0)]);
        assert_eq!(
            find_nearest_to_feature(&polygon("sector"), &candidates),
            NearestResult::none()
        );
    }

    #[test]
    fn test_invalid_source_has_no_nearest() {
        let candidates = FeatureCollection::new(vec![point("a", 23.0, 90.0)]);
        assert_eq!(
            find_nearest(&GeoPoint::new(f64::NAN, 90.0), &candidates),
            NearestResult::none()
        );
    }

    #[test]
    fn test_across_kinds_matches_single_queries() {
        let source = GeoPoint::new(23.873, 90.404);
        let schools = FeatureCollection::new(vec![point("s1", 23.880, 90.400), point("s2", 23.870, 90.405)]);
        let hospitals = FeatureCollection::new(vec![point("h1", 23.850, 90.410)]);
        let empty = FeatureCollection::default();

        let results = find_nearest_across_kinds(
            &source,
            [
                (FacilityKind::School, &schools),
                (FacilityKind::Hospital, &hospitals),
                (FacilityKind::FireStation, &empty),
            ],
        );

        assert_eq!(results.len(), 3);
        assert_eq!(results[&FacilityKind::School], find_nearest(&source, &schools));
        assert_eq!(results[&FacilityKind::Hospital], find_nearest(&source, &hospitals));
        assert_eq!(results[&FacilityKind::FireStation], NearestResult::none());
    }

    #[test]
    fn test_string_kinds() {
        let source = GeoPoint::new(23.873, 90.404);
        let schools = FeatureCollection::new(vec![point("s1", 23.880, 90.400)]);
        let results = find_nearest_across_kinds(&source, [("school", &schools)]);
        assert_eq!(results["school"].feature.map(|f| f.id.as_str()), Some("s1"));
    }

    #[test]
    fn test_layers_by_kind() {
        let layers = vec![
            MapLayer::new(
                "schools-dhaka",
                "Schools in Dhaka",
                FeatureCollection::new(vec![point("far school", 23.95, 90.40)]),
                false,
            ),
            MapLayer::new(
                "schools-uttara",
                "Schools in Uttara",
                FeatureCollection::new(vec![point("near school", 23.874, 90.404)]),
                false,
            ),
            MapLayer::new(
                "hospitals-dhaka",
                "Hospitals in Dhaka",
                FeatureCollection::new(vec![point("hospital", 23.86, 90.40)]),
                true,
            ),
        ];
        let source = GeoPoint::new(23.873, 90.404);

        assert_eq!(layers_of_kind(&layers, FacilityKind::School).count(), 2);

        let results = find_nearest_by_layer_kind(
            &source,
            &layers,
            &[FacilityKind::School, FacilityKind::Hospital, FacilityKind::FireStation],
        );
        assert_eq!(
            results[&FacilityKind::School].feature.map(|f| f.id.as_str()),
            Some("near school")
        );
        assert_eq!(
            results[&FacilityKind::Hospital].feature.map(|f| f.id.as_str()),
            Some("hospital")
        );
        assert!(!results[&FacilityKind::FireStation].is_found());
    }

    #[test]
    fn test_nearest_airbase_includes_zero_distance() {
        let airbases = vec![
            Airbase::new("HSIA", GeoPoint::new(23.8436, 90.3973)),
            Airbase::new("Tejgaon", GeoPoint::new(23.7800, 90.4090)),
        ];

        let on_runway = find_nearest_airbase(&GeoPoint::new(23.7800, 90.4090), &airbases);
        assert_eq!(on_runway.airbase.map(|a| a.name.as_str()), Some("Tejgaon"));
        assert_eq!(on_runway.distance_meters, Some(0.0));

        let uttara = find_nearest_airbase(&GeoPoint::new(23.873, 90.404), &airbases);
        assert_eq!(uttara.airbase.map(|a| a.name.as_str()), Some("HSIA"));

        assert_eq!(
            find_nearest_airbase(&GeoPoint::new(23.873, 90.404), &[]),
            NearestAirbase::default()
        );
    }
}
