//! Helper functions for presenting distances.

/// Formats a distance in meters for display.
///
/// Distances over a kilometer are shown in km with two decimals
/// (`"3.99 km"`), shorter ones in whole meters (`"450 m"`). A missing
/// distance is shown as `"N/A"`.
pub fn format_distance(distance_meters: Option<f64>) -> String {
    match distance_meters {
        None => "N/A".to_string(),
        Some(meters) if meters > 1000.0 => format!("{:.2} km", meters / 1000.0),
        Some(meters) => format!("{} m", meters.round()),
    }
}
