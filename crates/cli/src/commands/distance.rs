use serde::Serialize;

use sitequote_core::{haversine_km, Coordinates};

#[derive(Debug, Serialize)]
struct DistanceReport {
    from: Coordinates,
    to: Coordinates,
    distance_km: f64,
}

pub fn run(from_lat: f64, from_lng: f64, to_lat: f64, to_lng: f64) -> String {
    let from = Coordinates { latitude: from_lat, longitude: from_lng };
    let to = Coordinates { latitude: to_lat, longitude: to_lng };

    let report =
        DistanceReport { from, to, distance_km: round_tenth(haversine_km(from, to)) };

    serde_json::to_string_pretty(&report)
        .unwrap_or_else(|error| format!("distance serialization failed: {error}"))
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
