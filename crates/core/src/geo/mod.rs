//! Great-circle distance and supplier ranking helpers.

use serde::{Deserialize, Serialize};

use crate::domain::supplier::Supplier;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Haversine great-circle distance between two coordinates, in kilometers.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// A supplier annotated with its depot distance from a reference location.
/// `distance_km` is `None` when either side lacks coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedSupplier {
    pub supplier: Supplier,
    pub distance_km: Option<f64>,
}

/// Annotate and order suppliers by depot distance from `reference`. The sort
/// is stable, so equal distances keep their incoming order, and suppliers
/// without a depot location land after every supplier that has one.
pub fn rank_by_distance(
    suppliers: Vec<Supplier>,
    reference: Option<Coordinates>,
) -> Vec<RankedSupplier> {
    let mut ranked: Vec<RankedSupplier> = suppliers
        .into_iter()
        .map(|supplier| {
            let distance_km = match (reference, supplier.depot) {
                (Some(from), Some(depot)) => Some(haversine_km(from, depot)),
                _ => None,
            };
            RankedSupplier { supplier, distance_km }
        })
        .collect();

    ranked.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(left), Some(right)) => {
            left.partial_cmp(&right).unwrap_or(std::cmp::Ordering::Equal)
        }
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    ranked
}
