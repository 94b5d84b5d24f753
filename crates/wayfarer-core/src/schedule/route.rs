//! Geometric route optimization for a stop's attraction list.
//!
//! A greedy nearest-neighbour pass over great-circle distances. This is an
//! approximation, not a TSP solver: it produces a visibly sensible walking
//! order in linear-ish time and is fully deterministic.

use crate::models::Attraction;

/// Mean Earth radius in kilometers, per the haversine convention.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinate pairs in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Reorders attractions into an approximate shortest visiting path.
///
/// Starting from `start` (typically the stop's accommodation) or, absent
/// that, the first coordinate-bearing attraction's own position, the
/// nearest unvisited coordinate-bearing attraction is repeatedly appended
/// and becomes the new reference point. Distance ties keep the
/// first-encountered candidate, so the output is deterministic.
///
/// Attractions without coordinates cannot be routed; they trail the
/// routed ones in their original relative order. When fewer than two
/// attractions have coordinates there is nothing to reorder and the input
/// comes back unchanged.
///
/// The result is always a permutation of the input; callers re-derive
/// dense `order_index` values from the returned order.
pub fn optimize_route(
    attractions: Vec<Attraction>,
    start: Option<(f64, f64)>,
) -> Vec<Attraction> {
    let routable = attractions
        .iter()
        .filter(|a| a.coordinates().is_some())
        .count();
    if routable <= 1 {
        return attractions;
    }

    let Some((mut current_lat, mut current_lon)) =
        start.or_else(|| attractions.iter().find_map(Attraction::coordinates))
    else {
        return attractions;
    };

    let (mut remaining, without_coords): (Vec<_>, Vec<_>) = attractions
        .into_iter()
        .partition(|a| a.coordinates().is_some());

    let mut optimized = Vec::with_capacity(remaining.len() + without_coords.len());
    while !remaining.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = f64::INFINITY;

        for (index, candidate) in remaining.iter().enumerate() {
            let Some((lat, lon)) = candidate.coordinates() else {
                continue;
            };
            let distance = haversine_km(current_lat, current_lon, lat, lon);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_index = index;
            }
        }

        let nearest = remaining.remove(nearest_index);
        if let Some((lat, lon)) = nearest.coordinates() {
            current_lat = lat;
            current_lon = lon;
        }
        optimized.push(nearest);
    }

    optimized.extend(without_coords);
    optimized
}
