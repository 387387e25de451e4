use crate::latlon::LatLon;
use geo::{Distance, Geodesic};

/// Shortest distance, in metres, between 2 points on the WGS-84 ellipsoid.
pub fn geodesic_m(a: LatLon, b: LatLon) -> f64 {
    Geodesic.distance(geo::Point::from(a), geo::Point::from(b))
}

/// Shortest distance, in kilometres, between 2 points on the WGS-84 ellipsoid.
///
/// Out of range positions are passed through unchanged.
pub fn geodesic_km(a: LatLon, b: LatLon) -> f64 {
    geodesic_m(a, b) / 1000.
}
