use crate::feature::{Chain, Feature, Geometry};
use crate::geodesic::geodesic_km;
use itertools::Itertools;

/// Sum of the distance between each consecutive pair of points. 0 for fewer than 2 points.
pub fn chain_length_km(chain: &Chain) -> f64 {
    chain
        .points()
        .iter()
        .tuple_windows()
        .map(|(a, b)| geodesic_km(*a, *b))
        .sum()
}

/// Length of all chains. Unsupported geometries have length 0.
pub fn geometry_length_km(geometry: &Geometry) -> f64 {
    geometry.chains().iter().map(chain_length_km).sum()
}

/// Total length of all these features
pub fn total_length_km<'a>(features: impl IntoIterator<Item = &'a Feature>) -> f64 {
    features
        .into_iter()
        .map(|f| geometry_length_km(&f.geometry))
        .sum()
}
