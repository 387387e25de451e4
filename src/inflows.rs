use crate::geodesic::geodesic_km;
use crate::latlon::LatLon;

/// A tributary, and where it flows into the main river.
#[derive(Debug, Clone, PartialEq)]
pub struct InflowMouth {
    pub name: String,
    pub mouth: LatLon,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct InflowDistance {
    pub name: String,
    pub distance_km: f64,
}

/// Distance from `base_mouth` to each inflow mouth. Same order as the input, duplicate names
/// are kept.
pub fn distances_to_mouth(base_mouth: LatLon, inflow_mouths: &[InflowMouth]) -> Vec<InflowDistance> {
    inflow_mouths
        .iter()
        .map(|inflow| InflowDistance {
            name: inflow.name.clone(),
            distance_km: geodesic_km(base_mouth, inflow.mouth),
        })
        .collect()
}
