//! Length of a river, and how far each of its inflows is from its mouth.
use crate::error::{Error, Result};
use crate::feature::FeatureCollection;
use crate::inflows::{InflowDistance, InflowMouth, distances_to_mouth};
use crate::latlon::LatLon;
use crate::length::total_length_km;
use crate::mouth::mouth_of;
use crate::namefilter::{MatchMode, select_by_name};
use crate::report::{Fact, Reporter};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RiverReport {
    pub river_name: String,
    /// Total length of all features matching the river name
    pub length_km: f64,
    pub mouth: LatLon,
    /// Number of features not matching the river name, including those without a mouth
    pub inflow_count: usize,
    pub inflow_mouths: Vec<InflowMouth>,
    pub inflow_distances: Vec<InflowDistance>,
}

/// Analyse the river called `river_name` in `collection`.
///
/// Features whose name matches `river_name` (per `match_mode`) make up the river, every other
/// feature is an inflow. The river's mouth is the mouth of the first matching feature. Inflows
/// which have no mouth are counted, but have no distance.
///
/// Returns [`Error::RiverNotFound`] if nothing matches, and [`Error::NoMouth`] if the first
/// matching feature has no mouth.
pub fn analyse_river(
    collection: &FeatureCollection,
    river_name: &str,
    match_mode: MatchMode,
    reporter: &mut impl Reporter,
) -> Result<RiverReport> {
    reporter.record(&Fact::Received { river: river_name });

    let river_features = select_by_name(collection, river_name, match_mode);
    debug!(
        "{} feature(s) match river={:?} (match mode {})",
        river_features.len(),
        river_name,
        match_mode
    );
    let Some(first_river_feature) = river_features.first() else {
        return Err(Error::RiverNotFound(river_name.to_string()));
    };

    let length_km = total_length_km(river_features.iter().copied());
    let inflows = select_by_name(collection, river_name, match_mode.complement());

    reporter.record(&Fact::Length {
        river: river_name,
        length_km,
    });
    reporter.record(&Fact::InflowCount {
        river: river_name,
        count: inflows.len(),
    });

    let mut inflow_mouths = Vec::with_capacity(inflows.len());
    for inflow in inflows.iter() {
        match mouth_of(inflow) {
            Some(mouth) => inflow_mouths.push(InflowMouth {
                name: inflow.name.clone(),
                mouth,
            }),
            None => reporter.record(&Fact::SkippedInflow {
                name: &inflow.name,
                geometry_type: inflow.geometry.type_name(),
            }),
        }
    }

    let mouth =
        mouth_of(first_river_feature).ok_or_else(|| Error::NoMouth(river_name.to_string()))?;
    debug!("Mouth of river={:?} is at {}", river_name, mouth);

    let inflow_distances = distances_to_mouth(mouth, &inflow_mouths);
    reporter.record(&Fact::DistancesFrom { river: river_name });
    for inflow_distance in inflow_distances.iter() {
        reporter.record(&Fact::InflowDistance {
            name: &inflow_distance.name,
            distance_km: inflow_distance.distance_km,
        });
    }

    Ok(RiverReport {
        river_name: river_name.to_string(),
        length_km,
        mouth,
        inflow_count: inflows.len(),
        inflow_mouths,
        inflow_distances,
    })
}
