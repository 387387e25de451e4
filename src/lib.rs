pub mod analysis;
pub mod error;
pub mod feature;
pub mod fileio;
pub mod geodesic;
pub mod inflows;
pub mod latlon;
pub mod length;
pub mod mouth;
pub mod namefilter;
pub mod overpass;
pub mod report;

pub use analysis::{RiverReport, analyse_river};
pub use error::{Error, Result};
pub use feature::{Chain, Feature, FeatureCollection, Geometry};
pub use latlon::LatLon;
pub use namefilter::MatchMode;
