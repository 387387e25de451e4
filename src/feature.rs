//! River features, as loaded from a GeoJSON FeatureCollection.
//!
//! Only `LineString` and `MultiLineString` geometries are understood. Any other geometry is kept
//! as [`Geometry::Unsupported`], so that later steps can skip it rather than the whole file
//! failing to load.
use crate::error::Result;
use crate::latlon::{LatLon, LonLat};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

/// One continuous line of positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chain(pub Vec<LatLon>);

impl Chain {
    pub fn points(&self) -> &[LatLon] {
        &self.0
    }

    pub fn last(&self) -> Option<LatLon> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LatLon> for Chain {
    fn from_iter<I: IntoIterator<Item = LatLon>>(iter: I) -> Self {
        Chain(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Line(Chain),
    /// Order matters: the last chain has the downstream end.
    MultiLine(Vec<Chain>),
    /// GeoJSON geometry type we don't handle (e.g. `Point`, `Polygon`)
    Unsupported(String),
}

impl Geometry {
    pub fn type_name(&self) -> &str {
        match self {
            Geometry::Line(_) => "LineString",
            Geometry::MultiLine(_) => "MultiLineString",
            Geometry::Unsupported(t) => t,
        }
    }

    /// All the chains of this geometry, in order. Empty for unsupported geometries.
    pub fn chains(&self) -> &[Chain] {
        match self {
            Geometry::Line(c) => std::slice::from_ref(c),
            Geometry::MultiLine(cs) => cs,
            Geometry::Unsupported(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Feature {
            name: name.into(),
            geometry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { features }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn from_geojson_str(s: &str) -> Result<Self> {
        let raw: RawFeatureCollection = serde_json::from_str(s)?;
        raw.into_collection()
    }

    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        let raw: RawFeatureCollection = serde_json::from_reader(rdr)?;
        raw.into_collection()
    }
}

#[derive(Deserialize)]
struct RawFeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    geometry_type: String,
    #[serde(default)]
    coordinates: Value,
}

fn chain_from_positions(positions: &[Vec<f64>]) -> Result<Chain> {
    positions
        .iter()
        .map(|pos| LonLat::try_from(pos.as_slice()).map(LatLon::from))
        .collect()
}

impl RawGeometry {
    fn into_geometry(self) -> Result<Geometry> {
        Ok(match self.geometry_type.as_str() {
            "LineString" => {
                let positions: Vec<Vec<f64>> = serde_json::from_value(self.coordinates)?;
                Geometry::Line(chain_from_positions(&positions)?)
            }
            "MultiLineString" => {
                let lines: Vec<Vec<Vec<f64>>> = serde_json::from_value(self.coordinates)?;
                Geometry::MultiLine(
                    lines
                        .iter()
                        .map(|positions| chain_from_positions(positions))
                        .collect::<Result<Vec<_>>>()?,
                )
            }
            _ => Geometry::Unsupported(self.geometry_type),
        })
    }
}

impl RawFeatureCollection {
    fn into_collection(self) -> Result<FeatureCollection> {
        let mut features = Vec::with_capacity(self.features.len());
        for raw_feature in self.features {
            let name = raw_feature
                .properties
                .as_ref()
                .and_then(|props| props.get("name"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let geometry = match raw_feature.geometry {
                Some(g) => g.into_geometry()?,
                None => Geometry::Unsupported("null".to_string()),
            };
            if let Geometry::Unsupported(t) = &geometry {
                debug!("Feature {:?} has unsupported geometry type {}", name, t);
            }
            if geometry
                .chains()
                .iter()
                .flat_map(|c| c.points())
                .any(|p| !p.is_in_range())
            {
                warn!("Feature {:?} has positions outside the valid lat/lon range", name);
            }
            features.push(Feature { name, geometry });
        }

        Ok(FeatureCollection { features })
    }
}
