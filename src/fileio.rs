use crate::analysis::RiverReport;
use crate::error::Result;
use crate::feature::FeatureCollection;
use crate::inflows::InflowDistance;
use crate::latlon::LatLon;
use std::io::{BufReader, Write};
use std::path::Path;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OutputFormat {
    GeoJSON,
    GeoJSONSeq,
}

impl OutputFormat {
    /// `.geojsons` is GeoJSONSeq, anything else is GeoJSON
    pub fn from_filename(filename: &Path) -> Self {
        if filename.extension().is_some_and(|ext| ext == "geojsons") {
            OutputFormat::GeoJSONSeq
        } else {
            OutputFormat::GeoJSON
        }
    }
}

pub fn read_feature_collection(filename: &Path) -> Result<FeatureCollection> {
    let f = std::fs::File::open(filename)?;
    FeatureCollection::from_reader(BufReader::new(f))
}

/// CSV with one row per inflow: `name,distance_km`
pub fn write_inflows_csv(f: impl Write, inflow_distances: &[InflowDistance]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(f);
    if inflow_distances.is_empty() {
        wtr.write_record(["name", "distance_km"])?;
    }
    for inflow_distance in inflow_distances.iter() {
        wtr.serialize(inflow_distance)?;
    }
    wtr.flush()?;
    Ok(inflow_distances.len())
}

/// Write the river's mouth, and the mouths of its inflows, as GeoJSON Points, constructing the
/// JSON manually.
pub fn write_mouths_geojson(
    mut f: &mut impl Write,
    report: &RiverReport,
    output_format: OutputFormat,
) -> Result<usize> {
    let river = serde_json::json!({
        "name": report.river_name,
        "role": "river",
        "length_km": report.length_km,
        "inflow_count": report.inflow_count,
    });
    let inflows = report
        .inflow_mouths
        .iter()
        .zip(report.inflow_distances.iter())
        .map(|(inflow_mouth, inflow_distance)| {
            (
                serde_json::json!({
                    "name": inflow_mouth.name,
                    "role": "inflow",
                    "distance_km": inflow_distance.distance_km,
                }),
                inflow_mouth.mouth,
            )
        });

    let mut num_written = 0;
    if output_format == OutputFormat::GeoJSON {
        f.write_all(b"{\"type\":\"FeatureCollection\", \"features\": [\n")?;
    }
    for (i, (properties, mouth)) in std::iter::once((river, report.mouth))
        .chain(inflows)
        .enumerate()
    {
        if i != 0 && output_format == OutputFormat::GeoJSON {
            f.write_all(b",\n")?;
        }
        write_point_feature(&mut f, &properties, mouth, output_format)?;
        num_written += 1;
    }
    if output_format == OutputFormat::GeoJSON {
        f.write_all(b"\n]}")?;
    }

    Ok(num_written)
}

fn write_point_feature(
    mut f: &mut impl Write,
    properties: &serde_json::Value,
    point: LatLon,
    output_format: OutputFormat,
) -> Result<()> {
    if output_format == OutputFormat::GeoJSONSeq {
        f.write_all(b"\x1E")?;
    }
    f.write_all(b"{\"properties\":")?;
    serde_json::to_writer(&mut f, properties)?;
    let lon_lat = point.to_lon_lat();
    write!(
        f,
        ", \"geometry\": {{\"type\":\"Point\", \"coordinates\": [{:.6}, {:.6}]}}, \"type\": \"Feature\"}}",
        lon_lat.lon, lon_lat.lat
    )?;
    if output_format == OutputFormat::GeoJSONSeq {
        f.write_all(b"\x0A")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inflows::InflowMouth;

    fn report() -> RiverReport {
        RiverReport {
            river_name: "Обь".to_string(),
            length_km: 100.,
            mouth: LatLon::new(66.5, 71.25),
            inflow_count: 2,
            inflow_mouths: vec![
                InflowMouth {
                    name: "Иртыш".to_string(),
                    mouth: LatLon::new(61., 69.),
                },
                InflowMouth {
                    name: "Томь".to_string(),
                    mouth: LatLon::new(56.8, 84.5),
                },
            ],
            inflow_distances: vec![
                InflowDistance {
                    name: "Иртыш".to_string(),
                    distance_km: 600.5,
                },
                InflowDistance {
                    name: "Томь".to_string(),
                    distance_km: 1300.,
                },
            ],
        }
    }

    #[test]
    fn inflows_csv() {
        let mut out = Vec::new();
        assert_eq!(write_inflows_csv(&mut out, &report().inflow_distances).unwrap(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,distance_km\nИртыш,600.5\nТомь,1300.0\n"
        );

        let mut out = Vec::new();
        assert_eq!(write_inflows_csv(&mut out, &[]).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "name,distance_km\n");
    }

    #[test]
    fn geojson() {
        let mut out = Vec::new();
        assert_eq!(
            write_mouths_geojson(&mut out, &report(), OutputFormat::GeoJSON).unwrap(),
            3
        );
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["type"], "FeatureCollection");
        let features = v["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0]["properties"]["role"], "river");
        assert_eq!(features[0]["geometry"]["coordinates"][0], 71.25);
        assert_eq!(features[0]["geometry"]["coordinates"][1], 66.5);
        assert_eq!(features[2]["properties"]["name"], "Томь");
        assert_eq!(features[2]["properties"]["distance_km"], 1300.);

        // the output can be read back in, as unsupported Point features
        let fc = FeatureCollection::from_reader(&out[..]).unwrap();
        assert_eq!(fc.len(), 3);
        assert_eq!(fc.features[1].name, "Иртыш");
        assert_eq!(fc.features[1].geometry.type_name(), "Point");
    }

    #[test]
    fn geojsonseq() {
        let mut out = Vec::new();
        write_mouths_geojson(&mut out, &report(), OutputFormat::GeoJSONSeq).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.split_terminator('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let line = line.strip_prefix('\x1E').unwrap();
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["type"], "Feature");
        }
    }

    #[test]
    fn format_from_filename() {
        assert_eq!(
            OutputFormat::from_filename(Path::new("out.geojsons")),
            OutputFormat::GeoJSONSeq
        );
        assert_eq!(
            OutputFormat::from_filename(Path::new("out.geojson")),
            OutputFormat::GeoJSON
        );
    }
}
