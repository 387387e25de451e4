use crate::feature::{Feature, Geometry};
use crate::latlon::LatLon;

/// Where this river ends, in (lat, lon).
///
/// For a `MultiLineString` this is the last point of the *last* line, not whichever point is
/// furthest downstream. `None` for unsupported geometries, or when that line has no points.
pub fn mouth_of(feature: &Feature) -> Option<LatLon> {
    match &feature.geometry {
        Geometry::Line(chain) => chain.last(),
        Geometry::MultiLine(chains) => chains.last().and_then(|c| c.last()),
        Geometry::Unsupported(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{Chain, FeatureCollection};

    fn parse_one(geometry: &str) -> Feature {
        let fc = FeatureCollection::from_geojson_str(&format!(
            r#"{{"features": [{{"properties": {{"name": "r"}}, "geometry": {}}}]}}"#,
            geometry
        ))
        .unwrap();
        fc.features.into_iter().next().unwrap()
    }

    #[test]
    fn line() {
        let f = parse_one(r#"{"type": "LineString", "coordinates": [[10,50],[11,51],[12,52]]}"#);
        assert_eq!(mouth_of(&f), Some(LatLon::new(52., 12.)));
    }

    #[test]
    fn multiline_last_of_last() {
        let f = parse_one(
            r#"{"type": "MultiLineString", "coordinates": [[[0,0],[1,1]], [[2,2],[3,3]]]}"#,
        );
        assert_eq!(mouth_of(&f), Some(LatLon::new(3., 3.)));

        // not the "largest" point
        let f = parse_one(
            r#"{"type": "MultiLineString", "coordinates": [[[0,0],[9,9]], [[2,2],[3,4]]]}"#,
        );
        assert_eq!(mouth_of(&f), Some(LatLon::new(4., 3.)));
    }

    #[test]
    fn no_mouth() {
        let f = parse_one(r#"{"type": "Point", "coordinates": [1, 2]}"#);
        assert_eq!(mouth_of(&f), None);
        assert_eq!(mouth_of(&Feature::new("x", Geometry::Line(Chain::default()))), None);
        assert_eq!(mouth_of(&Feature::new("x", Geometry::MultiLine(vec![]))), None);
        assert_eq!(
            mouth_of(&Feature::new(
                "x",
                Geometry::MultiLine(vec![Chain(vec![LatLon::new(1., 1.)]), Chain::default()])
            )),
            None
        );
    }
}
