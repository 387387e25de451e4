use crate::error::{Error, Result};

/// A position in (latitude, longitude) order, in degrees.
///
/// This is the order every calculation in this crate uses. Positions are read from GeoJSON in
/// (longitude, latitude) order as [`LonLat`], and converted with `LatLon::from`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// A position in GeoJSON order, (longitude, latitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }

    /// True iff latitude is in [-90, 90] and longitude in [-180, 180].
    ///
    /// Nothing is clamped. Distances for out of range positions are whatever the geodesic
    /// calculation returns.
    pub fn is_in_range(&self) -> bool {
        (-90. ..=90.).contains(&self.lat) && (-180. ..=180.).contains(&self.lon)
    }

    pub fn to_lon_lat(self) -> LonLat {
        LonLat {
            lon: self.lon,
            lat: self.lat,
        }
    }
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        LonLat { lon, lat }
    }
}

impl From<LonLat> for LatLon {
    fn from(p: LonLat) -> LatLon {
        LatLon {
            lat: p.lat,
            lon: p.lon,
        }
    }
}

impl From<LatLon> for geo::Point<f64> {
    fn from(p: LatLon) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl TryFrom<&[f64]> for LonLat {
    type Error = Error;

    /// GeoJSON positions may have a 3rd (altitude) value, which is ignored.
    fn try_from(pos: &[f64]) -> Result<Self> {
        match pos {
            [lon, lat, ..] => Ok(LonLat::new(*lon, *lat)),
            _ => Err(Error::MalformedCoordinate(format!(
                "expected at least 2 numbers, got {:?}",
                pos
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_order() {
        let ll: LatLon = LonLat::new(10., 50.).into();
        assert_eq!(ll, LatLon::new(50., 10.));
        assert_eq!(ll.to_lon_lat(), LonLat::new(10., 50.));
    }

    #[test]
    fn from_slice() {
        assert_eq!(
            LonLat::try_from(&[1., 2.][..]).unwrap(),
            LonLat::new(1., 2.)
        );
        assert_eq!(
            LonLat::try_from(&[1., 2., 300.][..]).unwrap(),
            LonLat::new(1., 2.)
        );
        assert!(LonLat::try_from(&[1.][..]).is_err());
        assert!(LonLat::try_from(&[][..]).is_err());
    }

    #[test]
    fn range() {
        assert!(LatLon::new(90., -180.).is_in_range());
        assert!(!LatLon::new(91., 0.).is_in_range());
        assert!(!LatLon::new(0., 180.5).is_in_range());
    }

    #[test]
    fn geo_point_is_x_lon() {
        let p: geo::Point<f64> = LatLon::new(55., 82.).into();
        assert_eq!(p.x(), 82.);
        assert_eq!(p.y(), 55.);
    }
}
