use geo::{Distance, Haversine};

use crate::problem::kilometers::Kilometers;

/// A WGS84 coordinate. Stored as a `geo::Point` (x = longitude, y = latitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Great-circle distance on a spherical earth.
    pub fn haversine_distance(&self, to: &Location) -> Kilometers {
        let haversine = Haversine;

        Kilometers::from_meters(haversine.distance(self.point, to.point))
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

impl From<&Location> for geo::Coord<f64> {
    fn from(val: &Location) -> Self {
        geo::Coord {
            x: val.lon(),
            y: val.lat(),
        }
    }
}
