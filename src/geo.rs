// src/geo.rs

use serde::{Deserialize, Serialize};

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds coordinates only when both halves are present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some(Self::new(lat, lon)),
            _ => None,
        }
    }

    pub fn distance_miles(&self, other: &Coordinates) -> f64 {
        haversine_miles(*self, *other)
    }
}

/// Great-circle distance between two points using the haversine formula.
pub fn haversine_miles(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinates::new(33.5218, -84.3538);
        assert_eq!(haversine_miles(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_69_miles() {
        let a = Coordinates::new(33.0, -84.0);
        let b = Coordinates::new(34.0, -84.0);
        let d = haversine_miles(a, b);
        assert!((d - 69.1).abs() < 0.1, "got {d}");
    }

    #[test]
    fn requires_both_parts() {
        assert!(Coordinates::from_parts(Some(33.0), None).is_none());
        assert!(Coordinates::from_parts(None, Some(-84.0)).is_none());
        assert!(Coordinates::from_parts(Some(f64::NAN), Some(-84.0)).is_none());
        assert_eq!(
            Coordinates::from_parts(Some(33.0), Some(-84.0)),
            Some(Coordinates::new(33.0, -84.0))
        );
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -89.0f64..89.0,
            lon1 in -179.0f64..179.0,
            lat2 in -89.0f64..89.0,
            lon2 in -179.0f64..179.0,
        ) {
            let a = Coordinates::new(lat1, lon1);
            let b = Coordinates::new(lat2, lon2);
            let ab = haversine_miles(a, b);
            let ba = haversine_miles(b, a);
            prop_assert!((ab - ba).abs() < 1e-9, "{} vs {}", ab, ba);
            prop_assert!(ab >= 0.0);
            prop_assert_eq!(haversine_miles(a, a), 0.0);
        }
    }
}
