// src/tests/utils.rs

use crate::domain::{Comp, PropertyInput, SubjectProperty};
use crate::geo::Coordinates;
use crate::lookup::models::{RawAddress, RawPrice};
use crate::lookup::{CompLookup, CompSearchCriteria, LookupError, RawListing, RawSubject};

pub const SUBJECT_LAT: f64 = 33.5218;
pub const SUBJECT_LON: f64 = -84.3538;

/// Floats within `tol` of each other.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

/// 4 bd / 3 ba, 2,846 sqft under contract at $318,000.
pub fn tara_blvd_input() -> PropertyInput {
    PropertyInput {
        address: "512 Tara Blvd, Jonesboro, GA 30236".to_string(),
        purchase_price: Some(318_000.0),
        living_area: Some(2_846.0),
        beds: Some(4),
        baths: Some(3.0),
        year_built: Some(2004),
        latitude: Some(SUBJECT_LAT),
        longitude: Some(SUBJECT_LON),
        value_estimate: Some(455_000.0),
        ..Default::default()
    }
}

pub fn tara_blvd() -> SubjectProperty {
    SubjectProperty::from_input(&tara_blvd_input()).unwrap_or_else(|e| panic!("fixture invalid: {e}"))
}

/// Comp about `miles` due north of the subject.
pub fn comp_north(address: &str, miles: f64, price: f64, living_area: f64) -> Comp {
    Comp::new(address, price, 4, 3.0, living_area)
        .with_coordinates(Coordinates::new(SUBJECT_LAT + miles / 69.097, SUBJECT_LON))
}

pub fn raw_listing(street: &str, price: f64, living_area: f64, lat: f64, lon: f64) -> RawListing {
    RawListing {
        price: Some(RawPrice { value: Some(price) }),
        living_area: Some(living_area),
        bedrooms: Some(4),
        bathrooms: Some(3.0),
        latitude: Some(lat),
        longitude: Some(lon),
        year_built: Some(2003),
        address: Some(RawAddress {
            street_address: Some(street.to_string()),
            city: Some("Jonesboro".to_string()),
            state: Some("GA".to_string()),
            zipcode: Some("30236".to_string()),
        }),
        listing: None,
    }
}

/// Lookup that serves canned results.
pub struct CannedLookup {
    pub subject: Result<RawSubject, LookupError>,
    pub comps: Result<Vec<RawListing>, LookupError>,
}

impl CompLookup for CannedLookup {
    fn find_subject(&self, _address: &str) -> Result<RawSubject, LookupError> {
        self.subject.clone()
    }

    fn find_comps(&self, _criteria: &CompSearchCriteria) -> Result<Vec<RawListing>, LookupError> {
        self.comps.clone()
    }
}
