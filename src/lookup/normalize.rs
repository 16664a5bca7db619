// src/lookup/normalize.rs

use super::lookup_error::{ListingError, LookupError};
use super::models::{RawDate, RawListing, RawSubject};
use crate::domain::{Comp, PropertyInput};
use crate::geo::Coordinates;
use chrono::{DateTime, NaiveDate};
use tracing::{debug, warn};

const DEFAULT_SUBJECT_SQFT: f64 = 1_800.0;

impl Comp {
    /// Flattens a raw sold listing into a comp.
    ///
    /// This is the anti-corruption layer between the lookup service and the
    /// engine: price, living area, bedrooms and bathrooms must be present,
    /// price and area must be positive.
    pub fn from_raw_listing(raw: &RawListing) -> Result<Self, ListingError> {
        let price = raw
            .price
            .as_ref()
            .and_then(|p| p.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or(ListingError::MissingPrice)?;

        let living_area = raw
            .living_area
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or(ListingError::MissingLivingArea)?;

        let beds = raw.bedrooms.ok_or(ListingError::MissingField("bedrooms"))?;
        let baths = raw
            .bathrooms
            .filter(|v| v.is_finite())
            .ok_or(ListingError::MissingField("bathrooms"))?;

        let mut comp = Comp::new(listing_address(raw), price, beds, baths, living_area);
        if let Some(at) = Coordinates::from_parts(raw.latitude, raw.longitude) {
            comp = comp.with_coordinates(at);
        }
        if let Some(date) = raw
            .listing
            .as_ref()
            .and_then(|l| l.date_sold.as_ref())
            .and_then(parse_sale_date)
        {
            comp = comp.with_sold_date(date);
        }
        Ok(comp)
    }
}

/// Normalizes every raw listing, skipping malformed ones, and keeps at most
/// `limit` comps in lookup order.
pub fn normalize_listings(raw: &[RawListing], limit: usize) -> Vec<Comp> {
    let mut comps = Vec::with_capacity(raw.len().min(limit));

    for (index, listing) in raw.iter().enumerate() {
        match Comp::from_raw_listing(listing) {
            Ok(comp) => comps.push(comp),
            Err(e) => warn!(index, error = %e, "skipping malformed listing"),
        }
    }

    if comps.len() > limit {
        debug!(kept = limit, dropped = comps.len() - limit, "truncating comps");
        comps.truncate(limit);
    }
    comps
}

fn listing_address(raw: &RawListing) -> String {
    let Some(addr) = raw.address.as_ref() else {
        return String::new();
    };

    let state_zip = [addr.state.as_deref(), addr.zipcode.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    [addr.street_address.as_deref(), addr.city.as_deref(), Some(state_zip.as_str())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_sale_date(raw: &RawDate) -> Option<NaiveDate> {
    match raw {
        RawDate::Millis(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.date_naive()),
        // Accepts "2024-12-01" and "2024-12-01T00:00:00Z".
        RawDate::Text(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
    }
}

/// Address split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Splits `"street, city, ST zip"`. Missing parts come back empty.
pub fn parse_full_address(full: &str) -> AddressParts {
    let parts: Vec<&str> = full.split(',').map(str::trim).collect();
    let mut state_zip = parts.get(2).copied().unwrap_or_default().split_whitespace();

    AddressParts {
        street: parts.first().copied().unwrap_or_default().to_string(),
        city: parts.get(1).copied().unwrap_or_default().to_string(),
        state: state_zip.next().unwrap_or_default().to_string(),
        postal_code: state_zip.next().unwrap_or_default().to_string(),
    }
}

impl PropertyInput {
    /// Builds analysis input from an address lookup record.
    ///
    /// The record never carries a purchase price; callers supply it before
    /// validation. Missing details take single-family defaults.
    pub fn from_raw_subject(raw: &RawSubject, requested_address: &str) -> Result<Self, LookupError> {
        if let Some(reason) = raw.error.as_deref() {
            return Err(LookupError::NotFound(format!("{requested_address}: {reason}")));
        }

        let address = raw
            .address
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(requested_address)
            .to_string();
        let parts = parse_full_address(&address);
        let lat_long = raw.lat_long.as_ref();

        Ok(PropertyInput {
            purchase_price: None,
            living_area: Some(raw.area.unwrap_or(DEFAULT_SUBJECT_SQFT)),
            beds: raw.beds,
            baths: raw.baths,
            lot_size: raw.lot_size,
            year_built: raw.year_built,
            postal_code: Some(parts.postal_code).filter(|z| !z.is_empty()),
            latitude: lat_long.and_then(|l| l.latitude),
            longitude: lat_long.and_then(|l| l.longitude),
            value_estimate: raw.zestimate,
            address,
        })
    }
}
