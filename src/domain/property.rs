// src/domain/property.rs

use crate::domain::money::{ratio, round_to, serialize_cents};
use crate::errors::{AnalyzerError, Result};
use crate::geo::Coordinates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_BEDS: u32 = 3;
const DEFAULT_BATHS: f64 = 2.0;
const DEFAULT_LOT_ACRES: f64 = 0.25;
const DEFAULT_YEAR_BUILT: i32 = 2000;

/// Loosely-typed subject property as it arrives from a caller.
///
/// Only `address`, `purchase_price` and `living_area` are required; the rest
/// fall back to typical single-family defaults during validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    pub address: String,
    pub purchase_price: Option<f64>,
    #[serde(alias = "currentSqft", alias = "sqft")]
    pub living_area: Option<f64>,
    pub beds: Option<u32>,
    pub baths: Option<f64>,
    pub lot_size: Option<f64>,
    pub year_built: Option<i32>,
    #[serde(alias = "zipcode")]
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(alias = "zestimate")]
    pub value_estimate: Option<f64>,
}

/// The property being evaluated. Constructed once per analysis from validated
/// caller input and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectProperty {
    address: String,
    purchase_price: f64,
    living_area: f64,
    beds: u32,
    baths: f64,
    lot_size_acres: f64,
    year_built: i32,
    postal_code: String,
    coordinates: Option<Coordinates>,
    value_estimate: Option<f64>,
}

impl SubjectProperty {
    /// Validates caller input and fills in defaults.
    ///
    /// Fails when the purchase price or living area is missing, not finite,
    /// or out of range.
    pub fn from_input(input: &PropertyInput) -> Result<Self> {
        let address = input.address.trim().to_string();

        let purchase_price = input
            .purchase_price
            .ok_or_else(|| invalid("missing purchase price"))?;
        if !purchase_price.is_finite() || purchase_price < 0.0 {
            return Err(invalid(format!("purchase price {purchase_price} is not a valid amount")));
        }

        let living_area = input
            .living_area
            .ok_or_else(|| invalid("missing living area"))?;
        if !living_area.is_finite() || living_area <= 0.0 {
            return Err(invalid(format!("living area {living_area} must be positive")));
        }

        let baths = input.baths.unwrap_or(DEFAULT_BATHS);
        if !baths.is_finite() || baths < 0.0 {
            return Err(invalid(format!("bath count {baths} must be non-negative")));
        }

        let postal_code = input
            .postal_code
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            // "123 Main St, Jonesboro, GA 30236" -> "30236"
            .or_else(|| address.split_whitespace().last().map(str::to_string))
            .unwrap_or_default();

        Ok(Self {
            address,
            purchase_price,
            living_area,
            beds: input.beds.unwrap_or(DEFAULT_BEDS),
            baths,
            lot_size_acres: input.lot_size.unwrap_or(DEFAULT_LOT_ACRES),
            year_built: input.year_built.unwrap_or(DEFAULT_YEAR_BUILT),
            postal_code,
            coordinates: Coordinates::from_parts(input.latitude, input.longitude),
            value_estimate: input.value_estimate.filter(|v| v.is_finite()),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn purchase_price(&self) -> f64 {
        self.purchase_price
    }

    pub fn living_area(&self) -> f64 {
        self.living_area
    }

    pub fn beds(&self) -> u32 {
        self.beds
    }

    pub fn baths(&self) -> f64 {
        self.baths
    }

    pub fn lot_size_acres(&self) -> f64 {
        self.lot_size_acres
    }

    pub fn year_built(&self) -> i32 {
        self.year_built
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn value_estimate(&self) -> Option<f64> {
        self.value_estimate
    }
}

fn invalid(msg: impl Into<String>) -> AnalyzerError {
    AnalyzerError::InvalidProperty(msg.into())
}

/// A comparable sale. Always has a positive price and living area; the
/// lookup boundary rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comp {
    pub address: String,
    pub price: f64,
    pub beds: u32,
    pub baths: f64,
    pub living_area: f64,
    #[serde(serialize_with = "serialize_cents")]
    pub price_per_sqft: f64,
    pub coordinates: Option<Coordinates>,
    /// Miles from the subject. Attached by the aggregator and preset on demo
    /// comps; `None` until then.
    pub distance_miles: Option<f64>,
    pub sold_date: Option<NaiveDate>,
}

impl Comp {
    pub fn new(address: impl Into<String>, price: f64, beds: u32, baths: f64, living_area: f64) -> Self {
        Self {
            address: address.into(),
            price,
            beds,
            baths,
            living_area,
            price_per_sqft: round_to(ratio(price, living_area), 2),
            coordinates: None,
            distance_miles: None,
            sold_date: None,
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn with_sold_date(mut self, date: NaiveDate) -> Self {
        self.sold_date = Some(date);
        self
    }
}
