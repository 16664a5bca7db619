use serde::{Deserialize, Serialize};

// Sold listing as returned by the lookup service:
//
// listing
//  ├── price
//  │    └── value
//  ├── livingArea
//  ├── bedrooms
//  ├── bathrooms
//  ├── latitude
//  ├── longitude
//  ├── yearBuilt
//  ├── address
//  │    ├── streetAddress
//  │    ├── city
//  │    ├── state
//  │    └── zipcode
//  └── listing
//       └── dateSold

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub price: Option<RawPrice>,
    pub living_area: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub year_built: Option<i32>,
    pub address: Option<RawAddress>,
    pub listing: Option<RawSaleInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPrice {
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSaleInfo {
    pub date_sold: Option<RawDate>,
}

/// Sale dates arrive either as `YYYY-MM-DD` text or as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Millis(i64),
    Text(String),
}

// Subject record from an address lookup. A record carrying `error` means
// the address was not found.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubject {
    pub address: Option<String>,
    pub beds: Option<u32>,
    pub baths: Option<f64>,
    pub area: Option<f64>,
    pub year_built: Option<i32>,
    pub lot_size: Option<f64>,
    pub lat_long: Option<RawLatLong>,
    pub zestimate: Option<f64>,
    pub status_text: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLatLong {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nested_listing() {
        let json = r#"{
            "price": { "value": 289000 },
            "livingArea": 1750,
            "bedrooms": 3,
            "bathrooms": 2.5,
            "latitude": 33.52,
            "longitude": -84.35,
            "yearBuilt": 1998,
            "address": {
                "streetAddress": "41 Oak Ln",
                "city": "Jonesboro",
                "state": "GA",
                "zipcode": "30236"
            },
            "listing": { "dateSold": "2024-11-02" },
            "zpid": "ignored"
        }"#;

        let raw: RawListing = serde_json::from_str(json).unwrap();

        assert_eq!(raw.price.unwrap().value, Some(289_000.0));
        assert_eq!(raw.living_area, Some(1_750.0));
        assert_eq!(raw.bathrooms, Some(2.5));
        assert_eq!(raw.address.unwrap().street_address.as_deref(), Some("41 Oak Ln"));
        assert_eq!(
            raw.listing.unwrap().date_sold,
            Some(RawDate::Text("2024-11-02".to_string()))
        );
    }

    #[test]
    fn sale_date_may_be_epoch_millis() {
        let raw: RawSaleInfo = serde_json::from_str(r#"{ "dateSold": 1733011200000 }"#).unwrap();
        assert_eq!(raw.date_sold, Some(RawDate::Millis(1_733_011_200_000)));
    }

    #[test]
    fn subject_error_field() {
        let raw: RawSubject = serde_json::from_str(r#"{ "error": "No property found" }"#).unwrap();
        assert_eq!(raw.error.as_deref(), Some("No property found"));
        assert!(raw.address.is_none());
    }
}
