// src/rents/mod.rs

//! Fair-market-rent schedules keyed by postal code.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Published rent ceilings for one area, by bedroom count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FmrRow {
    #[serde(rename = "0br")]
    pub studio: f64,
    #[serde(rename = "1br")]
    pub one_bed: f64,
    #[serde(rename = "2br")]
    pub two_bed: f64,
    #[serde(rename = "3br")]
    pub three_bed: f64,
    #[serde(rename = "4br")]
    pub four_bed: f64,
}

impl FmrRow {
    /// Rent for `beds` bedrooms. Anything above four uses the 4-bedroom tier.
    pub fn for_beds(&self, beds: u32) -> f64 {
        match beds {
            0 => self.studio,
            1 => self.one_bed,
            2 => self.two_bed,
            3 => self.three_bed,
            _ => self.four_bed,
        }
    }
}

/// Source of fair market rents for the rental calculators.
pub trait FairMarketRents: Send + Sync {
    fn fair_market_rent(&self, postal_code: &str, beds: u32) -> f64;
}

/// In-memory FMR table with a default row for postal codes it does not list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FmrTable {
    default: FmrRow,
    #[serde(default)]
    areas: HashMap<String, FmrRow>,
}

/// 2024 schedule shared by every Atlanta metro postal code.
const ATLANTA_METRO_2024: FmrRow = FmrRow {
    studio: 1089.0,
    one_bed: 1199.0,
    two_bed: 1409.0,
    three_bed: 1829.0,
    four_bed: 2169.0,
};

const ATLANTA_METRO_POSTAL_CODES: &[&str] = &[
    "30002", "30004", "30005", "30008", "30012", "30013", "30014", "30016", "30017", "30019",
    "30021", "30024", "30030", "30032", "30033", "30034", "30035", "30038", "30039", "30040",
    "30041", "30043", "30044", "30045", "30046", "30047", "30052", "30058", "30060", "30062",
    "30064", "30066", "30067", "30068", "30071", "30072", "30075", "30076", "30078", "30079",
    "30080", "30082", "30083", "30084", "30087", "30088", "30092", "30093", "30094", "30096",
    "30097", "30101", "30102", "30106", "30107", "30114", "30115", "30126", "30127", "30134",
    "30135", "30137", "30141", "30144", "30152", "30157", "30168", "30180", "30188", "30189",
    "30213", "30214", "30215", "30228", "30236", "30238", "30248", "30252", "30253", "30260",
    "30269", "30273", "30274", "30281", "30288", "30291", "30294", "30296", "30297", "30301",
    "30303", "30305", "30306", "30307", "30308", "30309", "30310", "30311", "30312", "30313",
    "30314", "30315", "30316", "30317", "30318", "30319", "30322", "30324", "30326", "30327",
    "30328", "30329", "30331", "30332", "30334", "30336", "30337", "30338", "30339", "30340",
    "30341", "30342", "30344", "30345", "30349", "30350", "30354", "30360", "30363",
];

impl FmrTable {
    pub fn new(default: FmrRow) -> Self {
        Self {
            default,
            areas: HashMap::new(),
        }
    }

    pub fn with_area(mut self, postal_code: impl Into<String>, row: FmrRow) -> Self {
        self.areas.insert(postal_code.into(), row);
        self
    }

    pub fn atlanta_metro_2024() -> Self {
        ATLANTA_METRO_POSTAL_CODES
            .iter()
            .fold(Self::new(ATLANTA_METRO_2024), |table, code| {
                table.with_area(*code, ATLANTA_METRO_2024)
            })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Row for `postal_code`, or the default row when the code is unknown.
    pub fn row(&self, postal_code: &str) -> &FmrRow {
        match self.areas.get(postal_code) {
            Some(row) => row,
            None => {
                debug!(postal_code, "no FMR row for postal code, using default");
                &self.default
            }
        }
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl Default for FmrTable {
    fn default() -> Self {
        Self::atlanta_metro_2024()
    }
}

impl FairMarketRents for FmrTable {
    fn fair_market_rent(&self, postal_code: &str, beds: u32) -> f64 {
        self.row(postal_code).for_beds(beds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unknown_postal_code_uses_default_row() {
        let table = FmrTable::atlanta_metro_2024();
        assert_eq!(table.fair_market_rent("99999", 3), 1829.0);
        assert_eq!(table.fair_market_rent("30344", 2), 1409.0);
    }

    #[test]
    fn bedroom_tiers_cap_at_four() {
        let table = FmrTable::atlanta_metro_2024();
        assert_eq!(table.fair_market_rent("30344", 0), 1089.0);
        assert_eq!(table.fair_market_rent("30344", 4), 2169.0);
        assert_eq!(table.fair_market_rent("30344", 7), 2169.0);
    }

    #[test]
    fn atlanta_table_lists_every_code() {
        assert_eq!(FmrTable::atlanta_metro_2024().len(), ATLANTA_METRO_POSTAL_CODES.len());
    }

    #[test]
    fn loads_regional_table_from_json() {
        let json = r#"{
            "default": {"0br": 900, "1br": 1000, "2br": 1200, "3br": 1500, "4br": 1800},
            "areas": {
                "78704": {"0br": 1300, "1br": 1450, "2br": 1700, "3br": 2250, "4br": 2700}
            }
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = FmrTable::from_json_file(file.path()).unwrap();
        assert_eq!(table.fair_market_rent("78704", 3), 2250.0);
        assert_eq!(table.fair_market_rent("10001", 3), 1500.0);
    }
}
