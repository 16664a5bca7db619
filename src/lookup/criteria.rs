// src/lookup/criteria.rs

use crate::domain::SubjectProperty;
use serde::Serialize;

const EARLIEST_YEAR_BUILT: i32 = 1900;

/// Filter set sent to the lookup service when searching for sold comps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompSearchCriteria {
    pub postal_code: String,
    pub min_beds: u32,
    pub max_beds: u32,
    pub min_baths: f64,
    pub min_living_area: u32,
    pub max_living_area: u32,
    pub min_year_built: i32,
    pub max_year_built: i32,
    pub sold_within_months: u32,
    pub max_items: usize,
}

impl CompSearchCriteria {
    /// Similar homes in the subject's postal code: one bedroom either way,
    /// at most one bath fewer, within 20% of the living area, built within
    /// ten years, sold in the last six months.
    pub fn for_subject(subject: &SubjectProperty) -> Self {
        let beds = subject.beds();
        let sqft = subject.living_area();
        let year = subject.year_built();

        Self {
            postal_code: subject.postal_code().to_string(),
            min_beds: beds.saturating_sub(1).max(1),
            max_beds: beds.saturating_add(1),
            min_baths: (subject.baths() - 1.0).max(1.0),
            // Truncated to whole square feet.
            min_living_area: (sqft * 0.8) as u32,
            max_living_area: (sqft * 1.2) as u32,
            min_year_built: year.saturating_sub(10).max(EARLIEST_YEAR_BUILT),
            max_year_built: year.saturating_add(10),
            sold_within_months: 6,
            max_items: 30,
        }
    }
}
