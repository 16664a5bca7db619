// src/lookup/demo.rs

use crate::domain::money::round_to;
use crate::domain::Comp;
use chrono::NaiveDate;

/// Deterministic stand-in comps for when no lookup service is reachable.
///
/// Comp `i` is priced at `base - 10 + 5i` $/sqft on `subject - 200 + 100i`
/// sqft and sits `0.3 + 0.1i` miles out.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoComps {
    pub count: usize,
    pub base_price_per_sqft: f64,
    pub city: String,
    pub state: String,
}

impl Default for DemoComps {
    fn default() -> Self {
        Self {
            count: 5,
            base_price_per_sqft: 150.0,
            city: "Jonesboro".to_string(),
            state: "GA".to_string(),
        }
    }
}

impl DemoComps {
    pub fn generate(&self, subject_living_area: f64) -> Vec<Comp> {
        let sold = NaiveDate::from_ymd_opt(2024, 12, 1);

        (0..self.count)
            .filter_map(|i| {
                let step = i as f64;
                let price_per_sqft = self.base_price_per_sqft - 10.0 + 5.0 * step;
                let living_area = subject_living_area - 200.0 + 100.0 * step;
                if living_area <= 0.0 {
                    return None;
                }

                let price = (price_per_sqft * living_area).floor();
                let address = format!("{} Demo Street, {}, {}", 1000 + i, self.city, self.state);

                let mut comp = Comp::new(address, price, 3, 2.0, living_area);
                comp.distance_miles = Some(round_to(0.3 + 0.1 * step, 2));
                comp.sold_date = sold;
                Some(comp)
            })
            .collect()
    }
}
