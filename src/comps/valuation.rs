// src/comps/valuation.rs

use crate::config::CompConfig;
use crate::domain::money::{serialize_cents, serialize_whole};
use crate::domain::Comp;
use serde::Serialize;
use tracing::{debug, warn};

/// Summary of the comps an estimate was built from.
///
/// Values are kept at full precision; serialization rounds prices to whole
/// units and $/sqft to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub comp_count: usize,
    #[serde(serialize_with = "serialize_whole")]
    pub average_price: f64,
    #[serde(serialize_with = "serialize_cents")]
    pub average_price_per_sqft: f64,
    /// After-repair value used by every scenario.
    #[serde(serialize_with = "serialize_whole")]
    pub estimated_value: f64,
}

/// Prices the subject at the comps' mean $/sqft.
///
/// With no comps the configured default $/sqft applies and the average price
/// is reported as zero.
pub fn estimate_value(comps: &[Comp], subject_living_area: f64, cfg: &CompConfig) -> AggregateStats {
    let (average_price, average_price_per_sqft) = if comps.is_empty() {
        warn!(
            default_price_per_sqft = cfg.default_price_per_sqft,
            "no comps available, using default $/sqft"
        );
        (0.0, cfg.default_price_per_sqft)
    } else {
        let n = comps.len() as f64;
        let price_sum: f64 = comps.iter().map(|c| c.price).sum();
        let ppsf_sum: f64 = comps.iter().map(|c| c.price_per_sqft).sum();
        (price_sum / n, ppsf_sum / n)
    };

    let estimated_value = average_price_per_sqft * subject_living_area;
    debug!(
        comps = comps.len(),
        average_price_per_sqft,
        estimated_value,
        "estimated after-repair value"
    );

    AggregateStats {
        comp_count: comps.len(),
        average_price,
        average_price_per_sqft,
        estimated_value,
    }
}
