mod aggregator;
mod valuation;

pub use aggregator::aggregate_comps;
pub use valuation::{estimate_value, AggregateStats};
