//! Investment scenario engine for a single residential property.
//!
//! Given a subject property and recent comparable sales, estimates an
//! after-repair value and evaluates fix-and-flip, wholesale and rental
//! strategies, ranked by return on cash invested.

pub mod analysis;
pub mod comps;
pub mod config;
pub mod domain;
pub mod errors;
pub mod geo;
pub mod lookup;
pub mod rents;
pub mod scenarios;

#[cfg(test)]
mod tests;

pub use analysis::{analyze, AnalysisRequest, AnalysisResult, Analyzer};
pub use comps::AggregateStats;
pub use config::AnalysisConfig;
pub use domain::{Comp, PropertyInput, Scenario, ScenarioDetails, ScenarioKind, SubjectProperty, Timeline};
pub use errors::{AnalyzerError, Result};
pub use rents::{FairMarketRents, FmrTable};
pub use scenarios::RankedScenarios;
