// src/analysis.rs

use crate::comps::{aggregate_comps, estimate_value, AggregateStats};
use crate::config::AnalysisConfig;
use crate::domain::money::whole;
use crate::domain::{Comp, PropertyInput, Scenario, SubjectProperty};
use crate::errors::Result;
use crate::lookup::{normalize_listings, RawListing};
use crate::rents::{FairMarketRents, FmrTable};
use crate::scenarios::{flip_scenarios, rental_scenarios, wholesale_scenario, RankedScenarios};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Caller payload: the subject plus any raw comps already fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub property: PropertyInput,
    #[serde(default)]
    pub comps: Vec<RawListing>,
}

impl AnalysisRequest {
    pub fn subject(&self) -> Result<SubjectProperty> {
        SubjectProperty::from_input(&self.property)
    }

    pub fn normalized_comps(&self, limit: usize) -> Vec<Comp> {
        normalize_listings(&self.comps, limit)
    }
}

/// Everything computed for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub address: String,
    pub value_estimate: Option<i64>,
    /// Comps the estimate was built from, nearest first.
    pub comps: Vec<Comp>,
    pub stats: AggregateStats,
    /// All scenarios, best ROI first.
    pub scenarios: RankedScenarios,
    /// Renovation tiers followed by the wholesale assignment.
    pub flip_scenarios: Vec<Scenario>,
    pub rental_scenarios: Vec<Scenario>,
    /// Copies of the ranked list's best entries, written out for reports.
    pub best_scenario: Option<Scenario>,
    pub best_flip: Option<Scenario>,
    pub best_rental: Option<Scenario>,
}

impl AnalysisResult {
    pub fn best_scenario(&self) -> Option<&Scenario> {
        self.best_scenario.as_ref()
    }

    pub fn best_flip(&self) -> Option<&Scenario> {
        self.best_flip.as_ref()
    }

    pub fn best_rental(&self) -> Option<&Scenario> {
        self.best_rental.as_ref()
    }
}

/// The scenario engine. Holds only read-only configuration, so one instance
/// can serve concurrent requests.
#[derive(Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    rents: Arc<dyn FairMarketRents>,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig, rents: Arc<dyn FairMarketRents>) -> Self {
        Self { config, rents }
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self::new(config, Arc::new(FmrTable::atlanta_metro_2024()))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Runs the full pipeline: distance filter, valuation, every strategy,
    /// ranking. Never fails; an empty comp list is priced at the default
    /// $/sqft.
    pub fn analyze(&self, subject: &SubjectProperty, comps: Vec<Comp>) -> AnalysisResult {
        let cfg = &self.config;

        let comps = aggregate_comps(comps, subject.coordinates(), &cfg.comps);
        let stats = estimate_value(&comps, subject.living_area(), &cfg.comps);
        let arv = stats.estimated_value;

        let mut flips = flip_scenarios(subject.purchase_price(), subject.living_area(), arv, &cfg.flip);
        flips.push(wholesale_scenario(subject.purchase_price(), &cfg.wholesale));
        let rentals = rental_scenarios(subject, arv, self.rents.as_ref(), &cfg.rental);
        debug!(flips = flips.len(), rentals = rentals.len(), "scenarios computed");

        let scenarios = RankedScenarios::rank(flips.iter().chain(rentals.iter()).cloned().collect());

        if let Some(best) = scenarios.best_overall() {
            info!(
                address = subject.address(),
                comps = stats.comp_count,
                arv = whole(arv),
                best = %best.name,
                roi = best.roi,
                "analysis complete"
            );
        }

        AnalysisResult {
            address: subject.address().to_string(),
            value_estimate: subject.value_estimate().map(whole),
            comps,
            stats,
            best_scenario: scenarios.best_overall().cloned(),
            best_flip: scenarios.best_flip().cloned(),
            best_rental: scenarios.best_rental().cloned(),
            scenarios,
            flip_scenarios: flips,
            rental_scenarios: rentals,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_config(AnalysisConfig::default())
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").field("config", &self.config).finish_non_exhaustive()
    }
}

/// [`Analyzer::analyze`] with default assumptions and the built-in FMR table.
pub fn analyze(subject: &SubjectProperty, comps: Vec<Comp>) -> AnalysisResult {
    Analyzer::default().analyze(subject, comps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScenarioKind;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn analyzer_is_shareable_across_threads() {
        assert_send_sync::<Analyzer>();
    }

    #[test]
    fn request_deserializes_without_comps() {
        let req: AnalysisRequest = serde_json::from_str(
            r#"{ "property": { "address": "1 A St, Jonesboro, GA 30236", "purchasePrice": 200000, "sqft": 1500 } }"#,
        )
        .unwrap();

        assert!(req.comps.is_empty());
        let subject = req.subject().unwrap();
        assert_eq!(subject.living_area(), 1_500.0);
        assert_eq!(subject.postal_code(), "30236");
    }

    #[test]
    fn seven_scenarios_split_into_lists() {
        let req = AnalysisRequest {
            property: PropertyInput {
                address: "1 A St, Jonesboro, GA 30236".to_string(),
                purchase_price: Some(200_000.0),
                living_area: Some(1_500.0),
                ..Default::default()
            },
            comps: Vec::new(),
        };
        let result = analyze(&req.subject().unwrap(), Vec::new());

        assert_eq!(result.scenarios.len(), 7);
        assert_eq!(result.flip_scenarios.len(), 4);
        assert_eq!(result.rental_scenarios.len(), 3);
        assert_eq!(result.flip_scenarios[3].kind, ScenarioKind::Wholesale);
        assert_eq!(result.best_flip().map(|s| s.kind), Some(ScenarioKind::Flip));
        assert!(result.best_rental().is_some_and(|s| s.kind.is_rental()));
        assert_eq!(result.stats.estimated_value, 225_000.0);
    }
}
