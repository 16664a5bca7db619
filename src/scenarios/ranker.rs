// src/scenarios/ranker.rs

use crate::domain::{Scenario, ScenarioKind};
use serde::Serialize;

/// Every scenario for one property, best ROI first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedScenarios(Vec<Scenario>);

impl RankedScenarios {
    /// Orders by ROI descending. The sort is stable, so equal ROIs keep the
    /// order they were produced in.
    pub fn rank(mut scenarios: Vec<Scenario>) -> Self {
        scenarios.sort_by(|a, b| b.roi.total_cmp(&a.roi));
        Self(scenarios)
    }

    pub fn best_overall(&self) -> Option<&Scenario> {
        self.0.first()
    }

    /// Highest-ROI renovation tier. Wholesale does not count as a flip.
    pub fn best_flip(&self) -> Option<&Scenario> {
        self.0.iter().find(|s| s.kind == ScenarioKind::Flip)
    }

    pub fn best_rental(&self) -> Option<&Scenario> {
        self.0.iter().find(|s| s.kind.is_rental())
    }

    pub fn as_slice(&self) -> &[Scenario] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Scenario> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RankedScenarios {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScenarioDetails, Timeline, WholesaleDetails};
    use proptest::prelude::*;

    fn scenario(name: &str, kind: ScenarioKind, roi: f64) -> Scenario {
        Scenario {
            name: name.to_string(),
            kind,
            cash_invested: 1_000,
            profit: 0,
            roi,
            timeline: Timeline::Ongoing,
            risk_level: "Low",
            management_intensity: "Low",
            details: ScenarioDetails::Wholesale(WholesaleDetails {
                contract_price: 0,
                assignment_fee: 0,
                buyer_price: 0,
                earnest_money: 0,
            }),
        }
    }

    #[test]
    fn empty_has_no_best() {
        let ranked = RankedScenarios::rank(Vec::new());
        assert!(ranked.is_empty());
        assert!(ranked.best_overall().is_none());
        assert!(ranked.best_flip().is_none());
        assert!(ranked.best_rental().is_none());
    }

    #[test]
    fn sorts_descending_and_picks_bests() {
        let ranked = RankedScenarios::rank(vec![
            scenario("light", ScenarioKind::Flip, 41.0),
            scenario("heavy", ScenarioKind::Flip, -80.0),
            scenario("wholesale", ScenarioKind::Wholesale, 1_908.0),
            scenario("open", ScenarioKind::RentalOpenMarket, -12.5),
            scenario("voucher", ScenarioKind::RentalSubsidized, -3.2),
        ]);

        let names: Vec<_> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["wholesale", "light", "voucher", "open", "heavy"]);
        assert_eq!(ranked.best_overall().unwrap().name, "wholesale");
        assert_eq!(ranked.best_flip().unwrap().name, "light");
        assert_eq!(ranked.best_rental().unwrap().name, "voucher");
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = RankedScenarios::rank(vec![
            scenario("first", ScenarioKind::RentalByRoom, 5.0),
            scenario("second", ScenarioKind::RentalOpenMarket, 5.0),
            scenario("top", ScenarioKind::Flip, 9.0),
        ]);

        let names: Vec<_> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
        assert_eq!(ranked.best_rental().unwrap().name, "first");
    }

    #[test]
    fn serializes_as_plain_list() {
        let ranked = RankedScenarios::rank(vec![scenario("only", ScenarioKind::Wholesale, 1.0)]);
        let json = serde_json::to_value(&ranked).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "only");
        assert_eq!(json[0]["kind"], "wholesale");
    }

    proptest! {
        #[test]
        fn ranked_output_is_sorted_and_stable(rois in prop::collection::vec(-5i32..5, 0..30)) {
            let input: Vec<_> = rois
                .iter()
                .enumerate()
                .map(|(i, roi)| scenario(&i.to_string(), ScenarioKind::Flip, f64::from(*roi)))
                .collect();

            let ranked = RankedScenarios::rank(input);
            prop_assert_eq!(ranked.len(), rois.len());

            for pair in ranked.as_slice().windows(2) {
                prop_assert!(pair[0].roi >= pair[1].roi);
                if pair[0].roi == pair[1].roi {
                    let a: usize = pair[0].name.parse().unwrap();
                    let b: usize = pair[1].name.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
