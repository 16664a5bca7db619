// src/config.rs

//! Investment assumptions used by the scenario calculators.
//!
//! `AnalysisConfig::default()` is the authoritative rate set. Every struct is
//! `#[serde(default)]`, so a JSON override file only needs the keys it changes:
//!
//! ```json
//! { "rental": { "financing": { "annual_interest_rate": 0.065 } } }
//! ```

use crate::errors::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub comps: CompConfig,
    pub flip: FlipConfig,
    pub wholesale: WholesaleConfig,
    pub rental: RentalConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompConfig {
    /// Comps farther than this from the subject are dropped.
    pub radius_miles: f64,
    /// How many of the nearest comps to keep when none are inside the radius.
    pub fallback_count: usize,
    /// Distance assigned to comps without coordinates.
    pub missing_distance_miles: f64,
    /// $/sqft used when there are no comps at all.
    pub default_price_per_sqft: f64,
    /// Cap on normalized comps taken from one lookup response.
    pub max_comps: usize,
}

impl Default for CompConfig {
    fn default() -> Self {
        Self {
            radius_miles: 2.0,
            fallback_count: 5,
            missing_distance_miles: 999.0,
            default_price_per_sqft: 150.0,
            max_comps: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RehabLevel {
    Light,
    Medium,
    Heavy,
}

impl fmt::Display for RehabLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RehabLevel::Light => write!(f, "Light"),
            RehabLevel::Medium => write!(f, "Medium"),
            RehabLevel::Heavy => write!(f, "Heavy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenovationTier {
    pub level: RehabLevel,
    pub rehab_cost_per_sqft: f64,
    /// Resale uplift applied to the comp-based ARV.
    pub arv_multiplier: f64,
    pub holding_months: u32,
}

impl RenovationTier {
    pub fn new(level: RehabLevel, rehab_cost_per_sqft: f64, arv_multiplier: f64, holding_months: u32) -> Self {
        Self {
            level,
            rehab_cost_per_sqft,
            arv_multiplier,
            holding_months,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipConfig {
    pub tiers: Vec<RenovationTier>,
    /// Share of ARV (before rehab) an investor should pay at most.
    pub max_offer_ratio: f64,
    pub down_payment_rate: f64,
    pub loan_to_cost: f64,
    pub points_rate: f64,
    /// Simple annual interest on the hard money loan.
    pub annual_interest_rate: f64,
    pub acquisition_closing_rate: f64,
    pub disposition_closing_rate: f64,
    pub monthly_carrying_cost: f64,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                RenovationTier::new(RehabLevel::Light, 25.0, 1.00, 4),
                RenovationTier::new(RehabLevel::Medium, 45.0, 1.05, 6),
                RenovationTier::new(RehabLevel::Heavy, 75.0, 1.15, 8),
            ],
            max_offer_ratio: 0.70,
            down_payment_rate: 0.10,
            loan_to_cost: 0.90,
            points_rate: 0.03,
            annual_interest_rate: 0.10,
            acquisition_closing_rate: 0.02,
            disposition_closing_rate: 0.06,
            monthly_carrying_cost: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WholesaleConfig {
    pub assignment_fee_rate: f64,
    pub earnest_money: f64,
    pub timeline_days: u32,
}

impl Default for WholesaleConfig {
    fn default() -> Self {
        Self {
            assignment_fee_rate: 0.06,
            earnest_money: 1_000.0,
            timeline_days: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanTerms {
    pub down_payment_rate: f64,
    pub annual_interest_rate: f64,
    pub term_years: u32,
    /// Buyer closing costs, paid in cash on top of the down payment.
    pub closing_cost_rate: f64,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            down_payment_rate: 0.20,
            annual_interest_rate: 0.07,
            term_years: 30,
            closing_cost_rate: 0.03,
        }
    }
}

/// Operating expenses as shares of gross monthly rent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseRates {
    pub management: f64,
    pub repairs: f64,
    pub capex: f64,
    pub taxes: f64,
    pub insurance: f64,
}

impl ExpenseRates {
    pub fn total(&self) -> f64 {
        self.management + self.repairs + self.capex + self.taxes + self.insurance
    }

    fn all(&self) -> [(&'static str, f64); 5] {
        [
            ("management", self.management),
            ("repairs", self.repairs),
            ("capex", self.capex),
            ("taxes", self.taxes),
            ("insurance", self.insurance),
        ]
    }
}

impl Default for ExpenseRates {
    fn default() -> Self {
        Self {
            management: 0.10,
            repairs: 0.08,
            capex: 0.08,
            taxes: 0.10,
            insurance: 0.06,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenMarketConfig {
    pub rent_per_sqft: f64,
    /// Floor on market rent as a share of FMR.
    pub fmr_floor_ratio: f64,
    pub vacancy_rate: f64,
}

impl Default for OpenMarketConfig {
    fn default() -> Self {
        Self {
            rent_per_sqft: 0.85,
            fmr_floor_ratio: 0.9,
            vacancy_rate: 0.08,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubsidizedConfig {
    /// Voucher payment standard as a share of FMR.
    pub payment_standard_ratio: f64,
    pub vacancy_rate: f64,
}

impl Default for SubsidizedConfig {
    fn default() -> Self {
        Self {
            payment_standard_ratio: 1.0,
            vacancy_rate: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomRentalConfig {
    /// Rent for the first, second, ... bedroom.
    pub room_rents: Vec<f64>,
    pub management_rate: f64,
    pub repairs_rate: f64,
    pub monthly_utilities: f64,
    pub vacancy_rate: f64,
}

impl Default for RoomRentalConfig {
    fn default() -> Self {
        Self {
            room_rents: vec![650.0, 550.0, 500.0, 450.0, 400.0],
            management_rate: 0.12,
            repairs_rate: 0.10,
            monthly_utilities: 150.0,
            vacancy_rate: 0.10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalConfig {
    pub financing: LoanTerms,
    pub expenses: ExpenseRates,
    pub open_market: OpenMarketConfig,
    pub subsidized: SubsidizedConfig,
    pub by_room: RoomRentalConfig,
    /// Monthly rent as a share of price for the 1% rule.
    pub one_percent_rule_ratio: f64,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            financing: LoanTerms::default(),
            expenses: ExpenseRates::default(),
            open_market: OpenMarketConfig::default(),
            subsidized: SubsidizedConfig::default(),
            by_room: RoomRentalConfig::default(),
            one_percent_rule_ratio: 0.01,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Rejects values that would make the formulas meaningless.
    pub fn validate(&self) -> Result<()> {
        let comps = &self.comps;
        if !comps.radius_miles.is_finite() || comps.radius_miles <= 0.0 {
            return Err(bad("comps.radius_miles must be positive"));
        }
        if comps.fallback_count == 0 {
            return Err(bad("comps.fallback_count must be at least 1"));
        }
        if comps.max_comps == 0 {
            return Err(bad("comps.max_comps must be at least 1"));
        }
        non_negative("comps.default_price_per_sqft", comps.default_price_per_sqft)?;

        let flip = &self.flip;
        if flip.tiers.is_empty() {
            return Err(bad("flip.tiers must not be empty"));
        }
        for tier in &flip.tiers {
            non_negative("flip.tiers.rehab_cost_per_sqft", tier.rehab_cost_per_sqft)?;
            non_negative("flip.tiers.arv_multiplier", tier.arv_multiplier)?;
        }
        for (name, rate) in [
            ("flip.max_offer_ratio", flip.max_offer_ratio),
            ("flip.down_payment_rate", flip.down_payment_rate),
            ("flip.loan_to_cost", flip.loan_to_cost),
            ("flip.points_rate", flip.points_rate),
            ("flip.annual_interest_rate", flip.annual_interest_rate),
            ("flip.acquisition_closing_rate", flip.acquisition_closing_rate),
            ("flip.disposition_closing_rate", flip.disposition_closing_rate),
            ("wholesale.assignment_fee_rate", self.wholesale.assignment_fee_rate),
        ] {
            unit_rate(name, rate)?;
        }
        non_negative("flip.monthly_carrying_cost", flip.monthly_carrying_cost)?;
        non_negative("wholesale.earnest_money", self.wholesale.earnest_money)?;

        let rental = &self.rental;
        if rental.financing.term_years == 0 {
            return Err(bad("rental.financing.term_years must be at least 1"));
        }
        for (name, rate) in [
            ("rental.financing.down_payment_rate", rental.financing.down_payment_rate),
            ("rental.financing.annual_interest_rate", rental.financing.annual_interest_rate),
            ("rental.financing.closing_cost_rate", rental.financing.closing_cost_rate),
            ("rental.open_market.vacancy_rate", rental.open_market.vacancy_rate),
            ("rental.subsidized.vacancy_rate", rental.subsidized.vacancy_rate),
            ("rental.by_room.vacancy_rate", rental.by_room.vacancy_rate),
            ("rental.by_room.management_rate", rental.by_room.management_rate),
            ("rental.by_room.repairs_rate", rental.by_room.repairs_rate),
            ("rental.one_percent_rule_ratio", rental.one_percent_rule_ratio),
        ] {
            unit_rate(name, rate)?;
        }
        for (name, rate) in rental.expenses.all() {
            unit_rate(&format!("rental.expenses.{name}"), rate)?;
        }
        non_negative("rental.open_market.rent_per_sqft", rental.open_market.rent_per_sqft)?;
        non_negative("rental.open_market.fmr_floor_ratio", rental.open_market.fmr_floor_ratio)?;
        non_negative(
            "rental.subsidized.payment_standard_ratio",
            rental.subsidized.payment_standard_ratio,
        )?;
        non_negative("rental.by_room.monthly_utilities", rental.by_room.monthly_utilities)?;
        for rent in &rental.by_room.room_rents {
            non_negative("rental.by_room.room_rents", *rent)?;
        }

        Ok(())
    }
}

fn bad(msg: impl Into<String>) -> AnalyzerError {
    AnalyzerError::InvalidConfig(msg.into())
}

fn unit_rate(name: &str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(bad(format!("{name} must be between 0 and 1, got {rate}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(bad(format!("{name} must be a non-negative number, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_pass_validation() {
        AnalysisConfig::default().validate().unwrap();
    }

    #[test]
    fn open_market_expenses_and_vacancy_make_the_fifty_percent_rule() {
        let cfg = RentalConfig::default();
        let total = cfg.expenses.total();
        assert!((total - 0.42).abs() < 1e-12, "got {total}");
        assert!((total + cfg.open_market.vacancy_rate - 0.50).abs() < 1e-12);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = AnalysisConfig::from_json_str(
            r#"{ "rental": { "financing": { "annual_interest_rate": 0.065 } }, "comps": { "radius_miles": 1.5 } }"#,
        )
        .unwrap();

        assert_eq!(cfg.rental.financing.annual_interest_rate, 0.065);
        assert_eq!(cfg.rental.financing.down_payment_rate, 0.20);
        assert_eq!(cfg.comps.radius_miles, 1.5);
        assert_eq!(cfg.comps.fallback_count, 5);
        assert_eq!(cfg.flip.tiers.len(), 3);
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let err = AnalysisConfig::from_json_str(r#"{ "rental": { "open_market": { "vacancy_rate": 1.5 } } }"#)
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidConfig(_)), "{err}");

        let mut cfg = AnalysisConfig::default();
        cfg.flip.tiers.clear();
        assert!(cfg.validate().is_err());

        let mut cfg = AnalysisConfig::default();
        cfg.rental.financing.term_years = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "wholesale": { "assignment_fee_rate": 0.05 } }"#)
            .unwrap();

        let cfg = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(cfg.wholesale.assignment_fee_rate, 0.05);
        assert_eq!(cfg.wholesale.earnest_money, 1_000.0);
    }
}
