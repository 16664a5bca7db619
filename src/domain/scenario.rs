// src/domain/scenario.rs

use crate::config::RehabLevel;
use serde::Serialize;
use std::fmt;

/// Strategy family a scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    Flip,
    Wholesale,
    RentalOpenMarket,
    RentalSubsidized,
    RentalByRoom,
}

impl ScenarioKind {
    pub fn is_rental(&self) -> bool {
        matches!(
            self,
            ScenarioKind::RentalOpenMarket | ScenarioKind::RentalSubsidized | ScenarioKind::RentalByRoom
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "days", rename_all = "lowercase")]
pub enum Timeline {
    /// Exit after a fixed number of days.
    Days(u32),
    /// Held indefinitely.
    Ongoing,
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeline::Days(days) => write!(f, "{days} days"),
            Timeline::Ongoing => write!(f, "Ongoing"),
        }
    }
}

/// One evaluated investment strategy. Computed once and never modified.
///
/// `cash_invested`, `profit` and `roi` mean the same thing across kinds:
/// cash the investor actually deploys, the bottom line (net profit for exits,
/// annual cash flow for holds), and `profit / cash_invested` as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub kind: ScenarioKind,
    pub cash_invested: i64,
    pub profit: i64,
    /// Percent, one decimal.
    pub roi: f64,
    pub timeline: Timeline,
    pub risk_level: &'static str,
    pub management_intensity: &'static str,
    pub details: ScenarioDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScenarioDetails {
    Flip(FlipDetails),
    Wholesale(WholesaleDetails),
    Rental(RentalDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlipDetails {
    pub level: RehabLevel,
    pub holding_months: u32,
    pub purchase_price: i64,
    pub rehab_cost: i64,
    pub effective_arv: i64,
    /// Highest purchase price the 70% rule allows.
    pub max_offer: i64,
    pub meets_70_rule: bool,
    pub loan_amount: i64,
    pub down_payment: i64,
    pub points: i64,
    pub interest: i64,
    pub closing_buy: i64,
    pub closing_sell: i64,
    pub carrying_cost: i64,
    pub total_cost: i64,
    pub gross_profit: i64,
    pub net_profit: i64,
    /// Net profit as a percent of effective ARV, one decimal.
    pub net_profit_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WholesaleDetails {
    pub contract_price: i64,
    pub assignment_fee: i64,
    /// What the end buyer pays: contract price plus the fee.
    pub buyer_price: i64,
    pub earnest_money: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub management: i64,
    pub repairs: i64,
    pub capex: i64,
    pub taxes: i64,
    pub insurance: i64,
    pub utilities: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalDetails {
    pub monthly_rent: i64,
    /// Percent, one decimal.
    pub vacancy_rate: f64,
    pub effective_gross_income: i64,
    pub expenses: ExpenseBreakdown,
    pub noi: i64,
    pub monthly_mortgage: i64,
    pub monthly_cash_flow: i64,
    pub annual_cash_flow: i64,
    pub cash_on_cash: f64,
    pub cap_rate: f64,
    pub dscr: f64,
    pub meets_one_percent_rule: bool,
    /// Fair market rent the model was keyed on, when it used one.
    pub fair_market_rent: Option<i64>,
    /// Per-room rents, rent-by-room only.
    pub room_rents: Vec<i64>,
    /// Comp-based ARV, carried through for reports.
    pub estimated_value: i64,
}

impl Scenario {
    pub fn flip_details(&self) -> Option<&FlipDetails> {
        match &self.details {
            ScenarioDetails::Flip(d) => Some(d),
            _ => None,
        }
    }

    pub fn rental_details(&self) -> Option<&RentalDetails> {
        match &self.details {
            ScenarioDetails::Rental(d) => Some(d),
            _ => None,
        }
    }

    pub fn wholesale_details(&self) -> Option<&WholesaleDetails> {
        match &self.details {
            ScenarioDetails::Wholesale(d) => Some(d),
            _ => None,
        }
    }
}
