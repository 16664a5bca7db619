// src/scenarios/flip.rs

use crate::config::{FlipConfig, RenovationTier, WholesaleConfig};
use crate::domain::money::{percent, whole};
use crate::domain::{FlipDetails, Scenario, ScenarioDetails, ScenarioKind, Timeline, WholesaleDetails};
use tracing::debug;

const DAYS_PER_MONTH: u32 = 30;

/// Fix-and-flip outcome for every configured renovation tier, in tier order.
pub fn flip_scenarios(purchase_price: f64, living_area: f64, arv: f64, cfg: &FlipConfig) -> Vec<Scenario> {
    cfg.tiers
        .iter()
        .map(|tier| flip_scenario(purchase_price, living_area, arv, tier, cfg))
        .collect()
}

/// One renovation tier financed with a short-term, interest-only hard money
/// loan. Interest is simple and accrues monthly over the hold.
pub fn flip_scenario(
    purchase_price: f64,
    living_area: f64,
    arv: f64,
    tier: &RenovationTier,
    cfg: &FlipConfig,
) -> Scenario {
    let months = f64::from(tier.holding_months);

    let rehab = living_area * tier.rehab_cost_per_sqft;
    let effective_arv = arv * tier.arv_multiplier;
    let max_offer = cfg.max_offer_ratio * effective_arv - rehab;

    let project_cost = purchase_price + rehab;
    let loan = project_cost * cfg.loan_to_cost;
    let down_payment = project_cost * cfg.down_payment_rate;
    let points = loan * cfg.points_rate;
    let interest = loan * (cfg.annual_interest_rate / 12.0) * months;

    let closing_buy = purchase_price * cfg.acquisition_closing_rate;
    let closing_sell = effective_arv * cfg.disposition_closing_rate;
    let carrying = months * cfg.monthly_carrying_cost;

    let total_cost = purchase_price + rehab + points + interest + closing_buy + closing_sell + carrying;
    let cash_needed = down_payment + points + closing_buy + carrying;

    let gross_profit = effective_arv - purchase_price - rehab;
    let net_profit = effective_arv - total_cost;
    debug!(
        level = %tier.level,
        rehab,
        effective_arv,
        total_cost,
        net_profit,
        cash_needed,
        "evaluated flip"
    );

    Scenario {
        name: format!("Fix & Flip ({})", tier.level),
        kind: ScenarioKind::Flip,
        cash_invested: whole(cash_needed),
        profit: whole(net_profit),
        roi: percent(net_profit, cash_needed),
        timeline: Timeline::Days(tier.holding_months * DAYS_PER_MONTH),
        risk_level: "Medium",
        management_intensity: "High",
        details: ScenarioDetails::Flip(FlipDetails {
            level: tier.level,
            holding_months: tier.holding_months,
            purchase_price: whole(purchase_price),
            rehab_cost: whole(rehab),
            effective_arv: whole(effective_arv),
            max_offer: whole(max_offer),
            meets_70_rule: purchase_price <= max_offer,
            loan_amount: whole(loan),
            down_payment: whole(down_payment),
            points: whole(points),
            interest: whole(interest),
            closing_buy: whole(closing_buy),
            closing_sell: whole(closing_sell),
            carrying_cost: whole(carrying),
            total_cost: whole(total_cost),
            gross_profit: whole(gross_profit),
            net_profit: whole(net_profit),
            net_profit_pct: percent(net_profit, effective_arv),
        }),
    }
}

/// Assigning the purchase contract to an end buyer without taking title.
/// The only cash at risk is the earnest money deposit.
pub fn wholesale_scenario(purchase_price: f64, cfg: &WholesaleConfig) -> Scenario {
    let fee = purchase_price * cfg.assignment_fee_rate;

    Scenario {
        name: "Wholesale Assignment".to_string(),
        kind: ScenarioKind::Wholesale,
        cash_invested: whole(cfg.earnest_money),
        profit: whole(fee),
        roi: percent(fee, cfg.earnest_money),
        timeline: Timeline::Days(cfg.timeline_days),
        risk_level: "Low",
        management_intensity: "Low",
        details: ScenarioDetails::Wholesale(WholesaleDetails {
            contract_price: whole(purchase_price),
            assignment_fee: whole(fee),
            buyer_price: whole(purchase_price + fee),
            earnest_money: whole(cfg.earnest_money),
        }),
    }
}
