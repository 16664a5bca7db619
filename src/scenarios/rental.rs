// src/scenarios/rental.rs

use crate::config::{ExpenseRates, LoanTerms, RentalConfig};
use crate::domain::money::{percent, ratio, round_to, whole};
use crate::domain::{ExpenseBreakdown, RentalDetails, Scenario, ScenarioDetails, ScenarioKind, SubjectProperty, Timeline};
use crate::rents::FairMarketRents;
use tracing::debug;

/// Monthly principal and interest on a fully amortizing fixed-rate loan.
pub fn monthly_payment(loan_amount: f64, annual_rate: f64, term_years: u32) -> f64 {
    let n = f64::from(term_years) * 12.0;
    if n == 0.0 {
        return 0.0;
    }
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return loan_amount / n;
    }
    let growth = (1.0 + r).powf(n);
    if !growth.is_finite() {
        // Limit of an endless term: interest only.
        return loan_amount * r;
    }
    loan_amount * r * growth / (growth - 1.0)
}

/// Purchase financing shared by every rental model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentalFinancing {
    pub down_payment: f64,
    pub loan_amount: f64,
    pub closing_costs: f64,
    pub monthly_mortgage: f64,
}

impl RentalFinancing {
    pub fn new(purchase_price: f64, terms: &LoanTerms) -> Self {
        let down_payment = purchase_price * terms.down_payment_rate;
        let loan_amount = purchase_price - down_payment;
        Self {
            down_payment,
            loan_amount,
            closing_costs: purchase_price * terms.closing_cost_rate,
            monthly_mortgage: monthly_payment(loan_amount, terms.annual_interest_rate, terms.term_years),
        }
    }

    pub fn cash_invested(&self) -> f64 {
        self.down_payment + self.closing_costs
    }
}

/// Everything that differs between rental models.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalModel {
    pub name: &'static str,
    pub kind: ScenarioKind,
    pub gross_rent: f64,
    pub vacancy_rate: f64,
    pub expense_rates: ExpenseRates,
    pub fixed_expenses: f64,
    pub fair_market_rent: Option<f64>,
    pub room_rents: Vec<f64>,
    pub risk_level: &'static str,
    pub management_intensity: &'static str,
}

/// Open market, voucher and rent-by-room outcomes for the subject.
pub fn rental_scenarios(
    subject: &SubjectProperty,
    estimated_value: f64,
    rents: &dyn FairMarketRents,
    cfg: &RentalConfig,
) -> Vec<Scenario> {
    let financing = RentalFinancing::new(subject.purchase_price(), &cfg.financing);

    [
        open_market_model(subject, rents, cfg),
        subsidized_model(subject, rents, cfg),
        by_room_model(subject, cfg),
    ]
    .into_iter()
    .map(|model| evaluate_rental(&model, subject.purchase_price(), estimated_value, &financing, cfg))
    .collect()
}

pub fn open_market_model(subject: &SubjectProperty, rents: &dyn FairMarketRents, cfg: &RentalConfig) -> RentalModel {
    let om = &cfg.open_market;
    let fmr = rents.fair_market_rent(subject.postal_code(), subject.beds());
    let by_size = subject.living_area() * om.rent_per_sqft;

    RentalModel {
        name: "Open Market Rental",
        kind: ScenarioKind::RentalOpenMarket,
        gross_rent: by_size.max(fmr * om.fmr_floor_ratio),
        vacancy_rate: om.vacancy_rate,
        expense_rates: cfg.expenses,
        fixed_expenses: 0.0,
        fair_market_rent: Some(fmr),
        room_rents: Vec::new(),
        risk_level: "Medium",
        management_intensity: "Medium",
    }
}

pub fn subsidized_model(subject: &SubjectProperty, rents: &dyn FairMarketRents, cfg: &RentalConfig) -> RentalModel {
    let fmr = rents.fair_market_rent(subject.postal_code(), subject.beds());

    RentalModel {
        name: "Section 8 Rental",
        kind: ScenarioKind::RentalSubsidized,
        gross_rent: fmr * cfg.subsidized.payment_standard_ratio,
        vacancy_rate: cfg.subsidized.vacancy_rate,
        expense_rates: cfg.expenses,
        fixed_expenses: 0.0,
        fair_market_rent: Some(fmr),
        room_rents: Vec::new(),
        risk_level: "Low",
        management_intensity: "Low-Medium",
    }
}

pub fn by_room_model(subject: &SubjectProperty, cfg: &RentalConfig) -> RentalModel {
    let rooms = &cfg.by_room;
    // One schedule slot per bedroom; bedrooms past the schedule earn nothing.
    let room_rents: Vec<f64> = rooms
        .room_rents
        .iter()
        .take(subject.beds() as usize)
        .copied()
        .collect();

    RentalModel {
        name: "Rent-by-Room",
        kind: ScenarioKind::RentalByRoom,
        gross_rent: room_rents.iter().sum(),
        vacancy_rate: rooms.vacancy_rate,
        expense_rates: ExpenseRates {
            management: rooms.management_rate,
            repairs: rooms.repairs_rate,
            ..cfg.expenses
        },
        fixed_expenses: rooms.monthly_utilities,
        fair_market_rent: None,
        room_rents,
        risk_level: "Medium-High",
        management_intensity: "High",
    }
}

/// Unrounded monthly income and debt figures for one rental model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentalIncome {
    pub effective_gross_income: f64,
    pub total_expenses: f64,
    pub noi: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    /// Annual cash flow over cash invested, as a percentage.
    pub cash_on_cash: f64,
}

impl RentalIncome {
    pub fn compute(model: &RentalModel, financing: &RentalFinancing) -> Self {
        let rent = model.gross_rent;
        let effective_gross_income = rent * (1.0 - model.vacancy_rate);
        let total_expenses = rent * model.expense_rates.total() + model.fixed_expenses;
        let noi = effective_gross_income - total_expenses;
        let monthly_cash_flow = noi - financing.monthly_mortgage;
        let annual_cash_flow = monthly_cash_flow * 12.0;

        Self {
            effective_gross_income,
            total_expenses,
            noi,
            monthly_cash_flow,
            annual_cash_flow,
            cash_on_cash: ratio(annual_cash_flow, financing.cash_invested()) * 100.0,
        }
    }
}

/// Runs one rental model through the shared income and debt math.
pub fn evaluate_rental(
    model: &RentalModel,
    purchase_price: f64,
    estimated_value: f64,
    financing: &RentalFinancing,
    cfg: &RentalConfig,
) -> Scenario {
    let rent = model.gross_rent;
    let rates = &model.expense_rates;

    let RentalIncome {
        effective_gross_income: egi,
        total_expenses,
        noi,
        monthly_cash_flow,
        annual_cash_flow,
        cash_on_cash,
    } = RentalIncome::compute(model, financing);
    let mortgage = financing.monthly_mortgage;
    let cash_invested = financing.cash_invested();

    let cash_on_cash = round_to(cash_on_cash, 1);
    debug!(
        scenario = model.name,
        gross_rent = rent,
        noi,
        mortgage,
        monthly_cash_flow,
        "evaluated rental"
    );

    Scenario {
        name: model.name.to_string(),
        kind: model.kind,
        cash_invested: whole(cash_invested),
        profit: whole(annual_cash_flow),
        roi: cash_on_cash,
        timeline: Timeline::Ongoing,
        risk_level: model.risk_level,
        management_intensity: model.management_intensity,
        details: ScenarioDetails::Rental(RentalDetails {
            monthly_rent: whole(rent),
            vacancy_rate: round_to(model.vacancy_rate * 100.0, 1),
            effective_gross_income: whole(egi),
            expenses: ExpenseBreakdown {
                management: whole(rent * rates.management),
                repairs: whole(rent * rates.repairs),
                capex: whole(rent * rates.capex),
                taxes: whole(rent * rates.taxes),
                insurance: whole(rent * rates.insurance),
                utilities: whole(model.fixed_expenses),
                total: whole(total_expenses),
            },
            noi: whole(noi),
            monthly_mortgage: whole(mortgage),
            monthly_cash_flow: whole(monthly_cash_flow),
            annual_cash_flow: whole(annual_cash_flow),
            cash_on_cash,
            cap_rate: percent(noi * 12.0, purchase_price),
            dscr: round_to(ratio(noi, mortgage), 2),
            meets_one_percent_rule: purchase_price > 0.0
                && rent >= purchase_price * cfg.one_percent_rule_ratio,
            fair_market_rent: model.fair_market_rent.map(whole),
            room_rents: model.room_rents.iter().copied().map(whole).collect(),
            estimated_value: whole(estimated_value),
        }),
    }
}
