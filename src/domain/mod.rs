pub mod money;
pub mod property;
pub mod scenario;

pub use property::{Comp, PropertyInput, SubjectProperty};
pub use scenario::{
    ExpenseBreakdown, FlipDetails, RentalDetails, Scenario, ScenarioDetails, ScenarioKind, Timeline,
    WholesaleDetails,
};
