mod flip;
mod ranker;
mod rental;

pub use flip::{flip_scenario, flip_scenarios, wholesale_scenario};
pub use ranker::RankedScenarios;
pub use rental::{
    by_room_model, evaluate_rental, monthly_payment, open_market_model, rental_scenarios, subsidized_model,
    RentalFinancing, RentalModel,
};
