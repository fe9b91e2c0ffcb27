mod formulation;
mod oil;
mod quantities;
mod recipe;

pub use formulation::FormulationResult;
pub use oil::OilType;
pub use quantities::{OilQuantities, MAX_OIL_GRAMS};
pub use recipe::Recipe;
