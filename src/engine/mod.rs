pub mod constants;
pub mod formulation;
pub mod input;
pub mod scaling;

pub use constants::*;
pub use formulation::{compute_formulation, compute_formulation_with_fallback, lye_for, water_for};
pub use input::{apply_oil_entry, parse_quantity, update_oil};
pub use scaling::scale_recipe;
