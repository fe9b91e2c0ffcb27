pub mod recipes;
pub mod sap;

pub use recipes::{get_recipe, list_recipes, RecipeCatalog};
pub use sap::{get_sap_value, list_oil_types, parse_oil, sap_value_for, suggest_oil};
