pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod reference;
pub mod state;

pub use error::{Result, SoapError};
pub use models::{FormulationResult, OilQuantities, OilType, Recipe};
