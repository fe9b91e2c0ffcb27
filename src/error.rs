use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoapError {
    #[error("Unknown oil: {name}{}", hint_suffix(.hint))]
    UnknownOil { name: String, hint: Option<String> },

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    #[error("Invalid batch size: {0} (must be a positive number of grams)")]
    InvalidBatchSize(f64),

    #[error("Invalid quantity for {oil}: {value} (must be a finite, non-negative number of grams)")]
    InvalidQuantity { oil: String, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SoapError {
    /// Unknown oil error without a spelling suggestion.
    pub fn unknown_oil(name: impl Into<String>) -> Self {
        SoapError::UnknownOil {
            name: name.into(),
            hint: None,
        }
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(h) => format!(" (did you mean '{}'?)", h),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SoapError>;
