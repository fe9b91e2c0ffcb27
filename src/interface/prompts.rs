use dialoguer::{Confirm, Input, Select};

use crate::engine::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use crate::error::{Result, SoapError};
use crate::models::{OilQuantities, OilType};
use crate::reference::{get_sap_value, list_oil_types, RecipeCatalog};

/// One step of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    SetBatchSize,
    EditOil,
    LoadRecipe,
    Recalculate,
    Reset,
    Quit,
}

impl SessionAction {
    const MENU: [(SessionAction, &'static str); 6] = [
        (SessionAction::EditOil, "Edit an oil quantity"),
        (SessionAction::LoadRecipe, "Load a recipe at the current batch size"),
        (SessionAction::SetBatchSize, "Change batch size"),
        (SessionAction::Recalculate, "Recalculate"),
        (SessionAction::Reset, "Clear all oils"),
        (SessionAction::Quit, "Quit"),
    ];
}

/// Ask what to do next.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::MENU.iter().map(|(_, l)| *l).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SessionAction::MENU
        .get(selection)
        .map(|(a, _)| *a)
        .unwrap_or(SessionAction::Quit))
}

/// Prompt for a batch size in grams.
pub fn prompt_batch_size(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Batch size in grams ({:.0}-{:.0})",
            MIN_BATCH_SIZE, MAX_BATCH_SIZE
        ))
        .default(format!("{:.0}", current))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| SoapError::InvalidInput("Invalid number".to_string()))
}

/// Pick an oil, showing its SAP value and current amount.
pub fn prompt_oil(current: &OilQuantities) -> Result<OilType> {
    let oils = list_oil_types();
    let options: Vec<String> = oils
        .iter()
        .map(|oil| {
            format!(
                "{:<14} SAP {:.3}  {:>8.2} g",
                oil.label(),
                get_sap_value(*oil),
                current.get(*oil)
            )
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Which oil?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(oils[selection])
}

/// Raw grams text for an oil. Left unparsed: the session applies the
/// permissive parse.
pub fn prompt_grams(oil: OilType) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("{} (grams, empty for none)", oil.label()))
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Pick a recipe id, or `None` to go back.
pub fn prompt_recipe(catalog: &RecipeCatalog) -> Result<Option<String>> {
    if catalog.is_empty() {
        println!("No recipes available.");
        return Ok(None);
    }

    let mut options: Vec<String> = catalog
        .list()
        .iter()
        .map(|r| format!("{} - {}", r.id, r.name))
        .collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Which recipe?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(catalog.list().get(selection).map(|r| r.id.clone()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
