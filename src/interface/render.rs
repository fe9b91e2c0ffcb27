use std::io::{self, Write};

use serde_json::json;

use crate::cli::OutputFormat;
use crate::engine::WATER_TO_OIL_RATIO;
use crate::error::Result;
use crate::models::{FormulationResult, OilQuantities, Recipe};
use crate::reference::{get_sap_value, list_oil_types, RecipeCatalog};

/// JSON document for a formulation.
pub fn formulation_json(
    oils: &OilQuantities,
    batch_size: f64,
    result: &FormulationResult,
) -> serde_json::Value {
    json!({
        "batchSize": batch_size,
        "oils": oils,
        "results": result,
    })
}

/// CSV rows: one per used oil, then the three totals.
pub fn write_formulation_csv<W: Write>(
    out: W,
    oils: &OilQuantities,
    result: &FormulationResult,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["item", "sap", "grams"])?;

    for (oil, grams) in oils.used() {
        wtr.write_record([
            oil.key().to_string(),
            format!("{:.3}", get_sap_value(oil)),
            format!("{:.2}", grams),
        ])?;
    }

    for (item, grams) in [
        ("total_oils", result.total_oils),
        ("lye", result.lye),
        ("water", result.water),
    ] {
        wtr.write_record([item.to_string(), String::new(), format!("{:.2}", grams)])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print a formulation in the requested format.
pub fn print_formulation(
    oils: &OilQuantities,
    batch_size: f64,
    result: &FormulationResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let doc = formulation_json(oils, batch_size, result);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Csv => write_formulation_csv(io::stdout().lock(), oils, result)?,
        OutputFormat::Table => display_formulation(oils, batch_size, result),
    }
    Ok(())
}

/// Human-readable formulation table.
pub fn display_formulation(oils: &OilQuantities, batch_size: f64, result: &FormulationResult) {
    println!();
    println!("=== Formulation (batch {:.0} g) ===", batch_size);
    println!();

    let width = list_oil_types()
        .iter()
        .map(|o| o.label().len())
        .max()
        .unwrap_or(12);

    if oils.is_empty() {
        println!("  (no oils entered)");
    } else {
        for (oil, grams) in oils.used() {
            println!(
                "  {:<width$}  {:>8.2} g   SAP {:.3}",
                oil.label(),
                grams,
                get_sap_value(oil),
                width = width
            );
        }
    }

    println!();
    println!("--- Results ---");
    println!("Total oils: {:.2} g", result.total_oils);
    println!("Lye (NaOH): {:.2} g", result.lye);
    println!(
        "Water:      {:.2} g  ({:.3} x oils)",
        result.water, WATER_TO_OIL_RATIO
    );
    println!();
    println!("Always add lye to water, never water to lye.");
    println!();
}

/// Print the oil table in the requested format.
pub fn print_oils(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let doc: Vec<_> = list_oil_types()
                .iter()
                .map(|oil| json!({ "oil": oil, "label": oil.label(), "sap": get_sap_value(*oil) }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout().lock());
            wtr.write_record(["oil", "label", "sap"])?;
            for oil in list_oil_types() {
                wtr.write_record([
                    oil.key().to_string(),
                    oil.label().to_string(),
                    format!("{:.3}", get_sap_value(*oil)),
                ])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table => {
            println!();
            println!("=== Oils ({} items) ===", list_oil_types().len());
            println!();
            for oil in list_oil_types() {
                println!("  {:<10} {:<14} SAP {:.3}", oil.key(), oil.label(), get_sap_value(*oil));
            }
            println!();
        }
    }
    Ok(())
}

/// Print the recipe catalog in the requested format.
pub fn print_recipes(catalog: &RecipeCatalog, detail: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(catalog.list())?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout().lock());
            wtr.write_record(["id", "name", "oil", "reference_grams", "share"])?;
            for recipe in catalog.list() {
                for (oil, grams) in &recipe.oils {
                    wtr.write_record([
                        recipe.id.clone(),
                        recipe.name.clone(),
                        oil.key().to_string(),
                        format!("{:.2}", grams),
                        format!("{:.4}", recipe.proportion(*oil)),
                    ])?;
                }
            }
            wtr.flush()?;
        }
        OutputFormat::Table => {
            if catalog.is_empty() {
                println!("Recipes: (none)");
                return Ok(());
            }
            println!();
            println!("=== Recipes ({} items) ===", catalog.len());
            for recipe in catalog.list() {
                if detail {
                    display_recipe_card(recipe);
                } else {
                    println!("  {:<12} {}", recipe.id, recipe.name);
                }
            }
            println!();
        }
    }
    Ok(())
}

/// Full recipe card with reference proportions and display notes.
pub fn display_recipe_card(recipe: &Recipe) {
    println!();
    println!("[{}] {}", recipe.id, recipe.name);
    if !recipe.description.is_empty() {
        println!("  {}", recipe.description);
    }
    for (oil, grams) in &recipe.oils {
        println!(
            "    {:<14} {:>7.1} g  ({:>5.1}%)",
            oil.label(),
            grams,
            recipe.proportion(*oil) * 100.0
        );
    }
    let notes = [
        ("Herbs", &recipe.herbs),
        ("Essential oils", &recipe.essential_oil),
        ("Chakra", &recipe.chakra),
        ("Element", &recipe.element),
        ("Meditation", &recipe.meditation),
        ("Process", &recipe.process),
    ];
    for (label, text) in notes {
        if !text.is_empty() {
            println!("  {}: {}", label, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_formulation;
    use crate::models::OilType;

    fn blend() -> OilQuantities {
        OilQuantities::zeroed()
            .with(OilType::Olive, 200.0)
            .unwrap()
            .with(OilType::Coconut, 100.0)
            .unwrap()
    }

    #[test]
    fn test_csv_lists_used_oils_and_totals() {
        let oils = blend();
        let result = compute_formulation(&oils);
        let mut buf = Vec::new();
        write_formulation_csv(&mut buf, &oils, &result).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "item,sap,grams");
        assert_eq!(lines[1], "olive,0.134,200.00");
        assert_eq!(lines[2], "coconut,0.191,100.00");
        assert_eq!(lines[3], "total_oils,,300.00");
        assert_eq!(lines[4], "lye,,45.90");
        assert_eq!(lines[5], "water,,112.50");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_json_uses_camel_case_results() {
        let oils = blend();
        let result = compute_formulation(&oils);
        let doc = formulation_json(&oils, 500.0, &result);

        assert_eq!(doc["results"]["totalOils"], 300.0);
        assert_eq!(doc["results"]["lye"], 45.9);
        assert_eq!(doc["oils"]["neem"], 0.0);
        assert_eq!(doc["batchSize"], 500.0);
    }
}
