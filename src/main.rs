use clap::Parser;
use tracing::level_filters::LevelFilter;

use soap_formulator_rs::cli::{Cli, Command, OutputFormat};
use soap_formulator_rs::engine::{
    apply_oil_entry, compute_formulation, compute_formulation_with_fallback, scale_recipe,
};
use soap_formulator_rs::error::Result;
use soap_formulator_rs::interface::{
    display_formulation, print_formulation, print_oils, print_recipes, prompt_action,
    prompt_batch_size, prompt_grams, prompt_oil, prompt_recipe, prompt_yes_no, SessionAction,
};
use soap_formulator_rs::models::OilQuantities;
use soap_formulator_rs::reference::{list_oil_types, RecipeCatalog};
use soap_formulator_rs::state::{FormulationSession, SessionConfig};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.recipes.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc {
            oils,
            batch_size,
            fallback,
        } => cmd_calc(&oils, batch_size, fallback, cli.format),
        Command::Scale { recipe, batch_size } => {
            cmd_scale(&catalog, &recipe, batch_size, cli.format)
        }
        Command::Recipes { detail } => print_recipes(&catalog, detail, cli.format),
        Command::Oils => print_oils(cli.format),
        Command::Interactive {
            fallback,
            no_batch_recalc,
        } => cmd_interactive(
            &catalog,
            SessionConfig {
                fallback,
                recalc_on_batch_change: !no_batch_recalc,
            },
        ),
    }
}

/// Built-in recipes plus any from `--recipes`.
fn load_catalog(extra: Option<&str>) -> Result<RecipeCatalog> {
    let builtin = RecipeCatalog::builtin();
    match extra {
        Some(path) => builtin.with_extra(RecipeCatalog::load(path)?),
        None => Ok(builtin.clone()),
    }
}

/// Compute lye and water for oils given as NAME=GRAMS.
fn cmd_calc(
    entries: &[String],
    batch_size: f64,
    fallback: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut oils = OilQuantities::zeroed();
    for entry in entries {
        oils = apply_oil_entry(&oils, entry)?;
    }

    let result = if fallback {
        compute_formulation_with_fallback(&oils, batch_size)
    } else {
        compute_formulation(&oils)
    };

    print_formulation(&oils, batch_size, &result, format)
}

/// Scale a recipe and compute its formulation.
fn cmd_scale(
    catalog: &RecipeCatalog,
    id: &str,
    batch_size: f64,
    format: OutputFormat,
) -> Result<()> {
    let recipe = catalog.get(id)?;
    let oils = scale_recipe(recipe, batch_size)?;
    let result = compute_formulation(&oils);

    if format == OutputFormat::Table {
        println!("{} ({})", recipe.name, recipe.id);
    }
    print_formulation(&oils, batch_size, &result, format)
}

/// Menu-driven session: edit oils, load recipes, change batch size.
fn cmd_interactive(catalog: &RecipeCatalog, config: SessionConfig) -> Result<()> {
    let mut session = FormulationSession::new(config);

    println!(
        "Soap calculator ({} recipes, {} oils)",
        catalog.len(),
        list_oil_types().len()
    );
    show(&session);

    loop {
        match prompt_action()? {
            SessionAction::EditOil => {
                let oil = prompt_oil(session.oils())?;
                let raw = prompt_grams(oil)?;
                session.update_oil(oil, &raw);
            }
            SessionAction::LoadRecipe => {
                let Some(id) = prompt_recipe(catalog)? else {
                    continue;
                };
                if let Err(e) = session.load_recipe(catalog, &id) {
                    eprintln!("Could not load '{}': {}", id, e);
                    continue;
                }
            }
            SessionAction::SetBatchSize => {
                let requested = match prompt_batch_size(session.batch_size()) {
                    Ok(n) => n,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                };
                match session.set_batch_size(requested) {
                    Ok(stored) if stored != requested => {
                        println!("Batch size set to {:.0} g", stored);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                }
            }
            SessionAction::Recalculate => {
                session.recalculate();
            }
            SessionAction::Reset => {
                if prompt_yes_no("Clear all oil quantities?", false)? {
                    session.reset();
                }
            }
            SessionAction::Quit => break,
        }
        show(&session);
    }

    Ok(())
}

fn show(session: &FormulationSession) {
    if let Some(id) = session.active_recipe() {
        println!("Recipe: {}", id);
    }
    display_formulation(session.oils(), session.batch_size(), session.results());
}
