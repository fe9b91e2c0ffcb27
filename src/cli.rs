use clap::{Parser, Subcommand, ValueEnum};

use crate::engine::DEFAULT_BATCH_SIZE;

/// soapcalc — cold-process soap calculator: lye and water from SAP values,
/// recipe scaling by batch size.
#[derive(Parser, Debug)]
#[command(name = "soapcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Extra recipes (JSON array) appended to the built-in catalog.
    #[arg(short, long, global = true)]
    pub recipes: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute lye and water for a set of oils.
    Calc {
        /// Oil weight as NAME=GRAMS (repeatable), e.g. --oil olive=200.
        #[arg(short, long = "oil", value_name = "NAME=GRAMS")]
        oils: Vec<String>,

        /// Batch size in grams, used when no oils are given and --fallback is set.
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: f64,

        /// Estimate from the batch size (as olive oil) when no oils are given.
        #[arg(long)]
        fallback: bool,
    },

    /// Scale a recipe to a batch size and compute its formulation.
    Scale {
        /// Recipe id, e.g. lotus.
        recipe: String,

        /// Target oil weight in grams.
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: f64,
    },

    /// List available recipes.
    Recipes {
        /// Show herbs, essential oils and process notes.
        #[arg(long)]
        detail: bool,
    },

    /// List oils and their SAP values.
    Oils,

    /// Interactive calculator session.
    Interactive {
        /// Estimate from the batch size while no oils are entered.
        #[arg(long)]
        fallback: bool,

        /// Only recompute on oil edits and recipe loads, not on batch size changes.
        #[arg(long)]
        no_batch_recalc: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive {
            fallback: false,
            no_batch_recalc: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc_with_oils() {
        let cli = Cli::parse_from([
            "soapcalc", "calc", "--oil", "olive=200", "--oil", "coconut=100",
        ]);
        match cli.command {
            Some(Command::Calc { oils, batch_size, fallback }) => {
                assert_eq!(oils, ["olive=200", "coconut=100"]);
                assert_eq!(batch_size, DEFAULT_BATCH_SIZE);
                assert!(!fallback);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::parse_from([
            "soapcalc", "scale", "lotus", "-b", "250", "--format", "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Some(Command::Scale { batch_size, .. }) if batch_size == 250.0
        ));
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::parse_from(["soapcalc", "-vv", "oils"]);
        assert_eq!(cli.verbose, 2);
    }
}
