//! Compa CLI - compensation grading engine
//!
//! Usage: compa <COMMAND>
//!
//! Commands:
//!   init     Create compa.toml and the working worksheet
//!   set      Edit the working rate inputs
//!   bands    Compute and show bands for the working inputs
//!   save     Save the working inputs and bands as a draft scenario
//!   apply    Promote a draft scenario to current
//!   archive  Archive a draft scenario
//!   list     List scenarios
//!   show     Show one scenario in full
//!   current  Show the current scenario
//!   compare  Compare scenarios side by side

mod commands;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use compa::config::{self, Config, CONFIG_FILE};

use crate::commands::Context;

/// Compa - compensation grading engine
#[derive(Parser, Debug)]
#[command(name = "compa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    json: bool,

    /// Project root holding compa.toml (defaults to the working directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create compa.toml and the working worksheet
    Init {
        /// Overwrite an existing worksheet
        #[arg(long)]
        force: bool,
    },

    /// Edit the working rate inputs
    Set {
        #[command(subcommand)]
        field: SetField,
    },

    /// Compute and show bands for the working inputs
    Bands,

    /// Save the working inputs and bands as a draft scenario
    Save {
        /// Scenario name (auto-generated when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Promote a draft scenario to current
    Apply {
        /// Scenario id
        id: String,
    },

    /// Archive a draft scenario
    Archive {
        /// Scenario id
        id: String,
    },

    /// List scenarios
    List {
        /// Filter by status: draft, current or archived
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one scenario in full
    Show {
        /// Scenario id
        id: String,
    },

    /// Show the current scenario
    Current {
        /// Bands only (structure view)
        #[arg(long)]
        structure: bool,
    },

    /// Compare scenarios side by side (the current one is always included)
    Compare {
        /// Scenario ids to compare
        ids: Vec<String>,

        /// Compare only the given ids, without the current scenario
        #[arg(long)]
        no_current: bool,
    },
}

#[derive(Subcommand, Debug)]
enum SetField {
    /// Set or clear the base value anchoring the base grade
    Base {
        /// Positive value; omit together with --clear to unset
        value: Option<f64>,

        /// Unset the base value
        #[arg(long)]
        clear: bool,
    },

    /// Set or clear a grade's vertical step-up rate
    Vertical {
        /// Grade name from the configured order
        grade: String,

        /// Percentage in [0, 100]
        rate: Option<f64>,

        /// Unset this grade's rate
        #[arg(long)]
        clear: bool,
    },

    /// Set or clear one of the four horizontal intervals
    Horizontal {
        /// Interval key: LD_to_LQ, LQ_to_M, M_to_UQ or UQ_to_UD
        key: String,

        /// Percentage in [0, 100]
        rate: Option<f64>,

        /// Unset this interval
        #[arg(long)]
        clear: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("✗ {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = load_config(&root)?;
    let ctx = Context::new(config, root, cli.json);

    match cli.command {
        Commands::Init { force } => commands::init::cmd_init(&ctx, force),
        Commands::Set { field } => match field {
            SetField::Base { value, clear } => {
                commands::set::cmd_set_base(&ctx, entered(value, clear)?)
            }
            SetField::Vertical { grade, rate, clear } => {
                commands::set::cmd_set_vertical(&ctx, &grade, entered(rate, clear)?)
            }
            SetField::Horizontal { key, rate, clear } => {
                commands::set::cmd_set_horizontal(&ctx, &key, entered(rate, clear)?)
            }
        },
        Commands::Bands => commands::set::cmd_bands(&ctx),
        Commands::Save { name, description } => {
            commands::scenario::cmd_save(&ctx, name, description)
        }
        Commands::Apply { id } => commands::scenario::cmd_apply(&ctx, &id),
        Commands::Archive { id } => commands::scenario::cmd_archive(&ctx, &id),
        Commands::List { status } => commands::scenario::cmd_list(&ctx, status.as_deref()),
        Commands::Show { id } => commands::scenario::cmd_show(&ctx, &id),
        Commands::Current { structure } => commands::scenario::cmd_current(&ctx, structure),
        Commands::Compare { ids, no_current } => {
            commands::compare::cmd_compare(&ctx, &ids, !no_current)
        }
    }
}

/// Resolve a value/--clear pair into the setter argument.
fn entered(value: Option<f64>, clear: bool) -> Result<Option<f64>> {
    match (value, clear) {
        (Some(_), true) => bail!("give either a value or --clear, not both"),
        (None, false) => bail!("give a value, or --clear to unset"),
        (value, _) => Ok(value),
    }
}

fn load_config(root: &std::path::Path) -> Result<Config> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(config::load_or_default(Some(root)));
    }
    let (loaded, warnings) = Config::load_with_warnings(&path)?;
    for warning in &warnings {
        match warning.line {
            Some(line) => eprintln!(
                "⚠ unknown config key '{}' in {}:{}",
                warning.key,
                path.display(),
                line
            ),
            None => eprintln!(
                "⚠ unknown config key '{}' in {}",
                warning.key,
                path.display()
            ),
        }
        if let Some(suggestion) = &warning.suggestion {
            eprintln!("   did you mean '{}'?", suggestion);
        }
    }
    Ok(config::with_env_overrides(loaded))
}
