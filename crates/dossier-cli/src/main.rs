//! CLI frontend for the Dossier character builder.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dossier_engine::{DEFAULT_ABILITY_BASE, DEFAULT_BASE_POINTS, DEFAULT_MAX_FACTION_VALUE};

#[derive(Parser)]
#[command(
    name = "dossier",
    about = "Dossier — build a character sheet on a point budget",
    version,
    propagate_version = true
)]
struct Cli {
    /// Catalog JSON file (default: built-in content)
    #[arg(long, global = true, env = "DOSSIER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Points available before any choice
    #[arg(long, global = true, default_value_t = DEFAULT_BASE_POINTS, allow_negative_numbers = true)]
    base_points: i32,

    /// Base score of every ability
    #[arg(long, global = true, default_value_t = DEFAULT_ABILITY_BASE, allow_negative_numbers = true)]
    ability_base: i32,

    /// Faction standings are clamped to [-n, n]
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_FACTION_VALUE)]
    max_faction: i32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog content of one kind
    List {
        /// species, professions, traits, planets, doctrines, methods,
        /// red-lines, factions, or cards
        kind: String,

        /// Filter traits by name, description, or tag (rejected for other kinds)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show detailed information about a catalog record
    Show {
        /// Record id (e.g. droid, analytique, mission_sis)
        id: String,
    },

    /// Validate the catalog and report errors and warnings
    Check,

    /// Build a selection and print the derived character sheet
    Sheet {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Export a dossier as JSON or Markdown
    Export {
        /// Output format: json, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        selection: SelectionArgs,
    },
}

/// Choices and identity fields shared by `sheet` and `export`.
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Species id
    #[arg(long)]
    pub species: Option<String>,

    /// Profession id
    #[arg(long)]
    pub profession: Option<String>,

    /// Trait id, repeatable; applied in order
    #[arg(long = "trait", value_name = "ID")]
    pub traits: Vec<String>,

    /// Planet of origin id
    #[arg(long)]
    pub planet: Option<String>,

    /// Doctrine id
    #[arg(long)]
    pub doctrine: Option<String>,

    /// Method id
    #[arg(long)]
    pub method: Option<String>,

    /// Red line id, repeatable
    #[arg(long = "red-line", value_name = "ID")]
    pub red_lines: Vec<String>,

    /// Allegiance card id, repeatable; drafted in order
    #[arg(long = "card", value_name = "ID")]
    pub cards: Vec<String>,

    /// Code name
    #[arg(long, default_value = "")]
    pub codename: String,

    /// One-line concept
    #[arg(long, default_value = "")]
    pub concept: String,

    /// Free notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Camp: République, Empire Sith, Indépendant, Double agent
    #[arg(long)]
    pub camp: Option<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = dossier_engine::EngineConfig::default()
        .with_base_points(cli.base_points)
        .with_ability_base(cli.ability_base)
        .with_max_faction_value(cli.max_faction);

    let result = commands::load_catalog(cli.catalog.as_deref()).and_then(|catalog| {
        match cli.command {
            Commands::List { kind, search } => {
                commands::list::run(&catalog, &kind, search.as_deref())
            }
            Commands::Show { id } => commands::show::run(&catalog, &id),
            Commands::Check => commands::check::run(&catalog),
            Commands::Sheet { selection } => commands::sheet::run(&catalog, &config, &selection),
            Commands::Export {
                format,
                output,
                selection,
            } => commands::export::run(&catalog, &config, &selection, &format, output.as_deref()),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
