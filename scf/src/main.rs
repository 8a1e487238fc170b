// scf/src/main.rs

mod cli;
mod commands;
mod render;

use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{Session, controls, frameworks, mapping, status};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG=debug scf search ... pour voir les détails.
    // Logs go to stderr so that --format json stays parseable.
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.global.verbose {
        EnvFilter::new("scf=debug,scf_core=debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let session = Session::open(&cli.global)?;

    match cli.command {
        // --- USE CASE: STATUS ---
        Commands::Info => status::info(&session),
        Commands::Health => status::health(&session),

        // --- USE CASE: CONTROLS ---
        Commands::Get {
            control_id,
            no_mappings,
        } => controls::get(&session, &control_id, !no_mappings),
        Commands::Search {
            query,
            frameworks,
            limit,
        } => controls::search(&session, &query, &frameworks, limit),

        // --- USE CASE: FRAMEWORKS ---
        Commands::Frameworks { category, grouped } => {
            frameworks::list(&session, category.as_deref(), grouped)
        }
        Commands::FrameworkControls {
            framework,
            descriptions,
        } => frameworks::controls(&session, &framework, descriptions),

        // --- USE CASE: CROSSWALK ---
        Commands::Map {
            source,
            target,
            source_control,
        } => mapping::map(&session, &source, &target, source_control.as_deref()),
        Commands::Resolve {
            framework,
            native_control,
        } => mapping::resolve(&session, &framework, &native_control),
    }
}
