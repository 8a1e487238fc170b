// scf/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scf")]
#[command(about = "Query the Secure Controls Framework catalog and its framework crosswalks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Directory holding scf.yaml (relative data dirs resolve against it)
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    /// Dataset directory, overrides the configuration file and SCF_DATA_DIR
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose logging (debug level)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dataset statistics and the most covered frameworks
    Info,

    /// Liveness report with dataset counts
    Health,

    /// Shows one control by SCF id (ex: "GOV-01")
    Get {
        control_id: String,

        /// Hide the framework mappings
        #[arg(long)]
        no_mappings: bool,
    },

    /// Case-insensitive substring search over control names and descriptions
    Search {
        query: String,

        /// Keep only controls mapped to this framework (repeatable)
        #[arg(long = "framework", short = 'f')]
        frameworks: Vec<String>,

        /// Maximum number of results
        #[arg(long, short, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Lists frameworks with mapped controls, most covered first
    Frameworks {
        /// Restrict to one category (ex: "privacy")
        #[arg(long, short)]
        category: Option<String>,

        /// Group the listing by category instead
        #[arg(long, conflicts_with = "category")]
        grouped: bool,
    },

    /// Lists the SCF controls mapped to a framework, grouped by domain
    FrameworkControls {
        framework: String,

        /// Include control descriptions
        #[arg(long)]
        descriptions: bool,
    },

    /// Maps a source framework to a target framework through shared SCF controls
    Map {
        source: String,
        target: String,

        /// Only SCF controls mapped to this native source control id
        #[arg(long)]
        source_control: Option<String>,
    },

    /// Finds the SCF controls behind a framework-native control id
    Resolve {
        framework: String,
        native_control: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_defaults() -> Result<()> {
        let args = Cli::parse_from(["scf", "info"]);
        assert_eq!(args.global.format, OutputFormat::Text);
        assert_eq!(args.global.config_dir.to_string_lossy(), ".");
        assert!(args.global.data_dir.is_none());
        match args.command {
            Commands::Info => Ok(()),
            _ => bail!("Expected Info command"),
        }
    }

    #[test]
    fn test_cli_parse_search() -> Result<()> {
        let args = Cli::parse_from([
            "scf",
            "search",
            "encryption",
            "-f",
            "dora",
            "--framework",
            "gdpr",
            "--limit",
            "-1",
            "--format",
            "json",
        ]);
        assert_eq!(args.global.format, OutputFormat::Json);
        match args.command {
            Commands::Search {
                query,
                frameworks,
                limit,
            } => {
                assert_eq!(query, "encryption");
                assert_eq!(frameworks, vec!["dora", "gdpr"]);
                assert_eq!(limit, Some(-1));
                Ok(())
            }
            _ => bail!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_parse_map() -> Result<()> {
        let args = Cli::parse_from([
            "scf",
            "--data-dir",
            "/srv/scf",
            "map",
            "iso_27001_2022",
            "dora",
            "--source-control",
            "5.1",
        ]);
        assert_eq!(
            args.global.data_dir.as_deref().map(|p| p.to_string_lossy().to_string()),
            Some("/srv/scf".to_string())
        );
        match args.command {
            Commands::Map {
                source,
                target,
                source_control,
            } => {
                assert_eq!(source, "iso_27001_2022");
                assert_eq!(target, "dora");
                assert_eq!(source_control.as_deref(), Some("5.1"));
                Ok(())
            }
            _ => bail!("Expected Map command"),
        }
    }

    #[test]
    fn test_cli_rejects_grouped_with_category() {
        let res = Cli::try_parse_from(["scf", "frameworks", "--grouped", "--category", "privacy"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let res = Cli::try_parse_from(["scf", "info", "--format", "xml"]);
        assert!(res.is_err());
    }
}
