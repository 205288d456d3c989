//! Command-line argument parsing for SMAP Finder
//!
//! This module defines the CLI structure using clap derive macros,
//! providing a user-friendly interface for catalog discovery.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// SMAP Finder - discover SMAP data files on the NSIDC archive
#[derive(Parser, Debug)]
#[command(
    name = "smap_finder",
    version,
    about = "Discover which SMAP data files exist on the NSIDC archive",
    long_about = "A discovery client for the NSIDC SMAP archive. Given a dataset identifier,
a version, and one or more dates, it reports which files exist in the remote
catalog without downloading any data."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files available for a dataset on one or more dates
    Find(FindArgs),
}

/// Output rendering for discovery results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// JSON array of row objects
    Json,
    /// Comma-separated values with a header line
    Csv,
}

/// Arguments for the find command
#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Dataset identifier (e.g. "SPL4SMGP")
    #[arg(short, long)]
    pub id: String,

    /// Dataset version (positive integer, e.g. 2 for the ".002" folder)
    #[arg(long = "version", value_name = "N")]
    pub version: u32,

    /// Date to search, as YYYY-MM-DD (repeat for multiple dates)
    #[arg(short, long = "date", value_name = "YYYY-MM-DD", required = true)]
    pub dates: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Process dates concurrently (output order is unchanged)
    #[arg(long)]
    pub concurrent: bool,

    /// Validate dataset and version once instead of once per date
    #[arg(long)]
    pub validate_once: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

impl FindArgs {
    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Dataset id must not be empty".to_string());
        }

        if self.version == 0 {
            return Err("Version must be a positive integer".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> FindArgs {
        FindArgs {
            id: "SPL4SMGP".to_string(),
            version: 2,
            dates: vec!["2015-03-31".to_string()],
            format: OutputFormat::Table,
            concurrent: false,
            validate_once: false,
        }
    }

    #[test]
    fn test_find_args_validation() {
        assert!(base_args().validate().is_ok());

        let empty_id = FindArgs {
            id: "  ".to_string(),
            ..base_args()
        };
        assert!(empty_id.validate().is_err());

        let zero_version = FindArgs {
            version: 0,
            ..base_args()
        };
        assert!(zero_version.validate().is_err());
    }

    #[test]
    fn test_cli_parses_repeated_dates() {
        let cli = Cli::try_parse_from([
            "smap_finder",
            "find",
            "--id",
            "SPL4SMGP",
            "--version",
            "2",
            "--date",
            "2015-03-31",
            "--date",
            "2015-04-01",
        ])
        .unwrap();

        let Commands::Find(args) = cli.command;
        assert_eq!(args.dates, ["2015-03-31", "2015-04-01"]);
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn test_log_level() {
        let cli_quiet = Cli {
            global: GlobalArgs {
                verbose: false,
                very_verbose: false,
                quiet: true,
                config: None,
            },
            command: Commands::Find(base_args()),
        };

        let cli_verbose = Cli {
            global: GlobalArgs {
                verbose: true,
                very_verbose: false,
                quiet: false,
                config: None,
            },
            command: Commands::Find(base_args()),
        };

        assert_eq!(cli_quiet.log_level(), tracing::Level::ERROR);
        assert_eq!(cli_verbose.log_level(), tracing::Level::INFO);
    }
}
