//! Command-line interface definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::orders::report::ReportFormat;

pub mod commands;

#[derive(Debug, Parser)]
#[command(
    name = "almacen-cli",
    version,
    about = "Warehouse order dispatch: upload sheet orders to the delivery platform"
)]
pub struct Cli {
    /// Path to the config file (overrides ALMACEN_CONFIG and the default).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the order sheet and submit every row to the delivery platform
    Upload(UploadArgs),
    /// Routing parameter payloads
    #[command(subcommand)]
    Routing(RoutingCommands),
    /// Configuration file management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Parser)]
pub struct UploadArgs {
    /// Skip the interactive confirmation prompt.
    #[arg(long)]
    pub yes: bool,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only submit the first N rows.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Build and print the creation payloads without posting anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Show full response text in the table.
    #[arg(long)]
    pub wide: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum RoutingCommands {
    /// Assemble the routing-parameters JSON payload
    Build(RoutingBuildArgs),
}

#[derive(Debug, Parser)]
pub struct RoutingBuildArgs {
    /// Read the parameters from a TOML file instead of flags.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Delivery window as HH:MM-HH:MM; repeatable.
    #[arg(long = "window", value_name = "START-END")]
    pub windows: Vec<String>,

    #[arg(long, default_value_t = 1)]
    pub min_couriers: u32,

    #[arg(long, default_value_t = 10)]
    pub max_couriers: u32,

    #[arg(long, default_value_t = 20)]
    pub max_orders_per_courier: u32,

    /// Routing quality factor in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    pub quality: f64,

    /// Proximity factor in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    pub proximity_factor: f64,

    /// Claim id to exclude from routing; repeatable.
    #[arg(long = "excluded-claim", value_name = "ID")]
    pub excluded_claims: Vec<String>,

    /// Write the payload to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a starter config file
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the resolved config with secrets redacted
    Show,
    /// Print the config file path
    Path,
}
