//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use fcompat::domain::RuntimeKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fcompat")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Checks application-server feature and platform declarations")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (TOML, JSON or YAML); `fcompat.*` in the working directory otherwise
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Runtime flavor
    #[arg(long, global = true, default_value = "ol", value_parser = parse_kind)]
    pub runtime: RuntimeKind,

    /// Runtime version whose feature catalog is used, e.g. 25.0.0.3
    #[arg(short = 'r', long = "runtime-version", global = true, default_value = "25.0.0.3")]
    pub runtime_version: String,

    /// Local mirror of published catalogs; overrides the configuration
    #[arg(long, global = true)]
    pub mirror: Option<PathBuf>,

    /// Installed runtime root; overrides the configuration
    #[arg(long, global = true)]
    pub install_dir: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write rolling log files into this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate declared features, platforms and config elements
    Check {
        /// Declared feature (repeatable or comma-separated)
        #[arg(short, long = "feature", value_delimiter = ',')]
        features: Vec<String>,

        /// Declared platform (repeatable or comma-separated)
        #[arg(short, long = "platform", value_delimiter = ',')]
        platforms: Vec<String>,

        /// Config element used by the configuration (repeatable or comma-separated)
        #[arg(short, long = "element", value_delimiter = ',')]
        elements: Vec<String>,
    },
    /// List the platforms a feature supports
    Platforms {
        /// Versioned or versionless public feature name
        feature: String,
    },
}

fn parse_kind(raw: &str) -> Result<RuntimeKind, String> {
    raw.parse()
}
