//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::preflight::DEFAULT_INTERPRETER;
use crate::venv::DEFAULT_VENV_DIR;

/// Atari DQN training workspace tooling
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "arcade-dqn")]
#[command(version)]
#[command(about = "Host preflight, environment setup and config validation for Atari DQN runs")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Check host preconditions, then create the virtual environment
    Setup(SetupArgs),

    /// Run every host precondition check and print a report
    Check(PreflightArgs),

    /// Validate one or more training configurations
    Validate(ValidateArgs),

    /// Display a validated configuration
    Info(InfoArgs),

    /// Write a game's default configuration
    Init(InitArgs),

    /// List the supported games
    Games(GamesArgs),
}

/// Arguments for the setup command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SetupArgs {
    #[command(flatten)]
    pub preflight: PreflightArgs,

    /// Directory for the virtual environment
    #[arg(long, default_value = DEFAULT_VENV_DIR)]
    pub venv_dir: PathBuf,
}

/// Host check arguments shared by `setup` and `check`
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PreflightArgs {
    /// Python interpreter to probe
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    pub python: String,

    /// Directory whose filesystem must have free space
    /// (setup: the venv's parent directory; check: the current directory)
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Minimum free disk space in MB
    #[arg(long)]
    pub min_disk_mb: Option<u64>,

    /// Minimum total memory in MB
    #[arg(long)]
    pub min_memory_mb: Option<u64>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Paths to YAML configuration files
    #[arg(value_name = "CONFIG", required_unless_present = "all")]
    pub configs: Vec<PathBuf>,

    /// Validate every models/<name>/config.yaml
    #[arg(short, long, conflicts_with = "configs")]
    pub all: bool,

    /// Directory holding per-model configurations
    #[arg(long, default_value = "models")]
    pub models_dir: PathBuf,

    /// Show detailed configuration summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Game name or environment id
    #[arg(value_name = "GAME")]
    pub game: String,

    /// Directory holding per-model configurations
    #[arg(long, default_value = "models")]
    pub models_dir: PathBuf,

    /// Overwrite an existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the games command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GamesArgs {
    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
