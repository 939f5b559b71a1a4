//! CLI command implementations

mod check;
mod games;
mod info;
mod init;
mod setup;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command, PreflightArgs};
use crate::preflight::PreflightContext;
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Setup(args) => setup::run_setup(args, log_level),
        Command::Check(args) => check::run_check(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
        Command::Games(args) => games::run_games(args, log_level),
    }
}

/// Installer thresholds from the shared host-check flags
///
/// `default_workdir` is used when `--workdir` is not given.
fn preflight_context(args: &PreflightArgs, default_workdir: &Path) -> PreflightContext {
    let workdir = args.workdir.as_deref().unwrap_or(default_workdir);
    let mut context = PreflightContext::new()
        .with_interpreter(args.python.clone())
        .with_workdir(workdir);
    if let Some(mb) = args.min_disk_mb {
        context = context.with_min_disk_space_mb(mb);
    }
    if let Some(mb) = args.min_memory_mb {
        context = context.with_min_memory_mb(mb);
    }
    context
}
