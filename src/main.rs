//! arcade-dqn CLI
//!
//! # Usage
//!
//! ```bash
//! # Check the host, then create ./venv
//! arcade-dqn setup
//!
//! # Report every host check without creating anything
//! arcade-dqn check --python python3.11
//!
//! # Validate shipped model configurations
//! arcade-dqn validate --all
//!
//! # Start a new model directory from a game's defaults
//! arcade-dqn init river_raid
//! ```

use arcade_dqn::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
