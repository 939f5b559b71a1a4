//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! arcade-dqn setup --python python3.11
//! arcade-dqn check
//! arcade-dqn validate models/pong/config.yaml --detailed
//! arcade-dqn validate --all
//! arcade-dqn info models/pong/config.yaml --format json
//! arcade-dqn init space_invaders
//! arcade-dqn games
//! ```

mod core;
mod types;

pub use self::core::{
    parse_args, Cli, Command, GamesArgs, InfoArgs, InitArgs, PreflightArgs, SetupArgs,
    ValidateArgs,
};
pub use types::OutputFormat;
