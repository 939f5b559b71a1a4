//! Training configuration: schema, loading, validation and CLI arguments

mod cli;
mod loader;
pub mod schema;
mod validate;

pub use cli::{
    parse_args, Cli, Command, GamesArgs, InfoArgs, InitArgs, OutputFormat, PreflightArgs,
    SetupArgs, ValidateArgs,
};
pub use loader::{config_path, discover_configs, load_config, save_config, CONFIG_FILE_NAME};
pub use schema::{
    Algo, AlgorithmKnobs, AlgorithmSection, Checkpointing, Device, EnvironmentSection,
    Evaluation, ExplorationSection, FeaturesExtractor, GameOverrides, Metadata, Policy,
    Preprocessing, ScheduleSection, TrainingConfig, Visualization,
};
pub use validate::{
    validate_mapping, validate_str, validate_value, ValidationError, ValidationErrors, DOCUMENT,
};
