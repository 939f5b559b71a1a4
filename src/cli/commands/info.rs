//! Info command implementation

use super::validate::{format_detailed_summary, format_unknown_keys};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, InfoArgs, OutputFormat, TrainingConfig};

/// Render a configuration in a machine-readable format
pub fn render(config: &TrainingConfig, format: OutputFormat) -> Result<Option<String>, String> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .map(Some)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => serde_yaml::to_string(config)
            .map(Some)
            .map_err(|e| format!("YAML serialization error: {e}")),
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match render(&config, args.format)? {
        Some(output) => println!("{output}"),
        None => {
            log(level, LogLevel::Normal, "Configuration Info:");
            log(level, LogLevel::Normal, &format_detailed_summary(&config));
            if let Some(description) = &config.metadata.description {
                log(level, LogLevel::Normal, &format!("\n  Description: {description}"));
            }
            if let Some(notice) = format_unknown_keys(&config) {
                log(level, LogLevel::Normal, &notice);
            }
        }
    }

    Ok(())
}
