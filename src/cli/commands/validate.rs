//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{discover_configs, load_config, TrainingConfig, ValidateArgs};
use crate::games;
use crate::Error;
use std::path::PathBuf;

/// Format algorithm and policy settings as a string
pub fn format_algorithm_info(config: &TrainingConfig) -> String {
    let algo = &config.algorithm;
    let mut lines = vec![
        format!("  Algorithm: {}", algo.algo),
        format!("  Policy: {}", algo.policy),
    ];
    if let Some(extractor) = algo.features_extractor {
        lines.push(format!("  Features extractor: {extractor}"));
    }
    if let Some(dim) = algo.features_dim {
        lines.push(format!("  Features dim: {dim}"));
    }
    lines.join("\n")
}

/// Format environment settings as a string
pub fn format_environment_info(config: &TrainingConfig) -> String {
    let env = &config.environment;
    let game = games::find_by_env(&env.env)
        .map(|g| format!(" ({})", g.name))
        .unwrap_or_default();
    [
        format!("  Environment: {}{game}", env.env),
        format!("  Parallel envs: {}", env.n_envs),
        format!("  Device: {}", env.device),
    ]
    .join("\n")
}

/// Format the training schedule as a string
pub fn format_schedule_info(config: &TrainingConfig) -> String {
    let schedule = &config.schedule;
    [
        format!("  Total timesteps: {}", schedule.total_timesteps),
        format!("  Learning rate: {}", schedule.learning_rate),
        format!("  Buffer size: {}", schedule.buffer_size),
        format!("  Learning starts: {}", schedule.learning_starts),
        format!("  Batch size: {}", schedule.batch_size),
        format!(
            "  Train freq: {} (gradient steps: {})",
            schedule.train_freq, schedule.gradient_steps
        ),
    ]
    .join("\n")
}

/// Format exploration and DQN knobs as a string
pub fn format_exploration_info(config: &TrainingConfig) -> String {
    let eps = &config.exploration;
    let knobs = &config.knobs;
    let mut lines = vec![
        format!(
            "  Epsilon: {} -> {} over {} of training",
            eps.exploration_initial_eps, eps.exploration_final_eps, eps.exploration_fraction
        ),
        format!("  Gamma: {}", knobs.gamma),
        format!("  Target update interval: {}", knobs.target_update_interval),
    ];
    let enabled: Vec<&str> = [
        ("double_q", knobs.double_q),
        ("dueling", knobs.dueling),
        ("prioritized_replay", knobs.prioritized_replay),
        ("noisy_nets", knobs.noisy_nets),
    ]
    .into_iter()
    .filter_map(|(name, flag)| (flag == Some(true)).then_some(name))
    .collect();
    if !enabled.is_empty() {
        lines.push(format!("  Extensions: {}", enabled.join(", ")));
    }
    lines.join("\n")
}

/// Format checkpointing settings, if any are set
pub fn format_checkpoint_info(config: &TrainingConfig) -> Option<String> {
    let ckpt = &config.checkpointing;
    if ckpt.save_freq.is_none() && ckpt.checkpoint_path.is_none() {
        return None;
    }
    let mut lines = vec!["  Checkpointing:".to_string()];
    if let Some(path) = &ckpt.checkpoint_path {
        lines.push(format!("    Path: {}", path.display()));
    }
    if let Some(freq) = ckpt.save_freq {
        lines.push(format!("    Save every: {freq} steps"));
    }
    if let Some(keep) = ckpt.keep_checkpoints {
        lines.push(format!("    Keep: {keep}"));
    }
    Some(lines.join("\n"))
}

/// Notice listing keys passed through without validation
pub fn format_unknown_keys(config: &TrainingConfig) -> Option<String> {
    let keys = config.unknown_keys();
    (!keys.is_empty()).then(|| {
        format!(
            "  ⚠ Unrecognized keys (passed through unchecked): {}",
            keys.join(", ")
        )
    })
}

/// Detailed configuration summary
pub fn format_detailed_summary(config: &TrainingConfig) -> String {
    let mut sections = vec![
        "\nConfiguration Summary:".to_string(),
        format_algorithm_info(config),
        String::new(),
        format_environment_info(config),
        String::new(),
        format_schedule_info(config),
        String::new(),
        format_exploration_info(config),
    ];
    if let Some(ckpt) = format_checkpoint_info(config) {
        sections.push(String::new());
        sections.push(ckpt);
    }
    sections.join("\n")
}

/// Indented failure report for one configuration
fn format_failure(err: &Error) -> String {
    match err {
        Error::Validation(errors) => errors
            .iter()
            .map(|e| format!("    - {e}"))
            .collect::<Vec<_>>()
            .join("\n"),
        other => format!("    - {other}"),
    }
}

fn collect_targets(args: &ValidateArgs) -> Result<Vec<PathBuf>, String> {
    if !args.all {
        return Ok(args.configs.clone());
    }
    let found = discover_configs(&args.models_dir).map_err(|e| format!("Config error: {e}"))?;
    if found.is_empty() {
        return Err(format!(
            "No configurations found under {}",
            args.models_dir.display()
        ));
    }
    Ok(found)
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let targets = collect_targets(&args)?;
    let mut failed = 0usize;

    for path in &targets {
        log(
            level,
            LogLevel::Normal,
            &format!("Validating config: {}", path.display()),
        );

        match load_config(path) {
            Ok(config) => {
                log(level, LogLevel::Normal, "  ✓ Configuration is valid");
                if let Some(notice) = format_unknown_keys(&config) {
                    let required = if args.detailed { LogLevel::Normal } else { LogLevel::Verbose };
                    log(level, required, &notice);
                }
                if args.detailed {
                    log(level, LogLevel::Normal, &format_detailed_summary(&config));
                }
            }
            Err(e) => {
                failed += 1;
                log(level, LogLevel::Normal, "  ✗ Configuration is invalid");
                eprintln!("{}:\n{}", path.display(), format_failure(&e));
            }
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(format!(
            "Validation failed: {failed} of {} configuration(s) invalid",
            targets.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ValidationError, ValidationErrors};
    use std::path::PathBuf;

    fn river_raid() -> TrainingConfig {
        games::find_game("river_raid").expect("registered").default_config()
    }

    #[test]
    fn test_format_algorithm_info() {
        let info = format_algorithm_info(&river_raid());
        assert!(info.contains("DQN"));
        assert!(info.contains("CnnPolicy"));
    }

    #[test]
    fn test_format_environment_info_names_game() {
        let info = format_environment_info(&river_raid());
        assert!(info.contains("ALE/Riverraid-v5 (river_raid)"));
    }

    #[test]
    fn test_format_schedule_info() {
        let mut config = river_raid();
        config.schedule.batch_size = 64;
        let info = format_schedule_info(&config);
        assert!(info.contains("Batch size: 64"));
        assert!(info.contains("Total timesteps"));
    }

    #[test]
    fn test_format_exploration_lists_extensions() {
        let mut config = river_raid();
        config.knobs.double_q = Some(true);
        config.knobs.dueling = Some(false);
        let info = format_exploration_info(&config);
        assert!(info.contains("Extensions: double_q"));
        assert!(!info.contains("dueling"));
    }

    #[test]
    fn test_format_checkpoint_info_none() {
        let mut config = river_raid();
        config.checkpointing = Default::default();
        assert!(format_checkpoint_info(&config).is_none());
    }

    #[test]
    fn test_format_checkpoint_info() {
        let mut config = river_raid();
        config.checkpointing.checkpoint_path = Some(PathBuf::from("models/river_raid/checkpoints"));
        config.checkpointing.save_freq = Some(50_000);
        let info = format_checkpoint_info(&config).expect("checkpointing is set");
        assert!(info.contains("models/river_raid/checkpoints"));
        assert!(info.contains("50000"));
    }

    #[test]
    fn test_unknown_keys_notice() {
        let config = crate::config::validate_str(
            "algo: DQN\nenv: ALE/Pong-v5\npolicy: CnnPolicy\ntotal_timesteps: 1000\n\
             learning_rate: 0.001\nbuffer_size: 1000\nbatch_size: 32\n\
             doubel_q: true\nbuffer_size2: 1\n",
        )
        .expect("unknown keys are passed through");
        assert_eq!(config.unknown_keys(), ["doubel_q", "buffer_size2"]);
        let notice = format_unknown_keys(&config).expect("notice for unknown keys");
        assert!(notice.contains("doubel_q, buffer_size2"));
    }

    #[test]
    fn test_no_unknown_keys_no_notice() {
        assert!(format_unknown_keys(&river_raid()).is_none());
    }

    #[test]
    fn test_detailed_summary_sections() {
        let summary = format_detailed_summary(&river_raid());
        assert!(summary.contains("Configuration Summary:"));
        assert!(summary.contains("Environment: ALE/Riverraid-v5"));
        assert!(summary.contains("Checkpointing:"));
    }

    #[test]
    fn test_format_failure_lists_every_error() {
        let errors = ValidationErrors::new(vec![
            ValidationError::Missing { field: "policy".into() },
            ValidationError::Missing { field: "batch_size".into() },
        ]);
        let report = format_failure(&Error::Validation(errors));
        assert_eq!(report.lines().count(), 2);
        assert!(report.contains("policy"));
        assert!(report.contains("batch_size"));
    }
}
