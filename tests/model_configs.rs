//! Shipped Model Configuration Tests
//!
//! Every `models/<name>/config.yaml` in the repository must pass the validator
//! and match the defaults its game generates with `arcade-dqn init`.

use arcade_dqn::config::{discover_configs, load_config, TrainingConfig};
use arcade_dqn::games;
use std::path::{Path, PathBuf};

fn models_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("models")
}

/// Helper to load a shipped configuration by model name
fn load_model(name: &str) -> TrainingConfig {
    let path = models_dir().join(name).join("config.yaml");
    let config =
        load_config(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));

    assert!(
        games::is_registered_env(config.env_id()),
        "{name}: env {} must be registered",
        config.env_id()
    );
    assert!(config.schedule.batch_size > 0, "{name}: batch_size must be > 0");
    assert!(
        config.exploration.exploration_final_eps <= config.exploration.exploration_initial_eps,
        "{name}: epsilon must decay"
    );
    config
}

#[test]
fn every_shipped_config_validates() {
    let found = discover_configs(models_dir()).expect("models directory should exist");
    assert_eq!(found.len(), games::registry().len());
    for path in found {
        load_config(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));
    }
}

#[test]
fn every_registered_game_ships_a_config() {
    for game in games::registry() {
        let config = load_model(game.name);
        assert_eq!(config.env_id(), game.env_id);
    }
}

#[test]
fn pong_config_values() {
    let config = load_model("pong");
    assert_eq!(config.schedule.total_timesteps, 2_000_000);
    assert_eq!(config.schedule.learning_rate, 0.00025);
    assert_eq!(config.schedule.batch_size, 32);
    assert_eq!(config.schedule.buffer_size, 1_000_000);
}

#[test]
fn river_raid_reward_shaping() {
    let config = load_model("river_raid");
    let shaping = config.overrides.reward_shaping.expect("river raid shapes rewards");
    for key in ["fuel_bonus", "score_multiplier", "death_penalty", "progress_bonus"] {
        assert!(shaping.contains_key(key), "missing reward_shaping.{key}");
    }
    assert_eq!(config.knobs.double_q, Some(true));
}

#[test]
fn shipped_configs_match_game_defaults() {
    for game in games::registry() {
        assert_eq!(load_model(game.name), game.default_config(), "{} drifted", game.name);
    }
}

#[test]
fn checkpoint_paths_stay_under_model_dir() {
    for game in games::registry() {
        let config = load_model(game.name);
        let path = config.checkpointing.checkpoint_path.expect("checkpoint path is set");
        assert!(path.is_relative());
        assert!(path.starts_with(Path::new("models").join(game.name)));
    }
}
