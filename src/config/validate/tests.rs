//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::{validate_mapping, validate_str, validate_value};
use crate::config::schema::*;
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

const PONG: &str = r"
algo: DQN
env: ALE/Pong-v5
policy: CnnPolicy
total_timesteps: 2000000
learning_rate: 0.00025
batch_size: 32
buffer_size: 1000000
";

fn pong_map() -> Mapping {
    serde_yaml::from_str(PONG).expect("pong literal should parse")
}

fn with(field: &str, yaml_value: &str) -> Mapping {
    let mut map = pong_map();
    let value: Value = serde_yaml::from_str(yaml_value).expect("value should parse");
    map.insert(field.into(), value);
    map
}

fn without(field: &str) -> Mapping {
    let mut map = pong_map();
    map.remove(field);
    map
}

#[test]
fn test_pong_literal_accepted() {
    let config = validate_str(PONG).expect("pong literal should validate");
    assert_eq!(config.schedule.total_timesteps, 2_000_000);
    assert_eq!(config.schedule.learning_rate, 0.00025);
    assert_eq!(config.schedule.batch_size, 32);
    assert_eq!(config.schedule.buffer_size, 1_000_000);
    assert_eq!(config.algorithm.algo, Algo::Dqn);
    assert_eq!(config.algorithm.policy, Policy::Cnn);
    assert_eq!(config.env_id(), "ALE/Pong-v5");
}

#[test]
fn test_defaults_applied_to_absent_fields() {
    let config = validate_mapping(&pong_map()).expect("valid");
    assert_eq!(config.environment.n_envs, 1);
    assert_eq!(config.environment.device, Device::Auto);
    assert_eq!(config.schedule.learning_starts, 100);
    assert_eq!(config.schedule.train_freq, 4);
    assert_eq!(config.knobs.target_update_interval, 10_000);
    assert_eq!(config.exploration.exploration_initial_eps, 1.0);
    assert!(config.knobs.double_q.is_none());
    assert!(config.extra.is_empty());
}

#[test]
fn test_missing_algo_single_error() {
    let errors = validate_mapping(&without("algo")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.fields(), ["algo"]);
    assert!(matches!(errors.iter().next(), Some(ValidationError::Missing { .. })));
}

#[test]
fn test_unsupported_algo_single_error() {
    let errors = validate_mapping(&with("algo", "PPO")).unwrap_err();
    assert_eq!(errors.len(), 1);
    let error = errors.iter().next().expect("one error");
    assert_eq!(error.field(), "algo");
    assert!(matches!(error, ValidationError::UnsupportedValue { value, .. } if value == "PPO"));
    assert!(error.to_string().contains("DQN"));
}

#[test]
fn test_lowercase_algo_accepted() {
    let config = validate_mapping(&with("algo", "dqn")).expect("case-insensitive algo");
    assert_eq!(config.algorithm.algo, Algo::Dqn);
}

#[test]
fn test_all_errors_reported_at_once() {
    let mut map = without("policy");
    map.insert("batch_size".into(), Value::from(0u64));
    map.insert("gamma".into(), Value::from(1.5));
    map.insert("dueling".into(), Value::from("yes"));
    map.insert("checkpoint_path".into(), Value::from("/var/ckpt"));

    let errors = validate_mapping(&map).unwrap_err();
    assert_eq!(errors.len(), 5, "{errors}");
    for field in ["policy", "batch_size", "gamma", "dueling", "checkpoint_path"] {
        assert!(errors.contains_field(field), "missing error for {field}");
    }
}

#[test]
fn test_every_required_field() {
    for field in [
        "algo",
        "env",
        "policy",
        "total_timesteps",
        "learning_rate",
        "buffer_size",
        "batch_size",
    ] {
        let errors = validate_mapping(&without(field)).unwrap_err();
        assert_eq!(errors.fields(), [field]);
    }
}

#[test]
fn test_null_required_field_is_missing() {
    let errors = validate_mapping(&with("env", "~")).unwrap_err();
    assert!(matches!(errors.iter().next(), Some(ValidationError::Missing { field }) if field == "env"));
}

#[test]
fn test_boolean_fields_only_accept_literals() {
    for field in ["double_q", "dueling", "noisy_nets", "demo_mode", "clip_rewards", "fire_reset"] {
        assert!(validate_mapping(&with(field, "true")).is_ok());
        assert!(validate_mapping(&with(field, "false")).is_ok());
        for bad in ["'true'", "yes", "1", "0.0", "[true]"] {
            let errors = validate_mapping(&with(field, bad)).unwrap_err();
            assert_eq!(errors.fields(), [field], "{field}={bad}");
            assert!(matches!(errors.iter().next(), Some(ValidationError::WrongType { .. })));
        }
    }
}

#[test]
fn test_probability_fields_boundaries() {
    for field in ["exploration_final_eps", "prioritized_replay_alpha", "prioritized_replay_beta0"] {
        assert!(validate_mapping(&with(field, "0.0")).is_ok(), "{field}=0.0");
        assert!(validate_mapping(&with(field, "1.0")).is_ok(), "{field}=1.0");
        assert!(validate_mapping(&with(field, "0")).is_ok(), "{field}=0");
        for bad in ["1.01", "-0.01", "2"] {
            let errors = validate_mapping(&with(field, bad)).unwrap_err();
            assert_eq!(errors.fields(), [field]);
            assert!(matches!(errors.iter().next(), Some(ValidationError::OutOfRange { .. })));
        }
    }
}

#[test]
fn test_negative_counts_rejected() {
    for field in ["total_timesteps", "buffer_size", "learning_starts", "eval_freq", "save_freq"] {
        let errors = validate_mapping(&with(field, "-1")).unwrap_err();
        assert_eq!(errors.fields(), [field]);
    }
}

#[test]
fn test_learning_rate_must_be_positive() {
    assert!(validate_mapping(&with("learning_rate", "0")).is_err());
    assert!(validate_mapping(&with("learning_rate", "-0.001")).is_err());
    assert!(validate_mapping(&with("learning_rate", "'fast'")).is_err());
}

#[test]
fn test_unknown_environment_rejected() {
    let errors = validate_mapping(&with("env", "CartPole-v1")).unwrap_err();
    let error = errors.iter().next().expect("one error");
    assert!(matches!(error, ValidationError::UnknownEnvironment { .. }));
    assert!(error.to_string().contains("ALE/Pong-v5"));
}

#[test]
fn test_environment_alias_accepted() {
    let config = validate_mapping(&with("env", "PongNoFrameskip-v4")).expect("alias is registered");
    assert_eq!(config.env_id(), "PongNoFrameskip-v4");
}

#[test]
fn test_checkpoint_path_must_be_relative() {
    let config = validate_mapping(&with("checkpoint_path", "models/pong/checkpoints")).expect("ok");
    assert_eq!(config.checkpointing.checkpoint_path, Some(PathBuf::from("models/pong/checkpoints")));

    let errors = validate_mapping(&with("checkpoint_path", "/tmp/ckpt")).unwrap_err();
    assert!(matches!(errors.iter().next(), Some(ValidationError::InvalidPath { .. })));
    assert!(validate_mapping(&with("checkpoint_path", "''")).is_err());
}

#[test]
fn test_enumerated_fields() {
    assert_eq!(
        validate_mapping(&with("device", "cuda")).expect("valid").environment.device,
        Device::Cuda
    );
    assert!(validate_mapping(&with("device", "tpu")).is_err());
    assert_eq!(
        validate_mapping(&with("features_extractor", "NatureCNN"))
            .expect("valid")
            .algorithm
            .features_extractor,
        Some(FeaturesExtractor::NatureCnn)
    );
    assert!(validate_mapping(&with("policy", "TransformerPolicy")).is_err());
    assert!(validate_mapping(&with("model_class", "PPO")).is_err());
}

#[test]
fn test_reward_shaping_is_opaque() {
    let yaml = "{fuel_bonus: 0.1, score_multiplier: 1.0, death_penalty: -1.0, anything: [1, 2]}";
    let config = validate_mapping(&with("reward_shaping", yaml)).expect("opaque mapping");
    let shaping = config.overrides.reward_shaping.expect("kept");
    assert_eq!(shaping.len(), 4);
    assert!(shaping.contains_key("anything"));

    let errors = validate_mapping(&with("reward_shaping", "0.5")).unwrap_err();
    assert_eq!(errors.fields(), ["reward_shaping"]);
}

#[test]
fn test_success_threshold_passthrough() {
    let config = validate_mapping(&with("success_threshold", "-5")).expect("any number");
    assert_eq!(config.evaluation.success_threshold, Some(-5.0));
    assert!(validate_mapping(&with("success_threshold", "high")).is_err());
}

#[test]
fn test_unknown_keys_passed_through() {
    let config = validate_mapping(&with("tensorboard_log", "./tb")).expect("unknown keys allowed");
    assert_eq!(config.extra.get("tensorboard_log"), Some(&Value::from("./tb")));
}

#[test]
fn test_model_version_accepts_numbers() {
    let config = validate_mapping(&with("model_version", "1.0")).expect("valid");
    assert_eq!(config.metadata.model_version.as_deref(), Some("1.0"));
}

#[test]
fn test_integral_float_counts_accepted() {
    let config = validate_mapping(&with("total_timesteps", "2e6")).expect("valid");
    assert_eq!(config.schedule.total_timesteps, 2_000_000);
    assert!(validate_mapping(&with("total_timesteps", "2.5")).is_err());
}

#[test]
fn test_non_mapping_document() {
    let errors = validate_value(&Value::Sequence(vec![])).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors.iter().next(), Some(ValidationError::NotAMapping { found }) if found == "sequence"));

    let errors = validate_str("").unwrap_err();
    assert!(matches!(errors.iter().next(), Some(ValidationError::NotAMapping { .. })));
}

#[test]
fn test_syntax_error() {
    let errors = validate_str("algo: [DQN").unwrap_err();
    assert!(matches!(errors.iter().next(), Some(ValidationError::Syntax { .. })));
    assert_eq!(errors.fields(), ["<document>"]);
}

#[test]
fn test_game_defaults_validate() {
    for game in crate::games::registry() {
        let yaml = serde_yaml::to_string(&game.default_config()).expect("serialize");
        let config = validate_str(&yaml)
            .unwrap_or_else(|e| panic!("{} defaults should validate: {e}", game.name));
        assert_eq!(config, game.default_config());
    }
}

#[test]
fn test_errors_display() {
    let mut map = without("algo");
    map.insert("gamma".into(), Value::from(2.0));
    let errors = validate_mapping(&map).unwrap_err();
    let text = errors.to_string();
    assert!(text.starts_with("2 validation errors"));
    assert!(text.contains("algo: required field is missing"));
    assert!(text.contains("gamma: 2 is out of range (expected a value in [0, 1])"));
}
