//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_mapping;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

const BOOLEAN_FIELDS: &[&str] = &[
    "double_q",
    "prioritized_replay",
    "dueling",
    "noisy_nets",
    "scale_rewards",
    "normalize_frames",
    "terminal_on_life_loss",
    "eval_deterministic",
    "render_eval",
    "demo_mode",
    "fire_reset",
    "reward_clipping",
    "use_custom_rewards",
    "reward_normalization",
    "clip_rewards",
];

const PROBABILITY_FIELDS: &[&str] =
    &["exploration_final_eps", "prioritized_replay_alpha", "prioritized_replay_beta0"];

fn base_map(total_timesteps: u64, learning_rate: f64, buffer_size: u64, batch_size: u64) -> Mapping {
    let mut map = Mapping::new();
    map.insert("algo".into(), "DQN".into());
    map.insert("env".into(), "ALE/SpaceInvaders-v5".into());
    map.insert("policy".into(), "CnnPolicy".into());
    map.insert("total_timesteps".into(), Value::from(total_timesteps));
    map.insert("learning_rate".into(), Value::from(learning_rate));
    map.insert("buffer_size".into(), Value::from(buffer_size));
    map.insert("batch_size".into(), Value::from(batch_size));
    map
}

fn arb_valid_map() -> impl Strategy<Value = Mapping> {
    (0u64..10_000_000, 1e-6f64..1.0, 0u64..2_000_000, 1u64..1024)
        .prop_map(|(steps, lr, buffer, batch)| base_map(steps, lr, buffer, batch))
}

/// Scalars that are not YAML booleans
fn arb_non_bool_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::from),
        Just(Value::from("true")),
        Just(Value::from("false")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_map_passes(map in arb_valid_map()) {
        prop_assert!(validate_mapping(&map).is_ok());
    }

    #[test]
    fn prop_values_preserved(
        steps in 0u64..10_000_000,
        lr in 1e-6f64..1.0,
        buffer in 0u64..2_000_000,
        batch in 1u64..1024,
    ) {
        let config = validate_mapping(&base_map(steps, lr, buffer, batch)).expect("valid");
        prop_assert_eq!(config.schedule.total_timesteps, steps);
        prop_assert_eq!(config.schedule.learning_rate, lr);
        prop_assert_eq!(config.schedule.buffer_size, buffer);
        prop_assert_eq!(config.schedule.batch_size, batch);
    }

    #[test]
    fn prop_boolean_literals_accepted(
        map in arb_valid_map(),
        field in proptest::sample::select(BOOLEAN_FIELDS),
        flag in any::<bool>(),
    ) {
        let mut map = map;
        map.insert(field.into(), Value::Bool(flag));
        prop_assert!(validate_mapping(&map).is_ok());
    }

    #[test]
    fn prop_non_boolean_rejected_naming_field(
        map in arb_valid_map(),
        field in proptest::sample::select(BOOLEAN_FIELDS),
        value in arb_non_bool_scalar(),
    ) {
        let mut map = map;
        map.insert(field.into(), value);
        let errors = validate_mapping(&map).unwrap_err();
        prop_assert_eq!(errors.fields(), vec![field]);
    }

    #[test]
    fn prop_probability_in_unit_interval_accepted(
        map in arb_valid_map(),
        field in proptest::sample::select(PROBABILITY_FIELDS),
        p in 0.0f64..=1.0,
    ) {
        let mut map = map;
        map.insert(field.into(), Value::from(p));
        prop_assert!(validate_mapping(&map).is_ok());
    }

    #[test]
    fn prop_probability_outside_unit_interval_rejected(
        map in arb_valid_map(),
        field in proptest::sample::select(PROBABILITY_FIELDS),
        p in prop_oneof![-1000.0f64..-1e-9, 1.000_000_1f64..1000.0],
    ) {
        let mut map = map;
        map.insert(field.into(), Value::from(p));
        let errors = validate_mapping(&map).unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        let is_range_error =
            matches!(errors.iter().next(), Some(ValidationError::OutOfRange { .. }));
        prop_assert!(is_range_error);
    }

    #[test]
    fn prop_negative_batch_size_rejected(map in arb_valid_map(), batch in i64::MIN..0) {
        let mut map = map;
        map.insert("batch_size".into(), Value::from(batch));
        let errors = validate_mapping(&map).unwrap_err();
        prop_assert_eq!(errors.fields(), vec!["batch_size"]);
    }

    #[test]
    fn prop_non_dqn_algo_single_error(map in arb_valid_map(), algo in "[A-Z]{2,5}") {
        prop_assume!(!algo.eq_ignore_ascii_case("DQN"));
        let mut map = map;
        map.insert("algo".into(), Value::from(algo));
        let errors = validate_mapping(&map).unwrap_err();
        prop_assert_eq!(errors.fields(), vec!["algo"]);
    }
}
