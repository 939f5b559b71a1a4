//! Configuration validation logic
//!
//! Walks every known field of a raw mapping, checking presence, type and
//! range, and only builds a [`TrainingConfig`] when nothing was wrong.

use super::error::{ValidationError, ValidationErrors};
use super::reader::{
    boolean, choice, count, kind, mapping, non_empty_text, non_negative, number, positive_count,
    probability, relative_path, strictly_positive, text, FieldReader,
};
use crate::config::schema::{
    AlgorithmKnobs, AlgorithmSection, Checkpointing, Device, EnvironmentSection, Evaluation,
    ExplorationSection, GameOverrides, Metadata, Preprocessing, ScheduleSection, TrainingConfig,
    Visualization,
};
use crate::games;
use serde_yaml::{Mapping, Value};

/// Validate a parsed YAML document
///
/// The document must be a mapping; anything else is a single error.
pub fn validate_value(value: &Value) -> Result<TrainingConfig, ValidationErrors> {
    match value {
        Value::Mapping(map) => validate_mapping(map),
        other => Err(ValidationErrors::single(ValidationError::NotAMapping {
            found: kind(other).to_string(),
        })),
    }
}

/// Parse YAML text and validate it
pub fn validate_str(yaml: &str) -> Result<TrainingConfig, ValidationErrors> {
    let value: Value = serde_yaml::from_str(yaml).map_err(|e| {
        ValidationErrors::single(ValidationError::Syntax { message: e.to_string() })
    })?;
    validate_value(&value)
}

/// Validate a configuration mapping
///
/// Checks:
/// - Required fields are present
/// - Each field has the documented type (booleans must be literal `true`/`false`)
/// - Counts are non-negative, probabilities lie in [0, 1]
/// - `env` is a registered environment, `checkpoint_path` is relative
///
/// All problems are returned together, at most one per field.
pub fn validate_mapping(map: &Mapping) -> Result<TrainingConfig, ValidationErrors> {
    let mut r = FieldReader::new(map);
    let schedule_defaults = ScheduleSection::default();
    let exploration_defaults = ExplorationSection::default();
    let knob_defaults = AlgorithmKnobs::default();
    let preprocessing_defaults = Preprocessing::default();

    // Algorithm selection
    let algo = r.required("algo", choice);
    let model_class = r.optional("model_class", choice);
    let policy = r.required("policy", choice);
    let features_extractor = r.optional("features_extractor", choice);
    let features_dim = r.optional("features_dim", positive_count);

    // Environment
    let env = r.required("env", registered_env);
    let n_envs = r.optional("n_envs", positive_count).unwrap_or(1);
    let n_steps = r.optional("n_steps", count);
    let device = r.optional("device", choice).unwrap_or(Device::Auto);

    // Training schedule
    let total_timesteps = r.required("total_timesteps", count);
    let learning_rate = r.required("learning_rate", strictly_positive);
    let buffer_size = r.required("buffer_size", count);
    let learning_starts =
        r.optional("learning_starts", count).unwrap_or(schedule_defaults.learning_starts);
    let batch_size = r.required("batch_size", positive_count);
    let train_freq = r.optional("train_freq", count).unwrap_or(schedule_defaults.train_freq);
    let gradient_steps =
        r.optional("gradient_steps", count).unwrap_or(schedule_defaults.gradient_steps);

    let exploration = ExplorationSection {
        exploration_fraction: r
            .optional("exploration_fraction", probability)
            .unwrap_or(exploration_defaults.exploration_fraction),
        exploration_initial_eps: r
            .optional("exploration_initial_eps", probability)
            .unwrap_or(exploration_defaults.exploration_initial_eps),
        exploration_final_eps: r
            .optional("exploration_final_eps", probability)
            .unwrap_or(exploration_defaults.exploration_final_eps),
    };

    let knobs = AlgorithmKnobs {
        gamma: r.optional("gamma", probability).unwrap_or(knob_defaults.gamma),
        target_update_interval: r
            .optional("target_update_interval", count)
            .unwrap_or(knob_defaults.target_update_interval),
        frame_stack: r.optional("frame_stack", positive_count),
        double_q: r.optional("double_q", boolean),
        prioritized_replay: r.optional("prioritized_replay", boolean),
        prioritized_replay_alpha: r.optional("prioritized_replay_alpha", probability),
        prioritized_replay_beta0: r.optional("prioritized_replay_beta0", probability),
        dueling: r.optional("dueling", boolean),
        noisy_nets: r.optional("noisy_nets", boolean),
    };

    let preprocessing = Preprocessing {
        scale_rewards: r.optional("scale_rewards", boolean),
        normalize_frames: r.optional("normalize_frames", boolean),
        terminal_on_life_loss: r.optional("terminal_on_life_loss", boolean),
        max_grad_norm: r
            .optional("max_grad_norm", non_negative)
            .unwrap_or(preprocessing_defaults.max_grad_norm),
    };

    let evaluation = Evaluation {
        eval_episodes: r.optional("eval_episodes", count),
        eval_freq: r.optional("eval_freq", count),
        eval_deterministic: r.optional("eval_deterministic", boolean),
        render_eval: r.optional("render_eval", boolean),
        success_threshold: r.optional("success_threshold", number),
    };

    let checkpointing = Checkpointing {
        save_freq: r.optional("save_freq", count),
        checkpoint_path: r.optional("checkpoint_path", relative_path),
        keep_checkpoints: r.optional("keep_checkpoints", count),
    };

    let visualization = Visualization {
        viz_interval: r.optional("viz_interval", count),
        video_interval: r.optional("video_interval", count),
        video_length: r.optional("video_length", count),
        checkpoint_interval: r.optional("checkpoint_interval", count),
        demo_mode: r.optional("demo_mode", boolean),
    };

    let overrides = GameOverrides {
        difficulty: r.optional("difficulty", count),
        mode: r.optional("mode", count),
        fire_reset: r.optional("fire_reset", boolean),
        reward_clipping: r.optional("reward_clipping", boolean),
        reward_shaping: r.optional("reward_shaping", mapping),
        use_custom_rewards: r.optional("use_custom_rewards", boolean),
        reward_normalization: r.optional("reward_normalization", boolean),
        clip_rewards: r.optional("clip_rewards", boolean),
    };

    let metadata = Metadata {
        model_version: r.optional("model_version", model_version),
        description: r.optional("description", text),
    };

    let extra = r.leftovers();
    let errors = r.into_errors();

    match (algo, policy, env, total_timesteps, learning_rate, buffer_size, batch_size) {
        (
            Some(algo),
            Some(policy),
            Some(env),
            Some(total_timesteps),
            Some(learning_rate),
            Some(buffer_size),
            Some(batch_size),
        ) if errors.is_empty() => Ok(TrainingConfig {
            algorithm: AlgorithmSection {
                algo,
                model_class,
                policy,
                features_extractor,
                features_dim,
            },
            environment: EnvironmentSection { env, n_envs, n_steps, device },
            schedule: ScheduleSection {
                total_timesteps,
                learning_rate,
                buffer_size,
                learning_starts,
                batch_size,
                train_freq,
                gradient_steps,
            },
            exploration,
            knobs,
            preprocessing,
            evaluation,
            checkpointing,
            visualization,
            overrides,
            metadata,
            extra,
        }),
        _ => Err(ValidationErrors::new(errors)),
    }
}

/// A non-empty environment id known to the game registry
fn registered_env(field: &str, value: &Value) -> Result<String, ValidationError> {
    let env = non_empty_text(field, value)?;
    if games::is_registered_env(&env) {
        Ok(env)
    } else {
        Err(ValidationError::UnknownEnvironment {
            field: field.to_string(),
            env,
            known: games::registered_env_ids().join(", "),
        })
    }
}

/// Version strings are often written unquoted (`model_version: 1.0`)
fn model_version(field: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        other => non_empty_text(field, other),
    }
}
