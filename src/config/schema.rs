//! Typed training configuration record
//!
//! One record describes one DQN training run for the external trainer. The
//! record is only ever produced by the validator (or built in code); on disk it
//! is a flat YAML mapping, so every section is flattened when serialized.

use serde::Serialize;
use serde_yaml::Mapping;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Declare a closed string enumeration with its YAML spellings
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every accepted spelling, in declaration order
            pub const ALLOWED: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            /// Case-insensitive match against [`Self::ALLOWED`]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($text) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("expected one of: {}", Self::ALLOWED.join(", ")))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Training algorithm; only DQN is modeled
    pub enum Algo {
        Dqn => "DQN",
    }
}

string_enum! {
    /// Stable-Baselines3 policy class
    pub enum Policy {
        Cnn => "CnnPolicy",
        Mlp => "MlpPolicy",
        MultiInput => "MultiInputPolicy",
    }
}

string_enum! {
    /// Torch device selection
    pub enum Device {
        Auto => "auto",
        Cpu => "cpu",
        Cuda => "cuda",
        Mps => "mps",
    }
}

string_enum! {
    /// Observation feature extractor
    pub enum FeaturesExtractor {
        NatureCnn => "NatureCNN",
        Flatten => "FlattenExtractor",
        Combined => "CombinedExtractor",
    }
}

/// A validated training configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingConfig {
    #[serde(flatten)]
    pub algorithm: AlgorithmSection,
    #[serde(flatten)]
    pub environment: EnvironmentSection,
    #[serde(flatten)]
    pub schedule: ScheduleSection,
    #[serde(flatten)]
    pub exploration: ExplorationSection,
    #[serde(flatten)]
    pub knobs: AlgorithmKnobs,
    #[serde(flatten)]
    pub preprocessing: Preprocessing,
    #[serde(flatten)]
    pub evaluation: Evaluation,
    #[serde(flatten)]
    pub checkpointing: Checkpointing,
    #[serde(flatten)]
    pub visualization: Visualization,
    #[serde(flatten)]
    pub overrides: GameOverrides,
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Keys this schema does not know, passed through untouched
    #[serde(flatten)]
    pub extra: Mapping,
}

impl TrainingConfig {
    /// A DQN record for `env` with Stable-Baselines3 defaults everywhere else
    pub fn new(env: impl Into<String>, policy: Policy) -> Self {
        Self {
            algorithm: AlgorithmSection {
                algo: Algo::Dqn,
                model_class: None,
                policy,
                features_extractor: None,
                features_dim: None,
            },
            environment: EnvironmentSection {
                env: env.into(),
                n_envs: 1,
                n_steps: None,
                device: Device::Auto,
            },
            schedule: ScheduleSection::default(),
            exploration: ExplorationSection::default(),
            knobs: AlgorithmKnobs::default(),
            preprocessing: Preprocessing::default(),
            evaluation: Evaluation::default(),
            checkpointing: Checkpointing::default(),
            visualization: Visualization::default(),
            overrides: GameOverrides::default(),
            metadata: Metadata::default(),
            extra: Mapping::new(),
        }
    }

    /// Environment id handed to Gymnasium
    pub fn env_id(&self) -> &str {
        &self.environment.env
    }

    /// Keys the validator did not recognize, in document order
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.extra.keys().filter_map(|k| k.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSection {
    pub algo: Algo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_class: Option<Algo>,
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_extractor: Option<FeaturesExtractor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_dim: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentSection {
    /// Registered Gymnasium id, e.g. `ALE/Pong-v5`
    pub env: String,
    pub n_envs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_steps: Option<u64>,
    pub device: Device,
}

/// Training schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSection {
    pub total_timesteps: u64,
    pub learning_rate: f64,
    pub buffer_size: u64,
    pub learning_starts: u64,
    pub batch_size: u64,
    pub train_freq: u64,
    pub gradient_steps: u64,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            total_timesteps: 1_000_000,
            learning_rate: 1e-4,
            buffer_size: 1_000_000,
            learning_starts: 100,
            batch_size: 32,
            train_freq: 4,
            gradient_steps: 1,
        }
    }
}

/// Epsilon-greedy schedule; all values are probabilities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorationSection {
    /// Fraction of training over which epsilon decays
    pub exploration_fraction: f64,
    pub exploration_initial_eps: f64,
    pub exploration_final_eps: f64,
}

impl Default for ExplorationSection {
    fn default() -> Self {
        Self { exploration_fraction: 0.1, exploration_initial_eps: 1.0, exploration_final_eps: 0.05 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmKnobs {
    pub gamma: f64,
    pub target_update_interval: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_stack: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_q: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioritized_replay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioritized_replay_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioritized_replay_beta0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dueling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noisy_nets: Option<bool>,
}

impl Default for AlgorithmKnobs {
    fn default() -> Self {
        Self {
            gamma: 0.99,
            target_update_interval: 10_000,
            frame_stack: None,
            double_q: None,
            prioritized_replay: None,
            prioritized_replay_alpha: None,
            prioritized_replay_beta0: None,
            dueling: None,
            noisy_nets: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preprocessing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_rewards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_frames: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_on_life_loss: Option<bool>,
    pub max_grad_norm: f64,
}

impl Default for Preprocessing {
    fn default() -> Self {
        Self {
            scale_rewards: None,
            normalize_frames: None,
            terminal_on_life_loss: None,
            max_grad_norm: 10.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_episodes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_freq: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_deterministic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_eval: Option<bool>,
    /// Passed through to the trainer, not interpreted here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Checkpointing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_freq: Option<u64>,
    /// Relative to the trainer's working directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_checkpoints: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Visualization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viz_interval: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_interval: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_interval: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

/// Per-game knobs for the ALE environment and reward handling
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fire_reset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_clipping: Option<bool>,
    /// Opaque sub-mapping (fuel_bonus, score_multiplier, ...) for the trainer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_shaping: Option<Mapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_custom_rewards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_normalization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_rewards: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
