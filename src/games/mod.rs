//! Supported Atari games
//!
//! The registry doubles as the list of environment ids the external trainer
//! understands: a configuration's `env` must resolve to one of these games.

use crate::config::{Policy, TrainingConfig};
use serde_yaml::{Mapping, Value};

/// A game the training stack knows how to build
#[derive(Debug, Clone, PartialEq)]
pub struct GameSpec {
    /// Short name, also the `models/<name>` directory
    pub name: &'static str,
    /// Canonical Gymnasium id
    pub env_id: &'static str,
    /// Other ids resolving to the same game
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub version: &'static str,
    /// Typical (min, max) episode score
    pub score_range: (f64, f64),
    /// Episode score counted as a success during evaluation
    pub success_threshold: f64,
}

static REGISTRY: [GameSpec; 3] = [
    GameSpec {
        name: "pong",
        env_id: "ALE/Pong-v5",
        aliases: &["PongNoFrameskip-v4"],
        description: "Classic paddle duel against the CPU",
        version: "1.0.0",
        score_range: (-21.0, 21.0),
        success_threshold: 18.0,
    },
    GameSpec {
        name: "space_invaders",
        env_id: "ALE/SpaceInvaders-v5",
        aliases: &["SpaceInvadersNoFrameskip-v4"],
        description: "Defend Earth from alien invasion",
        version: "1.0.0",
        score_range: (0.0, 1000.0),
        success_threshold: 100.0,
    },
    GameSpec {
        name: "river_raid",
        env_id: "ALE/Riverraid-v5",
        aliases: &["RiverraidNoFrameskip-v4"],
        description: "Fly down the river, manage fuel and destroy enemies",
        version: "1.0.0",
        score_range: (0.0, 20000.0),
        success_threshold: 2000.0,
    },
];

/// All registered games
pub fn registry() -> &'static [GameSpec] {
    &REGISTRY
}

/// Look up a game by short name (`space_invaders`, `space-invaders`, `SpaceInvaders`)
pub fn find_game(name: &str) -> Option<&'static GameSpec> {
    let wanted = normalize(name);
    REGISTRY.iter().find(|g| normalize(g.name) == wanted)
}

/// Look up a game by canonical id or alias
pub fn find_by_env(env: &str) -> Option<&'static GameSpec> {
    REGISTRY.iter().find(|g| g.env_id == env || g.aliases.contains(&env))
}

pub fn is_registered_env(env: &str) -> bool {
    find_by_env(env).is_some()
}

/// Every accepted environment id, canonical ids first
pub fn registered_env_ids() -> Vec<&'static str> {
    REGISTRY
        .iter()
        .map(|g| g.env_id)
        .chain(REGISTRY.iter().flat_map(|g| g.aliases.iter().copied()))
        .collect()
}

fn normalize(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).map(|c| c.to_ascii_lowercase()).collect()
}

impl GameSpec {
    pub fn score_in_range(&self, score: f64) -> bool {
        score >= self.score_range.0 && score <= self.score_range.1
    }

    /// Conventional checkpoint directory for this game
    pub fn checkpoint_dir(&self) -> String {
        format!("models/{}/checkpoints", self.name)
    }

    /// Hyperparameters this game ships with
    pub fn default_config(&self) -> TrainingConfig {
        let mut config = TrainingConfig::new(self.env_id, Policy::Cnn);
        config.knobs.frame_stack = Some(4);
        config.evaluation.eval_episodes = Some(10);
        config.evaluation.eval_deterministic = Some(true);
        config.evaluation.render_eval = Some(false);
        config.evaluation.success_threshold = Some(self.success_threshold);
        config.checkpointing.checkpoint_path = Some(self.checkpoint_dir().into());
        config.checkpointing.keep_checkpoints = Some(5);
        config.visualization.demo_mode = Some(false);
        config.metadata.model_version = Some(self.version.to_string());
        config.metadata.description = Some(self.description.to_string());

        match self.name {
            "pong" => {
                config.schedule.total_timesteps = 2_000_000;
                config.schedule.learning_rate = 0.00025;
                config.schedule.buffer_size = 1_000_000;
                config.schedule.learning_starts = 50_000;
                config.schedule.batch_size = 32;
                config.exploration.exploration_fraction = 0.1;
                config.exploration.exploration_final_eps = 0.01;
                config.knobs.target_update_interval = 1000;
                config.evaluation.eval_freq = Some(50_000);
                config.checkpointing.save_freq = Some(100_000);
                config.overrides.clip_rewards = Some(true);
            }
            "space_invaders" => {
                config.environment.n_envs = 4;
                config.schedule.total_timesteps = 1_000_000;
                config.schedule.learning_rate = 0.00025;
                config.schedule.buffer_size = 250_000;
                config.schedule.learning_starts = 50_000;
                config.schedule.batch_size = 256;
                config.exploration.exploration_fraction = 0.2;
                config.knobs.target_update_interval = 2000;
                config.preprocessing.terminal_on_life_loss = Some(true);
                config.evaluation.eval_freq = Some(25_000);
                config.checkpointing.save_freq = Some(50_000);
                config.overrides.fire_reset = Some(true);
                config.overrides.clip_rewards = Some(true);
            }
            "river_raid" => {
                config.environment.n_envs = 4;
                config.schedule.total_timesteps = 2_000_000;
                config.schedule.learning_rate = 0.0001;
                config.schedule.buffer_size = 500_000;
                config.schedule.learning_starts = 50_000;
                config.schedule.batch_size = 64;
                config.exploration.exploration_fraction = 0.15;
                config.exploration.exploration_final_eps = 0.02;
                config.knobs.target_update_interval = 2000;
                config.knobs.double_q = Some(true);
                config.knobs.dueling = Some(true);
                config.knobs.prioritized_replay = Some(true);
                config.knobs.prioritized_replay_alpha = Some(0.6);
                config.knobs.prioritized_replay_beta0 = Some(0.4);
                config.preprocessing.terminal_on_life_loss = Some(true);
                config.evaluation.eval_freq = Some(50_000);
                config.checkpointing.save_freq = Some(100_000);
                config.overrides.fire_reset = Some(true);
                config.overrides.use_custom_rewards = Some(true);
                config.overrides.reward_shaping = Some(river_raid_shaping());
            }
            _ => {}
        }
        config
    }
}

fn river_raid_shaping() -> Mapping {
    let mut shaping = Mapping::new();
    shaping.insert("fuel_bonus".into(), Value::from(0.1));
    shaping.insert("score_multiplier".into(), Value::from(1.0));
    shaping.insert("death_penalty".into(), Value::from(-1.0));
    shaping.insert("progress_bonus".into(), Value::from(0.01));
    shaping
}
