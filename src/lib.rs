//! arcade-dqn: host setup and hyperparameter validation for Atari DQN runs
//!
//! Training itself is delegated to an external reinforcement-learning
//! library. This crate covers the two pieces that run before it:
//!
//! - **Preflight + setup**: check the Python interpreter, its version, free
//!   disk space and total memory, then create a virtual environment.
//! - **Configuration**: load `models/<name>/config.yaml` records and validate
//!   every field, reporting all problems at once.
//!
//! # Example
//!
//! ```
//! use arcade_dqn::config::validate_str;
//!
//! let config = validate_str(
//!     r#"
//! algo: DQN
//! env: ALE/Pong-v5
//! policy: CnnPolicy
//! total_timesteps: 2000000
//! learning_rate: 0.00025
//! buffer_size: 1000000
//! batch_size: 32
//! "#,
//! )
//! .unwrap();
//! assert_eq!(config.schedule.batch_size, 32);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod games;
pub mod preflight;
pub mod venv;

pub use error::{Error, Result};
