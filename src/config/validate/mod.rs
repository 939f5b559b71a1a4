//! Configuration validation
//!
//! Validates raw training configuration mappings and produces typed
//! [`TrainingConfig`](crate::config::TrainingConfig) records.

mod error;
mod reader;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::{ValidationError, ValidationErrors, DOCUMENT};
pub use validator::{validate_mapping, validate_str, validate_value};
