//! Core types for preflight validation.

use super::version::VersionRange;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Default interpreter program looked up on `PATH`
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Minimum free disk space required by the installer (MiB)
pub const DEFAULT_MIN_DISK_MB: u64 = 2048;

/// Recommended total memory (MiB); below this only a warning is emitted
pub const DEFAULT_MIN_MEMORY_MB: u64 = 4096;

/// Preflight errors
///
/// Every hard gate maps to one variant; the message names the failing check
/// and the value that was observed.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),

    #[error("Insufficient resources: {0}")]
    InsufficientResources(String),

    #[error("Environment check failed: {0}")]
    Environment(String),

    #[error("Validation failed: {checks_failed} of {total_checks} checks failed")]
    ValidationFailed { checks_failed: usize, total_checks: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PreflightError {
    /// Build the error raised when a required check of the given type fails
    pub fn for_check(check_type: &CheckType, check_name: &str, message: &str) -> Self {
        let text = format!("{check_name}: {message}");
        match check_type {
            CheckType::Dependency => Self::MissingDependency(text),
            CheckType::Version => Self::UnsupportedVersion(text),
            CheckType::Resources => Self::InsufficientResources(text),
            CheckType::Custom(_) => Self::Environment(text),
        }
    }
}

/// Metadata for a preflight check (without the check function)
#[derive(Debug, Clone)]
pub struct CheckMetadata {
    /// Name of the check
    pub name: String,
    /// Type of check
    pub check_type: CheckType,
    /// Description of what this check validates
    pub description: String,
    /// Whether this check is required
    pub required: bool,
}

/// Context for preflight checks
///
/// Holds the installer thresholds. Values set here override the defaults a
/// check was constructed with.
#[derive(Debug, Clone)]
pub struct PreflightContext {
    /// Interpreter program to probe
    pub interpreter: String,
    /// Directory whose filesystem must have free space
    pub workdir: PathBuf,
    /// Minimum required disk space in MiB
    pub min_disk_space_mb: Option<u64>,
    /// Recommended memory in MiB
    pub min_memory_mb: Option<u64>,
    /// Supported interpreter versions
    pub version_range: VersionRange,
}

impl Default for PreflightContext {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            workdir: PathBuf::from("."),
            min_disk_space_mb: None,
            min_memory_mb: None,
            version_range: VersionRange::default(),
        }
    }
}

impl PreflightContext {
    /// Create a new context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpreter program
    pub fn with_interpreter(mut self, program: impl Into<String>) -> Self {
        self.interpreter = program.into();
        self
    }

    /// Set the directory used for the disk space check
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = dir.into();
        self
    }

    /// Set minimum disk space
    pub fn with_min_disk_space_mb(mut self, mb: u64) -> Self {
        self.min_disk_space_mb = Some(mb);
        self
    }

    /// Set minimum memory
    pub fn with_min_memory_mb(mut self, mb: u64) -> Self {
        self.min_memory_mb = Some(mb);
        self
    }

    /// Set the supported interpreter version range
    pub fn with_version_range(mut self, range: VersionRange) -> Self {
        self.version_range = range;
        self
    }
}

/// Type of preflight check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckType {
    /// A required program is installed
    Dependency,
    /// A program's version is supported
    Version,
    /// Disk or memory availability
    Resources,
    /// Custom check
    Custom(String),
}
