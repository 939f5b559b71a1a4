//! Outcome of a single preflight check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single preflight check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckResult {
    /// Check passed
    Passed { message: String },
    /// Check failed
    Failed { message: String, details: Option<String> },
    /// Check could not run (e.g. an earlier gate failed)
    Skipped { reason: String },
    /// Non-fatal finding
    Warning { message: String },
}

impl CheckResult {
    /// Create a passed result
    pub fn passed(message: impl Into<String>) -> Self {
        Self::Passed { message: message.into() }
    }

    /// Create a failed result
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed { message: message.into(), details: None }
    }

    /// Create a failed result with details
    pub fn failed_with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Failed { message: message.into(), details: Some(details.into()) }
    }

    /// Create a skipped result
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped { reason: reason.into() }
    }

    /// Create a warning result
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning { message: message.into() }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Primary message (the skip reason for skipped checks)
    pub fn message(&self) -> &str {
        match self {
            Self::Passed { message } | Self::Warning { message } => message,
            Self::Failed { message, .. } => message,
            Self::Skipped { reason } => reason,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { message, details: Some(d) } => write!(f, "{message} ({d})"),
            other => f.write_str(other.message()),
        }
    }
}
