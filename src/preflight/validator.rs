//! Ordered preflight runner.

use super::types::{DEFAULT_MIN_DISK_MB, DEFAULT_MIN_MEMORY_MB};
use super::{
    CheckMetadata, CheckResult, HostProbe, PreflightCheck, PreflightContext, PreflightError,
    PreflightResults,
};

/// Preflight validation system
///
/// Checks run in insertion order.
#[derive(Debug, Default)]
pub struct Preflight {
    checks: Vec<PreflightCheck>,
    context: PreflightContext,
}

impl Preflight {
    /// Create an empty preflight
    pub fn new() -> Self {
        Self::default()
    }

    /// The installer gates: interpreter, version, disk (hard) then memory (warning)
    pub fn installer(context: PreflightContext) -> Self {
        Self::new()
            .add_check(PreflightCheck::interpreter_present())
            .add_check(PreflightCheck::interpreter_version())
            .add_check(PreflightCheck::disk_space_mb(DEFAULT_MIN_DISK_MB))
            .add_check(PreflightCheck::memory_mb(DEFAULT_MIN_MEMORY_MB))
            .with_context(context)
    }

    pub fn add_check(mut self, check: PreflightCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_context(mut self, context: PreflightContext) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> &PreflightContext {
        &self.context
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Run every check and collect the outcomes
    pub fn run(&self, probe: &dyn HostProbe) -> PreflightResults {
        let outcomes = self
            .checks
            .iter()
            .map(|check| (CheckMetadata::from(check), check.run(probe, &self.context)))
            .collect();
        PreflightResults::from_outcomes(outcomes)
    }

    /// Run checks in order, stopping at the first failed required check
    ///
    /// On success the returned results hold every check's outcome, including
    /// warnings from optional checks.
    pub fn validate(&self, probe: &dyn HostProbe) -> Result<PreflightResults, PreflightError> {
        let mut outcomes = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            let result = check.run(probe, &self.context);
            if check.required {
                if let CheckResult::Failed { .. } = &result {
                    return Err(PreflightError::for_check(
                        &check.check_type,
                        &check.name,
                        &result.to_string(),
                    ));
                }
            }
            outcomes.push((CheckMetadata::from(check), result));
        }

        Ok(PreflightResults::from_outcomes(outcomes))
    }
}
