//! Preflight results and the text report.

use super::{CheckMetadata, CheckResult};

/// Results from running preflight checks
#[derive(Debug, Clone)]
pub struct PreflightResults {
    results: Vec<(CheckMetadata, CheckResult)>,
    passed: bool,
    passed_count: usize,
    failed_count: usize,
    warning_count: usize,
    skipped_count: usize,
}

impl PreflightResults {
    /// Tally a list of check outcomes
    pub(crate) fn from_outcomes(results: Vec<(CheckMetadata, CheckResult)>) -> Self {
        let mut tally = Self {
            results: Vec::new(),
            passed: true,
            passed_count: 0,
            failed_count: 0,
            warning_count: 0,
            skipped_count: 0,
        };
        for (check, result) in &results {
            match result {
                CheckResult::Passed { .. } => tally.passed_count += 1,
                CheckResult::Failed { .. } => {
                    tally.failed_count += 1;
                    if check.required {
                        tally.passed = false;
                    }
                }
                CheckResult::Warning { .. } => tally.warning_count += 1,
                CheckResult::Skipped { .. } => tally.skipped_count += 1,
            }
        }
        tally.results = results;
        tally
    }

    /// True if every required check passed
    pub fn all_passed(&self) -> bool {
        self.passed
    }

    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    pub fn failed_count(&self) -> usize {
        self.failed_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }

    /// All results, in check order
    pub fn results(&self) -> &[(CheckMetadata, CheckResult)] {
        &self.results
    }

    /// Required checks that failed
    pub fn failed_checks(&self) -> Vec<(&CheckMetadata, &CheckResult)> {
        self.results
            .iter()
            .filter(|(check, result)| check.required && result.is_failed())
            .map(|(c, r)| (c, r))
            .collect()
    }

    pub fn warnings(&self) -> Vec<(&CheckMetadata, &CheckResult)> {
        self.results.iter().filter(|(_, result)| result.is_warning()).map(|(c, r)| (c, r)).collect()
    }

    /// Format results as a report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();
        lines.push("=== Preflight Check Results ===".to_string());
        lines.push(format!("Status: {}", if self.passed { "PASSED" } else { "FAILED" }));
        lines.push(format!(
            "Passed: {}, Failed: {}, Warnings: {}, Skipped: {}",
            self.passed_count, self.failed_count, self.warning_count, self.skipped_count
        ));
        lines.push(String::new());

        for (check, result) in &self.results {
            let status = match result {
                CheckResult::Passed { .. } => "✓",
                CheckResult::Failed { .. } => "✗",
                CheckResult::Warning { .. } => "⚠",
                CheckResult::Skipped { .. } => "○",
            };
            lines.push(format!("{status} {}: {result}", check.name));
        }

        lines.join("\n")
    }
}
