//! Check command implementation

use super::preflight_context;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PreflightArgs;
use crate::preflight::{HostProbe, Preflight, SystemProbe};
use std::path::Path;

pub fn run_check(args: PreflightArgs, level: LogLevel) -> Result<(), String> {
    check_with(&args, level, &SystemProbe::new())
}

pub(crate) fn check_with(
    args: &PreflightArgs,
    level: LogLevel,
    probe: &dyn HostProbe,
) -> Result<(), String> {
    let results = Preflight::installer(preflight_context(args, Path::new("."))).run(probe);
    log(level, LogLevel::Normal, &results.report());

    if results.all_passed() {
        Ok(())
    } else {
        let failed: Vec<_> = results.failed_checks().iter().map(|(c, _)| c.name.clone()).collect();
        Err(format!("{} check(s) failed: {}", failed.len(), failed.join(", ")))
    }
}
