//! Setup command implementation
//!
//! Host gates run first; the virtual environment is only touched once every
//! required check has passed.

use super::preflight_context;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::SetupArgs;
use crate::preflight::{HostProbe, Preflight, PreflightContext, PreflightError, SystemProbe};
use crate::venv::{VenvStatus, VirtualEnv};
use std::path::Path;

/// Installer context; the disk gate defaults to the venv's parent directory
pub(crate) fn setup_context(args: &SetupArgs) -> PreflightContext {
    let venv_parent = args
        .venv_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    preflight_context(&args.preflight, venv_parent)
}

pub fn run_setup(args: SetupArgs, level: LogLevel) -> Result<(), String> {
    let python = args.preflight.python.clone();
    setup_with(&args, level, &SystemProbe::new(), |venv| venv.ensure(&python))
}

/// Run the installer against `probe`, then hand the environment to `ensure`
pub(crate) fn setup_with<F>(
    args: &SetupArgs,
    level: LogLevel,
    probe: &dyn HostProbe,
    ensure: F,
) -> Result<(), String>
where
    F: FnOnce(&VirtualEnv) -> Result<VenvStatus, PreflightError>,
{
    log(level, LogLevel::Normal, "Checking host prerequisites...");

    let preflight = Preflight::installer(setup_context(args));
    let results = preflight
        .validate(probe)
        .map_err(|e| format!("Preflight failed: {e}"))?;

    log(level, LogLevel::Verbose, &results.report());
    for (check, result) in results.warnings() {
        log(level, LogLevel::Normal, &format!("⚠ {}: {result}", check.name));
    }

    let venv = VirtualEnv::new(&args.venv_dir);
    let status = ensure(&venv).map_err(|e| format!("Environment setup failed: {e}"))?;

    let msg = match status {
        VenvStatus::Created => format!("Created virtual environment at {}", venv.path().display()),
        VenvStatus::AlreadyPresent => {
            format!("Virtual environment already present at {}", venv.path().display())
        }
    };
    log(level, LogLevel::Normal, &msg);
    log(level, LogLevel::Normal, "Setup complete");

    Ok(())
}
