//! Interpreter presence and version checks.

use super::{CheckResult, CheckType, PreflightCheck};
use crate::preflight::PythonVersion;

impl PreflightCheck {
    /// Check that the interpreter binary can be executed
    pub fn interpreter_present() -> Self {
        Self::new(
            "interpreter",
            CheckType::Dependency,
            "Ensures the Python interpreter is installed",
            |probe, ctx| match probe.interpreter_version(&ctx.interpreter) {
                Some(output) => CheckResult::passed(format!("{} found ({output})", ctx.interpreter)),
                None => CheckResult::failed_with_details("interpreter not found", &ctx.interpreter),
            },
        )
    }

    /// Check that the interpreter version is inside the supported range
    pub fn interpreter_version() -> Self {
        Self::new(
            "python_version",
            CheckType::Version,
            "Ensures the Python version is supported by the training stack",
            |probe, ctx| {
                let Some(output) = probe.interpreter_version(&ctx.interpreter) else {
                    return CheckResult::skipped(format!("{} not found", ctx.interpreter));
                };
                let range = ctx.version_range;
                match PythonVersion::parse(&output) {
                    Some(version) if range.contains(&version) => {
                        CheckResult::passed(format!("Python {version} (supported: {range})"))
                    }
                    Some(version) => CheckResult::failed_with_details(
                        format!("unsupported version: Python {version}"),
                        format!("supported: {range}"),
                    ),
                    None => CheckResult::failed_with_details(
                        "unsupported version: cannot parse interpreter version",
                        output,
                    ),
                }
            },
        )
    }
}
