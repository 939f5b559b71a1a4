//! Disk and memory checks.

use super::{CheckResult, CheckType, PreflightCheck};

impl PreflightCheck {
    /// Check free disk space on the working directory's filesystem
    pub fn disk_space_mb(min_mb: u64) -> Self {
        Self::new(
            "disk_space",
            CheckType::Resources,
            format!("Ensures at least {min_mb} MB disk space available"),
            move |probe, ctx| {
                let required = ctx.min_disk_space_mb.unwrap_or(min_mb);
                match probe.free_disk_mb(&ctx.workdir) {
                    Some(avail_mb) if avail_mb >= required => CheckResult::passed(format!(
                        "{avail_mb} MB available (minimum: {required} MB)"
                    )),
                    Some(avail_mb) => CheckResult::failed_with_details(
                        "insufficient disk space",
                        format!("{avail_mb} MB available, minimum: {required} MB"),
                    ),
                    None => CheckResult::failed_with_details(
                        "insufficient disk space",
                        format!(
                            "could not determine free space in {} (need {required} MB)",
                            ctx.workdir.display()
                        ),
                    ),
                }
            },
        )
    }

    /// Check total memory; below the threshold this only warns
    pub fn memory_mb(min_mb: u64) -> Self {
        Self::new(
            "memory",
            CheckType::Resources,
            format!("Recommends at least {min_mb} MB total memory"),
            move |probe, ctx| {
                let recommended = ctx.min_memory_mb.unwrap_or(min_mb);
                match probe.total_memory_mb() {
                    Some(total_mb) if total_mb >= recommended => CheckResult::passed(format!(
                        "{total_mb} MB total (recommended: {recommended} MB)"
                    )),
                    Some(total_mb) => CheckResult::warning(format!(
                        "Only {total_mb} MB total memory (recommended: {recommended} MB), training may be slow"
                    )),
                    None => CheckResult::warning("Could not determine total memory"),
                }
            },
        )
        .optional()
    }
}
