//! Host state readers used by the environment checks.

use std::path::Path;
use std::process::Command;

/// Read-only view of the host the installer runs on
///
/// `None` means the value could not be determined (program missing, command
/// unavailable on this platform, unparseable output).
pub trait HostProbe {
    /// Raw `--version` output of `program`, or `None` when it cannot be run
    fn interpreter_version(&self, program: &str) -> Option<String>;

    /// Free space on the filesystem holding `dir`, in MiB
    fn free_disk_mb(&self, dir: &Path) -> Option<u64>;

    /// Total physical memory, in MiB
    fn total_memory_mb(&self) -> Option<u64>;
}

/// Probe that queries the real host through `df`, `free` and the interpreter
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }
}

impl HostProbe for SystemProbe {
    fn interpreter_version(&self, program: &str) -> Option<String> {
        let output = Command::new(program).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        // Python 2 and early 3.x print the version on stderr.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            text = String::from_utf8_lossy(&output.stderr).into_owned();
        }
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn free_disk_mb(&self, dir: &Path) -> Option<u64> {
        #[cfg(unix)]
        {
            let output = Command::new("df").arg("-Pm").arg(dir).output().ok()?;
            parse_df_available(&String::from_utf8_lossy(&output.stdout))
        }
        #[cfg(not(unix))]
        {
            let _ = dir;
            None
        }
    }

    fn total_memory_mb(&self) -> Option<u64> {
        #[cfg(unix)]
        {
            let output = Command::new("free").arg("-m").output().ok()?;
            parse_free_total(&String::from_utf8_lossy(&output.stdout))
        }
        #[cfg(not(unix))]
        {
            None
        }
    }
}

/// Parse POSIX `df -Pm` output (second line, fourth column is available)
pub(crate) fn parse_df_available(stdout: &str) -> Option<u64> {
    stdout.lines().nth(1)?.split_whitespace().nth(3)?.parse().ok()
}

/// Parse `free -m` output (`Mem:` line, first number is total)
pub(crate) fn parse_free_total(stdout: &str) -> Option<u64> {
    let line = stdout.lines().find(|l| l.trim_start().starts_with("Mem:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}

/// Probe answering from fixed values
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    interpreter: Option<String>,
    free_disk_mb: Option<u64>,
    total_memory_mb: Option<u64>,
}

impl StaticProbe {
    /// A host with nothing installed and unknown resources
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `output` as the interpreter's `--version` output
    pub fn with_interpreter(mut self, output: impl Into<String>) -> Self {
        self.interpreter = Some(output.into());
        self
    }

    pub fn with_free_disk_mb(mut self, mb: u64) -> Self {
        self.free_disk_mb = Some(mb);
        self
    }

    pub fn with_total_memory_mb(mut self, mb: u64) -> Self {
        self.total_memory_mb = Some(mb);
        self
    }
}

impl HostProbe for StaticProbe {
    fn interpreter_version(&self, _program: &str) -> Option<String> {
        self.interpreter.clone()
    }

    fn free_disk_mb(&self, _dir: &Path) -> Option<u64> {
        self.free_disk_mb
    }

    fn total_memory_mb(&self) -> Option<u64> {
        self.total_memory_mb
    }
}
