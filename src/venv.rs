//! Virtual environment directory management
//!
//! The installer's only side effect: create a Python virtual environment at a
//! fixed relative path when it is missing. An existing directory is never
//! touched, so running setup twice is the same as running it once.

use crate::preflight::PreflightError;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default environment location, relative to the working directory
pub const DEFAULT_VENV_DIR: &str = "venv";

/// Outcome of [`VirtualEnv::ensure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvStatus {
    /// The directory was absent and has been created
    Created,
    /// The directory already existed and was left untouched
    AlreadyPresent,
}

/// A virtual environment rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    path: PathBuf,
}

impl Default for VirtualEnv {
    fn default() -> Self {
        Self::new(DEFAULT_VENV_DIR)
    }
}

impl VirtualEnv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if the environment directory exists
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Path of the environment's interpreter
    pub fn python(&self) -> PathBuf {
        if cfg!(windows) {
            self.path.join("Scripts").join("python.exe")
        } else {
            self.path.join("bin").join("python")
        }
    }

    /// Create the environment with `<python> -m venv <dir>` if it is missing
    pub fn ensure(&self, python: &str) -> Result<VenvStatus, PreflightError> {
        self.ensure_with(|dir| {
            let output = Command::new(python).args(["-m", "venv"]).arg(dir).output()?;
            if output.status.success() {
                Ok(())
            } else {
                Err(io::Error::other(format!(
                    "{python} -m venv {} exited with {}: {}",
                    dir.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                )))
            }
        })
    }

    /// Same as [`ensure`](Self::ensure) with a caller-supplied creator
    pub fn ensure_with<F>(&self, create: F) -> Result<VenvStatus, PreflightError>
    where
        F: FnOnce(&Path) -> io::Result<()>,
    {
        if self.exists() {
            return Ok(VenvStatus::AlreadyPresent);
        }
        if self.path.exists() {
            return Err(PreflightError::Environment(format!(
                "{} exists but is not a directory",
                self.path.display()
            )));
        }

        create(&self.path)?;

        if !self.exists() {
            return Err(PreflightError::Environment(format!(
                "virtual environment was not created at {}",
                self.path.display()
            )));
        }
        Ok(VenvStatus::Created)
    }
}
