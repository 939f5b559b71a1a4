//! Interpreter version parsing and range checks.

use std::fmt;
use std::str::FromStr;

/// A parsed `major.minor[.patch]` interpreter version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Parse `--version` output such as `Python 3.11.4` or a bare `3.12`.
    ///
    /// Pre-release suffixes (`3.13.0rc1`) are dropped from the patch number.
    pub fn parse(text: &str) -> Option<Self> {
        let token = text
            .split_whitespace()
            .find(|tok| tok.chars().next().is_some_and(|c| c.is_ascii_digit()))?;

        let mut parts = token.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = leading_digits(parts.next()?)?;
        let patch = parts.next().and_then(leading_digits).unwrap_or(0);
        Some(Self { major, minor, patch })
    }
}

fn leading_digits(s: &str) -> Option<u32> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

impl FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Cannot parse interpreter version from '{s}'"))
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Closed-open `[min, max)` range over `(major, minor)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: (u32, u32),
    pub max_exclusive: (u32, u32),
}

impl Default for VersionRange {
    /// Versions the external training stack supports: `[3.9, 3.13)`
    fn default() -> Self {
        Self::new((3, 9), (3, 13))
    }
}

impl VersionRange {
    pub fn new(min: (u32, u32), max_exclusive: (u32, u32)) -> Self {
        Self { min, max_exclusive }
    }

    pub fn contains(&self, version: &PythonVersion) -> bool {
        let key = (version.major, version.minor);
        key >= self.min && key < self.max_exclusive
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ">={}.{}, <{}.{}",
            self.min.0, self.min.1, self.max_exclusive.0, self.max_exclusive.1
        )
    }
}
