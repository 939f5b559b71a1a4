//! Pre-flight host validation for the training environment
//!
//! Verifies the host can carry the external Python ML stack before a virtual
//! environment is created: interpreter present, interpreter version in the
//! supported range, enough free disk space, and (non-blocking) enough memory.
//!
//! # Example
//!
//! ```
//! use arcade_dqn::preflight::{CheckResult, CheckType, Preflight, PreflightCheck, StaticProbe};
//!
//! let probe = StaticProbe::new()
//!     .with_interpreter("Python 3.11.4")
//!     .with_free_disk_mb(10_000)
//!     .with_total_memory_mb(16_384);
//!
//! let preflight = Preflight::new()
//!     .add_check(PreflightCheck::interpreter_present())
//!     .add_check(PreflightCheck::interpreter_version())
//!     .add_check(PreflightCheck::disk_space_mb(2048));
//!
//! let results = preflight.run(&probe);
//! assert!(results.all_passed());
//! ```

mod check_result;
mod checks;
mod probe;
mod results;
mod types;
mod validator;
mod version;

pub use check_result::CheckResult;
pub use checks::PreflightCheck;
pub use probe::{HostProbe, StaticProbe, SystemProbe};
pub use results::PreflightResults;
pub use types::{
    CheckMetadata, CheckType, PreflightContext, PreflightError, DEFAULT_INTERPRETER,
    DEFAULT_MIN_DISK_MB, DEFAULT_MIN_MEMORY_MB,
};
pub use validator::Preflight;
pub use version::{PythonVersion, VersionRange};
