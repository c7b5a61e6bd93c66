//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - all checked files are compliant
//! - `1`: General error - unspecified failure
//! - `2`: Blocking error - critical failure that should halt automation
//! - `3-125`: Specific recoverable conditions
//! - `126-255`: Reserved by shell

use crate::error::LintError;

/// Standard exit codes for CLI operations.
///
/// These codes follow Unix conventions where 0 indicates success,
/// and non-zero values indicate various error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded, nothing to report (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Critical error that should halt automation (code 2)
    BlockingError = 2,

    /// Command executed successfully but violations were found (code 3)
    ViolationsFound = 3,

    /// Failed to parse files (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Determine the exit code for a check run from its diagnostic count.
    pub fn from_violation_count(count: usize) -> Self {
        if count == 0 {
            ExitCode::Success
        } else {
            ExitCode::ViolationsFound
        }
    }

    /// Convert a `LintError` to the appropriate exit code.
    ///
    /// Maps specific error types to semantic exit codes that scripts
    /// can use to determine appropriate recovery actions.
    pub fn from_error(error: &LintError) -> Self {
        match error {
            LintError::FileRead { .. } | LintError::FileWrite { .. } | LintError::Walk { .. } => {
                ExitCode::IoError
            }

            LintError::Parse { .. } | LintError::UnsupportedFileType { .. } => ExitCode::ParseError,

            LintError::ConfigError { .. } => ExitCode::ConfigError,

            LintError::General(_) => ExitCode::GeneralError,
        }
    }
}
