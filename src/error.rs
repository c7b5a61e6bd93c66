//! Error types for the import-order linter.
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lint operations
#[derive(Error, Debug)]
pub enum LintError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parsing errors
    #[error("Failed to parse '{path}': {source}")]
    Parse { path: PathBuf, source: ParseError },

    /// Directory traversal errors
    #[error("Failed to walk '{path}': {reason}")]
    Walk { path: PathBuf, reason: String },

    #[error(
        "Unsupported file type '{extension}' for file '{path}'. Configure extensions in settings.toml under [lint]."
    )]
    UnsupportedFileType { path: PathBuf, extension: String },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl LintError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::Walk { .. } => "WALK_ERROR",
            Self::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::FileWrite { .. } => vec![
                "Check write permissions on the file and its directory",
                "Re-run 'imporder check' to confirm the file still needs fixing",
            ],
            Self::Parse { .. } => vec![
                "Check that the file is valid TypeScript or JavaScript",
                "Files with syntax errors are skipped, fix them first",
            ],
            Self::UnsupportedFileType { .. } => vec![
                "Only TypeScript and JavaScript files are linted by default",
                "Add the extension under [lint] in .imporder/settings.toml",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'imporder init --force' to regenerate the configuration",
                "Check .imporder/settings.toml for syntax errors",
            ],
            _ => vec![],
        }
    }
}

/// Errors specific to parsing operations
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("Tree-sitter returned no syntax tree for this source")]
    NoTree,
}

/// Result type alias for lint operations
pub type LintResult<T> = Result<T, LintError>;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
