//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::error::LintError;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// Manages output formatting and display.
///
/// Provides methods for outputting success results, diagnostic collections,
/// and errors in either text or JSON format based on configuration.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager for testing with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    /// Output a successful result.
    ///
    /// In JSON mode, wraps the data in a success response.
    /// In text mode, displays the data using its Display implementation.
    pub fn success<T>(&mut self, data: T) -> io::Result<ExitCode>
    where
        T: Serialize + Display,
    {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(&data).with_meta(ResponseMeta::now());
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stdout, "{data}")?;
            }
        }
        Ok(ExitCode::Success)
    }

    /// Output the diagnostics from a check or fix run.
    ///
    /// An empty collection means every file was compliant; the exit code
    /// distinguishes the two outcomes either way.
    pub fn diagnostics<T>(&mut self, items: Vec<T>, checked: usize) -> io::Result<ExitCode>
    where
        T: Serialize + Display,
    {
        let exit_code = ExitCode::from_violation_count(items.len());

        match self.format {
            OutputFormat::Json => {
                let response = if items.is_empty() {
                    JsonResponse::success(&items)
                } else {
                    JsonResponse::violations(&items, items.len())
                }
                .with_meta(ResponseMeta::now());
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                for item in &items {
                    writeln!(self.stdout, "{item}")?;
                }
                if items.is_empty() {
                    writeln!(self.stdout, "{checked} file(s) checked, all compliant")?;
                } else {
                    writeln!(
                        self.stdout,
                        "{checked} file(s) checked, {} with unsorted imports",
                        items.len()
                    )?;
                }
            }
        }
        Ok(exit_code)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &LintError) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "Error: {error}")?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        Ok(ExitCode::from_error(error))
    }

    /// Output progress information (text mode only).
    ///
    /// In JSON mode, progress messages are suppressed to avoid
    /// polluting the JSON output.
    pub fn progress(&mut self, message: &str) -> io::Result<()> {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(self.stderr, "{message}")?;
        }
        Ok(())
    }

    /// Output informational message (text mode only).
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(self.stdout, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Diagnostic, Fix};
    use crate::types::ByteRange;
    use std::path::PathBuf;

    fn sample_diagnostic() -> Diagnostic {
        Diagnostic {
            file: PathBuf::from("src/app.ts"),
            line: 2,
            message: crate::lint::VIOLATION_MESSAGE.to_string(),
            fix: Fix {
                range: ByteRange::new(0, 10),
                replacement: "import a from 'react';".to_string(),
            },
        }
    }

    #[test]
    fn test_text_diagnostics_exit_code() {
        let mut manager = OutputManager::new_with_writers(
            OutputFormat::Text,
            Box::new(Vec::new()),
            Box::new(Vec::new()),
        );

        let code = manager.diagnostics(vec![sample_diagnostic()], 5).unwrap();
        assert_eq!(code, ExitCode::ViolationsFound);

        let code = manager.diagnostics(Vec::<Diagnostic>::new(), 5).unwrap();
        assert_eq!(code, ExitCode::Success);
    }

    #[test]
    fn test_success_returns_success_exit_code() {
        let mut manager = OutputManager::new_with_writers(
            OutputFormat::Text,
            Box::new(Vec::new()),
            Box::new(Vec::new()),
        );

        let code = manager.success("debug = false".to_string()).unwrap();
        assert_eq!(code, ExitCode::Success);

        let mut manager = OutputManager::new_with_writers(
            OutputFormat::Json,
            Box::new(Vec::new()),
            Box::new(Vec::new()),
        );
        let code = manager.success("debug = false".to_string()).unwrap();
        assert_eq!(code, ExitCode::Success);
    }

    #[test]
    fn test_json_error_goes_to_stderr() {
        let mut manager = OutputManager::new_with_writers(
            OutputFormat::Json,
            Box::new(Vec::new()),
            Box::new(Vec::new()),
        );

        let error = LintError::General("boom".to_string());
        let code = manager.error(&error).unwrap();
        assert_eq!(code, ExitCode::GeneralError);
    }
}
