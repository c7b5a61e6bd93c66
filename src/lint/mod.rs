//! Linting: diagnostics, fixes, and the per-file driver.

pub mod linter;
pub mod walker;

pub use linter::{Linter, VIOLATION_MESSAGE};
pub use walker::FileWalker;

use crate::types::ByteRange;
use serde::Serialize;
use std::path::PathBuf;

/// A byte-range replacement that rewrites the import block.
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    /// Start of the first import statement to end of the last
    pub range: ByteRange,
    /// The canonical import block, blank lines between categories included
    pub replacement: String,
}

/// One reported violation. At most one per file.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    /// 1-based line of the first out-of-place statement
    pub line: u32,
    pub message: String,
    pub fix: Fix,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file.display(), self.line, self.message)
    }
}

/// Splice a fix into source text, leaving everything outside its range
/// untouched.
pub fn apply_fix(code: &str, fix: &Fix) -> String {
    let mut result = String::with_capacity(
        code.len() - fix.range.len() + fix.replacement.len(),
    );
    result.push_str(&code[..fix.range.start]);
    result.push_str(&fix.replacement);
    result.push_str(&code[fix.range.end..]);
    result
}
