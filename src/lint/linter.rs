//! Per-file lint driver.
//!
//! Wires the parser and the ordering core together: read a file, extract its
//! import statements, analyze their order, and map a violation to a
//! diagnostic with an attached fix. Applying the fix to disk is a separate
//! step so `check` stays side-effect free.

use crate::error::{LintError, LintResult};
use crate::lint::{Diagnostic, Fix, apply_fix};
use crate::ordering::{Decision, analyze};
use crate::parsing::TypeScriptParser;
use crate::types::line_of_offset;
use std::path::Path;

/// Message attached to every import-order diagnostic.
pub const VIOLATION_MESSAGE: &str = "Imports are not sorted correctly.";

/// Stateful only in that it owns one tree-sitter parser, reused across files.
pub struct Linter {
    parser: TypeScriptParser,
}

impl Linter {
    pub fn new() -> LintResult<Self> {
        let parser = TypeScriptParser::new()
            .map_err(|e| LintError::General(format!("Failed to initialize parser: {e}")))?;
        Ok(Self { parser })
    }

    /// Analyze source text. Returns the fix to apply when the import block
    /// deviates from canonical order, `None` when compliant.
    pub fn check_source(&mut self, path: &Path, code: &str) -> LintResult<Option<Diagnostic>> {
        let imports = self
            .parser
            .parse_imports(code)
            .map_err(|source| LintError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let decision = analyze(&imports, |import| &code[import.range.start..import.range.end]);

        match decision {
            Decision::Compliant => Ok(None),
            Decision::Violation {
                anchor,
                replace_range,
                canonical_text,
            } => Ok(Some(Diagnostic {
                file: path.to_path_buf(),
                line: line_of_offset(code, anchor.start),
                message: VIOLATION_MESSAGE.to_string(),
                fix: Fix {
                    range: replace_range,
                    replacement: canonical_text,
                },
            })),
        }
    }

    /// Check one file on disk.
    pub fn check_file(&mut self, path: &Path) -> LintResult<Option<Diagnostic>> {
        let code = std::fs::read_to_string(path).map_err(|source| LintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_source(path, &code)
    }

    /// Check one file and, if it violates, rewrite its import block in
    /// place. Returns the diagnostic that was fixed, `None` when the file
    /// was already compliant.
    pub fn fix_file(&mut self, path: &Path) -> LintResult<Option<Diagnostic>> {
        let code = std::fs::read_to_string(path).map_err(|source| LintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(diagnostic) = self.check_source(path, &code)? else {
            return Ok(None);
        };

        let fixed = apply_fix(&code, &diagnostic.fix);
        std::fs::write(path, fixed).map_err(|source| LintError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(diagnostic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn check(code: &str) -> Option<Diagnostic> {
        let mut linter = Linter::new().unwrap();
        linter.check_source(&PathBuf::from("test.ts"), code).unwrap()
    }

    #[test]
    fn test_compliant_source_yields_no_diagnostic() {
        let code = "import a from 'react';\nimport widget from 'lodash';\n";
        assert!(check(code).is_none());
    }

    #[test]
    fn test_violation_yields_diagnostic_with_fix() {
        let code = "import x from './x';\nimport a from 'react';\n";
        let diagnostic = check(code).expect("expected a violation");

        assert_eq!(diagnostic.message, VIOLATION_MESSAGE);
        assert_eq!(diagnostic.line, 1);
        assert_eq!(
            diagnostic.fix.replacement,
            "import a from 'react';\n\nimport x from './x';"
        );
    }

    #[test]
    fn test_fix_round_trip_is_idempotent() {
        let code = "import widget from 'lodash';\nimport a from '@s/p';\nimport b from 'react';\n";
        let diagnostic = check(code).expect("expected a violation");
        let fixed = apply_fix(code, &diagnostic.fix);

        // Re-analyzing the fixed source reports compliance
        assert!(check(&fixed).is_none());
    }

    #[test]
    fn test_surrounding_code_is_untouched() {
        let code = "// header\nimport x from './x';\nimport a from 'react';\n\nexport const y = 1;\n";
        let diagnostic = check(code).expect("expected a violation");
        let fixed = apply_fix(code, &diagnostic.fix);

        assert!(fixed.starts_with("// header\n"));
        assert!(fixed.ends_with("\nexport const y = 1;\n"));
        assert!(fixed.contains("import a from 'react';\n\nimport x from './x';"));
    }

    #[test]
    fn test_oddly_spaced_but_ordered_block_is_left_alone() {
        // Order is canonical; the missing blank line between categories is
        // not a violation because only statement order is compared.
        let code = "import a from 'react';\nimport x from './x';\n";
        assert!(check(code).is_none());
    }
}
