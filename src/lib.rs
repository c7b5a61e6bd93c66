/// The main library module for imporder
// Debug macro for consistent debug output
#[macro_export]
macro_rules! debug_print {
    ($self:expr, $($arg:tt)*) => {
        if $crate::config::is_global_debug_enabled() {
            eprintln!("DEBUG: {}", format!($($arg)*));
        }
    };
}

pub mod config;
pub mod error;
pub mod io;
pub mod lint;
pub mod ordering;
pub mod parsing;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{LintError, LintResult, ParseError, ParseResult};
pub use lint::{Diagnostic, FileWalker, Fix, Linter, apply_fix};
pub use ordering::{Category, Decision, analyze, classify, group};
pub use parsing::{Import, TypeScriptParser};
pub use types::ByteRange;
