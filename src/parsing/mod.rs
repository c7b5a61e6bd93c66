//! Source parsing: turning files into import statement lists.

pub mod import;
pub mod typescript;

pub use import::Import;
pub use typescript::TypeScriptParser;
