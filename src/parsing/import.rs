//! Import statement representation
//!
//! This module defines the Import struct produced by the parser and consumed
//! by the ordering core.

use crate::types::ByteRange;

/// One import statement extracted from a source file.
///
/// Read-only view: the ordering core never mutates an Import, it only
/// reorders references to them and synthesizes new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// The quoted module path being imported from, quotes stripped
    /// (e.g. "react", "@scope/pkg", "./util")
    pub path: String,
    /// Whether this is a type-only import (`import type { Foo } from ...`)
    pub is_type_only: bool,
    /// Byte offsets of the whole statement within the file, surrounding
    /// whitespace excluded. Slicing the source with this range yields the
    /// statement's rendered text.
    pub range: ByteRange,
}
