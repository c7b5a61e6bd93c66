//! Shared primitive types for source positions.

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into a source file.
///
/// All statement positions and replacement ranges are expressed in bytes so
/// that splicing replacement text back into the file is a plain slice
/// operation, independent of encoding width or line endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "byte range start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extend this range to cover another one.
    pub fn cover(&self, other: ByteRange) -> ByteRange {
        ByteRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// 1-based line number of a byte offset, for diagnostics.
pub fn line_of_offset(code: &str, offset: usize) -> u32 {
    let clamped = offset.min(code.len());
    code[..clamped].bytes().filter(|&b| b == b'\n').count() as u32 + 1
}
