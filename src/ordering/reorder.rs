//! Canonical ordering of an import block.
//!
//! Builds the canonical order (groups in category priority, each group sorted
//! by ascending rendered length), compares it against the order found in the
//! file, and renders the full replacement block on a mismatch.
//!
//! The rendered text for each statement is injected by the caller rather than
//! read from any host source store, so the reorderer is testable with
//! synthetic statements.

use crate::ordering::category::{Category, group};
use crate::parsing::Import;
use crate::types::ByteRange;

/// Outcome of analyzing one file's import block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Imports already follow the canonical order.
    Compliant,
    /// Imports deviate from the canonical order.
    Violation {
        /// Range of the first out-of-place statement, for diagnostics.
        anchor: ByteRange,
        /// Range spanning the whole import block, from the start of the
        /// first statement to the end of the last.
        replace_range: ByteRange,
        /// Replacement text for the whole block.
        canonical_text: String,
    },
}

impl Decision {
    pub fn is_compliant(&self) -> bool {
        matches!(self, Decision::Compliant)
    }
}

/// Compare the import block against its canonical order.
///
/// `render` maps a statement to its exact source text (the substring covered
/// by its range, trailing annotations included, surrounding whitespace
/// excluded). It is called once per statement.
///
/// Exactly one violation is reported per block: comparison stops at the
/// first mismatch, since a single full-block replacement fixes every
/// misplaced statement at once.
pub fn analyze<'s>(imports: &[Import], render: impl Fn(&Import) -> &'s str) -> Decision {
    // Nothing can be misordered until there are two statements; skip the
    // grouping and sorting entirely.
    if imports.len() < 2 {
        return Decision::Compliant;
    }

    let texts: Vec<&str> = imports.iter().map(&render).collect();

    // Canonical order as positions into `imports`, tagged with the category
    // that placed each one.
    let mut canonical: Vec<(usize, Category)> = Vec::with_capacity(imports.len());
    for bucket in group(imports) {
        let mut members = bucket.members;
        // Stable sort: same-length statements keep their original relative
        // order, so repeated runs on unchanged input agree.
        members.sort_by_key(|&position| texts[position].len());
        canonical.extend(members.into_iter().map(|p| (p, bucket.category)));
    }

    // Identity comparison: position per position against the original order.
    let mismatch = canonical
        .iter()
        .enumerate()
        .find(|&(slot, &(position, _))| slot != position);
    let Some((first_mismatch, _)) = mismatch else {
        return Decision::Compliant;
    };

    let mut text = String::new();
    let mut previous: Option<Category> = None;
    for &(position, category) in &canonical {
        if previous.is_some_and(|p| p != category) {
            text.push('\n');
        }
        text.push_str(texts[position]);
        text.push('\n');
        previous = Some(category);
    }

    Decision::Violation {
        anchor: imports[first_mismatch].range,
        replace_range: imports[0].range.cover(imports[imports.len() - 1].range),
        canonical_text: text.trim_end().to_string(),
    }
}
