//! Import categorization.
//!
//! Every import statement is assigned to exactly one category via an ordered
//! rule list evaluated top-to-bottom, first match wins. The rule order is the
//! category priority order used when concatenating sorted groups, so the two
//! never drift apart.

use crate::parsing::Import;

/// Ordered category labels for import statements.
///
/// Declaration order is priority order: a canonical import block lists
/// third-party imports first and unmatched stragglers last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Bare package name: neither relative nor scoped (`react`, `lodash/fp`)
    ThirdParty,
    /// Scoped package: path starts with `@` (`@scope/pkg`)
    Scoped,
    /// Same-directory relative: `./x` (also `.x`, which some bundlers accept)
    SingleDotRelative,
    /// Remaining relative paths: `../x` and anything else starting `./` or `../`
    MultiDotRelative,
    /// Statement marked `import type`, when no path rule claimed it first
    TypeOnly,
    /// Catch-all so nothing is silently dropped (e.g. a bare `.` or `..`)
    Unmatched,
}

/// One classification rule: the first rule whose predicate accepts the
/// import decides its category.
struct Rule {
    category: Category,
    matches: fn(&Import) -> bool,
}

/// The predicates overlap (every `./x` path also looks like a relative path
/// to the multi-dot rule), so evaluation order carries the semantics.
const RULES: &[Rule] = &[
    Rule {
        category: Category::ThirdParty,
        matches: |import| !import.path.starts_with('.') && !import.path.starts_with('@'),
    },
    Rule {
        category: Category::Scoped,
        matches: |import| import.path.starts_with('@'),
    },
    Rule {
        category: Category::SingleDotRelative,
        // `.` followed by anything except a second dot: `./x`, `.x`
        matches: |import| {
            let mut chars = import.path.chars();
            chars.next() == Some('.') && matches!(chars.next(), Some(c) if c != '.')
        },
    },
    Rule {
        category: Category::MultiDotRelative,
        matches: |import| import.path.starts_with("./") || import.path.starts_with("../"),
    },
    Rule {
        category: Category::TypeOnly,
        matches: |import| import.is_type_only,
    },
    // Trailing catch-all: a statement no rule claims (bare `.` or `..` that
    // is not type-only) keeps its place instead of vanishing from the block.
    Rule {
        category: Category::Unmatched,
        matches: |_| true,
    },
];

/// Assign an import to its category. Pure and total.
pub fn classify(import: &Import) -> Category {
    RULES
        .iter()
        .find(|rule| (rule.matches)(import))
        .map(|rule| rule.category)
        .expect("catch-all rule always matches")
}

/// Imports of one category, as positions into the original statement list,
/// in original order.
#[derive(Debug)]
pub struct Group {
    pub category: Category,
    pub members: Vec<usize>,
}

/// Bucket statements by category.
///
/// Buckets come back in category priority order regardless of which category
/// appeared first in the file, and empty buckets are dropped.
pub fn group(imports: &[Import]) -> Vec<Group> {
    const CATEGORY_COUNT: usize = 6;
    let mut buckets: [Vec<usize>; CATEGORY_COUNT] = Default::default();

    for (position, import) in imports.iter().enumerate() {
        buckets[classify(import) as usize].push(position);
    }

    let order = [
        Category::ThirdParty,
        Category::Scoped,
        Category::SingleDotRelative,
        Category::MultiDotRelative,
        Category::TypeOnly,
        Category::Unmatched,
    ];

    order
        .into_iter()
        .zip(buckets)
        .filter(|(_, members)| !members.is_empty())
        .map(|(category, members)| Group { category, members })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ByteRange;

    fn import(path: &str) -> Import {
        Import {
            path: path.to_string(),
            is_type_only: false,
            range: ByteRange::new(0, 0),
        }
    }

    fn type_import(path: &str) -> Import {
        Import {
            is_type_only: true,
            ..import(path)
        }
    }

    #[test]
    fn test_classify_third_party() {
        assert_eq!(classify(&import("react")), Category::ThirdParty);
        assert_eq!(classify(&import("lodash/fp")), Category::ThirdParty);
        assert_eq!(classify(&import("node:fs")), Category::ThirdParty);
    }

    #[test]
    fn test_classify_scoped() {
        assert_eq!(classify(&import("@scope/pkg")), Category::Scoped);
        assert_eq!(classify(&import("@angular/core")), Category::Scoped);
    }

    #[test]
    fn test_classify_relative() {
        assert_eq!(classify(&import("./sibling")), Category::SingleDotRelative);
        assert_eq!(classify(&import(".config")), Category::SingleDotRelative);
        assert_eq!(classify(&import("../parent")), Category::MultiDotRelative);
        assert_eq!(
            classify(&import("../../grandparent")),
            Category::MultiDotRelative
        );
    }

    #[test]
    fn test_first_match_wins_over_type_only() {
        // A type-only import with a classifiable path keeps its path category
        assert_eq!(classify(&type_import("react")), Category::ThirdParty);
        assert_eq!(classify(&type_import("./local")), Category::SingleDotRelative);
    }

    #[test]
    fn test_type_only_reached_when_no_path_rule_matches() {
        // Bare `.` matches neither the single-dot nor the multi-dot rule
        assert_eq!(classify(&type_import(".")), Category::TypeOnly);
    }

    #[test]
    fn test_unmatched_catch_all() {
        assert_eq!(classify(&import(".")), Category::Unmatched);
        assert_eq!(classify(&import("..")), Category::Unmatched);
    }

    #[test]
    fn test_group_priority_order_and_empty_buckets() {
        // Scoped appears before third-party in the file; buckets still come
        // back in priority order, and categories with no members are absent.
        let imports = vec![import("@scope/a"), import("react"), import("./x")];
        let groups = group(&imports);

        let categories: Vec<Category> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::ThirdParty,
                Category::Scoped,
                Category::SingleDotRelative
            ]
        );
        assert_eq!(groups[0].members, vec![1]);
        assert_eq!(groups[1].members, vec![0]);
        assert_eq!(groups[2].members, vec![2]);
    }

    #[test]
    fn test_group_preserves_input_order_within_bucket() {
        let imports = vec![import("zlib"), import("./a"), import("react"), import("./b")];
        let groups = group(&imports);
        assert_eq!(groups[0].members, vec![0, 2]);
        assert_eq!(groups[1].members, vec![1, 3]);
    }
}
