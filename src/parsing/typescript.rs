//! TypeScript import extraction
//!
//! Uses the tree-sitter TSX grammar, which also handles plain TypeScript and
//! JavaScript files, avoiding ERROR roots in TSX files.
//!
//! Only the leading contiguous import block is collected: top-level
//! statements are walked in order and collection stops at the first
//! statement that is not an import. Imports past that point belong to code
//! the reorderer must never touch, since its fix replaces the whole span
//! from the first collected statement to the last.
//!
//! Only statement-level facts are extracted: the quoted source path, the
//! type-only marker, and the statement's byte range. Import clauses (default,
//! named, namespace specifiers) are irrelevant to ordering and are not
//! inspected.

use crate::error::{ParseError, ParseResult};
use crate::parsing::Import;
use crate::types::ByteRange;
use tree_sitter::{Language, Node, Parser};

/// TypeScript/JavaScript import parser
pub struct TypeScriptParser {
    parser: Parser,
}

impl TypeScriptParser {
    /// Create a new TypeScript parser
    pub fn new() -> ParseResult<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_typescript::LANGUAGE_TSX.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::ParserInit {
                language: "TypeScript".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse source code and extract the leading contiguous import block,
    /// in source order.
    ///
    /// Comments and a hashbang line do not interrupt the block; any other
    /// top-level statement ends it.
    pub fn parse_imports(&mut self, code: &str) -> ParseResult<Vec<Import>> {
        let tree = self.parser.parse(code, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();

        let mut imports = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "import_statement" => {
                    self.process_import_statement(child, code, &mut imports);
                }
                "comment" | "hash_bang_line" => {}
                _ => break,
            }
        }
        Ok(imports)
    }

    /// Process an import statement node
    fn process_import_statement(&self, node: Node, code: &str, imports: &mut Vec<Import>) {
        crate::debug_print!(
            self,
            "import statement: {}",
            &code[node.byte_range()]
        );

        // Type-only imports carry a 'type' keyword right after 'import'
        let mut is_type_only = false;
        let mut cursor = node.walk();
        for (i, child) in node.children(&mut cursor).enumerate() {
            if child.kind() == "type" && i == 1 {
                is_type_only = true;
            }
        }

        // The module being imported from. Malformed statements without a
        // source are skipped; there is nothing to classify.
        let source_node = match node.child_by_field_name("source") {
            Some(n) => n,
            None => return,
        };

        let source_path = &code[source_node.byte_range()];
        let source_path = source_path.trim_matches(|c| c == '"' || c == '\'' || c == '`');

        let byte_range = node.byte_range();
        imports.push(Import {
            path: source_path.to_string(),
            is_type_only,
            range: ByteRange::new(byte_range.start, byte_range.end),
        });
    }
}
