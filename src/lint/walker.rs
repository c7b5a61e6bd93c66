//! File system walker for discovering source files to lint
//!
//! This module provides efficient directory traversal with support for:
//! - .gitignore rules
//! - Custom ignore patterns via .imporderignore
//! - Extension filtering from configuration
//! - Hidden file handling

use crate::Settings;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Walks directories to find source files to lint
#[derive(Debug)]
pub struct FileWalker {
    settings: Arc<Settings>,
}

impl FileWalker {
    /// Create a new file walker with the given settings
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Walk a directory and return an iterator of files to lint
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = PathBuf> {
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(false) // Don't traverse hidden directories by default
            .git_ignore(true) // Respect .gitignore files
            .git_global(true) // Respect global gitignore
            .git_exclude(true) // Respect .git/info/exclude
            .follow_links(false) // Don't follow symlinks by default
            .max_depth(None) // No depth limit
            .require_git(false); // Allow gitignore to work in non-git directories

        // Custom ignore patterns follow the .gitignore format
        builder.add_custom_ignore_filename(".imporderignore");

        // Patterns from settings become exclusion overrides. Invalid
        // patterns are skipped rather than aborting the walk.
        if !self.settings.lint.ignore_patterns.is_empty() {
            let mut overrides = ignore::overrides::OverrideBuilder::new(root);
            for pattern in &self.settings.lint.ignore_patterns {
                if overrides.add(&format!("!{pattern}")).is_err() {
                    crate::debug_print!(self, "skipping invalid ignore pattern: {pattern}");
                }
            }
            if let Ok(overrides) = overrides.build() {
                builder.overrides(overrides);
            }
        }

        let extensions = self.settings.lint.extensions.clone();

        builder
            .build()
            .filter_map(Result::ok) // Skip files we can't access
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(move |entry| {
                let path = entry.path();

                // Skip hidden files (files starting with .)
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if name.starts_with('.') {
                        return None;
                    }
                }

                let extension = path.extension().and_then(|e| e.to_str())?;
                if extensions.iter().any(|ext| ext == extension) {
                    Some(path.to_path_buf())
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_settings() -> Arc<Settings> {
        Arc::new(Settings::default())
    }

    #[test]
    fn test_walk_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("app.ts"), "import a from 'react';").unwrap();
        fs::write(root.join("view.tsx"), "import b from 'react';").unwrap();
        fs::write(root.join("notes.md"), "# notes").unwrap();
        fs::write(root.join("script.py"), "import os").unwrap();

        let walker = FileWalker::new(test_settings());
        let files: Vec<_> = walker.walk(root).collect();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("app.ts")));
        assert!(files.iter().any(|p| p.ends_with("view.tsx")));
    }

    #[test]
    fn test_ignore_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join(".hidden.ts"), "import h from 'react';").unwrap();
        fs::write(root.join("visible.ts"), "import v from 'react';").unwrap();

        let walker = FileWalker::new(test_settings());
        let files: Vec<_> = walker.walk(root).collect();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("visible.ts"));
    }

    #[test]
    fn test_ignore_patterns_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("skip.ts"), "import s from 'react';").unwrap();
        fs::write(root.join("keep.ts"), "import k from 'react';").unwrap();

        let mut settings = Settings::default();
        settings.lint.ignore_patterns = vec!["skip.ts".to_string()];

        let walker = FileWalker::new(Arc::new(settings));
        let files: Vec<_> = walker.walk(root).collect();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.ts"));
    }

    #[test]
    fn test_gitignore_respected() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        // Should work without git init due to require_git(false)
        fs::write(root.join(".gitignore"), "generated.ts\n").unwrap();
        fs::write(root.join("generated.ts"), "import g from 'react';").unwrap();
        fs::write(root.join("source.ts"), "import s from 'react';").unwrap();

        let walker = FileWalker::new(test_settings());
        let files: Vec<_> = walker.walk(root).collect();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("source.ts"));
    }
}
