//! Configuration module for the import-order linter.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `IMPORDER_` and use double
//! underscores to separate nested levels:
//! - `IMPORDER_DEBUG=true` sets `debug`
//! - `IMPORDER_LINT__EXTENSIONS=["ts"]` sets `lint.extensions`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

fn default_version() -> u32 {
    1
}

fn default_false() -> bool {
    false
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .imporder is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Lint configuration
    #[serde(default)]
    pub lint: LintConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LintConfig {
    /// File extensions to lint
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Additional patterns to ignore during traversal
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            lint: LintConfig::default(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_patterns: Vec::new(),
        }
    }
}

static GLOBAL_DEBUG: OnceLock<bool> = OnceLock::new();

/// Record the loaded debug flag so `debug_print!` can read it without
/// threading settings everywhere.
pub fn set_global_debug(enabled: bool) {
    let _ = GLOBAL_DEBUG.set(enabled);
}

pub fn is_global_debug_enabled() -> bool {
    *GLOBAL_DEBUG.get().unwrap_or(&false)
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        // Try to find the workspace root by looking for .imporder directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(".imporder/settings.toml"));

        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Layer in environment variables with IMPORDER_ prefix.
            // Double underscore separates nested levels, single underscore
            // remains as is within field names.
            .merge(Env::prefixed("IMPORDER_").map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                // If workspace_root is not set in config, detect it
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("IMPORDER_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find the workspace root by looking for .imporder directory
    /// Searches from current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(".imporder");
            if config_dir.exists() && config_dir.is_dir() {
                return Some(config_dir.join("settings.toml"));
            }
        }

        None
    }

    /// Get the workspace root directory (where .imporder is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(".imporder");
            if config_dir.exists() && config_dir.is_dir() {
                return Some(ancestor.to_path_buf());
            }
        }

        None
    }

    /// Save current configuration to file
    pub fn save(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(".imporder/settings.toml");

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let current_dir = std::env::current_dir().unwrap_or_default();
        let template = format!(
            r#"# Imporder Configuration File

# Version of the configuration schema
version = 1

# Workspace root directory (automatically detected)
workspace_root = "{}"

# Global debug mode
debug = false

[lint]
# File extensions to lint
extensions = ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"]

# Additional patterns to ignore during traversal (gitignore syntax also
# works via a .imporderignore file at the workspace root)
ignore_patterns = []
"#,
            current_dir.display()
        );

        std::fs::write(&config_path, template)?;
        println!(
            "Created default configuration at: {}",
            config_path.display()
        );

        Ok(config_path)
    }
}
