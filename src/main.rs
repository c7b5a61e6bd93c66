//! CLI entry point for the import-order linter.
//!
//! Provides commands for checking and fixing import order in TypeScript and
//! JavaScript files. Main components: Cli parser, Commands enum, and the
//! per-file lint loop.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use imporder::io::{ExitCode, OutputFormat, OutputManager};
use imporder::lint::{Diagnostic, FileWalker, Linter};
use imporder::{LintError, Settings};
use std::path::PathBuf;
use std::sync::Arc;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser)]
#[command(
    name = "imporder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import-order linter for TypeScript and JavaScript",
    long_about = "Check that import blocks are grouped by category and sorted by length, and rewrite them when they are not.",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Check import order without modifying files
    #[command(
        after_help = "Examples:\n  imporder check src\n  imporder check src/app.ts src/view.tsx\n  imporder check src --json | jq '.data[].file'"
    )]
    Check {
        /// Files or directories to check (defaults to current directory)
        #[arg(num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Rewrite import blocks that are not in canonical order
    #[command(
        after_help = "Examples:\n  imporder fix src\n  imporder fix src --dry-run"
    )]
    Fix {
        /// Files or directories to fix (defaults to current directory)
        #[arg(num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Print the rewritten import blocks instead of writing files
        #[arg(long)]
        dry_run: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Initialize project
    #[command(about = "Set up .imporder directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    #[command(about = "Display active settings from .imporder/settings.toml")]
    Config {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Expand the CLI path arguments into the list of files to lint.
///
/// Explicit file arguments must carry a configured extension; directories
/// are walked with the extension filter and ignore rules.
fn collect_files(paths: &[PathBuf], settings: Arc<Settings>) -> Result<Vec<PathBuf>, LintError> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let extensions = settings.lint.extensions.clone();
    let walker = FileWalker::new(settings);
    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            let extension = root
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_string();
            if !extensions.iter().any(|ext| *ext == extension) {
                return Err(LintError::UnsupportedFileType {
                    path: root.clone(),
                    extension,
                });
            }
            files.push(root);
        } else if root.is_dir() {
            files.extend(walker.walk(&root));
        } else {
            return Err(LintError::Walk {
                path: root.clone(),
                reason: "path does not exist".to_string(),
            });
        }
    }
    Ok(files)
}

fn run_check(
    paths: &[PathBuf],
    settings: Arc<Settings>,
    output: &mut OutputManager,
) -> std::io::Result<ExitCode> {
    let files = match collect_files(paths, settings) {
        Ok(files) => files,
        Err(e) => return output.error(&e),
    };

    let mut linter = match Linter::new() {
        Ok(linter) => linter,
        Err(e) => return output.error(&e),
    };

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for file in &files {
        match linter.check_file(file) {
            Ok(Some(diagnostic)) => diagnostics.push(diagnostic),
            Ok(None) => {}
            Err(e) => return output.error(&e),
        }
    }

    output.diagnostics(diagnostics, files.len())
}

fn run_fix(
    paths: &[PathBuf],
    dry_run: bool,
    settings: Arc<Settings>,
    output: &mut OutputManager,
) -> std::io::Result<ExitCode> {
    let files = match collect_files(paths, settings) {
        Ok(files) => files,
        Err(e) => return output.error(&e),
    };

    let mut linter = match Linter::new() {
        Ok(linter) => linter,
        Err(e) => return output.error(&e),
    };

    let mut fixed: Vec<Diagnostic> = Vec::new();
    for file in &files {
        let result = if dry_run {
            linter.check_file(file)
        } else {
            linter.fix_file(file)
        };
        match result {
            Ok(Some(diagnostic)) => {
                if dry_run {
                    output.info(&format!("--- {}", file.display()))?;
                    output.info(&diagnostic.fix.replacement)?;
                }
                fixed.push(diagnostic);
            }
            Ok(None) => {}
            Err(e) => return output.error(&e),
        }
    }

    if !dry_run {
        output.progress(&format!("Fixed {} file(s)", fixed.len()))?;
    }
    output.diagnostics(fixed, files.len())
}

fn main() {
    let cli = Cli::parse();

    // Load configuration
    let settings = if let Some(config_path) = &cli.config {
        match Settings::load_from(config_path) {
            Ok(settings) => settings,
            Err(e) => {
                let error = LintError::ConfigError {
                    reason: format!("{} ({})", e, config_path.display()),
                };
                eprintln!("Error: {error}");
                std::process::exit(ExitCode::from_error(&error) as i32);
            }
        }
    } else {
        Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            Settings::default()
        })
    };

    imporder::config::set_global_debug(settings.debug);
    let settings = Arc::new(settings);

    let exit_code = match &cli.command {
        Commands::Init { force } => {
            let config_path = PathBuf::from(".imporder/settings.toml");

            if config_path.exists() && !force {
                eprintln!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                );
                eprintln!("Use --force to overwrite");
                std::process::exit(ExitCode::GeneralError as i32);
            }

            match Settings::init_config_file(*force) {
                Ok(path) => {
                    println!("Edit {} to customize your settings.", path.display());
                    ExitCode::Success
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::ConfigError
                }
            }
        }

        Commands::Config { json } => {
            let mut output = OutputManager::new(OutputFormat::from_json_flag(*json));
            match toml::to_string_pretty(settings.as_ref()) {
                Ok(toml_str) => output.success(toml_str).unwrap_or_else(|e| {
                    eprintln!("Output error: {e}");
                    ExitCode::BlockingError
                }),
                Err(e) => {
                    eprintln!("Error displaying config: {e}");
                    ExitCode::GeneralError
                }
            }
        }

        Commands::Check { paths, json } => {
            let mut output = OutputManager::new(OutputFormat::from_json_flag(*json));
            run_check(paths, settings.clone(), &mut output).unwrap_or_else(|e| {
                eprintln!("Output error: {e}");
                ExitCode::BlockingError
            })
        }

        Commands::Fix {
            paths,
            dry_run,
            json,
        } => {
            let mut output = OutputManager::new(OutputFormat::from_json_flag(*json));
            run_fix(paths, *dry_run, settings.clone(), &mut output).unwrap_or_else(|e| {
                eprintln!("Output error: {e}");
                ExitCode::BlockingError
            })
        }
    };

    std::process::exit(exit_code.into());
}
