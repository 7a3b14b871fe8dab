//! CMIP7 controlled-vocabulary generator
//!
//! A CLI tool that generates the fast-track experiment and activity CV
//! entries and checks generated trees for filename/id consistency.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p cmipcv-gen -- generate \
//!   --universe-root . --project-root ../CMIP7-CVs
//! cargo run -p cmipcv-gen -- check --root . --root ../CMIP7-CVs
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmipcv_core::check::{check_entry_filenames, DEFAULT_SKIP_DIRS};
use cmipcv_core::config::GenConfig;
use cmipcv_fasttrack::build_fast_track;

/// CMIP7 controlled-vocabulary generator
#[derive(Parser, Debug)]
#[command(name = "cmipcv-gen")]
#[command(about = "Generate and check CMIP7 controlled-vocabulary JSON entries")]
struct Cli {
    /// Configuration file with default roots and checker exclusions
    #[arg(long, default_value = "cvgen.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the fast-track experiment and activity entries
    Generate {
        /// Root of the universe vocabulary tree
        #[arg(long)]
        universe_root: Option<PathBuf>,

        /// Root of the project (CMIP7) vocabulary tree
        #[arg(long)]
        project_root: Option<PathBuf>,
    },
    /// Check that entry filenames match their declared ids
    Check {
        /// Vocabulary roots to scan (repeatable)
        #[arg(long)]
        root: Vec<PathBuf>,

        /// Directory names to skip (repeatable)
        #[arg(long)]
        skip: Vec<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match GenConfig::load_if_present(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Generate {
            universe_root,
            project_root,
        } => run_generate(
            resolve_path(universe_root, config.universe_root, "."),
            resolve_path(project_root, config.project_root, "../CMIP7-CVs"),
        ),
        Command::Check { root, skip } => run_check(
            if root.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                root
            },
            resolve_skip_dirs(skip, config.skip_dirs),
        ),
    }
}

/// Command-line flag beats configuration file beats built-in default.
fn resolve_path(flag: Option<PathBuf>, config: Option<PathBuf>, default: &str) -> PathBuf {
    flag.or(config).unwrap_or_else(|| PathBuf::from(default))
}

fn resolve_skip_dirs(flags: Vec<String>, config: Option<Vec<String>>) -> Vec<String> {
    if !flags.is_empty() {
        flags
    } else {
        config.unwrap_or_else(|| DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect())
    }
}

fn run_generate(universe_root: PathBuf, project_root: PathBuf) -> ExitCode {
    for dir in [
        universe_root.join("experiment"),
        project_root.join("experiment"),
        project_root.join("activity"),
    ] {
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("Failed to create output directory {}: {e}", dir.display());
            return ExitCode::FAILURE;
        }
    }

    let collection = match build_fast_track() {
        Ok(collection) => collection,
        Err(failures) => {
            for failure in &failures {
                eprintln!("{failure}");
            }
            eprintln!("Generation failed with {} errors", failures.len());
            return ExitCode::FAILURE;
        }
    };

    match collection.write_all(&universe_root, &project_root) {
        Ok(written) => {
            for path in &written {
                println!("Wrote {}", path.display());
            }
            println!(
                "Generated {} entries under {} and {}",
                written.len(),
                universe_root.display(),
                project_root.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write entries: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_check(roots: Vec<PathBuf>, skip_dirs: Vec<String>) -> ExitCode {
    let mut failed = false;
    for root in &roots {
        match check_entry_filenames(root, &skip_dirs) {
            Ok(checked) => {
                println!("Checked {checked} entries under {}", root.display());
            }
            Err(e) => {
                eprintln!("{}: {e}", root.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
