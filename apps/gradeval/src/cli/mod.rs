//! # Gradeval CLI Module
//!
//! This module implements the CLI interface for gradeval.
//!
//! ## Available Commands
//!
//! - `evaluate`   - Evaluate a student record against the catalog
//! - `catalog`    - Validate the catalog and show per-track subject counts
//! - `thresholds` - Show effective thresholds after per-track overrides

mod commands;

use clap::{Parser, Subcommand};
use gradeval_core::EvalError;
use std::path::PathBuf;
use thiserror::Error;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Gradeval - Credit Requirement Evaluation
///
/// A deterministic engine for academic credit standing: track-relative
/// subject categorization, per-category credit sums, and graduation
/// requirement checks.
#[derive(Parser, Debug)]
#[command(name = "gradeval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the subject catalog (JSON)
    #[arg(short = 'C', long, global = true, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a student's credit standing
    Evaluate {
        /// Path to the student record file (JSON)
        #[arg(short, long)]
        student: PathBuf,

        /// Path to a thresholds file (TOML); defaults apply when omitted
        #[arg(short, long)]
        thresholds: Option<PathBuf>,
    },

    /// Validate the catalog and show per-track subject counts
    Catalog,

    /// Show effective thresholds after per-track override resolution
    Thresholds {
        /// Path to a thresholds file (TOML); defaults apply when omitted
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        /// Show a single track (A, B, or C) instead of all
        #[arg(long)]
        track: Option<String>,
    },
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors at the CLI boundary: engine failures plus file I/O and parsing.
///
/// Engine errors pass through typed, so "evaluation failed" (a
/// data-integrity problem) is never conflated with "requirement not met"
/// (a valid verdict inside a successful evaluation).
#[derive(Debug, Error)]
pub enum CliError {
    /// Typed failure from the evaluation engine.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Filesystem error while reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file exceeds the size guard.
    #[error("file {path:?} is {size} bytes, exceeding the {max} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max: u64,
    },

    /// Malformed JSON input.
    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Malformed TOML configuration.
    #[error("invalid TOML in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Evaluate {
            student,
            thresholds,
        }) => cmd_evaluate(&cli.catalog, &student, thresholds.as_deref(), json_mode),
        Some(Commands::Catalog) => cmd_catalog(&cli.catalog, json_mode),
        Some(Commands::Thresholds { thresholds, track }) => {
            cmd_thresholds(thresholds.as_deref(), track.as_deref(), json_mode)
        }
        None => {
            // No subcommand: print help via clap's generated usage.
            use clap::CommandFactory;
            Cli::command()
                .print_help()
                .map_err(CliError::Io)?;
            println!();
            Ok(())
        }
    }
}
