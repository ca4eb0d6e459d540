//! # Gradeval - Credit Requirement Evaluation
//!
//! The main binary for the gradeval engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                apps/gradeval (THE BINARY)             │
//! │                                                       │
//! │  ┌────────────┐        ┌───────────────────────────┐  │
//! │  │   CLI      │        │  File providers           │  │
//! │  │  (clap)    │───────▶│  catalog / student /      │  │
//! │  └────────────┘        │  thresholds               │  │
//! │                        └────────────┬──────────────┘  │
//! │                                     ▼                 │
//! │                            ┌────────────────┐         │
//! │                            │ gradeval-core  │         │
//! │                            │  (THE LOGIC)   │         │
//! │                            └────────────────┘         │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Evaluate a student's credit standing
//! gradeval -C catalog.json evaluate -s student.json
//!
//! # With a thresholds file and JSON output
//! gradeval -C catalog.json --json-mode evaluate -s student.json -t thresholds.toml
//!
//! # Inspect the catalog or effective thresholds
//! gradeval -C catalog.json catalog
//! gradeval thresholds --track A
//! ```

use clap::Parser;
use gradeval::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — GRADEVAL_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("GRADEVAL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gradeval=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command. A non-zero exit marks an evaluation failure (bad
    // data); an unmet requirement is a normal, successful evaluation.
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the gradeval startup banner.
fn print_banner() {
    println!(
        r#"
  gradeval v{}

  Deterministic • Track-relative • Auditable
"#,
        env!("CARGO_PKG_VERSION")
    );
}
