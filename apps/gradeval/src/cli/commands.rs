//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::cli::CliError;
use crate::files::{load_catalog, load_student, load_thresholds};
use gradeval_core::{CreditSummary, ThresholdConfig, ThresholdPolicy, Track, summarize};
use std::path::Path;

// =============================================================================
// EVALUATE COMMAND
// =============================================================================

/// Evaluate a student's credit standing.
pub fn cmd_evaluate(
    catalog_path: &Path,
    student_path: &Path,
    thresholds_path: Option<&Path>,
    json_mode: bool,
) -> Result<(), CliError> {
    let catalog = load_catalog(catalog_path)?;
    let record = load_student(student_path)?;
    let policy = match thresholds_path {
        Some(path) => load_thresholds(path)?,
        None => ThresholdPolicy::default(),
    };

    tracing::info!(
        student = record.student_id.as_str(),
        course = %record.course,
        subjects = record.completed_subjects.len(),
        "evaluating credit standing"
    );

    let completed = record.completed_set()?;
    let summary = summarize(&record.student_id, &completed, &catalog, &policy)?;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
        return Ok(());
    }

    print_summary(&summary, policy.for_track(summary.track));
    Ok(())
}

/// Render a summary as a human-readable report.
fn print_summary(summary: &CreditSummary, thresholds: &ThresholdConfig) {
    let credits = &summary.details.credits;
    let met = &summary.requirements_met;

    println!("Credit Summary");
    println!("==============");
    println!("Student: {}", summary.student_id.as_str());
    println!("Track:   {}", summary.track);
    println!();
    println!(
        "Compulsory:        {:>4}  (needs {:>3})  {}",
        credits.compulsory,
        thresholds.compulsory,
        verdict(met.compulsory)
    );
    println!(
        "Limited elective:  {:>4}  (needs {:>3})  {}",
        credits.limited_elective,
        thresholds.limited_elective,
        verdict(met.limited_elective)
    );
    println!(
        "Limited+standard:  {:>4}  (needs {:>3})  {}",
        credits.limited_standard(),
        thresholds.limited_standard,
        verdict(met.limited_standard_elective)
    );
    println!(
        "Standard elective: {:>4}",
        credits.standard_elective
    );
    println!("Elective:          {:>4}", credits.elective);
    println!(
        "Total:             {:>4}  (needs {:>3})  {}",
        credits.total,
        thresholds.total,
        verdict(met.total_credits)
    );
    println!();

    if !summary.details.not_offered.is_empty() {
        let ids: Vec<String> = summary
            .details
            .not_offered
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!(
            "Note: {} completed subject(s) not offered under track {} and excluded: {}",
            ids.len(),
            summary.track,
            ids.join(", ")
        );
        println!();
    }

    println!(
        "Overall: {}",
        if met.total {
            "all graduation requirements met"
        } else {
            "requirements NOT yet met"
        }
    );
}

fn verdict(met: bool) -> &'static str {
    if met { "met" } else { "not met" }
}

// =============================================================================
// CATALOG COMMAND
// =============================================================================

/// Validate the catalog file and show per-track subject counts.
pub fn cmd_catalog(catalog_path: &Path, json_mode: bool) -> Result<(), CliError> {
    let catalog = load_catalog(catalog_path)?;

    if json_mode {
        let per_track: serde_json::Map<String, serde_json::Value> = Track::ALL
            .iter()
            .map(|t| (t.to_string(), catalog.offered_under(*t).into()))
            .collect();
        let output = serde_json::json!({
            "catalog": catalog_path.to_string_lossy(),
            "subject_count": catalog.len(),
            "offered_per_track": per_track,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Catalog Status");
    println!("==============");
    println!("File:     {:?}", catalog_path);
    println!("Subjects: {}", catalog.len());
    println!();
    for track in Track::ALL {
        println!(
            "Track {}: {} subject(s) offered",
            track,
            catalog.offered_under(track)
        );
    }

    Ok(())
}

// =============================================================================
// THRESHOLDS COMMAND
// =============================================================================

/// Show effective thresholds after per-track override resolution.
pub fn cmd_thresholds(
    thresholds_path: Option<&Path>,
    track: Option<&str>,
    json_mode: bool,
) -> Result<(), CliError> {
    let policy = match thresholds_path {
        Some(path) => load_thresholds(path)?,
        None => ThresholdPolicy::default(),
    };

    let tracks: Vec<Track> = match track {
        Some(s) => vec![s.parse().map_err(CliError::Eval)?],
        None => Track::ALL.to_vec(),
    };

    if json_mode {
        let output: serde_json::Map<String, serde_json::Value> = tracks
            .iter()
            .map(|t| {
                let config = policy.for_track(*t);
                let value = serde_json::json!({
                    "compulsory": config.compulsory,
                    "limited_elective": config.limited_elective,
                    "limited_standard": config.limited_standard,
                    "total": config.total,
                });
                (t.to_string(), value)
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(output)).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Effective Thresholds");
    println!("====================");
    for t in tracks {
        let config = policy.for_track(t);
        println!();
        println!("Track {}:", t);
        println!("  Compulsory:       {}", config.compulsory);
        println!("  Limited elective: {}", config.limited_elective);
        println!("  Limited+standard: {}", config.limited_standard);
        println!("  Total:            {}", config.total);
    }

    Ok(())
}
