//! # Input File Providers
//!
//! File-based implementations of the engine's external collaborators:
//! the catalog provider, the student-record provider, and the threshold
//! configuration provider. Each load produces a validated, read-only
//! snapshot; the engine itself never touches the filesystem.
//!
//! ## Formats
//!
//! Catalog (JSON):
//! ```json
//! { "subjects": [
//!   { "id": 1, "name": "Linear Algebra", "credit": 4,
//!     "categories": { "A": "compulsory", "B": "elective" } }
//! ] }
//! ```
//!
//! Student record (JSON, field names follow the upstream records system):
//! ```json
//! { "student_id": "s-2021-0042", "course": "A",
//!   "completed_subjects": [1, 2, 3] }
//! ```
//!
//! Thresholds (TOML):
//! ```toml
//! [default]
//! compulsory = 26
//! limited_elective = 47
//! limited_standard = 59
//! total = 95
//!
//! [per_track.A]
//! compulsory = 30
//! limited_elective = 47
//! limited_standard = 59
//! total = 98
//! ```

use crate::cli::CliError;
use gradeval_core::{Catalog, CompletedSet, EvalError, StudentId, Subject, SubjectId, ThresholdPolicy, Track};
use serde::Deserialize;
use std::path::Path;

/// Maximum input file size (10 MB).
///
/// Catalogs and records are small; anything beyond this is a wrong file or
/// a malicious one, rejected before reading.
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

// =============================================================================
// WIRE SHAPES
// =============================================================================

/// Top-level shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    subjects: Vec<Subject>,
}

/// A student record as submitted by the records system.
///
/// `course` stays a string at this boundary so an unrecognized track is
/// reported as [`EvalError::UnknownTrack`] rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRecord {
    /// Opaque student key, echoed into the summary.
    pub student_id: StudentId,
    /// Track identifier, e.g. "A".
    pub course: String,
    /// Completed subject identifiers, exactly as submitted.
    pub completed_subjects: Vec<SubjectId>,
}

impl StudentRecord {
    /// Convert the record into the engine's evaluation input.
    ///
    /// # Errors
    ///
    /// [`EvalError::UnknownTrack`] if `course` is not a recognized track.
    pub fn completed_set(&self) -> Result<CompletedSet, EvalError> {
        let track: Track = self.course.parse()?;
        Ok(CompletedSet::new(track, self.completed_subjects.clone()))
    }
}

// =============================================================================
// LOADERS
// =============================================================================

/// Reject files larger than `max_size` before reading them.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), CliError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > max_size {
        return Err(CliError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: max_size,
        });
    }
    Ok(())
}

/// Load and validate a catalog snapshot from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    validate_file_size(path, MAX_INPUT_FILE_SIZE)?;
    let data = std::fs::read(path)?;
    let file: CatalogFile = serde_json::from_slice(&data).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    // Positive-credit validation happens at insertion.
    Ok(Catalog::from_subjects(file.subjects)?)
}

/// Load a student record from a JSON file.
pub fn load_student(path: &Path) -> Result<StudentRecord, CliError> {
    validate_file_size(path, MAX_INPUT_FILE_SIZE)?;
    let data = std::fs::read(path)?;
    serde_json::from_slice(&data).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a threshold policy from a TOML file.
///
/// Negative thresholds are a configuration error caught here, at load
/// time, independent of any particular evaluation.
pub fn load_thresholds(path: &Path) -> Result<ThresholdPolicy, CliError> {
    validate_file_size(path, MAX_INPUT_FILE_SIZE)?;
    let data = std::fs::read_to_string(path)?;
    let policy: ThresholdPolicy = toml::from_str(&data).map_err(|source| CliError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    policy.validate()?;
    Ok(policy)
}
