//! # Category Resolver
//!
//! Resolves the category a subject falls into under a specific track.
//!
//! Categorization is track-relative: the same subject can be Compulsory
//! under track A, Elective under track B, and absent under track C. The
//! resolver therefore looks up the subject's per-track category map with
//! the student's track, and reports an explicit [`Resolution::NotOffered`]
//! when the track has no mapping — it never defaults to a category, so a
//! subject a track does not recognize can never silently count toward that
//! track's requirements.

use crate::catalog::Catalog;
use crate::types::{EvalError, Resolution, SubjectId, Track};

/// Resolve the category for a (subject, track) pair.
///
/// Pure lookup with no side effects.
///
/// # Errors
///
/// Returns [`EvalError::UnknownSubject`] if the identifier has no catalog
/// entry. This is a caller error (bad input), not an internal failure; a
/// subject that exists but is not offered under the track is the `Ok`
/// outcome [`Resolution::NotOffered`] instead.
pub fn resolve(
    subject: SubjectId,
    track: Track,
    catalog: &Catalog,
) -> Result<Resolution, EvalError> {
    let entry = catalog
        .get(subject)
        .ok_or(EvalError::UnknownSubject(subject))?;

    Ok(match entry.category_for(track) {
        Some(category) => Resolution::Offered(category),
        None => Resolution::NotOffered,
    })
}

// =============================================================================
// TESTS
// =============================================================================
