//! # Credit Summary
//!
//! The one-call entry point composing the three evaluation stages:
//! resolve categories, aggregate credits, check requirements. The output
//! is a freshly constructed [`CreditSummary`] keyed to the student and
//! track supplied — the payload an API layer would serialize to callers.
//!
//! Nothing is cached between calls; the engine holds no state, so results
//! are pure functions of (completed set, catalog, thresholds) and callers
//! may memoize them externally if they wish.

use crate::aggregator::{CreditDetails, aggregate};
use crate::catalog::Catalog;
use crate::requirements::{RequirementsMet, ThresholdPolicy, evaluate};
use crate::types::{CompletedSet, EvalError, StudentId, Track};
use serde::{Deserialize, Serialize};

/// Complete evaluation result for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSummary {
    /// The student the summary is keyed to. Passed through unverified;
    /// identity is an external collaborator's concern.
    pub student_id: StudentId,
    /// The track the evaluation ran under.
    pub track: Track,
    /// Credit sums, per-category subject lists, not-offered diagnostics.
    pub details: CreditDetails,
    /// Per-requirement and overall verdicts.
    pub requirements_met: RequirementsMet,
}

/// Evaluate a student's standing against their track's requirements.
///
/// Chains aggregation and requirement evaluation over read-only snapshots
/// of the catalog and threshold policy. Per-track threshold overrides are
/// resolved from `policy` using the completed set's track.
///
/// # Errors
///
/// Propagates [`EvalError::DuplicateSubject`] and
/// [`EvalError::UnknownSubject`] from aggregation. On error no summary is
/// produced; "requirement not met" is never signalled through the error
/// channel — it is a valid verdict inside the summary.
pub fn summarize(
    student_id: &StudentId,
    completed: &CompletedSet,
    catalog: &Catalog,
    policy: &ThresholdPolicy,
) -> Result<CreditSummary, EvalError> {
    let details = aggregate(completed, catalog)?;
    let thresholds = policy.for_track(completed.track);
    let requirements_met = evaluate(&details.credits, thresholds);

    Ok(CreditSummary {
        student_id: student_id.clone(),
        track: completed.track,
        details,
        requirements_met,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::ThresholdConfig;
    use crate::types::{Category, Subject, SubjectId};
    use std::collections::BTreeMap;

    fn subject(id: u64, credit: u32, mappings: &[(Track, Category)]) -> Subject {
        let categories: BTreeMap<Track, Category> = mappings.iter().copied().collect();
        Subject::new(SubjectId(id), format!("Subject {id}"), credit, categories)
    }

    #[test]
    fn summary_is_keyed_to_student_and_track() {
        let catalog = Catalog::from_subjects([subject(
            1,
            4,
            &[(Track::B, Category::Compulsory)],
        )])
        .expect("catalog");
        let completed = CompletedSet::new(Track::B, vec![SubjectId(1)]);
        let student = StudentId::new("s-1024");

        let summary = summarize(&student, &completed, &catalog, &ThresholdPolicy::default())
            .expect("summary");
        assert_eq!(summary.student_id, student);
        assert_eq!(summary.track, Track::B);
        assert_eq!(summary.details.credits.compulsory, 4);
        assert!(!summary.requirements_met.total);
    }

    #[test]
    fn per_track_override_changes_verdict() {
        let catalog = Catalog::from_subjects([subject(
            1,
            4,
            &[(Track::A, Category::Compulsory)],
        )])
        .expect("catalog");
        let completed = CompletedSet::new(Track::A, vec![SubjectId(1)]);
        let student = StudentId::new("s-1");

        let mut policy = ThresholdPolicy::default();
        policy.per_track.insert(
            Track::A,
            ThresholdConfig {
                compulsory: 4,
                limited_elective: 0,
                limited_standard: 0,
                total: 4,
            },
        );

        let summary = summarize(&student, &completed, &catalog, &policy).expect("summary");
        assert!(summary.requirements_met.total);
    }

    #[test]
    fn evaluation_error_produces_no_summary() {
        let catalog = Catalog::new();
        let completed = CompletedSet::new(Track::A, vec![SubjectId(1)]);
        let student = StudentId::new("s-1");

        assert_eq!(
            summarize(&student, &completed, &catalog, &ThresholdPolicy::default()),
            Err(EvalError::UnknownSubject(SubjectId(1)))
        );
    }
}
