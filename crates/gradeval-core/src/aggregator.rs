//! # Credit Aggregator
//!
//! Folds a student's completed subjects through the category resolver and
//! sums credits into the four category buckets plus a total.
//!
//! Subjects resolving to `NotOffered` are excluded from every sum — they
//! neither help nor harm standing — but the exclusion stays observable via
//! [`CreditDetails::not_offered`] so a caller can flag data-entry mistakes.
//!
//! Duplicate identifiers in the input are rejected, not deduplicated:
//! a completed set is supposed to be a set, and a repeated entry points at
//! an upstream data bug the caller should see immediately.

use crate::catalog::Catalog;
use crate::resolver::resolve;
use crate::types::{Category, CompletedSet, EvalError, Resolution, SubjectId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// CREDITS
// =============================================================================

/// Credit sums per category plus the overall total.
///
/// All sums use saturating arithmetic. `total` counts only offered
/// subjects; a not-offered subject contributes to no field at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub compulsory: u32,
    pub limited_elective: u32,
    pub standard_elective: u32,
    pub elective: u32,
    pub total: u32,
}

impl Credits {
    /// Add a subject's credit value to the bucket for its category.
    fn accumulate(&mut self, category: Category, credit: u32) {
        let bucket = match category {
            Category::Compulsory => &mut self.compulsory,
            Category::LimitedElective => &mut self.limited_elective,
            Category::StandardElective => &mut self.standard_elective,
            Category::Elective => &mut self.elective,
        };
        *bucket = bucket.saturating_add(credit);
        self.total = self.total.saturating_add(credit);
    }

    /// Combined limited + standard elective sum, used by the
    /// `limited_standard` requirement check.
    #[must_use]
    pub fn limited_standard(&self) -> u32 {
        self.limited_elective.saturating_add(self.standard_elective)
    }
}

// =============================================================================
// CREDIT DETAILS
// =============================================================================

/// Aggregation output: the credit sums plus, per category, the subject
/// identifiers that produced them, and the diagnostic list of completed
/// subjects the track does not offer.
///
/// All identifier lists are sorted ascending, so two aggregations over the
/// same completed set compare equal regardless of input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditDetails {
    /// Per-category credit sums and total.
    pub credits: Credits,
    /// Subjects that counted as compulsory.
    pub compulsory_subjects: Vec<SubjectId>,
    /// Subjects that counted as limited elective.
    pub limited_elective_subjects: Vec<SubjectId>,
    /// Subjects that counted as standard elective.
    pub standard_elective_subjects: Vec<SubjectId>,
    /// Subjects that counted as elective.
    pub elective_subjects: Vec<SubjectId>,
    /// Completed subjects with no category mapping under the track.
    /// Excluded from every sum, surfaced for diagnostics.
    pub not_offered: Vec<SubjectId>,
}

impl CreditDetails {
    fn record(&mut self, subject: SubjectId, resolution: Resolution, credit: u32) {
        match resolution {
            Resolution::Offered(category) => {
                self.credits.accumulate(category, credit);
                let list = match category {
                    Category::Compulsory => &mut self.compulsory_subjects,
                    Category::LimitedElective => &mut self.limited_elective_subjects,
                    Category::StandardElective => &mut self.standard_elective_subjects,
                    Category::Elective => &mut self.elective_subjects,
                };
                list.push(subject);
            }
            Resolution::NotOffered => self.not_offered.push(subject),
        }
    }
}

// =============================================================================
// AGGREGATION
// =============================================================================

/// Aggregate a completed set into per-category credit sums.
///
/// Deterministic and order-independent: iterating the completed set in any
/// permutation yields an identical [`CreditDetails`].
///
/// # Errors
///
/// - [`EvalError::DuplicateSubject`] if an identifier occurs more than once
///   in the input (checked before any resolution).
/// - [`EvalError::UnknownSubject`] propagated from the resolver.
///
/// On any error no partial tally is produced; downstream consumers never
/// see a silently-incomplete summary.
pub fn aggregate(completed: &CompletedSet, catalog: &Catalog) -> Result<CreditDetails, EvalError> {
    // Duplicate check first, over the raw input, so a repeated unknown
    // subject still reports the duplicate rather than the lookup failure.
    let mut seen = BTreeSet::new();
    for &subject in &completed.subjects {
        if !seen.insert(subject) {
            return Err(EvalError::DuplicateSubject(subject));
        }
    }

    let mut details = CreditDetails::default();
    // Iterate the deduplicated BTreeSet, not the input Vec: sums are
    // commutative anyway, but this keeps the subject lists sorted without
    // a separate pass.
    for &subject in &seen {
        let resolution = resolve(subject, completed.track, catalog)?;
        let credit = catalog
            .get(subject)
            .map(|s| s.credit)
            .ok_or(EvalError::UnknownSubject(subject))?;
        details.record(subject, resolution, credit);
    }

    Ok(details)
}

// =============================================================================
// TESTS
// =============================================================================
