//! # Subject Catalog
//!
//! Read-only snapshot of the subject catalog for the duration of one
//! evaluation. The engine never refreshes or mutates it mid-evaluation;
//! catalog lifecycle (creation, updates, persistence) belongs to an
//! external catalog-management collaborator.
//!
//! Backed by a `BTreeMap` so iteration order is deterministic.

use crate::types::{EvalError, Subject, SubjectId, Track};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full subject list with per-track category maps and credit values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    subjects: BTreeMap<SubjectId, Subject>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a subject, validating its credit value.
    ///
    /// Credits are positive integers; a zero credit value is rejected with
    /// [`EvalError::InvalidCredit`]. Re-inserting an existing identifier
    /// replaces the previous entry (last write wins, matching a snapshot
    /// built from an external source of truth).
    pub fn insert(&mut self, subject: Subject) -> Result<(), EvalError> {
        if subject.credit == 0 {
            return Err(EvalError::InvalidCredit(subject.id));
        }
        self.subjects.insert(subject.id, subject);
        Ok(())
    }

    /// Build a catalog from a list of subjects.
    pub fn from_subjects(subjects: impl IntoIterator<Item = Subject>) -> Result<Self, EvalError> {
        let mut catalog = Self::new();
        for subject in subjects {
            catalog.insert(subject)?;
        }
        Ok(catalog)
    }

    /// Look up a subject by identifier.
    #[must_use]
    pub fn get(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(&id)
    }

    /// Whether the catalog contains the given identifier.
    #[must_use]
    pub fn contains(&self, id: SubjectId) -> bool {
        self.subjects.contains_key(&id)
    }

    /// Number of subjects in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Iterate over subjects in ascending identifier order.
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }

    /// Number of subjects offered under the given track.
    #[must_use]
    pub fn offered_under(&self, track: Track) -> usize {
        self.subjects
            .values()
            .filter(|s| s.categories.contains_key(&track))
            .count()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn subject(id: u64, credit: u32, mappings: &[(Track, Category)]) -> Subject {
        let categories = mappings.iter().copied().collect();
        Subject::new(SubjectId(id), format!("Subject {id}"), credit, categories)
    }

    #[test]
    fn insert_rejects_zero_credit() {
        let mut catalog = Catalog::new();
        let err = catalog
            .insert(subject(1, 0, &[]))
            .expect_err("zero credit must be rejected");
        assert_eq!(err, EvalError::InvalidCredit(SubjectId(1)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut catalog = Catalog::new();
        catalog
            .insert(subject(1, 2, &[(Track::A, Category::Elective)]))
            .expect("insert");
        catalog
            .insert(subject(1, 4, &[(Track::A, Category::Compulsory)]))
            .expect("insert");

        assert_eq!(catalog.len(), 1);
        let stored = catalog.get(SubjectId(1)).expect("present");
        assert_eq!(stored.credit, 4);
        assert_eq!(stored.category_for(Track::A), Some(Category::Compulsory));
    }

    #[test]
    fn offered_under_counts_per_track() {
        let catalog = Catalog::from_subjects([
            subject(1, 4, &[(Track::A, Category::Compulsory)]),
            subject(2, 3, &[(Track::A, Category::Elective), (Track::B, Category::Compulsory)]),
            subject(3, 2, &[(Track::B, Category::Elective)]),
        ])
        .expect("catalog");

        assert_eq!(catalog.offered_under(Track::A), 2);
        assert_eq!(catalog.offered_under(Track::B), 2);
        assert_eq!(catalog.offered_under(Track::C), 0);
    }
}
