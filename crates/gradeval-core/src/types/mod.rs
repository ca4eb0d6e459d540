//! # Core Type Definitions
//!
//! This module contains the shared data model for the gradeval engine:
//! - Identifiers (`SubjectId`, `StudentId`)
//! - The closed `Track` and `Category` enumerations
//! - Catalog entries (`Subject`) and evaluation input (`CompletedSet`)
//! - The resolver outcome (`Resolution`)
//! - Error types (`EvalError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Represent categories and tracks as closed enums, so an unrecognized
//!   value is a construction-time error, never a silent no-op bucket

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier for a subject in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a student.
///
/// The engine performs no identity or ownership checks on this value;
/// it is echoed into the output summary so callers can key results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl StudentId {
    /// Create a new student identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// TRACK
// =============================================================================

/// The academic track (course) a student is enrolled under.
///
/// Tracks are a closed set used purely as a lookup key into each subject's
/// category map and into the threshold configuration. The same subject can
/// be Compulsory under one track, Elective under another, and not offered
/// at all under a third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Track {
    A,
    B,
    C,
}

impl Track {
    /// All recognized tracks, in canonical order.
    pub const ALL: [Track; 3] = [Track::A, Track::B, Track::C];

    /// Get the track name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Track::A => "A",
            Track::B => "B",
            Track::C => "C",
        }
    }
}

impl FromStr for Track {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Track::A),
            "B" => Ok(Track::B),
            "C" => Ok(Track::C),
            other => Err(EvalError::UnknownTrack(other.to_string())),
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// CATEGORY
// =============================================================================

/// The requirement bucket a subject's credits count toward under a track.
///
/// This is a closed enumeration: there is no open string matching, so a
/// typo in input data fails at deserialization instead of silently landing
/// in the wrong bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Compulsory,
    LimitedElective,
    StandardElective,
    Elective,
}

impl Category {
    /// Get a human-readable category name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Category::Compulsory => "compulsory",
            Category::LimitedElective => "limited elective",
            Category::StandardElective => "standard elective",
            Category::Elective => "elective",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SUBJECT
// =============================================================================

/// A catalog entry: a subject with its base credit value and per-track
/// category assignments.
///
/// The category map need not contain every track. A missing track means the
/// subject is not offered under that track (see [`Resolution::NotOffered`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable subject identifier.
    pub id: SubjectId,
    /// Display name.
    pub name: String,
    /// Base credit value. Must be positive; enforced at catalog insertion.
    pub credit: u32,
    /// Track-relative category assignments.
    pub categories: BTreeMap<Track, Category>,
}

impl Subject {
    /// Create a new subject.
    #[must_use]
    pub fn new(
        id: SubjectId,
        name: impl Into<String>,
        credit: u32,
        categories: BTreeMap<Track, Category>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            credit,
            categories,
        }
    }

    /// The category this subject falls into under the given track, if any.
    #[must_use]
    pub fn category_for(&self, track: Track) -> Option<Category> {
        self.categories.get(&track).copied()
    }
}

// =============================================================================
// COMPLETED SET
// =============================================================================

/// A student's track plus the subjects they have completed, exactly as
/// submitted by the record provider.
///
/// Duplicate identifiers are not stripped here: the aggregator rejects them
/// with [`EvalError::DuplicateSubject`] so upstream data bugs surface early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSet {
    /// The track the student is enrolled under.
    pub track: Track,
    /// Identifiers of completed subjects.
    pub subjects: Vec<SubjectId>,
}

impl CompletedSet {
    /// Create a new completed set.
    #[must_use]
    pub fn new(track: Track, subjects: Vec<SubjectId>) -> Self {
        Self { track, subjects }
    }

    /// Number of completed-subject entries (before duplicate checking).
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the set contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Outcome of resolving a (subject, track) pair.
///
/// `NotOffered` is a valid outcome, not an error: the subject exists in the
/// catalog but has no category mapping under the track, so it contributes
/// no credit there. It stays observable through the aggregator's
/// diagnostic list rather than being silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The subject counts toward this category under the track.
    Offered(Category),
    /// The track has no mapping for this subject.
    NotOffered,
}

impl Resolution {
    /// The category, if the subject is offered.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self {
            Resolution::Offered(category) => Some(*category),
            Resolution::NotOffered => None,
        }
    }

    /// Whether the subject is offered under the track.
    #[must_use]
    pub fn is_offered(&self) -> bool {
        matches!(self, Resolution::Offered(_))
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by the evaluation engine.
///
/// All of these are data-consistency problems reported to the immediate
/// caller as typed failures. The engine never retries and never falls back
/// to a default category or threshold; an evaluation either produces a
/// complete summary or no summary at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A completed-subject identifier has no catalog entry.
    #[error("unknown subject: {0}")]
    UnknownSubject(SubjectId),

    /// A track identifier is not one of the recognized tracks.
    #[error("unknown track: {0:?}")]
    UnknownTrack(String),

    /// The same subject identifier appears more than once in a completed set.
    #[error("duplicate subject in completed set: {0}")]
    DuplicateSubject(SubjectId),

    /// A threshold in configuration is negative.
    #[error("invalid threshold {name}: {value}")]
    InvalidThreshold {
        /// Which threshold field was malformed.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A subject carries a non-positive credit value.
    #[error("invalid credit value for subject {0}: credits must be positive")]
    InvalidCredit(SubjectId),
}

// =============================================================================
// TESTS
// =============================================================================
