//! # gradeval-core
//!
//! The deterministic credit requirement evaluation engine - THE LOGIC.
//!
//! Given a student's course track and completed subjects, this crate
//! resolves each subject's track-relative category, sums credits into the
//! four category buckets, and checks the sums against configured
//! graduation thresholds.
//!
//! ## Pipeline
//!
//! Data flows one way, with no feedback loop and no retained state:
//!
//! ```text
//! catalog + completed set
//!     │
//!     ▼
//! resolver   — (subject, track) → Category | NotOffered
//!     │
//!     ▼
//! aggregator — category buckets + total (not-offered excluded, observable)
//!     │
//!     ▼
//! requirements — sum >= threshold per requirement, conjunctive overall
//! ```
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network, no filesystem
//! - Deterministic: `BTreeMap` only, integer arithmetic only, no randomness
//! - Stateless: every evaluation is independent; the engine owns no entity
//!   lifecycle and caches nothing between calls
//! - Track-relative: a subject's category is a lookup keyed by track, never
//!   a single attribute of the subject

// =============================================================================
// MODULES
// =============================================================================

pub mod aggregator;
pub mod catalog;
pub mod requirements;
pub mod resolver;
pub mod summary;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Category, CompletedSet, EvalError, Resolution, StudentId, Subject, SubjectId, Track,
};

// =============================================================================
// RE-EXPORTS: Engine Stages
// =============================================================================

pub use aggregator::{CreditDetails, Credits, aggregate};
pub use catalog::Catalog;
pub use requirements::{RequirementsMet, ThresholdConfig, ThresholdPolicy, evaluate};
pub use resolver::resolve;
pub use summary::{CreditSummary, summarize};
