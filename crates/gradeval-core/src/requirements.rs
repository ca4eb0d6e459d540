//! # Requirement Evaluator
//!
//! Compares aggregated credit sums against configured graduation
//! thresholds and yields per-requirement verdicts plus an overall verdict.
//!
//! Thresholds are configuration, not constants: they arrive from an
//! external configuration provider, are validated as non-negative at load
//! time, and can be overridden per track. The defaults observed in this
//! domain are Compulsory >= 26, Limited-Elective >= 47, Limited+Standard
//! combined >= 59, Total >= 95.

use crate::aggregator::Credits;
use crate::types::{EvalError, Track};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// THRESHOLD CONFIGURATION
// =============================================================================

/// Minimum required credits per requirement.
///
/// Stored as `i64` so malformed (negative) configuration is representable
/// and caught by [`ThresholdConfig::validate`] at load time, independent of
/// any particular evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Minimum compulsory credits.
    pub compulsory: i64,
    /// Minimum limited-elective credits.
    pub limited_elective: i64,
    /// Minimum combined limited + standard elective credits.
    pub limited_standard: i64,
    /// Minimum total credits.
    pub total: i64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            compulsory: 26,
            limited_elective: 47,
            limited_standard: 59,
            total: 95,
        }
    }
}

impl ThresholdConfig {
    /// Validate that every threshold is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidThreshold`] naming the first malformed
    /// field.
    pub fn validate(&self) -> Result<(), EvalError> {
        let fields = [
            ("compulsory", self.compulsory),
            ("limited_elective", self.limited_elective),
            ("limited_standard", self.limited_standard),
            ("total", self.total),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(EvalError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

/// Threshold configuration with per-track overrides.
///
/// Tracks without an override share the default policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Policy applied to tracks without an override.
    #[serde(default)]
    pub default: ThresholdConfig,
    /// Per-track overrides.
    #[serde(default)]
    pub per_track: BTreeMap<Track, ThresholdConfig>,
}

impl ThresholdPolicy {
    /// The effective thresholds for a track after override resolution.
    #[must_use]
    pub fn for_track(&self, track: Track) -> &ThresholdConfig {
        self.per_track.get(&track).unwrap_or(&self.default)
    }

    /// Validate the default config and every override.
    pub fn validate(&self) -> Result<(), EvalError> {
        self.default.validate()?;
        for config in self.per_track.values() {
            config.validate()?;
        }
        Ok(())
    }
}

// =============================================================================
// REQUIREMENTS MET
// =============================================================================

/// Per-requirement verdicts plus the overall verdict.
///
/// Every check is `>=`: a sum exactly equal to its threshold satisfies the
/// requirement. `total` is the conjunction of all four sub-checks, not just
/// the total-credit check — a student can exceed total credits while still
/// failing a category-specific minimum, and that must read as not yet
/// graduated. The raw total-credit check stays visible as `total_credits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsMet {
    /// Compulsory sum meets its threshold.
    pub compulsory: bool,
    /// Limited-elective sum meets its threshold.
    pub limited_elective: bool,
    /// Combined limited + standard elective sum meets its threshold.
    pub limited_standard_elective: bool,
    /// Total credit sum meets its threshold.
    pub total_credits: bool,
    /// All four checks above hold.
    pub total: bool,
}

/// Evaluate aggregated credit sums against a threshold configuration.
///
/// Pure function over integers; no rounding, no floating point, no error
/// conditions (malformed thresholds are rejected at configuration-load
/// time by [`ThresholdConfig::validate`]).
#[must_use]
pub fn evaluate(credits: &Credits, thresholds: &ThresholdConfig) -> RequirementsMet {
    let compulsory = i64::from(credits.compulsory) >= thresholds.compulsory;
    let limited_elective = i64::from(credits.limited_elective) >= thresholds.limited_elective;
    let limited_standard_elective =
        i64::from(credits.limited_standard()) >= thresholds.limited_standard;
    let total_credits = i64::from(credits.total) >= thresholds.total;

    RequirementsMet {
        compulsory,
        limited_elective,
        limited_standard_elective,
        total_credits,
        total: compulsory && limited_elective && limited_standard_elective && total_credits,
    }
}

// =============================================================================
// TESTS
// =============================================================================
