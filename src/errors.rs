// ABOUTME: Domain error types for workout dispatch and metric derivation
// ABOUTME: Covers unknown activity codes, reading arity mismatches, and missing formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! Error types surfaced by the dispatch factory and the workout model.
//!
//! Every operation here is a one-shot pure computation, so there are no
//! transient failure modes and no retry semantics: an error is final for
//! the package that produced it. Numeric faults (zero duration, zero
//! height) are deliberately NOT represented as error values; divisions
//! are unguarded and propagate as non-finite floats.

use thiserror::Error;

/// Errors raised while decoding sensor packages or deriving metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    /// Activity code is not part of the fixed code set.
    #[error("unknown activity code '{code}'")]
    UnknownActivityCode {
        /// The offending code as received from the sensor package.
        code: String,
    },

    /// Sensor reading length does not match the activity's field count.
    #[error("activity '{activity}' expects {expected} sensor fields, got {actual}")]
    ReadingArity {
        /// Display name of the activity being constructed.
        activity: &'static str,
        /// Number of fields the activity's reading layout declares.
        expected: usize,
        /// Number of fields actually present in the reading.
        actual: usize,
    },

    /// The shared calorie rule was invoked without a modality override.
    ///
    /// This is a programming error rather than a data error: every
    /// shipped workout type overrides the calorie formula.
    #[error("calorie formula is not implemented for activity '{activity}'")]
    CaloriesUnimplemented {
        /// Display name of the workout type missing the override.
        activity: String,
    },
}

impl WorkoutError {
    /// Create an "unknown activity code" error.
    #[must_use]
    pub fn unknown_activity_code(code: impl Into<String>) -> Self {
        Self::UnknownActivityCode { code: code.into() }
    }

    /// Create a "reading arity" error.
    #[must_use]
    pub const fn reading_arity(activity: &'static str, expected: usize, actual: usize) -> Self {
        Self::ReadingArity {
            activity,
            expected,
            actual,
        }
    }

    /// Create a "calories unimplemented" error.
    #[must_use]
    pub fn calories_unimplemented(activity: impl Into<String>) -> Self {
        Self::CaloriesUnimplemented {
            activity: activity.into(),
        }
    }
}

/// Result type alias for workout operations.
pub type WorkoutResult<T> = Result<T, WorkoutError>;
