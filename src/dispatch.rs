// ABOUTME: Dispatch factory mapping activity codes to workout model constructors
// ABOUTME: Decodes positional sensor readings into ready-to-query workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! Type dispatch from sensor packages to workout models.
//!
//! A sensor package is a short activity code paired with a positional
//! numeric reading. The code set is closed: every code maps to exactly
//! one workout type and its declared reading layout, and anything else
//! is rejected before any construction happens.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::{WorkoutError, WorkoutResult};
use crate::workouts::{RaceWalking, Running, Swimming, Workout};

/// Closed set of activity codes carried by sensor packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    /// `RUN` — running, reading `[steps, duration_hours, weight_kg]`.
    Running,
    /// `WLK` — race walking, reading `[steps, duration_hours, weight_kg,
    /// height_cm]`.
    RaceWalking,
    /// `SWM` — swimming, reading `[strokes, duration_hours, weight_kg,
    /// pool_length_m, pool_lengths_count]`.
    Swimming,
}

impl ActivityCode {
    /// The wire token for this code, as sent by the sensors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::RaceWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Human-readable name of the activity behind this code.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::RaceWalking => "race walking",
            Self::Swimming => "swimming",
        }
    }

    /// Number of fields the activity's sensor reading carries.
    #[must_use]
    pub const fn reading_len(self) -> usize {
        match self {
            Self::Running => 3,
            Self::RaceWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Construct the matching workout model from a positional reading.
    ///
    /// Fields are consumed in the activity's declared order. Either a
    /// fully constructed model is returned or nothing is; there is no
    /// partial construction.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::ReadingArity`] when the reading length
    /// does not match [`Self::reading_len`].
    pub fn build(self, reading: &[f64]) -> WorkoutResult<Box<dyn Workout>> {
        match (self, reading) {
            (Self::Running, &[steps, duration, weight]) => {
                Ok(Box::new(Running::new(steps as u32, duration, weight)))
            }
            (Self::RaceWalking, &[steps, duration, weight, height]) => Ok(Box::new(
                RaceWalking::new(steps as u32, duration, weight, height),
            )),
            (Self::Swimming, &[strokes, duration, weight, pool_length, pool_count]) => Ok(
                Box::new(Swimming::new(
                    strokes as u32,
                    duration,
                    weight,
                    pool_length,
                    pool_count,
                )),
            ),
            _ => Err(WorkoutError::reading_arity(
                self.display_name(),
                self.reading_len(),
                reading.len(),
            )),
        }
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    /// Tokens are exact and case-sensitive; the sensors never vary them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::RaceWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(WorkoutError::unknown_activity_code(other)),
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Decode one sensor package into a ready-to-query workout model.
///
/// # Errors
///
/// Returns [`WorkoutError::UnknownActivityCode`] for a code outside the
/// fixed set, or [`WorkoutError::ReadingArity`] when the reading length
/// does not match the resolved activity's field count.
pub fn decode(code: &str, reading: &[f64]) -> WorkoutResult<Box<dyn Workout>> {
    let code: ActivityCode = code.parse()?;
    debug!(code = %code, fields = reading.len(), "dispatching sensor package");
    code.build(reading)
}
