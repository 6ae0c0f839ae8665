// ABOUTME: Workout model capability and its three concrete modalities
// ABOUTME: Per-activity distance, mean speed, and calorie formulas over raw measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! Workout models and their derivation formulas.
//!
//! The [`Workout`] trait is the one polymorphic seam in the engine: each
//! modality supplies its own calorie rule (and, where the physics differ,
//! its own distance or speed rule) while the shared derivation steps and
//! the summary assembly live once on the trait.
//!
//! Divisions are unguarded by design: a zero duration or zero height
//! propagates as a non-finite float into the summary rather than being
//! clamped or masked.

use crate::constants::{race_walking, running, step_length, swimming, units};
use crate::errors::{WorkoutError, WorkoutResult};
use crate::models::WorkoutSummary;

/// Capability set shared by all workout modalities.
///
/// Implementors store raw measurements only; every derived value is
/// recomputed on demand as a pure function of those fields.
pub trait Workout: std::fmt::Debug {
    /// Human-readable activity name used in summaries.
    fn display_name(&self) -> &'static str;

    /// Raw action count from the sensor (strides or strokes).
    fn action_count(&self) -> u32;

    /// Workout duration in hours.
    fn duration_hours(&self) -> f64;

    /// Athlete body weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Distance covered by one action unit, in meters.
    ///
    /// Land activities share the stride length; swimming overrides this
    /// with the stroke length.
    fn action_length_m(&self) -> f64 {
        step_length::STEP_M
    }

    /// Distance covered in kilometers.
    ///
    /// Formula: `action_count * action_length_m / 1000`
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.action_length_m() / units::M_IN_KM
    }

    /// Mean speed in kilometers per hour over the full duration.
    ///
    /// Formula: `distance_km / duration_hours`
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Estimated energy expenditure in kilocalories.
    ///
    /// Every shipped modality overrides this with its own formula; the
    /// default signals the missing override as a programming error,
    /// distinct from any numeric fault.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::CaloriesUnimplemented`] when invoked
    /// without an override.
    fn calories_kcal(&self) -> WorkoutResult<f64> {
        Err(WorkoutError::calories_unimplemented(self.display_name()))
    }

    /// Assemble the flat summary record for this workout.
    ///
    /// Pure and idempotent: calling this any number of times on the same
    /// instance yields identical records.
    ///
    /// # Errors
    ///
    /// Propagates [`WorkoutError::CaloriesUnimplemented`] from the
    /// calorie rule.
    fn summary(&self) -> WorkoutResult<WorkoutSummary> {
        Ok(WorkoutSummary {
            activity_name: self.display_name().to_owned(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal()?,
        })
    }
}

/// Running workout built from a stride counter reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    /// Strides counted over the workout.
    pub steps: u32,
    /// Duration in hours.
    pub duration_hours: f64,
    /// Body weight in kilograms.
    pub weight_kg: f64,
}

impl Running {
    /// Create a running workout from raw measurements.
    #[must_use]
    pub const fn new(steps: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            steps,
            duration_hours,
            weight_kg,
        }
    }
}

impl Workout for Running {
    fn display_name(&self) -> &'static str {
        "running"
    }

    fn action_count(&self) -> u32 {
        self.steps
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Formula: `((18 * speed - 20) * weight / 1000) * (duration_hours * 60)`
    fn calories_kcal(&self) -> WorkoutResult<f64> {
        let speed = self.mean_speed_kmh();
        let per_minute =
            running::SPEED_MULTIPLIER.mul_add(speed, -running::SPEED_SHIFT) * self.weight_kg
                / units::M_IN_KM;
        Ok(per_minute * (self.duration_hours * units::MIN_IN_H))
    }
}

/// Race-walking workout; adds athlete height to the stride reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceWalking {
    /// Strides counted over the workout.
    pub steps: u32,
    /// Duration in hours.
    pub duration_hours: f64,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Athlete height in centimeters.
    pub height_cm: f64,
}

impl RaceWalking {
    /// Create a race-walking workout from raw measurements.
    #[must_use]
    pub const fn new(steps: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            steps,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for RaceWalking {
    fn display_name(&self) -> &'static str {
        "race walking"
    }

    fn action_count(&self) -> u32 {
        self.steps
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Formula: `(0.035 * weight + floor(speed^2 / height_cm) * 0.029 * weight)
    /// * (duration_hours * 60)`
    fn calories_kcal(&self) -> WorkoutResult<f64> {
        let speed = self.mean_speed_kmh();
        // Floored, not rounded: the output contract fixes the resulting
        // discontinuity at height thresholds.
        let speed_height_ratio = (speed.powi(2) / self.height_cm).floor();
        let per_minute = race_walking::WEIGHT_MULTIPLIER.mul_add(
            self.weight_kg,
            speed_height_ratio * race_walking::SPEED_HEIGHT_MULTIPLIER * self.weight_kg,
        );
        Ok(per_minute * (self.duration_hours * units::MIN_IN_H))
    }
}

/// Swimming workout built from a stroke counter plus pool geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    /// Strokes counted over the workout.
    pub strokes: u32,
    /// Duration in hours.
    pub duration_hours: f64,
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Pool length in meters.
    pub pool_length_m: f64,
    /// Number of pool lengths completed.
    pub pool_lengths_count: f64,
}

impl Swimming {
    /// Create a swimming workout from raw measurements.
    #[must_use]
    pub const fn new(
        strokes: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: f64,
    ) -> Self {
        Self {
            strokes,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lengths_count,
        }
    }
}

impl Workout for Swimming {
    fn display_name(&self) -> &'static str {
        "swimming"
    }

    fn action_count(&self) -> u32 {
        self.strokes
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn action_length_m(&self) -> f64 {
        step_length::STROKE_M
    }

    /// Mean speed comes from pool geometry, not stroke distance.
    ///
    /// Formula: `(pool_length_m * pool_lengths_count) / 1000 / duration_hours`
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lengths_count / units::M_IN_KM / self.duration_hours
    }

    /// Formula: `(speed + 1.1) * 2 * weight`
    fn calories_kcal(&self) -> WorkoutResult<f64> {
        let speed = self.mean_speed_kmh();
        Ok((speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * self.weight_kg)
    }
}
