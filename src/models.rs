// ABOUTME: Output data model for completed workout calculations
// ABOUTME: Flat summary record consumed by the renderer and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! Common data structures shared across the engine.

use serde::{Deserialize, Serialize};

/// Flat record of human-relevant derived values for one completed workout.
///
/// Produced once by [`crate::workouts::Workout::summary`] and consumed by
/// the renderer; re-querying the same workout yields an identical record
/// because every field is a pure function of the workout's stored
/// measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Human-readable activity name (e.g., "running").
    pub activity_name: String,
    /// Workout duration in hours, as read from the sensor.
    pub duration_hours: f64,
    /// Distance covered in kilometers.
    pub distance_km: f64,
    /// Mean speed in kilometers per hour over the full duration.
    pub mean_speed_kmh: f64,
    /// Estimated energy expenditure in kilocalories.
    pub calories_kcal: f64,
}
