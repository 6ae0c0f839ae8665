// ABOUTME: Unit conversion and per-activity physiological coefficients
// ABOUTME: Fixed constants used by the distance, speed, and calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! Physiological and unit constants used by the workout formulas.
//!
//! All values are fixed per activity and are part of the output contract:
//! changing any of them changes every derived summary.

/// Metric unit conversions shared by all formulas.
pub mod units {
    /// Meters per kilometer.
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes per hour, used to scale duration for calorie formulas.
    pub const MIN_IN_H: f64 = 60.0;
}

/// Distance attributed to a single action unit, in meters.
pub mod step_length {
    /// One stride, shared by the land activities.
    pub const STEP_M: f64 = 0.65;

    /// One swim stroke.
    pub const STROKE_M: f64 = 1.38;
}

/// Calorie coefficients for running.
pub mod running {
    /// Multiplier applied to mean speed.
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Subtracted from the scaled speed term.
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Calorie coefficients for race walking.
pub mod race_walking {
    /// Multiplier applied to body weight.
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the floored speed-to-height ratio.
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Calorie coefficients for swimming.
pub mod swimming {
    /// Added to mean speed before scaling.
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight.
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
