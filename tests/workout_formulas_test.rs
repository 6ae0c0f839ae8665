// ABOUTME: Tests for per-activity distance, mean speed, and calorie formulas
// ABOUTME: Validates reference readings, the floor-division discontinuity, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcalc::workouts::{RaceWalking, Running, Swimming, Workout};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_running_reference_reading() {
    let workout = Running::new(15000, 1.0, 75.0);
    assert_close(workout.distance_km(), 9.75);
    assert_close(workout.mean_speed_kmh(), 9.75);
    // ((18 * 9.75 - 20) * 75 / 1000) * 60
    assert_close(workout.calories_kcal().unwrap(), 699.75);
}

#[test]
fn test_race_walking_reference_reading() {
    let workout = RaceWalking::new(9000, 1.0, 75.0, 180.0);
    assert_close(workout.distance_km(), 5.85);
    assert_close(workout.mean_speed_kmh(), 5.85);
    // floor(5.85^2 / 180) = floor(0.19) = 0, so only the weight term remains
    assert_close(workout.calories_kcal().unwrap(), 157.5);
}

#[test]
fn test_race_walking_floor_division_discontinuity() {
    // Same weight and duration, shorter athlete and more steps push the
    // floored ratio from 0 to 1: floor(11.7^2 / 120) = 1.
    let workout = RaceWalking::new(18000, 1.0, 75.0, 120.0);
    assert_close(workout.mean_speed_kmh(), 11.7);
    // (0.035 * 75 + 1 * 0.029 * 75) * 60
    assert_close(workout.calories_kcal().unwrap(), 288.0);
}

#[test]
fn test_swimming_reference_reading() {
    let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
    // Distance still comes from the stroke count; speed from pool geometry.
    assert_close(workout.distance_km(), 0.9936);
    assert_close(workout.mean_speed_kmh(), 1.0);
    // (1.0 + 1.1) * 2 * 80
    assert_close(workout.calories_kcal().unwrap(), 336.0);
}

#[test]
fn test_distance_and_speed_are_non_negative() {
    let workouts: [&dyn Workout; 3] = [
        &Running::new(0, 0.5, 60.0),
        &RaceWalking::new(1, 2.0, 90.0, 175.0),
        &Swimming::new(0, 0.25, 70.0, 50.0, 0.0),
    ];
    for workout in workouts {
        assert!(workout.distance_km() >= 0.0);
        assert!(workout.mean_speed_kmh() >= 0.0);
    }
}

#[test]
fn test_summary_is_idempotent() {
    let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
    let first = workout.summary().unwrap();
    let second = workout.summary().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_summary_carries_all_derived_values() {
    let workout = Running::new(15000, 1.0, 75.0);
    let summary = workout.summary().unwrap();
    assert_eq!(summary.activity_name, "running");
    assert_close(summary.duration_hours, 1.0);
    assert_close(summary.distance_km, 9.75);
    assert_close(summary.mean_speed_kmh, 9.75);
    assert_close(summary.calories_kcal, 699.75);
}

#[test]
fn test_zero_height_propagates_as_non_finite_calories() {
    // Divisions are unguarded by design: the fault surfaces in the value.
    let workout = RaceWalking::new(9000, 1.0, 75.0, 0.0);
    assert!(!workout.calories_kcal().unwrap().is_finite());
}

#[test]
fn test_zero_duration_propagates_as_non_finite_speed() {
    let workout = Running::new(15000, 0.0, 75.0);
    assert!(workout.mean_speed_kmh().is_infinite());
}
