// ABOUTME: Tests for summary rendering in text and JSON formats
// ABOUTME: Pins the fixed template line, 3-decimal precision, and field order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcalc::dispatch;
use fitcalc::models::WorkoutSummary;
use fitcalc::render::{self, OutputFormat};

fn summary_for(code: &str, reading: &[f64]) -> WorkoutSummary {
    dispatch::decode(code, reading).unwrap().summary().unwrap()
}

#[test]
fn test_running_template_line() {
    let summary = summary_for("RUN", &[15000.0, 1.0, 75.0]);
    assert_eq!(
        render::format_summary(&summary),
        "Training type: running; Duration: 1.000 h; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burned: 699.750."
    );
}

#[test]
fn test_race_walking_template_line() {
    let summary = summary_for("WLK", &[9000.0, 1.0, 75.0, 180.0]);
    assert_eq!(
        render::format_summary(&summary),
        "Training type: race walking; Duration: 1.000 h; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories burned: 157.500."
    );
}

#[test]
fn test_swimming_template_line() {
    let summary = summary_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]);
    assert_eq!(
        render::format_summary(&summary),
        "Training type: swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn test_json_rendering_round_trips_the_record() {
    let summary = summary_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]);
    let json = render::render(&summary, OutputFormat::Json).unwrap();
    let parsed: WorkoutSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary);
}

#[test]
fn test_text_is_the_default_format() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn test_format_param_is_case_insensitive_with_text_fallback() {
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str_param(""), OutputFormat::Text);
}
