// ABOUTME: Output rendering for workout summaries in text and JSON formats
// ABOUTME: Fixed-template line with 3-decimal fields plus serde_json serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! Summary rendering.
//!
//! The text rendering is a fixed template: field order and the 3-decimal
//! precision of every numeric field are part of the output contract and
//! must not change. JSON rendering serializes the summary record as-is.

use std::fmt;

use serde::Serialize;

use crate::models::WorkoutSummary;

/// Output serialization format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template human-readable line (default).
    #[default]
    Text,
    /// JSON serialization of the summary record.
    Json,
}

impl OutputFormat {
    /// Parse format from a string parameter (case-insensitive).
    ///
    /// Returns `Text` for unrecognized values.
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for rendering operations.
#[derive(Debug, Clone)]
pub struct RenderError {
    /// What went wrong during serialization.
    pub message: String,
    /// The format that was being rendered when the error occurred.
    pub format: OutputFormat,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for RenderError {}

/// Render the fixed-template summary line.
///
/// Numeric fields are always printed to exactly 3 decimal places, in the
/// fixed order duration, distance, speed, calories.
#[must_use]
pub fn format_summary(summary: &WorkoutSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
         Mean speed: {:.3} km/h; Calories burned: {:.3}.",
        summary.activity_name,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal,
    )
}

/// Render a summary in the selected output format.
///
/// # Errors
///
/// Returns [`RenderError`] if JSON serialization fails.
pub fn render(summary: &WorkoutSummary, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(format_summary(summary)),
        OutputFormat::Json => to_json(summary, format),
    }
}

fn to_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, RenderError> {
    serde_json::to_string(value).map_err(|err| RenderError {
        message: err.to_string(),
        format,
    })
}
