// ABOUTME: Main library entry point for the fitcalc workout metrics engine
// ABOUTME: Converts raw sensor readings into distance, speed, and calorie summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

#![deny(unsafe_code)]

//! # Fitcalc
//!
//! A synchronous calculation engine that turns raw sensor readings from
//! three exercise modalities (running, race walking, swimming) into
//! normalized workout summaries: distance, mean speed, and estimated
//! energy expenditure.
//!
//! ## Architecture
//!
//! - **Workouts**: the [`workouts::Workout`] capability with one concrete
//!   type per modality. Shared derivation steps (distance from action
//!   count, speed from distance) live on the trait; each modality
//!   overrides the steps that differ.
//! - **Dispatch**: [`dispatch::decode`] resolves a short activity code to
//!   the matching workout type and constructs it from a positional
//!   sensor reading.
//! - **Render**: [`render`] formats a [`models::WorkoutSummary`] as the
//!   fixed human-readable template line or as JSON.
//!
//! ## Example
//!
//! ```rust
//! use fitcalc::dispatch;
//!
//! # fn example() -> fitcalc::WorkoutResult<()> {
//! let workout = dispatch::decode("RUN", &[15000.0, 1.0, 75.0])?;
//! let summary = workout.summary()?;
//! assert!((summary.distance_km - 9.75).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod models;
pub mod render;
pub mod workouts;

pub use errors::{WorkoutError, WorkoutResult};
pub use models::WorkoutSummary;
