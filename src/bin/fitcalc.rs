// ABOUTME: Command-line entry point printing summaries for built-in sample packages
// ABOUTME: Decodes each sensor package and renders one summary line per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! # Fitcalc Binary
//!
//! Runs the canonical sample sensor packages through the dispatch factory
//! and prints one rendered summary per workout. A malformed package is
//! reported and skipped; it never aborts the remaining packages.

use anyhow::Result;
use clap::Parser;
use fitcalc::dispatch;
use fitcalc::logging;
use fitcalc::render::{self, OutputFormat};
use tracing::error;

/// Sensor packages captured from the reference device fleet.
const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(about = "Workout metrics engine - sensor readings to workout summaries")]
struct Args {
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let format = OutputFormat::from_str_param(&args.format);

    for (code, reading) in SAMPLE_PACKAGES {
        match dispatch::decode(code, reading).and_then(|workout| workout.summary()) {
            Ok(summary) => println!("{}", render::render(&summary, format)?),
            Err(err) => error!("skipping package '{code}': {err}"),
        }
    }

    Ok(())
}
