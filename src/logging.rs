// ABOUTME: Logging initialization for the fitcalc binary
// ABOUTME: Configures tracing-subscriber with an env-driven filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitcalc Contributors

//! Logging setup.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! the binary's job so embedders keep control of their own logging.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber from the environment.
///
/// Reads `RUST_LOG` for the filter directive, falling back to
/// [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
