// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a slider configuration cannot be mapped to positions.
///
/// Configuration is validated once, when a slider is built or reconfigured.
/// Gesture handling never fails; it degrades to a no-op instead.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// One of `min`, `max`, `step` or `min_range` is NaN or infinite.
    NonFinite,
    /// `min` is not strictly less than `max`.
    EmptyRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// `step` is zero or negative.
    InvalidStep {
        /// Configured step.
        step: f64,
    },
    /// `min_range` is negative or wider than the whole range.
    InvalidMinRange {
        /// Configured minimum gap between the two thumbs.
        min_range: f64,
        /// Width of the value range, `max - min`.
        span: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("slider bounds, step and min_range must be finite"),
            Self::EmptyRange { min, max } => {
                write!(f, "slider min ({min}) must be less than max ({max})")
            }
            Self::InvalidStep { step } => write!(f, "slider step ({step}) must be positive"),
            Self::InvalidMinRange { min_range, span } => write!(
                f,
                "range slider min_range ({min_range}) must be within 0..={span}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
