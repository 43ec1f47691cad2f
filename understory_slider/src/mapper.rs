// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position↔value mapping shared by [`Slider`](crate::Slider) and
//! [`RangeSlider`](crate::RangeSlider).
//!
//! All arithmetic is linear interpolation between a validated
//! [`SliderRange`] and an *available width*: the container width minus the
//! thumb width, i.e. the span over which a thumb's leading edge can travel.
//!
//! Two offset spaces exist:
//! - **logical** offsets are measured from the start edge in reading order,
//!   so `0.0` always corresponds to `min`;
//! - **visual** offsets are measured from the left edge of the container and
//!   are what a renderer translates the thumb by.
//!
//! In left-to-right layouts the two are identical. In right-to-left layouts
//! they mirror each other: `visual = available_width - logical`.
//!
//! ```
//! use understory_slider::{LayoutDirection, PositionMapper, SliderRange};
//!
//! let range = SliderRange::new(0.0, 100.0, 10.0).unwrap();
//! let mapper = PositionMapper::new(range, 200.0, LayoutDirection::LeftToRight).unwrap();
//!
//! // A drag that lands where 47 would sit snaps to the nearest step.
//! let offset = mapper.value_to_offset(47.0);
//! assert_eq!(mapper.offset_to_value(offset), 50.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::ConfigError;
use crate::layout::LayoutDirection;

/// Upper bound on the number of fractional digits derived from a step.
const MAX_PRECISION: u32 = 12;

/// Relative tolerance used when deciding whether a scaled step is integral.
const PRECISION_EPSILON: f64 = 1e-9;

/// Slack in step units before `snap_up` / `snap_down` move to the next step.
const GRID_EPSILON: f64 = 1e-9;

/// A validated `min..=max` value range with a positive step.
///
/// Construct with [`SliderRange::new`]; every instance satisfies
/// `min < max`, `step > 0`, and has finite fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
    precision: u32,
}

impl SliderRange {
    /// Validates and creates a range.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::InvalidStep { step });
        }
        Ok(Self {
            min,
            max,
            step,
            precision: decimal_precision(step),
        })
    }

    /// Lower bound of the range.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Granularity values snap to.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Number of steps across the range, `(max - min) / step`.
    ///
    /// This is not necessarily integral: a range of `0..=10` with a step of
    /// `4` has `2.5` steps.
    #[must_use]
    pub fn step_count(&self) -> f64 {
        self.span() / self.step
    }

    /// Number of fractional digits values are rounded to.
    ///
    /// This is the number of fractional digits in the shortest decimal
    /// representation of the step: `1` → 0, `0.5` → 1, `0.25` → 2.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Clamps `value` into `min..=max`. NaN maps to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Rounds `value` to [`precision`](Self::precision) fractional digits.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let factor = pow10(self.precision);
        (value * factor).round() / factor
    }

    /// Snaps `value` to the nearest `min + k * step`, clamped into the range.
    ///
    /// This is the set of values a drag can produce.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        self.on_grid(value, |steps| steps.round())
    }

    /// Snaps `value` up to the next grid value, or `max`.
    #[must_use]
    pub fn snap_up(&self, value: f64) -> f64 {
        self.on_grid(value, |steps| (steps - GRID_EPSILON).ceil())
    }

    /// Snaps `value` down to the previous grid value, or `min`.
    #[must_use]
    pub fn snap_down(&self, value: f64) -> f64 {
        self.on_grid(value, |steps| (steps + GRID_EPSILON).floor())
    }

    fn on_grid(&self, value: f64, pick: impl Fn(f64) -> f64) -> f64 {
        let steps = (self.clamp(value) - self.min) / self.step;
        self.clamp(self.round(self.min + pick(steps) * self.step))
    }

    /// Returns `true` if `value` lies within `min..=max`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Maps between values and thumb offsets for one layout.
///
/// A mapper only exists for a usable layout; see [`PositionMapper::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionMapper {
    range: SliderRange,
    available_width: f64,
    direction: LayoutDirection,
}

impl PositionMapper {
    /// Creates a mapper over `available_width` pixels.
    ///
    /// Returns `None` when the width is zero, negative, or not finite, which
    /// is the case until the layout has been measured.
    #[must_use]
    pub fn new(
        range: SliderRange,
        available_width: f64,
        direction: LayoutDirection,
    ) -> Option<Self> {
        (available_width.is_finite() && available_width > 0.0).then_some(Self {
            range,
            available_width,
            direction,
        })
    }

    /// The value range being mapped.
    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// The pixel span a thumb's leading edge can travel.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    /// Layout direction used for mirroring.
    #[must_use]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Width in pixels of one step.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.available_width / self.range.step_count()
    }

    /// Converts a value into a visual offset.
    ///
    /// Values outside the range are clamped first.
    #[must_use]
    pub fn value_to_offset(&self, value: f64) -> f64 {
        self.logical_to_visual(self.value_to_logical(value))
    }

    /// Converts a visual offset into a stepped, bounded value.
    #[must_use]
    pub fn offset_to_value(&self, offset: f64) -> f64 {
        self.logical_to_value(self.snap_logical(self.visual_to_logical(offset)))
    }

    /// Converts a value into a logical offset, without mirroring.
    #[must_use]
    pub fn value_to_logical(&self, value: f64) -> f64 {
        let value = self.range.clamp(value);
        (value - self.range.min) / self.range.span() * self.available_width
    }

    /// Converts a logical offset into a value, without snapping.
    ///
    /// The result is rounded to the step's precision and clamped to the range.
    #[must_use]
    pub fn logical_to_value(&self, logical: f64) -> f64 {
        let raw = self.range.min + (logical / self.available_width) * self.range.span();
        self.range.clamp(self.range.round(raw))
    }

    /// Clamps a logical offset to the track and snaps it to the step grid.
    ///
    /// The result is clamped again after snapping: when the span is not a
    /// whole number of steps the nearest grid point can lie past the end.
    #[must_use]
    pub fn snap_logical(&self, logical: f64) -> f64 {
        let bounded = clamp_offset(logical, self.available_width);
        let step_size = self.step_size();
        if !(step_size.is_finite() && step_size > 0.0) {
            return bounded;
        }
        let snapped = (bounded / step_size).round() * step_size;
        clamp_offset(snapped, self.available_width)
    }

    /// Mirrors a logical offset into visual space.
    #[must_use]
    pub fn logical_to_visual(&self, logical: f64) -> f64 {
        match self.direction {
            LayoutDirection::LeftToRight => logical,
            LayoutDirection::RightToLeft => self.available_width - logical,
        }
    }

    /// Mirrors a visual offset into logical space.
    #[must_use]
    pub fn visual_to_logical(&self, visual: f64) -> f64 {
        // Mirroring is its own inverse.
        self.logical_to_visual(visual)
    }

    /// Converts a gap in value units into pixels.
    #[must_use]
    pub fn value_gap_to_pixels(&self, gap: f64) -> f64 {
        gap / self.range.span() * self.available_width
    }
}

fn clamp_offset(offset: f64, available_width: f64) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, available_width)
}

fn pow10(exp: u32) -> f64 {
    let mut factor = 1.0;
    for _ in 0..exp {
        factor *= 10.0;
    }
    factor
}

/// Counts the fractional digits needed to represent `step` exactly.
fn decimal_precision(step: f64) -> u32 {
    let mut scaled = step;
    for digits in 0..MAX_PRECISION {
        let tolerance = PRECISION_EPSILON * scaled.abs().max(1.0);
        if (scaled - scaled.round()).abs() <= tolerance {
            return digits;
        }
        scaled *= 10.0;
    }
    MAX_PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(min: f64, max: f64, step: f64, width: f64) -> PositionMapper {
        let range = SliderRange::new(min, max, step).unwrap();
        PositionMapper::new(range, width, LayoutDirection::LeftToRight).unwrap()
    }

    #[test]
    fn range_rejects_bad_configuration() {
        assert_eq!(
            SliderRange::new(5.0, 5.0, 1.0),
            Err(ConfigError::EmptyRange { min: 5.0, max: 5.0 })
        );
        assert_eq!(
            SliderRange::new(0.0, 10.0, 0.0),
            Err(ConfigError::InvalidStep { step: 0.0 })
        );
        assert_eq!(
            SliderRange::new(0.0, 10.0, -1.0),
            Err(ConfigError::InvalidStep { step: -1.0 })
        );
        assert_eq!(
            SliderRange::new(0.0, f64::INFINITY, 1.0),
            Err(ConfigError::NonFinite)
        );
        assert_eq!(SliderRange::new(f64::NAN, 1.0, 1.0), Err(ConfigError::NonFinite));
    }

    #[test]
    fn precision_follows_step_digits() {
        let precision = |step| SliderRange::new(0.0, 100.0, step).unwrap().precision();
        assert_eq!(precision(1.0), 0);
        assert_eq!(precision(10.0), 0);
        assert_eq!(precision(0.5), 1);
        assert_eq!(precision(0.1), 1);
        assert_eq!(precision(0.25), 2);
        assert_eq!(precision(0.3), 1);
        assert_eq!(precision(0.001), 3);
    }

    #[test]
    fn round_uses_step_precision() {
        let range = SliderRange::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(range.round(0.30000000000000004), 0.3);
        assert_eq!(range.round(0.26), 0.3);

        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
        assert_eq!(range.round(46.6), 47.0);
    }

    #[test]
    fn snapping_lands_on_the_step_grid() {
        let range = SliderRange::new(0.0, 10.0, 1.0).unwrap();
        assert_eq!(range.snap(7.3), 7.0);
        assert_eq!(range.snap(7.5), 8.0);
        assert_eq!(range.snap_up(7.3), 8.0);
        assert_eq!(range.snap_up(7.0), 7.0);
        assert_eq!(range.snap_down(7.9), 7.0);
        assert_eq!(range.snap(f64::NAN), 0.0);
        assert_eq!(range.snap_up(42.0), 10.0);

        let range = SliderRange::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(range.snap_up(0.1 + 0.2), 0.3);
        assert_eq!(range.snap_down(0.7), 0.7);

        // 0..=10 by 4: the grid is 0, 4, 8 and the end of the track is 10.
        let range = SliderRange::new(0.0, 10.0, 4.0).unwrap();
        assert_eq!(range.snap(9.5), 8.0);
        assert_eq!(range.snap(10.0), 10.0);
        assert_eq!(range.snap_up(8.5), 10.0);
        assert_eq!(range.snap_down(9.5), 8.0);
    }

    #[test]
    fn clamp_handles_nan_and_infinities() {
        let range = SliderRange::new(-10.0, 10.0, 1.0).unwrap();
        assert_eq!(range.clamp(f64::NAN), -10.0);
        assert_eq!(range.clamp(f64::INFINITY), 10.0);
        assert_eq!(range.clamp(f64::NEG_INFINITY), -10.0);
        assert_eq!(range.clamp(3.0), 3.0);
    }

    #[test]
    fn mapper_requires_positive_width() {
        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
        assert!(PositionMapper::new(range, 0.0, LayoutDirection::LeftToRight).is_none());
        assert!(PositionMapper::new(range, -20.0, LayoutDirection::LeftToRight).is_none());
        assert!(PositionMapper::new(range, f64::NAN, LayoutDirection::LeftToRight).is_none());
        assert!(PositionMapper::new(range, 1.0, LayoutDirection::LeftToRight).is_some());
    }

    #[test]
    fn value_to_offset_interpolates_linearly() {
        let m = mapper(0.0, 100.0, 1.0, 200.0);
        assert_eq!(m.value_to_offset(0.0), 0.0);
        assert_eq!(m.value_to_offset(25.0), 50.0);
        assert_eq!(m.value_to_offset(100.0), 200.0);

        let m = mapper(-50.0, 50.0, 1.0, 100.0);
        assert_eq!(m.value_to_offset(0.0), 50.0);
    }

    #[test]
    fn value_to_offset_clamps_out_of_range_values() {
        let m = mapper(0.0, 100.0, 1.0, 200.0);
        assert_eq!(m.value_to_offset(-5.0), 0.0);
        assert_eq!(m.value_to_offset(500.0), 200.0);
    }

    #[test]
    fn offset_to_value_snaps_to_step() {
        let m = mapper(0.0, 100.0, 10.0, 200.0);
        // 47 sits at 94px; the nearest grid point is 100px (value 50).
        assert_eq!(m.offset_to_value(94.0), 50.0);
        assert_eq!(m.offset_to_value(89.0), 40.0);
        assert_eq!(m.offset_to_value(-30.0), 0.0);
        assert_eq!(m.offset_to_value(400.0), 100.0);
    }

    #[test]
    fn offset_to_value_rounds_fractional_steps() {
        let m = mapper(0.0, 1.0, 0.1, 300.0);
        assert_eq!(m.offset_to_value(92.0), 0.3);
        assert_eq!(m.offset_to_value(300.0), 1.0);
    }

    #[test]
    fn uneven_step_count_never_overshoots() {
        // 0..=10 with step 4 has 2.5 steps; rounding 2.5 up would land on 12.
        let m = mapper(0.0, 10.0, 4.0, 100.0);
        assert_eq!(m.snap_logical(100.0), 100.0);
        assert_eq!(m.offset_to_value(100.0), 10.0);
        assert_eq!(m.offset_to_value(35.0), 4.0);
    }

    #[test]
    fn right_to_left_mirrors_offsets() {
        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
        let ltr = PositionMapper::new(range, 200.0, LayoutDirection::LeftToRight).unwrap();
        let rtl = PositionMapper::new(range, 200.0, LayoutDirection::RightToLeft).unwrap();

        assert_eq!(rtl.value_to_offset(0.0), 200.0);
        assert_eq!(rtl.value_to_offset(100.0), 0.0);
        assert_eq!(rtl.value_to_offset(30.0), 200.0 - ltr.value_to_offset(30.0));

        // A pointer near the left edge means "near max" in RTL.
        assert_eq!(rtl.offset_to_value(2.0), 99.0);
    }

    #[test]
    fn gap_conversion_scales_with_width() {
        let m = mapper(0.0, 10.0, 1.0, 200.0);
        assert_eq!(m.value_gap_to_pixels(2.0), 40.0);
        assert_eq!(m.step_size(), 20.0);
    }
}
