// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.
//!
//! Configurations are plain data with defaults and `with_*` builders. They
//! are validated once, when a slider is built or reconfigured:
//!
//! ```
//! use understory_slider::{ConfigError, SliderConfig};
//!
//! let config = SliderConfig::default().with_bounds(0.0, 1.0).with_step(0.05);
//! assert!(config.validate().is_ok());
//!
//! let broken = SliderConfig::default().with_step(0.0);
//! assert_eq!(broken.validate(), Err(ConfigError::InvalidStep { step: 0.0 }));
//! ```

use crate::error::ConfigError;
use crate::layout::LayoutDirection;
use crate::mapper::SliderRange;
use crate::style::SliderStyle;

/// Which side of the thumb a label is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LabelPosition {
    /// Above the thumb.
    #[default]
    Top,
    /// Below the thumb.
    Bottom,
}

/// Width of a label box.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LabelWidth {
    /// Sized by the label content.
    #[default]
    Auto,
    /// A fixed width in pixels.
    Fixed(f64),
}

impl LabelWidth {
    /// The fixed width, if any.
    #[must_use]
    pub fn fixed(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Fixed(width) => Some(width),
        }
    }
}

/// Label placement relative to its thumb.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LabelConfig {
    /// Above or below the thumb.
    pub position: LabelPosition,
    /// Label box width.
    pub width: LabelWidth,
    /// Extra horizontal shift in pixels.
    pub left_adjustment: f64,
}

/// Configuration shared by both slider kinds.
#[derive(Clone, Copy, Debug)]
pub struct SliderConfig {
    /// Lower bound, default `0`.
    pub min: f64,
    /// Upper bound, default `100`.
    pub max: f64,
    /// Step granularity, default `1`.
    pub step: f64,
    /// Disabled sliders refuse to start gestures.
    pub disabled: bool,
    /// Produce one marker per step.
    pub show_markers: bool,
    /// Reading direction.
    pub direction: LayoutDirection,
    /// Label placement.
    pub label: LabelConfig,
    /// Visual style.
    pub style: SliderStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            disabled: false,
            show_markers: false,
            direction: LayoutDirection::default(),
            label: LabelConfig::default(),
            style: SliderStyle::default(),
        }
    }
}

impl SliderConfig {
    /// Sets `min` and `max`.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets whether the slider is disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether markers are produced.
    #[must_use]
    pub fn with_markers(mut self, show_markers: bool) -> Self {
        self.show_markers = show_markers;
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the label position.
    #[must_use]
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label.position = position;
        self
    }

    /// Sets the label width.
    #[must_use]
    pub fn with_label_width(mut self, width: LabelWidth) -> Self {
        self.label.width = width;
        self
    }

    /// Sets the extra horizontal label shift.
    #[must_use]
    pub fn with_label_left_adjustment(mut self, left_adjustment: f64) -> Self {
        self.label.left_adjustment = left_adjustment;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks `min`, `max` and `step`.
    pub fn validate(&self) -> Result<SliderRange, ConfigError> {
        SliderRange::new(self.min, self.max, self.step)
    }
}

/// Configuration of a [`RangeSlider`](crate::RangeSlider).
#[derive(Clone, Copy, Debug)]
pub struct RangeSliderConfig {
    /// Settings shared with the single slider.
    pub slider: SliderConfig,
    /// Minimum gap between the low and high values, in value units. Default `1`.
    pub min_range: f64,
}

impl Default for RangeSliderConfig {
    fn default() -> Self {
        Self {
            slider: SliderConfig::default(),
            min_range: 1.0,
        }
    }
}

impl From<SliderConfig> for RangeSliderConfig {
    fn from(slider: SliderConfig) -> Self {
        Self {
            slider,
            ..Self::default()
        }
    }
}

impl RangeSliderConfig {
    /// Sets the minimum gap between the thumbs.
    #[must_use]
    pub fn with_min_range(mut self, min_range: f64) -> Self {
        self.min_range = min_range;
        self
    }

    /// Checks the shared settings and `0 <= min_range <= max - min`.
    pub fn validate(&self) -> Result<SliderRange, ConfigError> {
        let range = self.slider.validate()?;
        if !self.min_range.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        if self.min_range < 0.0 || self.min_range > range.span() {
            return Err(ConfigError::InvalidMinRange {
                min_range: self.min_range,
                span: range.span(),
            });
        }
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SliderConfig::default();
        assert_eq!(config.min, 0.0);
        assert_eq!(config.max, 100.0);
        assert_eq!(config.step, 1.0);
        assert!(!config.disabled);
        assert!(!config.show_markers);
        assert_eq!(config.direction, LayoutDirection::LeftToRight);
        assert_eq!(config.label, LabelConfig::default());
        assert_eq!(config.label.position, LabelPosition::Top);
        assert_eq!(config.label.width, LabelWidth::Auto);

        assert_eq!(RangeSliderConfig::default().min_range, 1.0);
    }

    #[test]
    fn builders_set_fields() {
        let config = SliderConfig::default()
            .with_bounds(-1.0, 1.0)
            .with_step(0.5)
            .with_disabled(true)
            .with_markers(true)
            .with_direction(LayoutDirection::RightToLeft)
            .with_label_position(LabelPosition::Bottom)
            .with_label_width(LabelWidth::Fixed(80.0))
            .with_label_left_adjustment(3.0);

        assert_eq!((config.min, config.max, config.step), (-1.0, 1.0, 0.5));
        assert!(config.disabled && config.show_markers);
        assert!(config.direction.is_rtl());
        assert_eq!(config.label.position, LabelPosition::Bottom);
        assert_eq!(config.label.width.fixed(), Some(80.0));
        assert_eq!(config.label.left_adjustment, 3.0);
    }

    #[test]
    fn min_range_is_validated_against_span() {
        let base = SliderConfig::default().with_bounds(0.0, 10.0);

        assert!(RangeSliderConfig::from(base).with_min_range(0.0).validate().is_ok());
        assert!(RangeSliderConfig::from(base).with_min_range(10.0).validate().is_ok());
        assert_eq!(
            RangeSliderConfig::from(base).with_min_range(-1.0).validate(),
            Err(ConfigError::InvalidMinRange {
                min_range: -1.0,
                span: 10.0
            })
        );
        assert_eq!(
            RangeSliderConfig::from(base).with_min_range(11.0).validate(),
            Err(ConfigError::InvalidMinRange {
                min_range: 11.0,
                span: 10.0
            })
        );
        assert_eq!(
            RangeSliderConfig::from(base).with_min_range(f64::NAN).validate(),
            Err(ConfigError::NonFinite)
        );
    }

    #[test]
    fn range_config_reports_base_errors_first() {
        let config = RangeSliderConfig::from(SliderConfig::default().with_bounds(3.0, 1.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRange { min: 3.0, max: 1.0 })
        );
    }
}
