// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dual-thumb range slider.
//!
//! A [`RangeSlider`] holds a low and a high value separated by at least
//! `min_range`. On pointer down the thumb nearest to the pointer becomes the
//! active one for the whole drag; moves that would bring the two thumbs
//! closer than `min_range` are rejected outright rather than clamped.
//! Thumbs stacked on the same spot are told apart by the direction of the
//! first move.
//!
//! ```
//! use kurbo::Point;
//! use understory_slider::gesture::PointerId;
//! use understory_slider::{RangeEvent, RangeSlider, RangeSliderConfig, SliderConfig, Thumb};
//!
//! let config = RangeSliderConfig::from(SliderConfig::default().with_bounds(0.0, 10.0))
//!     .with_min_range(2.0);
//! let mut slider = RangeSlider::new(config).unwrap().with_values(0.0, 5.0);
//! slider.measure_container(220.0, 0.0);
//! slider.measure_thumb(20.0);
//!
//! let finger = PointerId(0);
//! slider.pointer_down(finger, Point::new(12.0, 20.0));
//! assert_eq!(slider.active_thumb(), Some(Thumb::Low));
//!
//! // 3 keeps a gap of 2 to the high thumb at 5.
//! assert_eq!(
//!     slider.pointer_move(finger, Point::new(70.0, 20.0)),
//!     Some(RangeEvent::RangeChange { low: 3.0, high: 5.0 })
//! );
//! // 4 would not.
//! assert_eq!(slider.pointer_move(finger, Point::new(90.0, 20.0)), None);
//! assert_eq!(slider.values(), (3.0, 5.0));
//! ```

use alloc::boxed::Box;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use smallvec::smallvec;

use crate::binding::OffsetCell;
use crate::config::RangeSliderConfig;
use crate::error::ConfigError;
use crate::gesture::{DragTracker, PointerId};
use crate::layout::{LayoutDirection, SliderLayout};
use crate::mapper::{PositionMapper, SliderRange};
use crate::visuals::{self, Markers, SliderVisuals};

/// Slack allowed when comparing gaps, to absorb float error.
const GAP_EPSILON: f64 = 1e-9;

/// One of the two thumbs of a [`RangeSlider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// The thumb holding the lower value.
    Low,
    /// The thumb holding the higher value.
    High,
}

/// Notification produced by a [`RangeSlider`] gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeEvent {
    /// A drag started with these values.
    SlidingStart {
        /// Low value.
        low: f64,
        /// High value.
        high: f64,
    },
    /// An accepted move produced these values.
    RangeChange {
        /// Low value.
        low: f64,
        /// High value.
        high: f64,
    },
    /// The drag ended with these values.
    SlidingComplete {
        /// Low value.
        low: f64,
        /// High value.
        high: f64,
    },
}

type RangeHandler = Box<dyn FnMut(f64, f64)>;

/// Optional callbacks invoked alongside the returned [`RangeEvent`]s.
#[derive(Default)]
pub struct RangeHandlers {
    on_range_change: Option<RangeHandler>,
    on_sliding_start: Option<RangeHandler>,
    on_sliding_complete: Option<RangeHandler>,
}

impl fmt::Debug for RangeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeHandlers")
            .field("on_range_change", &self.on_range_change.is_some())
            .field("on_sliding_start", &self.on_sliding_start.is_some())
            .field("on_sliding_complete", &self.on_sliding_complete.is_some())
            .finish()
    }
}

impl RangeHandlers {
    /// No handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with `(low, high)` after every accepted move.
    #[must_use]
    pub fn on_range_change(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_range_change = Some(Box::new(f));
        self
    }

    /// Called with `(low, high)` when a drag starts.
    #[must_use]
    pub fn on_sliding_start(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_sliding_start = Some(Box::new(f));
        self
    }

    /// Called with `(low, high)` when a drag ends.
    #[must_use]
    pub fn on_sliding_complete(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_sliding_complete = Some(Box::new(f));
        self
    }

    fn dispatch(&mut self, event: RangeEvent) {
        let (handler, low, high) = match event {
            RangeEvent::SlidingStart { low, high } => (&mut self.on_sliding_start, low, high),
            RangeEvent::RangeChange { low, high } => (&mut self.on_range_change, low, high),
            RangeEvent::SlidingComplete { low, high } => {
                (&mut self.on_sliding_complete, low, high)
            }
        };
        if let Some(handler) = handler {
            handler(low, high);
        }
    }
}

/// A headless two-thumb range slider.
#[derive(Debug)]
pub struct RangeSlider {
    config: RangeSliderConfig,
    range: SliderRange,
    layout: SliderLayout,
    low: f64,
    high: f64,
    pending_values: Option<(f64, f64)>,
    low_thumb: OffsetCell,
    high_thumb: OffsetCell,
    active: Option<Thumb>,
    drag: DragTracker,
    handlers: RangeHandlers,
}

impl RangeSlider {
    /// Validates `config` and creates an idle slider spanning `min..=max`.
    pub fn new(config: RangeSliderConfig) -> Result<Self, ConfigError> {
        let range = config.validate()?;
        Ok(Self {
            config,
            range,
            layout: SliderLayout::new(),
            low: range.min(),
            high: range.max(),
            pending_values: None,
            low_thumb: OffsetCell::new(),
            high_thumb: OffsetCell::new(),
            active: None,
            drag: DragTracker::default(),
            handlers: RangeHandlers::new(),
        })
    }

    /// Sets the initial controlled values.
    #[must_use]
    pub fn with_values(mut self, low: f64, high: f64) -> Self {
        self.set_values(low, high);
        self
    }

    /// Registers callbacks.
    #[must_use]
    pub fn with_handlers(mut self, handlers: RangeHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Replaces the registered callbacks.
    pub fn set_handlers(&mut self, handlers: RangeHandlers) {
        self.handlers = handlers;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &RangeSliderConfig {
        &self.config
    }

    /// Validated value range.
    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Minimum gap between the two values.
    #[must_use]
    pub fn min_range(&self) -> f64 {
        self.config.min_range
    }

    /// Current layout measurements.
    #[must_use]
    pub fn layout(&self) -> &SliderLayout {
        &self.layout
    }

    /// Applies a new configuration.
    ///
    /// On error nothing changes. On success the values are re-normalized
    /// against the new bounds and `min_range`, and both thumbs re-synced.
    pub fn reconfigure(&mut self, config: RangeSliderConfig) -> Result<(), ConfigError> {
        let range = config.validate()?;
        self.config = config;
        self.range = range;
        (self.low, self.high) = self.normalize(self.low, self.high);
        self.sync_thumbs();
        Ok(())
    }

    /// Enables or disables the slider.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.slider.disabled = disabled;
    }

    /// Returns `true` if gestures are refused.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.config.slider.disabled
    }

    /// Changes the reading direction and mirrors both thumbs.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        if self.config.slider.direction != direction {
            self.config.slider.direction = direction;
            self.sync_thumbs();
        }
    }

    /// Reports the container's width and absolute x origin.
    pub fn measure_container(&mut self, width: f64, origin_x: f64) {
        if self.layout.set_container(width, origin_x) {
            self.sync_thumbs();
        }
    }

    /// Reports the thumb width; both thumbs share it.
    pub fn measure_thumb(&mut self, width: f64) {
        if self.layout.set_thumb_width(width) {
            self.sync_thumbs();
        }
    }

    /// Current `(low, high)` values.
    #[must_use]
    pub fn values(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Low value.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// High value.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Visual offset of a thumb's leading edge from the container's left edge.
    #[must_use]
    pub fn thumb_offset(&self, thumb: Thumb) -> f64 {
        self.offset_cell(thumb).get()
    }

    /// The offset binding of a thumb.
    #[must_use]
    pub fn offset_cell(&self, thumb: Thumb) -> &OffsetCell {
        match thumb {
            Thumb::Low => &self.low_thumb,
            Thumb::High => &self.high_thumb,
        }
    }

    /// Changes whenever either thumb moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.low_thumb
            .revision()
            .wrapping_add(self.high_thumb.revision())
    }

    /// The thumb being dragged, if any.
    ///
    /// `None` while dragging stacked thumbs until the first move picks one.
    #[must_use]
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.active
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Mapper for the current layout, if measured.
    #[must_use]
    pub fn mapper(&self) -> Option<PositionMapper> {
        PositionMapper::new(
            self.range,
            self.layout.available_width()?,
            self.config.slider.direction,
        )
    }

    /// Pushes the caller-owned values in.
    ///
    /// Values are clamped into the range, snapped to the step grid, swapped if
    /// reversed, and spread apart to honor `min_range`. While a drag is active the update is held
    /// back and applied on release.
    pub fn set_values(&mut self, low: f64, high: f64) {
        let values = self.normalize(low, high);
        if values != (low, high) {
            log::warn!("range values ({low}, {high}) adjusted to {values:?}");
        }
        if self.drag.is_dragging() {
            self.pending_values = Some(values);
            return;
        }
        (self.low, self.high) = values;
        self.sync_thumbs();
    }

    /// Starts a drag with `pointer`, activating the nearest thumb.
    ///
    /// Refused when disabled, before layout is known, or while another
    /// pointer drags. When the pointer is exactly midway between two separate
    /// thumbs the high thumb wins. When both thumbs sit on the same spot no
    /// thumb is active until the first move shows which way to go.
    pub fn pointer_down(&mut self, pointer: PointerId, pos: Point) -> Option<RangeEvent> {
        if self.config.slider.disabled || self.drag.is_dragging() {
            return None;
        }
        if self.mapper().is_none() {
            log::trace!("range slider layout not measured, ignoring pointer {pointer:?}");
            return None;
        }
        let touch = self.layout.pointer_to_offset(pos.x);
        let (low_offset, high_offset) = (self.low_thumb.get(), self.high_thumb.get());
        let thumb = if (low_offset - high_offset).abs() <= GAP_EPSILON {
            None
        } else if (touch - low_offset).abs() < (touch - high_offset).abs() {
            Some(Thumb::Low)
        } else {
            Some(Thumb::High)
        };
        self.drag.start(pointer, pos);
        self.active = thumb;
        log::debug!("range slider drag started on {thumb:?}");
        self.emit(RangeEvent::SlidingStart {
            low: self.low,
            high: self.high,
        })
    }

    /// Moves the active thumb under `pointer`.
    ///
    /// Rejected moves (those violating `min_range`) leave everything as is and
    /// return `None`. Only the active thumb's value changes.
    pub fn pointer_move(&mut self, pointer: PointerId, pos: Point) -> Option<RangeEvent> {
        self.drag.update(pointer, pos)?;
        if self.config.slider.disabled {
            return None;
        }
        let mapper = self.mapper()?;

        let pointer_offset = self.layout.pointer_to_offset(pos.x);
        let candidate = mapper.snap_logical(mapper.visual_to_logical(pointer_offset));
        let thumb = match self.active {
            Some(thumb) => thumb,
            None => {
                let thumb = self.unstack(&mapper, candidate)?;
                log::debug!("range slider separating stacked thumbs with {thumb:?}");
                self.active = Some(thumb);
                thumb
            }
        };

        let low_px = mapper.visual_to_logical(self.low_thumb.get());
        let high_px = mapper.visual_to_logical(self.high_thumb.get());
        let gap_px = mapper.value_gap_to_pixels(self.config.min_range);
        let value = mapper.logical_to_value(candidate);
        let (low, high, fits_px) = match thumb {
            Thumb::Low => (value, self.high, candidate + gap_px <= high_px + GAP_EPSILON),
            Thumb::High => (self.low, value, candidate - gap_px >= low_px - GAP_EPSILON),
        };
        if !fits_px || !self.honors_min_range(low, high) {
            log::trace!("range slider rejected {thumb:?} at {candidate}px, min gap {gap_px}px");
            return None;
        }

        let cell = match thumb {
            Thumb::Low => &mut self.low_thumb,
            Thumb::High => &mut self.high_thumb,
        };
        cell.set(mapper.logical_to_visual(candidate));
        (self.low, self.high) = (low, high);
        self.emit(RangeEvent::RangeChange {
            low: self.low,
            high: self.high,
        })
    }

    /// Ends the drag held by `pointer` and clears the active thumb.
    pub fn pointer_up(&mut self, pointer: PointerId) -> Option<RangeEvent> {
        if !self.drag.end(pointer) {
            return None;
        }
        self.active = None;
        let (low, high) = (self.low, self.high);
        log::debug!("range slider drag completed at ({low}, {high})");
        if let Some((pending_low, pending_high)) = self.pending_values.take() {
            (self.low, self.high) = (pending_low, pending_high);
            self.sync_thumbs();
        }
        self.emit(RangeEvent::SlidingComplete { low, high })
    }

    /// Geometry for the current state.
    ///
    /// The selected track spans the two thumb centers.
    #[must_use]
    pub fn visuals(&self) -> SliderVisuals {
        let style = &self.config.slider.style;
        let label = &self.config.slider.label;
        let low = visuals::thumb_visual(
            Some(Thumb::Low),
            self.low,
            self.low_thumb.get(),
            &self.layout,
            style,
        );
        let high = visuals::thumb_visual(
            Some(Thumb::High),
            self.high,
            self.high_thumb.get(),
            &self.layout,
            style,
        );
        let half = visuals::thumb_draw_width(&self.layout, style) / 2.0;
        SliderVisuals {
            track: visuals::track_rect(&self.layout, style),
            selected_track: visuals::selected_rect(
                self.low_thumb.get() + half,
                self.high_thumb.get() + half,
                style,
            ),
            labels: smallvec![
                visuals::label_placement(&low, label),
                visuals::label_placement(&high, label),
            ],
            thumbs: smallvec![low, high],
        }
    }

    /// Step markers, empty unless enabled and measured.
    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers::new(
            self.range,
            &self.layout,
            &self.config.slider.style,
            self.config.slider.show_markers,
        )
    }

    /// Picks the thumb to pull out of a stack from the direction of a move.
    fn unstack(&self, mapper: &PositionMapper, candidate: f64) -> Option<Thumb> {
        let stacked_at = mapper.visual_to_logical(self.low_thumb.get());
        if candidate < stacked_at - GAP_EPSILON {
            Some(Thumb::Low)
        } else if candidate > stacked_at + GAP_EPSILON {
            Some(Thumb::High)
        } else {
            None
        }
    }

    fn honors_min_range(&self, low: f64, high: f64) -> bool {
        let tolerance = GAP_EPSILON * self.range.span().max(1.0);
        high - low >= self.config.min_range - tolerance
    }

    /// Clamps, snaps, orders and spreads a pair so that
    /// `high - low >= min_range` with both values on the step grid.
    fn normalize(&self, low: f64, high: f64) -> (f64, f64) {
        let mut low = self.range.snap(low);
        let mut high = self.range.snap(high);
        if low > high {
            core::mem::swap(&mut low, &mut high);
        }
        let min_range = self.config.min_range;
        if !self.honors_min_range(low, high) {
            high = self.range.snap_up(low + min_range);
            if !self.honors_min_range(low, high) {
                low = self.range.snap_down(high - min_range);
            }
        }
        (low, high)
    }

    fn sync_thumbs(&mut self) {
        if let Some(mapper) = self.mapper() {
            self.low_thumb.set(mapper.value_to_offset(self.low));
            self.high_thumb.set(mapper.value_to_offset(self.high));
        }
    }

    fn emit(&mut self, event: RangeEvent) -> Option<RangeEvent> {
        self.handlers.dispatch(event);
        Some(event)
    }
}
