// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-value slider.
//!
//! ## Usage
//!
//! 1) Build a [`Slider`] from a [`SliderConfig`]; an invalid configuration is
//!    reported here, once.
//! 2) Report layout with [`Slider::measure_container`] and
//!    [`Slider::measure_thumb`] whenever the host measures.
//! 3) Route pointer events to [`Slider::pointer_down`],
//!    [`Slider::pointer_move`] and [`Slider::pointer_up`]. Each returns the
//!    resulting [`SliderEvent`], and also invokes the matching handler from
//!    [`SliderHandlers`] if one is registered.
//! 4) Draw from [`Slider::visuals`] and [`Slider::markers`] whenever
//!    [`Slider::revision`] moves.
//!
//! ```
//! use kurbo::Point;
//! use understory_slider::gesture::PointerId;
//! use understory_slider::{Slider, SliderConfig, SliderEvent};
//!
//! let mut slider = Slider::new(SliderConfig::default().with_step(10.0)).unwrap();
//! slider.measure_container(220.0, 0.0);
//! slider.measure_thumb(20.0);
//!
//! let finger = PointerId(0);
//! assert_eq!(
//!     slider.pointer_down(finger, Point::new(10.0, 20.0)),
//!     Some(SliderEvent::SlidingStart(0.0))
//! );
//! // The pointer is the thumb center: 104 - 10 = 94px, where 47 would sit.
//! assert_eq!(
//!     slider.pointer_move(finger, Point::new(104.0, 20.0)),
//!     Some(SliderEvent::ValueChange(50.0))
//! );
//! assert_eq!(
//!     slider.pointer_up(finger),
//!     Some(SliderEvent::SlidingComplete(50.0))
//! );
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;
use smallvec::smallvec;

use crate::binding::OffsetCell;
use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::gesture::{DragTracker, PointerId};
use crate::layout::{LayoutDirection, SliderLayout};
use crate::mapper::{PositionMapper, SliderRange};
use crate::visuals::{self, Markers, SliderVisuals};

/// Notification produced by a [`Slider`] gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// A drag started at this value.
    SlidingStart(f64),
    /// The value changed during a drag.
    ValueChange(f64),
    /// The drag ended at this value.
    SlidingComplete(f64),
}

type ValueHandler = Box<dyn FnMut(f64)>;

/// Optional callbacks invoked alongside the returned [`SliderEvent`]s.
#[derive(Default)]
pub struct SliderHandlers {
    on_value_change: Option<ValueHandler>,
    on_sliding_start: Option<ValueHandler>,
    on_sliding_complete: Option<ValueHandler>,
}

impl fmt::Debug for SliderHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderHandlers")
            .field("on_value_change", &self.on_value_change.is_some())
            .field("on_sliding_start", &self.on_sliding_start.is_some())
            .field("on_sliding_complete", &self.on_sliding_complete.is_some())
            .finish()
    }
}

impl SliderHandlers {
    /// No handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with every value produced while dragging.
    #[must_use]
    pub fn on_value_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_value_change = Some(Box::new(f));
        self
    }

    /// Called with the current value when a drag starts.
    #[must_use]
    pub fn on_sliding_start(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_sliding_start = Some(Box::new(f));
        self
    }

    /// Called with the final value when a drag ends.
    #[must_use]
    pub fn on_sliding_complete(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_sliding_complete = Some(Box::new(f));
        self
    }

    fn dispatch(&mut self, event: SliderEvent) {
        let (handler, value) = match event {
            SliderEvent::SlidingStart(v) => (&mut self.on_sliding_start, v),
            SliderEvent::ValueChange(v) => (&mut self.on_value_change, v),
            SliderEvent::SlidingComplete(v) => (&mut self.on_sliding_complete, v),
        };
        if let Some(handler) = handler {
            handler(value);
        }
    }
}

/// A headless single-thumb slider.
///
/// The slider mirrors a caller-owned value: [`set_value`](Self::set_value)
/// pushes the controlled value in, gestures push new values out through
/// events. The thumb's visual offset is held in an [`OffsetCell`].
#[derive(Debug)]
pub struct Slider {
    config: SliderConfig,
    range: SliderRange,
    layout: SliderLayout,
    value: f64,
    pending_value: Option<f64>,
    thumb: OffsetCell,
    drag: DragTracker,
    handlers: SliderHandlers,
}

impl Slider {
    /// Validates `config` and creates an idle slider at `min`.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        let range = config.validate()?;
        Ok(Self {
            config,
            range,
            layout: SliderLayout::new(),
            value: range.min(),
            pending_value: None,
            thumb: OffsetCell::new(),
            drag: DragTracker::default(),
            handlers: SliderHandlers::new(),
        })
    }

    /// Sets the initial controlled value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Registers callbacks.
    #[must_use]
    pub fn with_handlers(mut self, handlers: SliderHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Replaces the registered callbacks.
    pub fn set_handlers(&mut self, handlers: SliderHandlers) {
        self.handlers = handlers;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Validated value range.
    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Current layout measurements.
    #[must_use]
    pub fn layout(&self) -> &SliderLayout {
        &self.layout
    }

    /// Applies a new configuration.
    ///
    /// On error nothing changes. On success the value is clamped into the new
    /// range and the thumb re-synced.
    pub fn reconfigure(&mut self, config: SliderConfig) -> Result<(), ConfigError> {
        let range = config.validate()?;
        self.config = config;
        self.range = range;
        self.value = self.clamp_controlled(self.value);
        self.sync_thumb();
        Ok(())
    }

    /// Enables or disables the slider.
    ///
    /// Disabling does not end a drag in progress, but further moves are ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Returns `true` if gestures are refused.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Changes the reading direction and mirrors the thumb accordingly.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        if self.config.direction != direction {
            self.config.direction = direction;
            self.sync_thumb();
        }
    }

    /// Reports the container's width and absolute x origin.
    pub fn measure_container(&mut self, width: f64, origin_x: f64) {
        if self.layout.set_container(width, origin_x) {
            self.sync_thumb();
        }
    }

    /// Reports the thumb's width.
    pub fn measure_thumb(&mut self, width: f64) {
        if self.layout.set_thumb_width(width) {
            self.sync_thumb();
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Visual offset of the thumb's leading edge from the container's left edge.
    #[must_use]
    pub fn thumb_offset(&self) -> f64 {
        self.thumb.get()
    }

    /// The thumb offset binding.
    #[must_use]
    pub fn offset_cell(&self) -> &OffsetCell {
        &self.thumb
    }

    /// Changes whenever the thumb moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.thumb.revision()
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
            self.config.direction,
        )
    }

    /// Pushes the caller-owned value in.
    ///
    /// Out-of-range values are clamped. While a drag is active the update is
    /// held back and applied on release, so the thumb does not jump under
    /// the pointer.
    pub fn set_value(&mut self, value: f64) {
        let value = self.clamp_controlled(value);
        if self.drag.is_dragging() {
            self.pending_value = Some(value);
            return;
        }
        self.value = value;
        self.sync_thumb();
    }

    /// Starts a drag with `pointer`.
    ///
    /// Refused when disabled or when another pointer already drags.
    pub fn pointer_down(&mut self, pointer: PointerId, pos: Point) -> Option<SliderEvent> {
        if self.config.disabled {
            log::trace!("slider disabled, ignoring pointer {pointer:?}");
            return None;
        }
        if !self.drag.start(pointer, pos) {
            return None;
        }
        log::debug!("slider drag started at {}", self.value);
        self.emit(SliderEvent::SlidingStart(self.value))
    }

    /// Moves the thumb under `pointer`.
    ///
    /// A no-op for foreign pointers, while disabled, or before layout is known.
    pub fn pointer_move(&mut self, pointer: PointerId, pos: Point) -> Option<SliderEvent> {
        let delta = self.drag.update(pointer, pos)?;
        if self.config.disabled {
            return None;
        }
        let Some(mapper) = self.mapper() else {
            log::trace!("slider layout not measured, ignoring move by {delta:?}");
            return None;
        };
        let pointer_offset = self.layout.pointer_to_offset(pos.x);
        let logical = mapper.snap_logical(mapper.visual_to_logical(pointer_offset));
        self.value = mapper.logical_to_value(logical);
        self.thumb.set(mapper.logical_to_visual(logical));
        self.emit(SliderEvent::ValueChange(self.value))
    }

    /// Ends the drag held by `pointer`.
    pub fn pointer_up(&mut self, pointer: PointerId) -> Option<SliderEvent> {
        if !self.drag.end(pointer) {
            return None;
        }
        let completed = self.value;
        log::debug!("slider drag completed at {completed}");
        if let Some(value) = self.pending_value.take() {
            self.value = value;
            self.sync_thumb();
        }
        self.emit(SliderEvent::SlidingComplete(completed))
    }

    /// Geometry for the current state.
    #[must_use]
    pub fn visuals(&self) -> SliderVisuals {
        let style = &self.config.style;
        let offset = self.thumb.get();
        let thumb = visuals::thumb_visual(None, self.value, offset, &self.layout, style);
        let label = visuals::label_placement(&thumb, &self.config.label);
        let center = offset + visuals::thumb_draw_width(&self.layout, style) / 2.0;
        let start = if self.config.direction.is_rtl() {
            self.layout.container_width()
        } else {
            0.0
        };
        SliderVisuals {
            track: visuals::track_rect(&self.layout, style),
            selected_track: visuals::selected_rect(start, center, style),
            thumbs: smallvec![thumb],
            labels: smallvec![label],
        }
    }

    /// Step markers, empty unless enabled and measured.
    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers::new(
            self.range,
            &self.layout,
            &self.config.style,
            self.config.show_markers,
        )
    }

    fn clamp_controlled(&self, value: f64) -> f64 {
        let clamped = self.range.clamp(value);
        if clamped != value {
            log::warn!(
                "slider value {value} outside {}..={}, clamped to {clamped}",
                self.range.min(),
                self.range.max()
            );
        }
        clamped
    }

    fn sync_thumb(&mut self) {
        if let Some(mapper) = self.mapper() {
            self.thumb.set(mapper.value_to_offset(self.value));
        }
    }

    fn emit(&mut self, event: SliderEvent) -> Option<SliderEvent> {
        self.handlers.dispatch(event);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    const FINGER: PointerId = PointerId(7);

    fn measured(config: SliderConfig) -> Slider {
        let mut slider = Slider::new(config).unwrap();
        slider.measure_container(220.0, 100.0);
        slider.measure_thumb(20.0);
        slider
    }

    /// Page x that puts the thumb's leading edge at `offset`.
    fn page_x(offset: f64) -> f64 {
        100.0 + 10.0 + offset
    }

    #[test]
    fn new_slider_starts_at_min() {
        let slider = Slider::new(SliderConfig::default().with_bounds(-5.0, 5.0)).unwrap();
        assert_eq!(slider.value(), -5.0);
        assert_eq!(slider.thumb_offset(), 0.0);
        assert!(!slider.is_dragging());
        assert!(slider.mapper().is_none());
    }

    #[test]
    fn invalid_config_is_rejected_once() {
        let err = Slider::new(SliderConfig::default().with_bounds(1.0, 1.0)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRange { min: 1.0, max: 1.0 });
    }

    #[test]
    fn measurement_positions_thumb_from_value() {
        let mut slider = Slider::new(SliderConfig::default()).unwrap().with_value(25.0);
        assert_eq!(slider.thumb_offset(), 0.0);

        slider.measure_container(220.0, 0.0);
        // Thumb width still unknown: nothing is positioned yet.
        assert_eq!(slider.thumb_offset(), 0.0);
        assert!(slider.mapper().is_none());

        slider.measure_thumb(20.0);
        assert_eq!(slider.thumb_offset(), 50.0);
        assert_eq!(slider.value(), 25.0);
    }

    #[test]
    fn drag_before_thumb_is_measured_is_ignored() {
        let mut slider = Slider::new(SliderConfig::default()).unwrap().with_value(25.0);
        slider.measure_container(220.0, 0.0);

        slider.pointer_down(FINGER, Point::new(10.0, 0.0));
        assert_eq!(slider.pointer_move(FINGER, Point::new(120.0, 0.0)), None);
        assert_eq!(slider.value(), 25.0);
        assert_eq!(slider.thumb_offset(), 0.0);
        slider.pointer_up(FINGER);

        slider.measure_thumb(20.0);
        assert_eq!(slider.thumb_offset(), 50.0);
    }

    #[test]
    fn drag_emits_start_changes_and_complete() {
        let mut slider = measured(SliderConfig::default());

        assert_eq!(
            slider.pointer_down(FINGER, Point::new(page_x(0.0), 0.0)),
            Some(SliderEvent::SlidingStart(0.0))
        );
        assert!(slider.is_dragging());

        assert_eq!(
            slider.pointer_move(FINGER, Point::new(page_x(60.0), 0.0)),
            Some(SliderEvent::ValueChange(30.0))
        );
        assert_eq!(slider.thumb_offset(), 60.0);

        assert_eq!(
            slider.pointer_move(FINGER, Point::new(page_x(1000.0), 0.0)),
            Some(SliderEvent::ValueChange(100.0))
        );
        assert_eq!(slider.thumb_offset(), 200.0);

        assert_eq!(
            slider.pointer_up(FINGER),
            Some(SliderEvent::SlidingComplete(100.0))
        );
        assert!(!slider.is_dragging());
    }

    #[test]
    fn disabled_slider_refuses_to_start() {
        let mut slider = measured(SliderConfig::default().with_disabled(true));
        assert_eq!(slider.pointer_down(FINGER, Point::new(page_x(50.0), 0.0)), None);
        assert_eq!(slider.pointer_move(FINGER, Point::new(page_x(80.0), 0.0)), None);
        assert_eq!(slider.pointer_up(FINGER), None);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn disabling_mid_drag_freezes_the_thumb() {
        let mut slider = measured(SliderConfig::default());
        slider.pointer_down(FINGER, Point::new(page_x(0.0), 0.0));
        slider.pointer_move(FINGER, Point::new(page_x(20.0), 0.0));
        slider.set_disabled(true);

        assert_eq!(slider.pointer_move(FINGER, Point::new(page_x(80.0), 0.0)), None);
        assert_eq!(slider.value(), 10.0);
        assert_eq!(
            slider.pointer_up(FINGER),
            Some(SliderEvent::SlidingComplete(10.0))
        );
    }

    #[test]
    fn unmeasured_slider_ignores_moves() {
        let mut slider = Slider::new(SliderConfig::default()).unwrap();
        assert!(slider.pointer_down(FINGER, Point::new(50.0, 0.0)).is_some());
        assert_eq!(slider.pointer_move(FINGER, Point::new(80.0, 0.0)), None);
        assert_eq!(slider.value(), 0.0);
        assert_eq!(slider.thumb_offset(), 0.0);
    }

    #[test]
    fn second_pointer_is_locked_out() {
        let mut slider = measured(SliderConfig::default());
        slider.pointer_down(FINGER, Point::new(page_x(0.0), 0.0));

        let other = PointerId(8);
        assert_eq!(slider.pointer_down(other, Point::new(page_x(100.0), 0.0)), None);
        assert_eq!(slider.pointer_move(other, Point::new(page_x(100.0), 0.0)), None);
        assert_eq!(slider.pointer_up(other), None);
        assert_eq!(slider.value(), 0.0);
        assert!(slider.is_dragging());
    }

    #[test]
    fn handlers_receive_every_event() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let handlers = SliderHandlers::new()
            .on_sliding_start(move |v| a.borrow_mut().push(("start", v)))
            .on_value_change(move |v| b.borrow_mut().push(("change", v)))
            .on_sliding_complete(move |v| c.borrow_mut().push(("complete", v)));
        let mut slider = measured(SliderConfig::default()).with_handlers(handlers);

        slider.pointer_down(FINGER, Point::new(page_x(0.0), 0.0));
        slider.pointer_move(FINGER, Point::new(page_x(40.0), 0.0));
        slider.pointer_up(FINGER);

        assert_eq!(
            *log.borrow(),
            [("start", 0.0), ("change", 20.0), ("complete", 20.0)]
        );
    }

    #[test]
    fn controlled_value_is_clamped_and_resynced() {
        let mut slider = measured(SliderConfig::default());
        slider.set_value(150.0);
        assert_eq!(slider.value(), 100.0);
        assert_eq!(slider.thumb_offset(), 200.0);

        slider.set_value(f64::NAN);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn controlled_value_is_deferred_while_dragging() {
        let mut slider = measured(SliderConfig::default());
        slider.pointer_down(FINGER, Point::new(page_x(0.0), 0.0));
        slider.pointer_move(FINGER, Point::new(page_x(20.0), 0.0));

        slider.set_value(80.0);
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.thumb_offset(), 20.0);

        assert_eq!(
            slider.pointer_up(FINGER),
            Some(SliderEvent::SlidingComplete(10.0))
        );
        assert_eq!(slider.value(), 80.0);
        assert_eq!(slider.thumb_offset(), 160.0);
    }

    #[test]
    fn rtl_drag_maps_left_edge_to_max() {
        let mut slider = measured(SliderConfig::default().with_direction(LayoutDirection::RightToLeft));
        assert_eq!(slider.thumb_offset(), 200.0);

        slider.pointer_down(FINGER, Point::new(page_x(200.0), 0.0));
        assert_eq!(
            slider.pointer_move(FINGER, Point::new(page_x(50.0), 0.0)),
            Some(SliderEvent::ValueChange(75.0))
        );
        assert_eq!(slider.thumb_offset(), 50.0);
    }

    #[test]
    fn direction_change_mirrors_thumb() {
        let mut slider = measured(SliderConfig::default()).with_value(30.0);
        assert_eq!(slider.thumb_offset(), 60.0);
        let revision = slider.revision();

        slider.set_direction(LayoutDirection::RightToLeft);
        assert_eq!(slider.thumb_offset(), 140.0);
        assert!(slider.revision() > revision);
        assert_eq!(slider.value(), 30.0);
    }

    #[test]
    fn reconfigure_clamps_value_and_keeps_old_config_on_error() {
        let mut slider = measured(SliderConfig::default()).with_value(80.0);

        let err = slider.reconfigure(SliderConfig::default().with_step(-1.0));
        assert_eq!(err, Err(ConfigError::InvalidStep { step: -1.0 }));
        assert_eq!(slider.range().step(), 1.0);

        slider
            .reconfigure(SliderConfig::default().with_bounds(0.0, 50.0))
            .unwrap();
        assert_eq!(slider.value(), 50.0);
        assert_eq!(slider.thumb_offset(), 200.0);
    }

    #[test]
    fn selected_track_runs_from_start_to_thumb_center() {
        let slider = measured(SliderConfig::default()).with_value(50.0);
        let visuals = slider.visuals();
        assert_eq!(visuals.selected_track.rect().x0, 0.0);
        assert_eq!(visuals.selected_track.rect().x1, 110.0);
        assert_eq!(visuals.thumbs.len(), 1);
        assert_eq!(visuals.thumbs[0].rect.rect().x0, 100.0);
        assert_eq!(visuals.labels[0].value, 50.0);

        let rtl = measured(SliderConfig::default().with_direction(LayoutDirection::RightToLeft))
            .with_value(50.0);
        let selected = rtl.visuals().selected_track.rect();
        assert_eq!((selected.x0, selected.x1), (110.0, 220.0));
    }

    #[test]
    fn markers_follow_config() {
        let slider = measured(SliderConfig::default().with_step(25.0));
        assert_eq!(slider.markers().count(), 0);

        let slider = measured(SliderConfig::default().with_step(25.0).with_markers(true));
        let centers: Vec<_> = slider.markers().map(|m| m.center_x).collect();
        assert_eq!(centers, [0.0, 55.0, 110.0, 165.0, 220.0]);
    }
}
