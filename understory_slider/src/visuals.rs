// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry a host draws for a slider, plus optional render hooks.
//!
//! Everything is expressed in the container's local coordinate space: the
//! origin is the container's top-left corner, x grows to the right.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, RoundedRect};
use smallvec::SmallVec;

use crate::config::{LabelConfig, LabelPosition};
use crate::layout::SliderLayout;
use crate::mapper::SliderRange;
use crate::range_slider::Thumb;
use crate::style::{MarkerStyle, SliderStyle, TrackStyle};

/// Label offset from the thumb's top edge when placed above it.
const LABEL_TOP_OFFSET: f64 = -35.0;
/// Label offset from the thumb's top edge when placed below it.
const LABEL_BOTTOM_OFFSET: f64 = 25.0;
/// Base horizontal label shift relative to the thumb's leading edge.
const LABEL_LEFT_INSET: f64 = -5.0;

/// Tolerance for counting whole steps, so `0.3 / 0.1` still yields 3 steps.
const STEP_COUNT_EPSILON: f64 = 1e-9;

/// A positioned thumb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbVisual {
    /// `None` for a single slider.
    pub thumb: Option<Thumb>,
    /// Value the thumb represents.
    pub value: f64,
    /// Thumb bounds.
    pub rect: RoundedRect,
}

/// Where a value label goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// `None` for a single slider.
    pub thumb: Option<Thumb>,
    /// Value to display.
    pub value: f64,
    /// Top-left corner of the label box.
    pub origin: Point,
    /// Fixed width, or `None` to size by content.
    pub width: Option<f64>,
}

/// Everything needed to draw a slider at one moment.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderVisuals {
    /// Full-width background track.
    pub track: RoundedRect,
    /// Highlighted track segment.
    pub selected_track: RoundedRect,
    /// Thumbs, in low/high order for range sliders.
    pub thumbs: SmallVec<[ThumbVisual; 2]>,
    /// One label per thumb.
    pub labels: SmallVec<[LabelPlacement; 2]>,
}

/// A step marker tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Step index, `0` at `min`.
    pub index: usize,
    /// Value at this step.
    pub value: f64,
    /// Horizontal center of the tick.
    pub center_x: f64,
    /// Tick bounds.
    pub rect: Rect,
}

/// Lazy iterator over the markers of a slider.
///
/// Empty when markers are disabled or the container is unmeasured.
#[derive(Clone, Debug)]
pub struct Markers {
    range: SliderRange,
    spacing: f64,
    style: MarkerStyle,
    next: usize,
    count: usize,
}

impl Markers {
    pub(crate) fn new(
        range: SliderRange,
        layout: &SliderLayout,
        style: &SliderStyle,
        enabled: bool,
    ) -> Self {
        let steps = range.step_count();
        let usable = layout.is_container_measured() && steps.is_finite() && steps > 0.0;
        let count = if enabled && usable {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "step count is finite, positive and already floored"
            )]
            let whole = (steps + STEP_COUNT_EPSILON).floor() as usize;
            whole.saturating_add(1)
        } else {
            0
        };
        Self {
            range,
            spacing: layout.container_width() / steps,
            style: style.marker,
            next: 0,
            count,
        }
    }
}

impl Iterator for Markers {
    type Item = Marker;

    fn next(&mut self) -> Option<Marker> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let i = index as f64;
        let value = self.range.round(self.range.min() + i * self.range.step());
        let center_x = i * self.spacing;
        let half = self.style.width / 2.0;
        let rect = Rect::new(
            center_x - half,
            self.style.top,
            center_x + half,
            self.style.top + self.style.height,
        );
        Some(Marker {
            index,
            value: self.range.clamp(value),
            center_x,
            rect,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Markers {}

/// Width used to draw a thumb: the measured width once known.
pub(crate) fn thumb_draw_width(layout: &SliderLayout, style: &SliderStyle) -> f64 {
    if layout.thumb_width() > 0.0 {
        layout.thumb_width()
    } else {
        style.thumb.width
    }
}

pub(crate) fn track_rect(layout: &SliderLayout, style: &SliderStyle) -> RoundedRect {
    bar(0.0, layout.container_width(), style.container_height, &style.track)
}

/// Selected segment between two x positions, in either order.
pub(crate) fn selected_rect(a: f64, b: f64, style: &SliderStyle) -> RoundedRect {
    bar(a.min(b), a.max(b), style.container_height, &style.selected_track)
}

fn bar(x0: f64, x1: f64, container_height: f64, track: &TrackStyle) -> RoundedRect {
    let cy = container_height / 2.0;
    Rect::new(x0, cy - track.height / 2.0, x1, cy + track.height / 2.0).to_rounded_rect(track.radius)
}

pub(crate) fn thumb_visual(
    thumb: Option<Thumb>,
    value: f64,
    offset: f64,
    layout: &SliderLayout,
    style: &SliderStyle,
) -> ThumbVisual {
    let width = thumb_draw_width(layout, style);
    let top = (style.container_height - style.thumb.height) / 2.0;
    let rect = Rect::new(offset, top, offset + width, top + style.thumb.height)
        .to_rounded_rect(style.thumb.radius);
    ThumbVisual { thumb, value, rect }
}

pub(crate) fn label_placement(visual: &ThumbVisual, label: &LabelConfig) -> LabelPlacement {
    let dy = match label.position {
        LabelPosition::Top => LABEL_TOP_OFFSET,
        LabelPosition::Bottom => LABEL_BOTTOM_OFFSET,
    };
    let thumb = visual.rect.rect();
    LabelPlacement {
        thumb: visual.thumb,
        value: visual.value,
        origin: Point::new(thumb.x0 + LABEL_LEFT_INSET + label.left_adjustment, thumb.y0 + dy),
        width: label.width.fixed(),
    }
}

type LabelFn<V> = Box<dyn Fn(f64, Option<Thumb>) -> V>;
type MarkerFn<V> = Box<dyn Fn(f64) -> V>;

/// Optional render hooks producing host-specific content `V`.
///
/// Hooks receive primitive arguments only: the value, and for range sliders
/// which thumb a label belongs to.
///
/// ```
/// use understory_slider::{Renderers, Slider, SliderConfig};
///
/// let mut slider = Slider::new(SliderConfig::default()).unwrap();
/// slider.measure_container(220.0, 0.0);
/// slider.measure_thumb(20.0);
/// slider.set_value(40.0);
///
/// let renderers = Renderers::new().with_label(|value, _| format!("{value}%"));
/// let labels = renderers.render_labels(&slider.visuals());
/// assert_eq!(labels[0].1, "40%");
/// ```
pub struct Renderers<V> {
    label: Option<LabelFn<V>>,
    marker: Option<MarkerFn<V>>,
}

impl<V> Default for Renderers<V> {
    fn default() -> Self {
        Self {
            label: None,
            marker: None,
        }
    }
}

impl<V> fmt::Debug for Renderers<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderers")
            .field("label", &self.label.is_some())
            .field("marker", &self.marker.is_some())
            .finish()
    }
}

impl<V> Renderers<V> {
    /// No hooks: nothing is rendered for labels or markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label hook.
    #[must_use]
    pub fn with_label(mut self, f: impl Fn(f64, Option<Thumb>) -> V + 'static) -> Self {
        self.label = Some(Box::new(f));
        self
    }

    /// Sets the marker hook.
    #[must_use]
    pub fn with_marker(mut self, f: impl Fn(f64) -> V + 'static) -> Self {
        self.marker = Some(Box::new(f));
        self
    }

    /// Returns `true` if a label hook is set.
    #[must_use]
    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    /// Returns `true` if a marker hook is set.
    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// Runs the label hook for every label; empty without a hook.
    pub fn render_labels(&self, visuals: &SliderVisuals) -> Vec<(LabelPlacement, V)> {
        let Some(label) = &self.label else {
            return Vec::new();
        };
        visuals
            .labels
            .iter()
            .map(|placement| (*placement, label(placement.value, placement.thumb)))
            .collect()
    }

    /// Runs the marker hook for every marker; empty without a hook.
    pub fn render_markers(&self, markers: Markers) -> Vec<(Marker, V)> {
        let Some(marker) = &self.marker else {
            return Vec::new();
        };
        markers.map(|m| (m, marker(m.value))).collect()
    }
}
