// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default look of the slider parts, overridable per instance.

use peniko::Color;

/// Default accent used by the selected track and the thumb border.
pub const ACCENT: Color = Color::from_rgb8(0x2f, 0x80, 0xed);

/// Style of a horizontal track bar.
#[derive(Clone, Copy, Debug)]
pub struct TrackStyle {
    /// Bar thickness.
    pub height: f64,
    /// Corner radius.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
}

impl TrackStyle {
    /// The unselected background track.
    pub const BACKGROUND: Self = Self {
        height: 4.0,
        radius: 2.0,
        color: Color::from_rgb8(0xd3, 0xd3, 0xd3),
    };

    /// The highlighted segment between the start (or low thumb) and the thumb.
    pub const SELECTED: Self = Self {
        height: 4.0,
        radius: 2.0,
        color: ACCENT,
    };
}

/// Style of a draggable thumb.
#[derive(Clone, Copy, Debug)]
pub struct ThumbStyle {
    /// Width used for drawing until the host reports a measured width.
    pub width: f64,
    /// Height of the thumb.
    pub height: f64,
    /// Corner radius.
    pub radius: f64,
    /// Fill color.
    pub fill: Color,
    /// Border color.
    pub border_color: Color,
    /// Border width.
    pub border_width: f64,
}

impl Default for ThumbStyle {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            radius: 10.0,
            fill: Color::from_rgb8(0xff, 0xff, 0xff),
            border_color: ACCENT,
            border_width: 1.0,
        }
    }
}

/// Style of a step marker tick.
#[derive(Clone, Copy, Debug)]
pub struct MarkerStyle {
    /// Tick width.
    pub width: f64,
    /// Tick height.
    pub height: f64,
    /// Distance from the container's top edge.
    pub top: f64,
    /// Fill color.
    pub color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 5.0,
            top: 20.0,
            color: Color::from_rgb8(0x99, 0x99, 0x99),
        }
    }
}

/// Complete style of a slider.
#[derive(Clone, Copy, Debug)]
pub struct SliderStyle {
    /// Height of the container; track and thumbs are centered in it.
    pub container_height: f64,
    /// Background track.
    pub track: TrackStyle,
    /// Selected track segment.
    pub selected_track: TrackStyle,
    /// Thumb(s).
    pub thumb: ThumbStyle,
    /// Step markers.
    pub marker: MarkerStyle,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            container_height: 40.0,
            track: TrackStyle::BACKGROUND,
            selected_track: TrackStyle::SELECTED,
            thumb: ThumbStyle::default(),
            marker: MarkerStyle::default(),
        }
    }
}

impl SliderStyle {
    /// Replaces the background track style.
    #[must_use]
    pub fn with_track(mut self, track: TrackStyle) -> Self {
        self.track = track;
        self
    }

    /// Replaces the selected track style.
    #[must_use]
    pub fn with_selected_track(mut self, selected_track: TrackStyle) -> Self {
        self.selected_track = selected_track;
        self
    }

    /// Replaces the thumb style.
    #[must_use]
    pub fn with_thumb(mut self, thumb: ThumbStyle) -> Self {
        self.thumb = thumb;
        self
    }

    /// Replaces the marker style.
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }
}
