// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal reading direction of the host layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// `min` sits at the left edge.
    #[default]
    LeftToRight,
    /// `min` sits at the right edge; visual offsets are mirrored.
    RightToLeft,
}

impl LayoutDirection {
    /// Returns `true` for [`LayoutDirection::RightToLeft`].
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Layout measurements a slider needs before any position math is possible.
///
/// Hosts report these after their own layout pass, in any order and as often
/// as they change. Until both the container and the thumb have been measured,
/// and the container is wider than the thumb,
/// [`available_width`](Self::available_width) is `None` and sliders treat
/// pointer input as a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderLayout {
    container_width: f64,
    container_x: f64,
    thumb_width: Option<f64>,
}

impl SliderLayout {
    /// Creates an unmeasured layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the container's rendered width and its absolute (page) x origin.
    ///
    /// Negative or non-finite widths are treated as unmeasured. Returns `true`
    /// if anything changed.
    pub fn set_container(&mut self, width: f64, origin_x: f64) -> bool {
        let width = sanitize_extent(width);
        let origin_x = if origin_x.is_finite() { origin_x } else { 0.0 };
        if self.container_width == width && self.container_x == origin_x {
            return false;
        }
        self.container_width = width;
        self.container_x = origin_x;
        true
    }

    /// Records the thumb's rendered width. Returns `true` if it changed.
    ///
    /// Zero, negative or non-finite widths leave the thumb unmeasured.
    pub fn set_thumb_width(&mut self, width: f64) -> bool {
        let width = Some(sanitize_extent(width)).filter(|w| *w > 0.0);
        if self.thumb_width == width {
            return false;
        }
        self.thumb_width = width;
        true
    }

    /// Container width in pixels, `0.0` until measured.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Absolute x origin of the container.
    #[must_use]
    pub fn container_x(&self) -> f64 {
        self.container_x
    }

    /// Thumb width in pixels, `0.0` until measured.
    #[must_use]
    pub fn thumb_width(&self) -> f64 {
        self.thumb_width.unwrap_or(0.0)
    }

    /// Returns `true` once the container width is known.
    #[must_use]
    pub fn is_container_measured(&self) -> bool {
        self.container_width > 0.0
    }

    /// Returns `true` once the thumb width is known.
    #[must_use]
    pub fn is_thumb_measured(&self) -> bool {
        self.thumb_width.is_some()
    }

    /// Returns `true` once both the container and the thumb are measured.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.is_container_measured() && self.is_thumb_measured()
    }

    /// Container width minus thumb width, if positive.
    #[must_use]
    pub fn available_width(&self) -> Option<f64> {
        if !self.is_measured() {
            return None;
        }
        let available = self.container_width - self.thumb_width();
        (available > 0.0).then_some(available)
    }

    /// Converts an absolute pointer x into a visual leading-edge offset.
    ///
    /// The pointer is treated as the thumb's center, so half the thumb width
    /// is subtracted. The result is not clamped.
    #[must_use]
    pub fn pointer_to_offset(&self, page_x: f64) -> f64 {
        page_x - self.container_x - self.thumb_width() / 2.0
    }
}

fn sanitize_extent(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}
