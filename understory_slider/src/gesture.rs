// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer capture for a single active drag.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] on pointer down. It refuses a second pointer
//!    while another one is captured.
//! 2) On each move, call [`DragTracker::update`]; moves from other pointers
//!    return `None`.
//! 3) Call [`DragTracker::end`] on release to drop the capture.
//!
//! ```
//! use kurbo::Point;
//! use understory_slider::gesture::{DragTracker, PointerId};
//!
//! let mut drag = DragTracker::default();
//! assert!(drag.start(PointerId(1), Point::new(10.0, 20.0)));
//!
//! // A second finger is ignored while the first one drags.
//! assert!(!drag.start(PointerId(2), Point::new(50.0, 20.0)));
//! assert!(drag.update(PointerId(2), Point::new(60.0, 20.0)).is_none());
//!
//! let delta = drag.update(PointerId(1), Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta.x, 5.0);
//!
//! assert!(drag.end(PointerId(1)));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Host-assigned identifier of a pointer (mouse, pen, or touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl From<u64> for PointerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Tracks the pointer that owns the current drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Pointer holding the capture.
    pub pointer: Option<PointerId>,
    /// Last position seen from the capturing pointer.
    pub last_pos: Option<Point>,
}

impl DragTracker {
    /// Captures `pointer` and starts a drag at `pos`.
    ///
    /// Returns `false` without changing anything if a drag is already active.
    pub fn start(&mut self, pointer: PointerId, pos: Point) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.pointer = Some(pointer);
        self.last_pos = Some(pos);
        true
    }

    /// Records a move of `pointer`, returning the delta since the last move.
    ///
    /// Returns `None` when no drag is active or `pointer` is not the captured one.
    pub fn update(&mut self, pointer: PointerId, pos: Point) -> Option<Vec2> {
        if !self.is_captured_by(pointer) {
            return None;
        }
        let last = self.last_pos.replace(pos).unwrap_or(pos);
        Some(pos - last)
    }

    /// Releases the capture held by `pointer`.
    ///
    /// Returns `false` if `pointer` did not own the drag.
    pub fn end(&mut self, pointer: PointerId) -> bool {
        if !self.is_captured_by(pointer) {
            return false;
        }
        *self = Self::default();
        true
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Returns `true` if `pointer` owns the active drag.
    #[must_use]
    pub fn is_captured_by(&self, pointer: PointerId) -> bool {
        self.pointer == Some(pointer)
    }
}
