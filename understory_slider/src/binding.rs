// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An owned thumb offset with a change counter.
///
/// Renderers remember the last [`revision`](Self::revision) they drew and
/// redraw when it moves. The revision only bumps when the stored offset
/// actually changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetCell {
    offset: f64,
    revision: u64,
}

impl OffsetCell {
    /// Creates a cell at offset `0.0`, revision `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visual offset of the thumb's leading edge.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.offset
    }

    /// Number of changes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stores a new offset. Returns `true` if it differed from the old one.
    pub fn set(&mut self, offset: f64) -> bool {
        if self.offset == offset {
            return false;
        }
        self.offset = offset;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}
