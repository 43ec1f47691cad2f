// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: headless single-value and range sliders.
//!
//! This crate models the interaction logic of two draggable controls:
//!
//! - [`Slider`]: one thumb, one value.
//! - [`RangeSlider`]: a low and a high thumb kept at least `min_range` apart.
//!
//! Both share one piece of arithmetic, the [`PositionMapper`]: given the
//! container width, thumb width and a validated [`SliderRange`], it converts
//! values into thumb offsets and pointer offsets into stepped, bounded values,
//! mirroring everything for right-to-left layouts.
//!
//! The crate does **not** render, lay out, or receive platform events. Hosts
//! are expected to:
//!
//! - Report measurements with `measure_container` / `measure_thumb` once
//!   their layout pass has run, and again whenever the sizes change.
//! - Forward pointer down/move/up events with a [`PointerId`](gesture::PointerId)
//!   and an absolute position.
//! - Read back values, [`SliderEvent`] / [`RangeEvent`] notifications, and
//!   draw from [`SliderVisuals`] and [`Markers`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_slider::gesture::PointerId;
//! use understory_slider::{Slider, SliderConfig, SliderEvent, SliderHandlers};
//!
//! let config = SliderConfig::default().with_bounds(0.0, 1.0).with_step(0.1);
//! let mut slider = Slider::new(config)
//!     .unwrap()
//!     .with_value(0.5)
//!     .with_handlers(SliderHandlers::new().on_value_change(|v| println!("value: {v}")));
//!
//! // Nothing moves until layout is known.
//! slider.measure_container(320.0, 16.0);
//! slider.measure_thumb(20.0);
//! assert_eq!(slider.thumb_offset(), 150.0);
//!
//! let mouse = PointerId(0);
//! slider.pointer_down(mouse, Point::new(176.0, 20.0));
//! let event = slider.pointer_move(mouse, Point::new(110.0, 20.0));
//! assert_eq!(event, Some(SliderEvent::ValueChange(0.3)));
//! slider.pointer_up(mouse);
//! ```
//!
//! ## Concepts
//!
//! - **Available width**: container width minus thumb width. Offsets describe
//!   the thumb's leading edge, while pointer positions are treated as the
//!   thumb's center.
//! - **Step**: values snap to `min + k * step` and are rounded to the number
//!   of fractional digits of `step`. A step of zero is a configuration error.
//! - **Controlled values**: `set_value` / `set_values` push caller-owned state
//!   in. Updates that arrive mid-drag are applied on release.
//! - **Bindings**: each thumb offset lives in an [`OffsetCell`] whose revision
//!   bumps on every change, so renderers can skip redundant work.
//! - **Pointer capture**: the first pointer to go down owns the gesture; other
//!   pointers are ignored until it is released.
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_slider requires either the `std` or `libm` feature");

mod binding;
mod config;
mod error;
pub mod gesture;
mod layout;
mod mapper;
mod range_slider;
mod slider;
pub mod style;
mod visuals;

pub use binding::OffsetCell;
pub use config::{LabelConfig, LabelPosition, LabelWidth, RangeSliderConfig, SliderConfig};
pub use error::ConfigError;
pub use layout::{LayoutDirection, SliderLayout};
pub use mapper::{PositionMapper, SliderRange};
pub use range_slider::{RangeEvent, RangeHandlers, RangeSlider, Thumb};
pub use slider::{Slider, SliderEvent, SliderHandlers};
pub use visuals::{LabelPlacement, Marker, Markers, Renderers, SliderVisuals, ThumbVisual};
