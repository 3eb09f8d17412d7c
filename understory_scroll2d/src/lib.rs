// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll2d --heading-base-level=0

//! Understory Scroll 2D: a clamped two-dimensional scroll viewport.
//!
//! This crate provides a small, headless model of a scroll container whose
//! content may be larger than its viewport on both axes. It focuses on:
//! - Tracking the content extent and viewport extent reported by layout.
//! - Keeping a scroll offset clamped to `[0, max(0, content - viewport)]`.
//! - Turning drag deltas into offset changes and reporting how much of each
//!   delta was consumed, so the rest can be handed to an outer scroller.
//! - Producing the rounded translation at which content is placed.
//!
//! It does **not** recognize gestures, animate, or draw. Callers are
//! expected to:
//! - Measure their children (for example with [`content_extent`]) and report
//!   sizes through [`ScrollViewport::set_extents`] on every layout pass.
//! - Feed pointer deltas from their own drag recognizer into
//!   [`ScrollViewport::drag_by`].
//! - Position children at [`ScrollViewport::placement_offset`] and clip to
//!   the viewport.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_scroll2d::ScrollViewport;
//!
//! // 100x100 cells of 20 units each, seen through a 300x300 window.
//! let mut vp = ScrollViewport::with_extents(
//!     Size::new(2000.0, 2000.0),
//!     Size::new(300.0, 300.0),
//! );
//!
//! // Drag the pointer up and to the left.
//! let delta = Vec2::new(-120.0, -40.0);
//! let consumed = vp.drag_by(delta);
//! assert_eq!(consumed, delta);
//! assert_eq!(vp.placement_offset(), Vec2::new(-120.0, -40.0));
//!
//! // Drag far past the right edge: only part of the delta is used.
//! let delta = Vec2::new(-5000.0, 0.0);
//! let consumed = vp.drag_by(delta);
//! assert_eq!(consumed, Vec2::new(-1580.0, 0.0));
//! let leftover = delta - consumed;
//! assert_eq!(leftover, Vec2::new(-3420.0, 0.0));
//! ```
//!
//! ## Culling example
//!
//! [`ScrollViewport::visible_content_rect`] returns the part of the content
//! plane currently on screen, which is enough to skip children that cannot
//! be seen:
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_scroll2d::ScrollViewport;
//!
//! let mut vp = ScrollViewport::with_extents(
//!     Size::new(2000.0, 2000.0),
//!     Size::new(300.0, 300.0),
//! );
//! vp.scroll_to(Vec2::new(1000.0, 1000.0));
//!
//! let visible = vp.visible_content_rect();
//! let children = [
//!     Rect::new(0.0, 0.0, 20.0, 20.0),
//!     Rect::new(1100.0, 1100.0, 1120.0, 1120.0),
//! ];
//! let drawn: Vec<Rect> = children
//!     .iter()
//!     .copied()
//!     .filter(|r| r.intersect(visible).area() > 0.0)
//!     .collect();
//! assert_eq!(drawn.len(), 1);
//! ```
//!
//! ## Design notes
//!
//! - The offset is stored as `f64` and only rounded when a placement is
//!   requested, so long runs of sub-pixel deltas do not drift.
//! - All geometry from the host is coerced: NaN, infinite, and negative
//!   extents become zero, and NaN deltas are ignored. Nothing here fails.
//! - There is no overscroll: the offset stops hard at the range ends.
//! - Each axis is an independent [`ScrollAxis`], usable on its own for
//!   single-direction scrolling.
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod extent;
mod modes;
mod viewport;

pub use axis::ScrollAxis;
pub use extent::{clamp_offset, content_extent, sanitize_extent, sanitize_length, scroll_range};
pub use modes::ScrollAxes;
pub use viewport::{ScrollViewport, ScrollViewportDebugInfo};
