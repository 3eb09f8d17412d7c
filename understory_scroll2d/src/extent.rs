// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free functions over content/viewport extents.
//!
//! These are the pure pieces of [`crate::ScrollViewport`], exposed for hosts
//! that keep scroll state of their own.

use kurbo::{Rect, Size, Vec2};

/// Coerces a host-supplied length into a valid extent.
///
/// NaN, infinite and negative values become `0.0`.
#[must_use]
pub fn sanitize_length(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerces both dimensions of `size` with [`sanitize_length`].
#[must_use]
pub fn sanitize_extent(size: Size) -> Size {
    Size::new(sanitize_length(size.width), sanitize_length(size.height))
}

/// Measures the bounding size of a set of children, in content space.
///
/// The extent is measured from the content origin: the result is the largest
/// right edge and the largest bottom edge over all children, floored at zero.
/// Children with non-finite edges are ignored. An empty iterator yields
/// [`Size::ZERO`].
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_scroll2d::content_extent;
///
/// let children = [
///     Rect::new(0.0, 0.0, 120.0, 20.0),
///     Rect::new(0.0, 20.0, 80.0, 60.0),
/// ];
/// assert_eq!(content_extent(children), Size::new(120.0, 60.0));
/// ```
#[must_use]
pub fn content_extent(children: impl IntoIterator<Item = Rect>) -> Size {
    let mut width = 0.0_f64;
    let mut height = 0.0_f64;
    for child in children {
        let child = child.abs();
        if child.x1.is_finite() {
            width = width.max(child.x1);
        }
        if child.y1.is_finite() {
            height = height.max(child.y1);
        }
    }
    Size::new(width, height)
}

/// Returns the scroll range `max(0, content - viewport)` per axis.
///
/// Both extents are sanitized first, so the result is always finite and
/// non-negative.
#[must_use]
pub fn scroll_range(content: Size, viewport: Size) -> Vec2 {
    let content = sanitize_extent(content);
    let viewport = sanitize_extent(viewport);
    Vec2::new(
        (content.width - viewport.width).max(0.0),
        (content.height - viewport.height).max(0.0),
    )
}

/// Clamps `offset` into `[0, range]` per axis.
///
/// A NaN component clamps to `0.0`. A negative range component is treated as
/// zero.
#[must_use]
pub fn clamp_offset(offset: Vec2, range: Vec2) -> Vec2 {
    Vec2::new(
        clamp_component(offset.x, range.x),
        clamp_component(offset.y, range.y),
    )
}

pub(crate) fn clamp_component(value: f64, range: f64) -> f64 {
    let range = sanitize_length(range);
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, range)
    }
}
