// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::extent::{clamp_component, sanitize_length};

/// One clamped scroll axis.
///
/// `ScrollAxis` tracks a content length, a viewport length, and an offset that
/// always lies in `[0, range]`, where `range = max(0, content - viewport)`.
/// [`crate::ScrollViewport`] is built from two of these; they can also be used
/// directly for single-direction scrolling such as a list or a timeline.
///
/// The offset is kept as `f64`. Call [`ScrollAxis::rounded_offset`] when a
/// whole device unit is needed for placement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAxis {
    content: f64,
    viewport: f64,
    offset: f64,
}

impl ScrollAxis {
    /// Creates an axis with zero extents and zero offset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: 0.0,
            viewport: 0.0,
            offset: 0.0,
        }
    }

    /// Creates an axis with the given extents and zero offset.
    #[must_use]
    pub fn with_extents(content: f64, viewport: f64) -> Self {
        let mut axis = Self::new();
        axis.set_extents(content, viewport);
        axis
    }

    /// Returns the content length.
    #[must_use]
    pub fn content(&self) -> f64 {
        self.content
    }

    /// Returns the viewport length.
    #[must_use]
    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    /// Returns the unrounded offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the offset rounded to the nearest whole unit.
    #[must_use]
    pub fn rounded_offset(&self) -> f64 {
        self.offset.round()
    }

    /// Returns the largest valid offset, `max(0, content - viewport)`.
    #[must_use]
    pub fn range(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    /// Returns `true` if there is anything to scroll.
    #[must_use]
    pub fn can_scroll(&self) -> bool {
        self.range() > 0.0
    }

    /// Returns `true` if the offset sits at the start of the range.
    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.offset <= 0.0
    }

    /// Returns `true` if the offset sits at the end of the range.
    ///
    /// An axis with an empty range is at both its start and its end.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.range()
    }

    /// Updates both extents and re-clamps the offset.
    ///
    /// Malformed lengths (NaN, infinite, negative) are treated as zero.
    pub fn set_extents(&mut self, content: f64, viewport: f64) {
        self.content = sanitize_length(content);
        self.viewport = sanitize_length(viewport);
        self.reclamp();
    }

    /// Updates the content length and re-clamps the offset.
    pub fn set_content(&mut self, content: f64) {
        self.content = sanitize_length(content);
        self.reclamp();
    }

    /// Updates the viewport length and re-clamps the offset.
    pub fn set_viewport(&mut self, viewport: f64) {
        self.viewport = sanitize_length(viewport);
        self.reclamp();
    }

    /// Applies a drag delta and returns the part of it that was consumed.
    ///
    /// A positive delta moves the content forward with the pointer, which
    /// decreases the offset. The returned value has the same sign convention
    /// as `delta` and never exceeds it in magnitude; `delta - consumed` is
    /// left over for an outer scroller. A NaN delta consumes nothing.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        if delta.is_nan() || delta == 0.0 {
            return 0.0;
        }
        let old = self.offset;
        let range = self.range();
        let proposed = old - delta;
        if proposed > 0.0 && proposed < range {
            self.offset = proposed;
            return delta;
        }
        let new = clamp_component(proposed, range);
        self.offset = new;
        // Rounding in `proposed` can push the bound distance one ulp past `delta`.
        let consumed = old - new;
        if consumed.abs() > delta.abs() {
            delta
        } else {
            consumed
        }
    }

    /// Moves the offset to `target`, clamped into range, and returns the
    /// offset actually applied.
    pub fn scroll_to(&mut self, target: f64) -> f64 {
        self.offset = clamp_component(target, self.range());
        self.offset
    }

    /// Resets the offset to zero.
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    fn reclamp(&mut self) {
        self.offset = clamp_component(self.offset, self.range());
    }
}
