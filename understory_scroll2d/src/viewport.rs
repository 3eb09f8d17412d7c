// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::axis::ScrollAxis;
use crate::extent::clamp_component;
use crate::modes::ScrollAxes;

/// Clamped 2D scroll viewport over a content plane.
///
/// `ScrollViewport` owns a scroll offset and keeps it inside the valid range
/// `[0, max(0, content - viewport)]` on each axis. Hosts drive it from two
/// places:
/// - The layout pass reports the measured content size and the allocated
///   viewport size through [`ScrollViewport::set_extents`], then positions
///   children at [`ScrollViewport::placement_offset`].
/// - The gesture layer feeds pointer deltas to [`ScrollViewport::drag_by`] and
///   forwards whatever was not consumed to an enclosing scroller.
///
/// The offset is stored unrounded. Placement queries round it to whole device
/// units so repeated small drags do not drift.
#[derive(Clone, Debug, Default)]
pub struct ScrollViewport {
    x: ScrollAxis,
    y: ScrollAxis,
    axes: ScrollAxes,
}

impl ScrollViewport {
    /// Creates a viewport with zero extents and zero offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a viewport with the given extents and zero offset.
    #[must_use]
    pub fn with_extents(content: Size, viewport: Size) -> Self {
        let mut vp = Self::new();
        vp.set_extents(content, viewport);
        vp
    }

    /// Returns the content extent.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        Size::new(self.x.content(), self.y.content())
    }

    /// Returns the viewport extent.
    #[must_use]
    pub fn viewport_extent(&self) -> Size {
        Size::new(self.x.viewport(), self.y.viewport())
    }

    /// Updates both extents and re-clamps the offset into the new range.
    ///
    /// Call this on every layout pass. NaN, infinite and negative lengths are
    /// coerced to zero; this never fails.
    pub fn set_extents(&mut self, content: Size, viewport: Size) {
        self.x.set_extents(content.width, viewport.width);
        self.y.set_extents(content.height, viewport.height);
        self.apply_axes();
    }

    /// Updates the content extent and re-clamps the offset.
    pub fn set_content_extent(&mut self, content: Size) {
        self.x.set_content(content.width);
        self.y.set_content(content.height);
        self.apply_axes();
    }

    /// Updates the viewport extent and re-clamps the offset.
    pub fn set_viewport_extent(&mut self, viewport: Size) {
        self.x.set_viewport(viewport.width);
        self.y.set_viewport(viewport.height);
        self.apply_axes();
    }

    /// Sets which axes respond to scrolling.
    ///
    /// Disabling an axis resets its offset to zero.
    pub fn set_scroll_axes(&mut self, axes: ScrollAxes) {
        self.axes = axes;
        self.apply_axes();
    }

    /// Returns which axes respond to scrolling.
    #[must_use]
    pub fn scroll_axes(&self) -> ScrollAxes {
        self.axes
    }

    /// Returns the valid scroll range, `max(0, content - viewport)` per axis.
    ///
    /// A disabled axis reports a range of zero.
    #[must_use]
    pub fn scroll_range(&self) -> Vec2 {
        Vec2::new(
            if self.axes.horizontal() {
                self.x.range()
            } else {
                0.0
            },
            if self.axes.vertical() {
                self.y.range()
            } else {
                0.0
            },
        )
    }

    /// Returns the unrounded scroll offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.offset(), self.y.offset())
    }

    /// Returns the scroll offset rounded to whole device units.
    #[must_use]
    pub fn rounded_offset(&self) -> Vec2 {
        self.offset().round()
    }

    /// Returns `true` if either enabled axis has a non-empty range.
    #[must_use]
    pub fn can_scroll(&self) -> bool {
        let range = self.scroll_range();
        range.x > 0.0 || range.y > 0.0
    }

    /// Returns the X axis state.
    #[must_use]
    pub fn x_axis(&self) -> &ScrollAxis {
        &self.x
    }

    /// Returns the Y axis state.
    #[must_use]
    pub fn y_axis(&self) -> &ScrollAxis {
        &self.y
    }

    /// Applies a drag delta and returns the consumed portion.
    ///
    /// Dragging in a positive direction moves the content along with the
    /// pointer, so the offset decreases: `offset' = clamp(offset - delta)`.
    /// The return value is `offset - offset'`, expressed in the same
    /// convention as `delta`. The remainder `delta - consumed` is what an
    /// outer scroll coordinator may still use.
    ///
    /// ```rust
    /// use kurbo::{Size, Vec2};
    /// use understory_scroll2d::ScrollViewport;
    ///
    /// let mut vp = ScrollViewport::with_extents(
    ///     Size::new(2000.0, 2000.0),
    ///     Size::new(300.0, 300.0),
    /// );
    ///
    /// // Already at the left edge: dragging right has nowhere to go.
    /// assert_eq!(vp.drag_by(Vec2::new(50.0, 0.0)), Vec2::ZERO);
    ///
    /// // Dragging left reveals content to the right.
    /// assert_eq!(vp.drag_by(Vec2::new(-50.0, 0.0)), Vec2::new(-50.0, 0.0));
    /// assert_eq!(vp.offset(), Vec2::new(50.0, 0.0));
    /// ```
    pub fn drag_by(&mut self, delta: Vec2) -> Vec2 {
        let consumed_x = if self.axes.horizontal() {
            self.x.scroll_by(delta.x)
        } else {
            0.0
        };
        let consumed_y = if self.axes.vertical() {
            self.y.scroll_by(delta.y)
        } else {
            0.0
        };
        Vec2::new(consumed_x, consumed_y)
    }

    /// Scrolls to `offset`, clamped into range, and returns the offset applied.
    pub fn scroll_to(&mut self, offset: Vec2) -> Vec2 {
        let range = self.scroll_range();
        let x = self.x.scroll_to(clamp_component(offset.x, range.x));
        let y = self.y.scroll_to(clamp_component(offset.y, range.y));
        Vec2::new(x, y)
    }

    /// Returns the translation at which content should be placed.
    ///
    /// This is the negated, rounded offset: a child at content position `p`
    /// is drawn at `p + placement_offset()` relative to the viewport origin.
    #[must_use]
    pub fn placement_offset(&self) -> Vec2 {
        -self.rounded_offset()
    }

    /// Returns [`ScrollViewport::placement_offset`] as a content→view transform.
    #[must_use]
    pub fn placement_transform(&self) -> Affine {
        Affine::translate(self.placement_offset())
    }

    /// Returns the content-space rectangle currently visible.
    ///
    /// The rectangle starts at the rounded offset and has the viewport's size,
    /// intersected with the content bounds. Use it for culling and to clip
    /// drawing to the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let origin = self.rounded_offset().to_point();
        let visible = Rect::from_origin_size(origin, self.viewport_extent());
        visible.intersect(Rect::from_origin_size(Point::ZERO, self.content_extent()))
    }

    /// Converts a viewport-relative point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        pt + self.rounded_offset()
    }

    /// Converts a content point into viewport-relative coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        pt + self.placement_offset()
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScrollViewportDebugInfo {
        ScrollViewportDebugInfo {
            content_extent: self.content_extent(),
            viewport_extent: self.viewport_extent(),
            scroll_range: self.scroll_range(),
            offset: self.offset(),
            placement_offset: self.placement_offset(),
            visible_content_rect: self.visible_content_rect(),
            scroll_axes: self.axes,
        }
    }

    fn apply_axes(&mut self) {
        if !self.axes.horizontal() {
            self.x.reset();
        }
        if !self.axes.vertical() {
            self.y.reset();
        }
    }
}

/// Debug snapshot of a [`ScrollViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ScrollViewportDebugInfo {
    /// Content extent last reported by the host.
    pub content_extent: Size,
    /// Viewport extent last reported by the host.
    pub viewport_extent: Size,
    /// Valid scroll range on each axis.
    pub scroll_range: Vec2,
    /// Unrounded scroll offset.
    pub offset: Vec2,
    /// Rounded translation applied to content.
    pub placement_offset: Vec2,
    /// Content-space rectangle visible through the viewport.
    pub visible_content_rect: Rect,
    /// Axes that respond to scrolling.
    pub scroll_axes: ScrollAxes,
}
