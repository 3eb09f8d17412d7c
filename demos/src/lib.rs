// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory scroll demos.
//!
//! [`DragScroller`] is the glue a host would write between its pointer events
//! and a [`ScrollViewport`]: it turns absolute pointer positions into deltas,
//! hands them to the viewport, and reports what was left over for an outer
//! scroller.
//!
//! Run the headless demo with:
//! - `cargo run -p understory_demos --example scroll_color_grid`

use kurbo::{Point, Vec2};
use understory_scroll2d::ScrollViewport;

/// Result of feeding one pointer move into a [`DragScroller`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Pointer movement since the previous position.
    pub delta: Vec2,
    /// Portion of `delta` the viewport used.
    pub consumed: Vec2,
}

impl DragStep {
    /// Portion of the delta left for an enclosing scroller.
    #[must_use]
    pub fn unconsumed(&self) -> Vec2 {
        self.delta - self.consumed
    }
}

/// Tracks an active pointer drag and scrolls a viewport with it.
#[derive(Clone, Debug, Default)]
pub struct DragScroller {
    viewport: ScrollViewport,
    last_pos: Option<Point>,
}

impl DragScroller {
    /// Wraps `viewport`; no drag is active initially.
    #[must_use]
    pub fn new(viewport: ScrollViewport) -> Self {
        Self {
            viewport,
            last_pos: None,
        }
    }

    /// Returns the wrapped viewport.
    #[must_use]
    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    /// Returns the wrapped viewport mutably, for extent updates.
    pub fn viewport_mut(&mut self) -> &mut ScrollViewport {
        &mut self.viewport
    }

    /// Starts a drag at `pos`, replacing any drag in progress.
    pub fn press(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Moves the pointer to `pos`, scrolling the viewport if a drag is active.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn move_to(&mut self, pos: Point) -> Option<DragStep> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        let delta = pos - last;
        let consumed = self.viewport.drag_by(delta);
        Some(DragStep { delta, consumed })
    }

    /// Ends the current drag.
    pub fn release(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}
