// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which axes of a [`crate::ScrollViewport`] respond to scrolling.
///
/// A disabled axis keeps its offset at zero and consumes none of the deltas
/// delivered to it, so the full delta on that axis remains available to an
/// enclosing scroll coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollAxes {
    /// Scroll freely in both directions.
    #[default]
    Both,
    /// Only the X axis scrolls.
    Horizontal,
    /// Only the Y axis scrolls.
    Vertical,
    /// Neither axis scrolls; every delta is passed through.
    None,
}

impl ScrollAxes {
    /// Returns `true` if the X axis scrolls.
    #[must_use]
    pub fn horizontal(self) -> bool {
        matches!(self, Self::Both | Self::Horizontal)
    }

    /// Returns `true` if the Y axis scrolls.
    #[must_use]
    pub fn vertical(self) -> bool {
        matches!(self, Self::Both | Self::Vertical)
    }
}
