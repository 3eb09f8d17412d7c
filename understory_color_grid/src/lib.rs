// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_color_grid --heading-base-level=0

//! Understory Color Grid: a dense grid of colored cells for scroll demos.
//!
//! [`ColorGrid`] stores one [`peniko::Color`] per cell in a flat, row-major
//! vector. The outer ring of cells is gray; every interior cell gets a color
//! from a small RNG seeded by `(seed, row, column)`, so a cell keeps its color
//! no matter how or when the grid is rebuilt.
//!
//! Besides colors, the grid knows its own geometry:
//! - [`ColorGrid::content_extent`] is the size to report to a scroll
//!   viewport.
//! - [`ColorGrid::visible_cells`] turns a visible content rectangle into the
//!   block of cells worth drawing.
//! - [`ColorGrid::cell_at`] maps a content-space point back to a cell.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_color_grid::ColorGrid;
//!
//! let grid = ColorGrid::new(100, 100, 20.0, 0xC0FFEE).unwrap();
//! assert_eq!(grid.content_extent().width, 2000.0);
//!
//! // A 300x300 window scrolled to (50, 0).
//! let visible = grid.visible_cells(Rect::new(50.0, 0.0, 350.0, 300.0));
//! assert_eq!(visible.columns, 2..18);
//! assert_eq!(visible.rows, 0..15);
//!
//! for (row, column) in visible.iter() {
//!     let _color = grid.color(row, column).unwrap();
//!     let _rect = grid.cell_rect(row, column).unwrap();
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cells;
mod color;
mod error;
mod grid;

pub use cells::CellRange;
pub use color::{BORDER_COLOR, cell_color};
pub use error::GridError;
pub use grid::ColorGrid;
