// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::cells::CellRange;
use crate::color::{BORDER_COLOR, cell_color};
use crate::error::GridError;

/// A dense `rows x columns` grid of square, colored cells.
///
/// Colors are generated once at construction and stored row-major, so the
/// cell at `(row, column)` lives at index `row * columns + column`. Cells on
/// the outer ring use [`BORDER_COLOR`]; interior cells use [`cell_color`].
///
/// Cell `(row, column)` covers the content-space rectangle
/// `[column * cell_size, (column + 1) * cell_size) x [row * cell_size, (row + 1) * cell_size)`.
#[derive(Clone, Debug)]
pub struct ColorGrid {
    rows: u32,
    columns: u32,
    cell_size: f64,
    seed: u64,
    colors: Vec<Color>,
}

impl ColorGrid {
    /// Builds a grid and generates all cell colors from `seed`.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidCellSize`] if `cell_size` is not finite and
    ///   positive.
    /// - [`GridError::TooManyCells`] if `rows * columns` overflows `usize`.
    pub fn new(rows: u32, columns: u32, cell_size: f64, seed: u64) -> Result<Self, GridError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        let too_many = GridError::TooManyCells { rows, columns };
        let row_count = usize::try_from(rows).map_err(|_| too_many)?;
        let column_count = usize::try_from(columns).map_err(|_| too_many)?;
        let len = row_count.checked_mul(column_count).ok_or(too_many)?;

        let mut colors = Vec::with_capacity(len);
        for row in 0..rows {
            for column in 0..columns {
                let color = if is_border(rows, columns, row, column) {
                    BORDER_COLOR
                } else {
                    cell_color(seed, row, column)
                };
                colors.push(color);
            }
        }

        Ok(Self {
            rows,
            columns,
            cell_size,
            seed,
            colors,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the edge length of each cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns the seed the colors were generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns all colors in row-major order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the storage index of `(row, column)`, or `None` if out of bounds.
    #[must_use]
    pub fn index_of(&self, row: u32, column: u32) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        let row = usize::try_from(row).ok()?;
        let columns = usize::try_from(self.columns).ok()?;
        let column = usize::try_from(column).ok()?;
        Some(row * columns + column)
    }

    /// Returns the color of `(row, column)`, or `None` if out of bounds.
    #[must_use]
    pub fn color(&self, row: u32, column: u32) -> Option<Color> {
        self.index_of(row, column).map(|i| self.colors[i])
    }

    /// Returns `true` if `(row, column)` is on the outer ring of the grid.
    #[must_use]
    pub fn is_border(&self, row: u32, column: u32) -> bool {
        row < self.rows && column < self.columns && is_border(self.rows, self.columns, row, column)
    }

    /// Returns the size of the whole grid in content units.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        Size::new(
            f64::from(self.columns) * self.cell_size,
            f64::from(self.rows) * self.cell_size,
        )
    }

    /// Returns the content-space rectangle of `(row, column)`.
    #[must_use]
    pub fn cell_rect(&self, row: u32, column: u32) -> Option<Rect> {
        self.index_of(row, column)?;
        let origin = Point::new(
            f64::from(column) * self.cell_size,
            f64::from(row) * self.cell_size,
        );
        Some(Rect::from_origin_size(
            origin,
            Size::new(self.cell_size, self.cell_size),
        ))
    }

    /// Iterates the rectangles of all cells in row-major order.
    pub fn cell_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.all_cells()
            .iter()
            .filter_map(|(row, column)| self.cell_rect(row, column))
    }

    /// Returns the block covering every cell.
    #[must_use]
    pub fn all_cells(&self) -> CellRange {
        CellRange {
            rows: 0..self.rows,
            columns: 0..self.columns,
        }
    }

    /// Returns the cell under a content-space point, if any.
    #[must_use]
    pub fn cell_at(&self, pt: Point) -> Option<(u32, u32)> {
        let extent = self.content_extent();
        if !(0.0..extent.width).contains(&pt.x) || !(0.0..extent.height).contains(&pt.y) {
            return None;
        }
        // The extent check above guarantees both counts are non-zero.
        let row = to_index(pt.y / self.cell_size, self.rows - 1);
        let column = to_index(pt.x / self.cell_size, self.columns - 1);
        Some((row, column))
    }

    /// Returns the cells that intersect a content-space rectangle.
    ///
    /// Cells that only touch `rect` along an edge are excluded. A rectangle
    /// with no area, or one entirely outside the grid, yields
    /// [`CellRange::EMPTY`].
    #[must_use]
    pub fn visible_cells(&self, rect: Rect) -> CellRange {
        let bounds = Rect::from_origin_size(Point::ZERO, self.content_extent());
        let rect = rect.abs().intersect(bounds);
        if !(rect.width() > 0.0 && rect.height() > 0.0) {
            return CellRange::EMPTY;
        }
        let size = self.cell_size;
        CellRange {
            rows: to_index((rect.y0 / size).floor(), self.rows)
                ..to_index((rect.y1 / size).ceil(), self.rows),
            columns: to_index((rect.x0 / size).floor(), self.columns)
                ..to_index((rect.x1 / size).ceil(), self.columns),
        }
    }
}

/// Floors `value` and clamps it into `[0, limit]`.
fn to_index(value: f64, limit: u32) -> u32 {
    let value = value.floor().clamp(0.0, f64::from(limit));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is clamped to [0, limit] and limit fits in u32"
    )]
    {
        value as u32
    }
}

fn is_border(rows: u32, columns: u32, row: u32, column: u32) -> bool {
    row == 0 || column == 0 || row + 1 == rows || column + 1 == columns
}
