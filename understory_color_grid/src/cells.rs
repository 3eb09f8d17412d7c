// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A rectangular block of cells, as half-open row and column ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellRange {
    /// Rows covered, `start..end`.
    pub rows: Range<u32>,
    /// Columns covered, `start..end`.
    pub columns: Range<u32>,
}

impl CellRange {
    /// An empty block.
    pub const EMPTY: Self = Self {
        rows: 0..0,
        columns: 0..0,
    };

    /// Returns `true` if the block contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Returns the number of cells in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let rows = (self.rows.end - self.rows.start) as usize;
        let columns = (self.columns.end - self.columns.start) as usize;
        rows.saturating_mul(columns)
    }

    /// Returns `true` if `(row, column)` lies inside the block.
    #[must_use]
    pub fn contains(&self, row: u32, column: u32) -> bool {
        self.rows.contains(&row) && self.columns.contains(&column)
    }

    /// Iterates `(row, column)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let columns = if self.is_empty() {
            0..0
        } else {
            self.columns.clone()
        };
        self.rows
            .clone()
            .flat_map(move |row| columns.clone().map(move |column| (row, column)))
    }
}
