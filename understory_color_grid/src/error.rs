// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a [`crate::ColorGrid`] cannot be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
    /// `rows * columns` does not fit in `usize`.
    TooManyCells {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },
    /// The cell size is not a finite, positive number.
    InvalidCellSize(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyCells { rows, columns } => {
                write!(f, "a {rows}x{columns} grid has too many cells to store")
            }
            Self::InvalidCellSize(size) => {
                write!(f, "cell size {size} must be finite and positive")
            }
        }
    }
}

impl core::error::Error for GridError {}
