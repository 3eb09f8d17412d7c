// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::palette;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Color used for every cell on the outer ring of a grid.
pub const BORDER_COLOR: Color = palette::css::GRAY;

/// Returns the seeded color for an interior cell.
///
/// The color depends only on `(seed, row, column)`, never on the order in
/// which cells are generated. Each channel is drawn uniformly from `0..255`;
/// alpha is opaque.
#[must_use]
pub fn cell_color(seed: u64, row: u32, column: u32) -> Color {
    let mut rng = SmallRng::seed_from_u64(cell_seed(seed, row, column));
    let r: u8 = rng.gen_range(0..255);
    let g: u8 = rng.gen_range(0..255);
    let b: u8 = rng.gen_range(0..255);
    Color::from_rgb8(r, g, b)
}

fn cell_seed(seed: u64, row: u32, column: u32) -> u64 {
    let key = (u64::from(row) << 32) | u64::from(column);
    seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ key
}
