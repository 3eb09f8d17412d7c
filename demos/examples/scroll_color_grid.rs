// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling a color grid through a clamped viewport.
//!
//! Build a grid of seeded colored cells, size a viewport over it, and replay
//! a scripted pointer path. Each step logs the offset, what the viewport
//! consumed, what it passed on, which cells are visible, and the color under
//! the viewport center.
//!
//! Run:
//! - `cargo run -p understory_demos --example scroll_color_grid`
//! - `RUST_LOG=debug cargo run -p understory_demos --example scroll_color_grid -- --rows 40 --columns 60`

use std::error::Error;

use clap::Parser;
use kurbo::{Point, Size, Vec2};
use log::{debug, info, warn};
use understory_color_grid::ColorGrid;
use understory_demos::DragScroller;
use understory_scroll2d::{ScrollViewport, content_extent};

#[derive(Debug, Parser)]
#[command(about = "Drag a viewport around a grid of colored cells")]
struct Args {
    /// Number of grid rows.
    #[arg(long, default_value_t = 100)]
    rows: u32,
    /// Number of grid columns.
    #[arg(long, default_value_t = 100)]
    columns: u32,
    /// Edge length of each cell, in device units.
    #[arg(long, default_value_t = 20.0)]
    cell_size: f64,
    /// Viewport width, in device units.
    #[arg(long, default_value_t = 300.0)]
    width: f64,
    /// Viewport height, in device units.
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    /// Seed for the cell colors.
    #[arg(long, default_value_t = 0xC0FFEE)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let grid = ColorGrid::new(args.rows, args.columns, args.cell_size, args.seed)?;
    // Measure the children the way a layout pass would.
    let measured = content_extent(grid.cell_rects());
    let viewport_size = Size::new(args.width, args.height);
    info!(
        "{}x{} cells, content {measured:?}, viewport {viewport_size:?}",
        grid.rows(),
        grid.columns()
    );

    let mut scroller = DragScroller::new(ScrollViewport::with_extents(measured, viewport_size));
    info!("scroll range {:?}", scroller.viewport().scroll_range());

    // Drag right at the left edge, then sweep left and up, then fling far
    // past the bottom-right corner.
    let path = [
        Point::new(150.0, 150.0),
        Point::new(200.0, 150.0),
        Point::new(150.0, 150.0),
        Point::new(90.0, 120.0),
        Point::new(40.5, 60.25),
        Point::new(-4000.0, -4000.0),
        Point::new(-3990.0, -3900.0),
    ];
    let (first, rest) = path.split_first().ok_or("empty pointer path")?;
    scroller.press(*first);
    for &pos in rest {
        let Some(step) = scroller.move_to(pos) else {
            continue;
        };
        let vp = scroller.viewport();
        info!(
            "drag {:?}: offset {:?}, consumed {:?}",
            step.delta,
            vp.offset(),
            step.consumed
        );
        let leftover = step.unconsumed();
        if leftover != Vec2::ZERO {
            warn!("unconsumed {leftover:?} would go to the parent scroller");
        }
        report_visible(&grid, vp);
    }
    scroller.release();

    // Shrinking the content re-clamps the offset instead of leaving it stale.
    let half = Size::new(measured.width / 2.0, measured.height / 2.0);
    scroller.viewport_mut().set_content_extent(half);
    info!(
        "content shrunk to {half:?}: offset {:?}",
        scroller.viewport().offset()
    );
    debug!("{:#?}", scroller.viewport().debug_info());

    Ok(())
}

fn report_visible(grid: &ColorGrid, vp: &ScrollViewport) {
    let visible = vp.visible_content_rect();
    let cells = grid.visible_cells(visible);
    info!(
        "  visible rows {:?}, columns {:?} ({} cells)",
        cells.rows,
        cells.columns,
        cells.len()
    );

    let viewport = vp.viewport_extent();
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    let hit = grid
        .cell_at(vp.view_to_content_point(center))
        .and_then(|(row, column)| grid.color(row, column).map(|c| (row, column, c)));
    match hit {
        Some((row, column, color)) => {
            let rgba = color.to_rgba8();
            debug!(
                "  center cell ({row}, {column}) #{:02x}{:02x}{:02x}",
                rgba.r, rgba.g, rgba.b
            );
        }
        None => debug!("  nothing under the center"),
    }
}
