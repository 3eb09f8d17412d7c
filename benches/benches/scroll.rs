// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Size, Vec2};
use understory_color_grid::ColorGrid;
use understory_scroll2d::{ScrollViewport, content_extent};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Returns a delta in `[-span, span)`.
    fn delta(&mut self, span: f64) -> f64 {
        (f64::from(self.next_u32()) / f64::from(u32::MAX)).mul_add(2.0 * span, -span)
    }
}

fn deltas(len: usize, span: f64, seed: u64) -> Vec<Vec2> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|_| Vec2::new(rng.delta(span), rng.delta(span)))
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll2d/drag_by");
    let content = Size::new(2000.0, 2000.0);
    let viewport = Size::new(300.0, 300.0);

    // Small spans stay mostly inside the range; large spans hit the clamp often.
    for span in [4.0_f64, 400.0] {
        let input = deltas(4_096, span, 0x5eed);
        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(span), &input, |b, input| {
            b.iter_batched(
                || ScrollViewport::with_extents(content, viewport),
                |mut vp| {
                    let mut leftover = Vec2::ZERO;
                    for &delta in input {
                        leftover += delta - vp.drag_by(delta);
                    }
                    black_box((vp.offset(), leftover));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll2d/set_extents");
    let mut rng = Lcg::new(7);
    let sizes: Vec<(Size, Size)> = (0..1_024)
        .map(|_| {
            let content = Size::new(rng.delta(1000.0) + 1000.0, rng.delta(1000.0) + 1000.0);
            let viewport = Size::new(rng.delta(200.0) + 300.0, rng.delta(200.0) + 300.0);
            (content, viewport)
        })
        .collect();
    group.throughput(Throughput::Elements(sizes.len() as u64));
    group.bench_function("reclamp", |b| {
        let mut vp = ScrollViewport::new();
        b.iter(|| {
            for &(content, viewport) in &sizes {
                vp.set_extents(content, viewport);
                vp.scroll_to(Vec2::new(1e9, 1e9));
            }
            black_box(vp.offset());
        });
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_grid");

    for side in [100_u32, 400] {
        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));
        group.bench_with_input(BenchmarkId::new("build", side), &side, |b, &side| {
            b.iter(|| black_box(ColorGrid::new(side, side, 20.0, 1).map(|g| g.len())));
        });
    }

    let Ok(grid) = ColorGrid::new(400, 400, 20.0, 1) else {
        return;
    };
    group.bench_function("measure_content", |b| {
        b.iter(|| black_box(content_extent(grid.cell_rects())));
    });

    let input = deltas(1_024, 200.0, 11);
    group.bench_function("visible_cells", |b| {
        let mut vp = ScrollViewport::with_extents(grid.content_extent(), Size::new(800.0, 600.0));
        b.iter(|| {
            let mut drawn = 0;
            for &delta in &input {
                vp.drag_by(delta);
                drawn += grid.visible_cells(vp.visible_content_rect()).len();
            }
            black_box(drawn);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag, bench_resize, bench_grid);
criterion_main!(benches);
