// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_scroll2d` crate.
//!
//! These drive a `ScrollViewport` through long, seeded sequences of drags and
//! extent changes and check the clamping contract after every step.

use kurbo::{Size, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use understory_scroll2d::{ScrollViewport, scroll_range};

/// Quarter-unit values keep all the arithmetic below exact in `f64`.
fn quarter(rng: &mut SmallRng, lo: i32, hi: i32) -> f64 {
    f64::from(rng.gen_range(lo * 4..hi * 4)) / 4.0
}

fn random_size(rng: &mut SmallRng) -> Size {
    Size::new(quarter(rng, 0, 3000), quarter(rng, 0, 3000))
}

fn assert_in_range(vp: &ScrollViewport) {
    let offset = vp.offset();
    let range = scroll_range(vp.content_extent(), vp.viewport_extent());
    assert!(
        (0.0..=range.x).contains(&offset.x),
        "x offset {} outside [0, {}]",
        offset.x,
        range.x
    );
    assert!(
        (0.0..=range.y).contains(&offset.y),
        "y offset {} outside [0, {}]",
        offset.y,
        range.y
    );
}

#[test]
fn offset_stays_in_range_across_random_sequences() {
    for seed in 0..16_u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut vp = ScrollViewport::new();
        for _ in 0..500 {
            if rng.gen_bool(0.1) {
                vp.set_extents(random_size(&mut rng), random_size(&mut rng));
            } else {
                let delta = Vec2::new(quarter(&mut rng, -400, 400), quarter(&mut rng, -400, 400));
                vp.drag_by(delta);
            }
            assert_in_range(&vp);
        }
    }
}

#[test]
fn consumed_accounts_for_offset_change() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut vp = ScrollViewport::with_extents(Size::new(2000.0, 1200.0), Size::new(300.0, 250.0));
    for _ in 0..1_000 {
        let delta = Vec2::new(quarter(&mut rng, -600, 600), quarter(&mut rng, -600, 600));
        let before = vp.offset();
        let consumed = vp.drag_by(delta);
        let after = vp.offset();

        assert_eq!(after, before - consumed, "offset must move by consumed");
        assert!(
            consumed.x.abs() <= delta.x.abs(),
            "consumed.x {} exceeds delta.x {}",
            consumed.x,
            delta.x
        );
        assert!(
            consumed.y.abs() <= delta.y.abs(),
            "consumed.y {} exceeds delta.y {}",
            consumed.y,
            delta.y
        );
        // Anything consumed carries the sign of the delta.
        assert!(consumed.x * delta.x >= 0.0, "consumed.x has flipped sign");
        assert!(consumed.y * delta.y >= 0.0, "consumed.y has flipped sign");
    }
}

#[test]
fn arbitrary_fractional_drags_never_overconsume() {
    let mut rng = SmallRng::seed_from_u64(0xf7ac);
    let mut vp = ScrollViewport::with_extents(Size::new(2000.3, 1200.7), Size::new(300.1, 250.9));
    let range = vp.scroll_range();
    for _ in 0..2_000 {
        let delta = Vec2::new(rng.gen_range(-600.0..600.0), rng.gen_range(-600.0..600.0));
        let before = vp.offset();
        let consumed = vp.drag_by(delta);
        let after = vp.offset();

        assert!(
            consumed.x.abs() <= delta.x.abs(),
            "consumed.x {} exceeds delta.x {}",
            consumed.x,
            delta.x
        );
        assert!(
            consumed.y.abs() <= delta.y.abs(),
            "consumed.y {} exceeds delta.y {}",
            consumed.y,
            delta.y
        );
        assert!(consumed.x * delta.x >= 0.0, "consumed.x has flipped sign");
        assert!(consumed.y * delta.y >= 0.0, "consumed.y has flipped sign");

        // Unclamped steps move by exactly the delta.
        if after.x > 0.0 && after.x < range.x {
            assert_eq!(consumed.x, delta.x);
            assert_eq!(after.x, before.x - delta.x);
        }
        if after.y > 0.0 && after.y < range.y {
            assert_eq!(consumed.y, delta.y);
            assert_eq!(after.y, before.y - delta.y);
        }
        assert!((after - (before - consumed)).hypot() < 1e-9);
    }
    assert_in_range(&vp);
}

#[test]
fn pushing_past_either_bound_consumes_nothing() {
    let mut vp = ScrollViewport::with_extents(Size::new(2000.0, 2000.0), Size::new(300.0, 300.0));

    // Lower bound: a positive drag would need a negative offset.
    for _ in 0..10 {
        assert_eq!(vp.drag_by(Vec2::new(25.0, 25.0)), Vec2::ZERO);
    }

    // Upper bound: a negative drag would need an offset beyond the range.
    vp.scroll_to(Vec2::new(1700.0, 1700.0));
    for _ in 0..10 {
        assert_eq!(vp.drag_by(Vec2::new(-25.0, -25.0)), Vec2::ZERO);
        assert_eq!(vp.offset(), Vec2::new(1700.0, 1700.0));
    }
}

#[test]
fn content_shrink_reclamps_offset() {
    let mut vp = ScrollViewport::with_extents(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
    assert_eq!(vp.drag_by(Vec2::new(-50.0, 0.0)), Vec2::new(-50.0, 0.0));
    assert_eq!(vp.offset(), Vec2::new(50.0, 0.0));

    vp.set_extents(Size::new(120.0, 100.0), Size::new(100.0, 100.0));
    assert_eq!(vp.offset().x, 20.0);
}

#[test]
fn fitting_content_never_scrolls() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut vp = ScrollViewport::with_extents(Size::new(250.0, 2000.0), Size::new(300.0, 300.0));
    for _ in 0..200 {
        let delta = Vec2::new(quarter(&mut rng, -300, 300), 0.0);
        assert_eq!(vp.drag_by(delta).x, 0.0);
        assert_eq!(vp.offset().x, 0.0);
    }
}

#[test]
fn grid_drag_scenario() {
    let cell = 20.0;
    let content = Size::new(100.0 * cell, 100.0 * cell);
    let mut vp = ScrollViewport::with_extents(content, Size::new(300.0, 300.0));
    assert_eq!(vp.offset(), Vec2::ZERO);

    let consumed = vp.drag_by(Vec2::new(50.0, 0.0));
    assert_eq!(consumed, Vec2::ZERO);
    assert_eq!(vp.offset(), Vec2::ZERO);

    let consumed = vp.drag_by(Vec2::new(-50.0, 0.0));
    assert_eq!(consumed, Vec2::new(-50.0, 0.0));
    assert_eq!(vp.offset(), Vec2::new(50.0, 0.0));
    assert_eq!(vp.placement_offset(), Vec2::new(-50.0, 0.0));
}

#[test]
fn many_small_drags_do_not_drift() {
    let mut vp = ScrollViewport::with_extents(Size::new(2000.0, 2000.0), Size::new(300.0, 300.0));
    // 1000 drags of a quarter unit each sum to exactly 250.
    for _ in 0..1_000 {
        vp.drag_by(Vec2::new(-0.25, -0.25));
    }
    assert_eq!(vp.offset(), Vec2::new(250.0, 250.0));
    assert_eq!(vp.placement_offset(), Vec2::new(-250.0, -250.0));
}
