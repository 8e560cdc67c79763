// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_reaction_config::{CaptionStyle, ImageId, ReactionOptions, ReactionsConfig};
use understory_reaction_layout::{Anchor, HitSlop, PopupGeometry, hit_test};
use understory_reaction_popup::{PointerEvent, ReactionSurface};

const FRAME: Duration = Duration::from_millis(16);
const CONTAINER: Size = Size::new(1080.0, 1920.0);

fn config(count: u32) -> ReactionsConfig {
    ReactionOptions::new()
        .with_reactions((0..count).map(ImageId))
        .with_reaction_size(32.0)
        .with_horizontal_margin(8.0)
        .resolve()
        .expect("valid bench configuration")
}

fn anchor() -> Anchor {
    Anchor::new(Point::new(40.0, 1600.0), Size::new(160.0, 56.0))
}

fn shown_surface(count: u32) -> ReactionSurface {
    let mut surface =
        ReactionSurface::new(config(count), |text: &str, _: &CaptionStyle| {
            Size::new(8.0 * text.len() as f64, 16.0)
        });
    surface.set_container_size(CONTAINER);
    surface.show(Point::new(60.0, 1620.0), anchor());
    for _ in 0..8 {
        surface.advance(FRAME);
    }
    surface
}

/// Pointer positions sweeping left to right across the row.
fn sweep(bounds: Rect, steps: usize) -> Vec<Point> {
    let y = bounds.center().y;
    (0..steps)
        .map(|i| {
            let t = i as f64 / (steps - 1) as f64;
            Point::new(bounds.x0 + t * bounds.width(), y)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("reaction/hit_test");

    for count in [4_u32, 8, 16] {
        let config = config(count);
        let geometry = PopupGeometry::compute(&config, &anchor(), Point::ZERO, CONTAINER);
        let slop = HitSlop::for_row(&geometry.metrics);
        let frames: Vec<Rect> = geometry
            .row_frames(geometry.metrics.target_sizes(None), 0.0)
            .collect();
        let points = sweep(geometry.bounds(), 64);

        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                for &pt in points {
                    black_box(hit_test(frames.iter().copied(), &slop, black_box(pt)));
                }
            });
        });
    }

    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("reaction/drag_gesture");

    for count in [4_u32, 8] {
        let points = {
            let surface = shown_surface(count);
            sweep(surface.geometry().bounds(), 32)
        };

        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter_batched(
                || shown_surface(count),
                |mut surface| {
                    for &pt in points {
                        surface.on_pointer(PointerEvent::moved(pt));
                        surface.advance(FRAME);
                    }
                    black_box(surface.state());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_drag_gesture);
criterion_main!(benches);
