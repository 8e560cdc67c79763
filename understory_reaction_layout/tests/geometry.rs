// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_reaction_layout` crate.
//!
//! These go through a resolved configuration, the way a reaction surface
//! computes its geometry snapshot.

use kurbo::{Point, Rect, Size};
use understory_reaction_config::{ImageId, PopupGravity, ReactionOptions, ReactionsConfig};
use understory_reaction_layout::{Anchor, HitSlop, PopupGeometry, PopupMetrics, hit_test};

fn config(count: u32, gravity: PopupGravity) -> ReactionsConfig {
    ReactionOptions::new()
        .with_reactions((0..count).map(ImageId))
        .with_reaction_size(48.0)
        .with_horizontal_margin(16.0)
        .with_popup_gravity(gravity)
        .resolve()
        .unwrap()
}

#[test]
fn four_reaction_popup_end_to_end() {
    let config = config(4, PopupGravity::Center);
    let metrics = PopupMetrics::new(&config);

    assert_eq!(
        metrics.size,
        Size::new(16.0 * 2.0 + 48.0 * 4.0 + 8.0 * 3.0, 80.0)
    );
    assert_eq!(metrics.icons.large, 96.0);
    assert_eq!(metrics.icons.small, (248.0 - 32.0 - 96.0 - 8.0 * 3.0) / 3.0);
}

#[test]
fn geometry_snapshot_places_and_lays_out_the_row() {
    let config = config(4, PopupGravity::Center);
    let anchor = Anchor::new(Point::new(40.0, 600.0), Size::new(120.0, 48.0));
    let geometry = PopupGeometry::compute(
        &config,
        &anchor,
        Point::new(60.0, 620.0),
        Size::new(400.0, 800.0),
    );

    assert_eq!(geometry.origin, Point::new(76.0, 440.0));
    assert_eq!(geometry.bounds(), Rect::new(76.0, 440.0, 324.0, 520.0));

    let frames: Vec<Rect> = geometry
        .row_frames(geometry.metrics.target_sizes(Some(1)), 0.0)
        .collect();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].x0, 92.0);
    assert_eq!(frames[1].size(), Size::new(96.0, 96.0));
    // Row width does not change when an icon is magnified.
    assert_eq!(frames[3].x1, 324.0 - 16.0);
}

#[test]
fn dragging_across_the_row_always_hits_an_icon() {
    let config = config(5, PopupGravity::ScreenLeft);
    let anchor = Anchor::new(Point::new(0.0, 700.0), Size::new(100.0, 48.0));
    let geometry = PopupGeometry::compute(
        &config,
        &anchor,
        Point::new(10.0, 710.0),
        Size::new(600.0, 800.0),
    );
    let frames: Vec<Rect> = geometry
        .row_frames(geometry.metrics.target_sizes(None), 0.0)
        .collect();
    let slop = HitSlop::for_row(&geometry.metrics);

    let y = frames[0].center().y;
    let mut last = 0;
    let mut x = frames[0].x0;
    while x < frames[4].x1 {
        let hit = hit_test(frames.iter().copied(), &slop, Point::new(x, y));
        let hit = hit.expect("no dead zone between icons");
        assert!(hit >= last, "hits move left to right");
        last = hit;
        x += 1.0;
    }
    assert_eq!(last, 4);
}
