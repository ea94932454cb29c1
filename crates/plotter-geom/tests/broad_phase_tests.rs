// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for the broad-phase pair sweep.

use plotter_geom::{Aabb, BroadPhase, PairSweep, ShapeId};
use plotter_math::Vec2;

fn boxed(cx: f32, cy: f32, half: f32) -> Aabb {
    Aabb::new(Vec2::new(cx - half, cy - half), Vec2::new(cx + half, cy + half))
}

#[test]
fn pair_order_is_deterministic() {
    let mut bp = PairSweep::new();
    // Insert out of order; 0 and 1 overlap, 2 is far away.
    bp.upsert(ShapeId(2), boxed(100.0, 0.0, 1.0));
    bp.upsert(ShapeId(1), boxed(1.0, 0.0, 1.0));
    bp.upsert(ShapeId(0), boxed(0.0, 0.0, 1.0));
    assert_eq!(bp.pairs(), vec![(ShapeId(0), ShapeId(1))]);

    bp.upsert(ShapeId(3), boxed(0.5, 0.0, 1.0));
    assert_eq!(
        bp.pairs(),
        vec![
            (ShapeId(0), ShapeId(1)),
            (ShapeId(0), ShapeId(3)),
            (ShapeId(1), ShapeId(3)),
        ]
    );
}

#[test]
fn upsert_replaces_and_remove_drops() {
    let mut bp = PairSweep::new();
    bp.upsert(ShapeId(0), boxed(0.0, 0.0, 1.0));
    bp.upsert(ShapeId(1), boxed(1.5, 0.0, 1.0));
    assert_eq!(bp.pairs().len(), 1);

    bp.upsert(ShapeId(1), boxed(50.0, 0.0, 1.0));
    assert_eq!(bp.len(), 2);
    assert!(bp.pairs().is_empty());

    bp.remove(ShapeId(1));
    bp.remove(ShapeId(9));
    assert_eq!(bp.len(), 1);

    bp.clear();
    assert!(bp.is_empty());
    assert!(bp.pairs().is_empty());
}

#[test]
fn touching_boxes_pair_up() {
    let mut bp = PairSweep::new();
    bp.upsert(ShapeId(4), boxed(0.0, 0.0, 1.0));
    bp.upsert(ShapeId(7), boxed(2.0, 2.0, 1.0));
    assert_eq!(bp.pairs(), vec![(ShapeId(4), ShapeId(7))]);
}
