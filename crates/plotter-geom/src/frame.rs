// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! One frame of geometry work, in the order the draw pass depends on:
//! camera update, world boxes, visibility, then overlap highlighting.
//!
//! Results are returned as a [`FrameReport`] value; nothing is stashed in
//! shared state for the draw routine to pick up.

use std::collections::BTreeSet;

use tracing::debug;

use crate::broad::{BroadPhase, PairSweep};
use crate::camera::{Camera, ViewProjection};
use crate::scene::{Scene, ShapeId};
use crate::types::aabb::Aabb;

/// Per-shape outcome of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeFrame {
    /// Which shape.
    pub id: ShapeId,
    /// Local box mapped through the shape's model matrix.
    pub world_aabb: Aabb,
    /// Whether the world box touches the camera rectangle.
    pub visible: bool,
    /// Whether this collider overlaps at least one other collider.
    pub colliding: bool,
}

/// Everything the draw pass needs from one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// View and projection for this frame.
    pub matrices: ViewProjection,
    /// Camera rectangle the visibility flags were computed against.
    pub camera_aabb: Aabb,
    /// One entry per shape, in draw order.
    pub shapes: Vec<ShapeFrame>,
    /// Canonical overlapping collider pairs.
    pub pairs: Vec<(ShapeId, ShapeId)>,
}

impl FrameReport {
    /// Ids of shapes that should be drawn.
    pub fn visible_ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().filter(|s| s.visible).map(|s| s.id).collect()
    }

    /// Ids of shapes flagged for collision highlighting.
    pub fn colliding_ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().filter(|s| s.colliding).map(|s| s.id).collect()
    }

    /// Entry for `id`, if the shape existed this frame.
    pub fn shape(&self, id: ShapeId) -> Option<&ShapeFrame> {
        self.shapes.get(id.0)
    }
}

/// Runs the per-frame geometry over a scene with a reusable broad phase.
#[derive(Debug, Default)]
pub struct FramePass<B = PairSweep> {
    broad: B,
}

impl FramePass<PairSweep> {
    /// Frame pass backed by [`PairSweep`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BroadPhase> FramePass<B> {
    /// Frame pass backed by a caller-provided broad phase.
    pub fn with_broad_phase(broad: B) -> Self {
        Self { broad }
    }

    /// Updates `camera` for `aspect_ratio`, then culls and pairs every shape.
    ///
    /// Only non-empty shapes with `collider` set enter the broad phase. A
    /// shape without vertices has no extent and is never visible. Visibility does
    /// not gate collision: an off-screen collider still highlights its
    /// on-screen partner.
    pub fn run(&mut self, camera: &mut Camera, scene: &Scene, aspect_ratio: f32) -> FrameReport {
        let matrices = camera.update(aspect_ratio);

        self.broad.clear();
        let mut shapes: Vec<ShapeFrame> = scene
            .iter()
            .map(|(id, shape)| {
                let world_aabb = shape.world_aabb();
                let placed = !shape.is_empty();
                if placed && shape.collider {
                    self.broad.upsert(id, world_aabb);
                }
                ShapeFrame {
                    id,
                    world_aabb,
                    visible: placed && camera.is_visible(&world_aabb),
                    colliding: false,
                }
            })
            .collect();

        let pairs = self.broad.pairs();
        let hit: BTreeSet<ShapeId> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        for frame in &mut shapes {
            frame.colliding = hit.contains(&frame.id);
        }

        let visible = shapes.iter().filter(|s| s.visible).count();
        debug!(
            shapes = shapes.len(),
            visible,
            culled = shapes.len() - visible,
            colliding = hit.len(),
            pairs = pairs.len(),
            "frame pass"
        );

        FrameReport {
            matrices,
            camera_aabb: *camera.aabb(),
            shapes,
            pairs,
        }
    }
}
