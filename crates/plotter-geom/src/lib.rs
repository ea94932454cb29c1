// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry for the Cartesian Plotter.

This crate provides:
- Colored plot vertices (`Vertex`) and four-corner bounding boxes (`Aabb`).
- Editable polylines with a translate/rotate/scale placement (`Shape`) and
  an ordered container for them (`Scene`).
- A 2D pan/zoom camera that culls against its own world-space box (`Camera`).
- A minimal broad-phase trait with a canonical all-pairs implementation.
- The per-frame pass (`FramePass`) tying these together.

Design notes:
- Single-threaded and frame-driven; the camera is updated before any
  visibility test reads its box.
- Boxes are values: transforming one yields a new box.
- Overlap and containment are inclusive on edges.
"]

/// Overlap pairing between world-space boxes.
pub mod broad;
/// Pan/zoom camera and visibility culling.
pub mod camera;
/// Per-frame camera update, culling and collision highlighting.
pub mod frame;
/// Ordered shape storage and the default plot scene.
pub mod scene;
/// Foundational geometric types.
pub mod types;

pub use broad::{BroadPhase, PairSweep};
pub use camera::{Camera, ViewProjection, Viewport};
pub use frame::{FramePass, FrameReport, ShapeFrame};
pub use scene::{Scene, ShapeId};
pub use types::aabb::{Aabb, DEFAULT_AABB_COLOR};
pub use types::shape::Shape;
pub use types::vertex::Vertex;
