// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the plotter (vertex, AABB, shape).
//!
//! - Containment and overlap are inclusive on edges, so touching shapes are
//!   highlighted as colliding.
//! - Boxes only ever live in the plot plane; `z` is dropped when a
//!   homogeneous point comes back from a matrix.

#[doc = "Axis-aligned bounding boxes with colored corners."]
pub mod aabb;
#[doc = "Polylines placed by translation, Z rotation and scale."]
pub mod shape;
#[doc = "Position + RGBA color."]
pub mod vertex;
