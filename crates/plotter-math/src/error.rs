// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Rejected inputs for the checked transform constructors.
///
/// The unchecked constructors never fail; they produce a non-invertible
/// matrix (or IEEE infinities) for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// An input component was NaN or infinite.
    #[error("non-finite input")]
    NonFinite,
    /// `from == to`, or the view direction is parallel to `up`.
    #[error("degenerate view basis: forward is zero-length or parallel to up")]
    DegenerateBasis,
    /// `z_near` and `z_far` coincide.
    #[error("degenerate depth range: near={z_near} far={z_far}")]
    DegenerateDepthRange {
        /// Near clip distance.
        z_near: f32,
        /// Far clip distance.
        z_far: f32,
    },
    /// Field of view, aspect ratio or near distance collapses the frustum to zero width.
    #[error("degenerate frustum: fov={fov} aspect={aspect_ratio} near={z_near}")]
    DegenerateFrustum {
        /// Vertical field of view (radians).
        fov: f32,
        /// Width over height.
        aspect_ratio: f32,
        /// Near clip distance.
        z_near: f32,
    },
}
