// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase interfaces and the reference all-pairs implementation.
//!
//! Contract for every implementation:
//! - Pair identity is canonicalized as `(min_id, max_id)`.
//! - The emitted pair list is strictly sorted lexicographically by that tuple.
//! - Overlap is inclusive on edges (touching boxes pair up).

#[doc = "All-pairs sweep over world-space boxes."]
pub mod pair_sweep;

pub use pair_sweep::{BroadPhase, PairSweep};
