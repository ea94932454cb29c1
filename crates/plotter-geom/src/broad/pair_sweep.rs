// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;

use crate::scene::ShapeId;
use crate::types::aabb::Aabb;

/// Broad-phase interface for inserting proxies and querying overlapping pairs.
pub trait BroadPhase {
    /// Inserts or updates the proxy with the given `id` and world box.
    fn upsert(&mut self, id: ShapeId, aabb: Aabb);
    /// Removes a proxy if present.
    fn remove(&mut self, id: ShapeId);
    /// Drops every proxy.
    fn clear(&mut self);
    /// Returns the canonical, sorted list of overlapping pairs.
    fn pairs(&self) -> Vec<(ShapeId, ShapeId)>;
}

/// `O(n^2)` all-pairs sweep.
///
/// Plot scenes hold a handful of user shapes, so the quadratic pass is the
/// whole implementation. Iteration is over a `BTreeMap`, which already yields
/// ids in ascending order; every emitted `(a, b)` therefore has `a < b` and
/// the list comes out sorted.
#[derive(Debug, Default)]
pub struct PairSweep {
    items: BTreeMap<ShapeId, Aabb>,
}

impl PairSweep {
    /// Creates an empty sweep.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of proxies.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` with no proxies.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl BroadPhase for PairSweep {
    fn upsert(&mut self, id: ShapeId, aabb: Aabb) {
        self.items.insert(id, aabb);
    }

    fn remove(&mut self, id: ShapeId) {
        self.items.remove(&id);
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn pairs(&self) -> Vec<(ShapeId, ShapeId)> {
        let items: Vec<(&ShapeId, &Aabb)> = self.items.iter().collect();
        let mut out = Vec::new();
        for (i, (a_id, a_bb)) in items.iter().enumerate() {
            for (b_id, b_bb) in items.iter().skip(i + 1) {
                if a_bb.overlaps(b_bb) {
                    out.push((**a_id, **b_id));
                }
            }
        }
        out
    }
}
