//! Nearest-point lookup over tagged positions.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, z)` to the nearest tagged point.  The
//! building registry keeps one for food sources so "where is the closest
//! meal?" is a logarithmic query rather than a scan of every building.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use hs_core::Position;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, z]` point with its tag.
#[derive(Clone, PartialEq)]
struct TaggedPoint<T> {
    point: [f32; 2],
    tag:   T,
}

impl<T> RTreeObject for TaggedPoint<T> {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl<T> PointDistance for TaggedPoint<T> {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

/// R-tree of positions tagged with a small `Copy` payload (usually an id).
pub struct PointIndex<T> {
    tree: RTree<TaggedPoint<T>>,
}

impl<T: Copy + PartialEq> PointIndex<T> {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build from a batch; faster than repeated [`insert`](Self::insert).
    pub fn bulk_load(points: impl IntoIterator<Item = (Position, T)>) -> Self {
        let entries = points
            .into_iter()
            .map(|(p, tag)| TaggedPoint { point: [p.x, p.z], tag })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn insert(&mut self, position: Position, tag: T) {
        self.tree.insert(TaggedPoint { point: [position.x, position.z], tag });
    }

    /// Remove the entry with exactly this position and tag.  Returns `false`
    /// if it was not present.
    pub fn remove(&mut self, position: Position, tag: T) -> bool {
        self.tree
            .remove(&TaggedPoint { point: [position.x, position.z], tag })
            .is_some()
    }

    /// The closest entry to `from`, or `None` if the index is empty.
    pub fn nearest(&self, from: Position) -> Option<(Position, T)> {
        self.tree
            .nearest_neighbor(&[from.x, from.z])
            .map(|e| (Position::new(e.point[0], e.point[1]), e.tag))
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl<T: Copy + PartialEq> Default for PointIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
