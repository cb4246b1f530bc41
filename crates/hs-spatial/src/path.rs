//! Fixed-resolution waypoint paths.
//!
//! There is no navigation mesh: a path is the straight segment between two
//! points cut into `WAYPOINT_COUNT - 1` equal steps, whatever the distance.
//! Obstacles are ignored.  The fixed point count keeps travel timing
//! independent of map detail, and a zero-length request still produces a full
//! path of coincident points, so callers never special-case "already there".

use hs_core::Position;

/// Points in every built path, endpoints included.
pub const WAYPOINT_COUNT: usize = 11;

/// A waypoint counts as reached once the traveller is strictly closer than
/// this.
pub const ARRIVAL_RADIUS: f32 = 0.1;

/// An ordered, consume-once sequence of waypoints plus the index of the next
/// one to reach.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointPath {
    points: Vec<Position>,
    index:  usize,
}

impl WaypointPath {
    pub fn new(points: Vec<Position>) -> Self {
        Self { points, index: 0 }
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the next waypoint to reach.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The next waypoint, or `None` once the path is used up.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.points.get(self.index).copied()
    }

    /// Final point of the path.
    pub fn destination(&self) -> Option<Position> {
        self.points.last().copied()
    }

    /// Mark the current waypoint reached.  Saturates at `len()`; a path never
    /// restarts.
    #[inline]
    pub fn advance_index(&mut self) {
        if self.index < self.points.len() {
            self.index += 1;
        }
    }

    /// `true` once every waypoint has been reached.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.index >= self.points.len()
    }

    /// Waypoints still ahead.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.points.len() - self.index
    }
}

/// Interpolate `start → end` into exactly [`WAYPOINT_COUNT`] evenly spaced
/// points, `start` first and `end` last.  Pure; never fails.
pub fn build_path(start: Position, end: Position) -> WaypointPath {
    let steps = (WAYPOINT_COUNT - 1) as f32;
    let points = (0..WAYPOINT_COUNT)
        .map(|i| {
            // Pin the last point so float error never moves the destination.
            if i == WAYPOINT_COUNT - 1 { end } else { start.lerp(end, i as f32 / steps) }
        })
        .collect();
    WaypointPath::new(points)
}
