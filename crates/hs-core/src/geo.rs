//! Ground-plane coordinate type.
//!
//! The colony lives on a flat map; height is a rendering concern, so a
//! position is only the `(x, z)` pair.  Single precision is plenty for
//! settlement-scale maps and matches what the renderer consumes.

/// A point on the ground plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Squared distance; use for comparisons to skip the `sqrt`.
    #[inline]
    pub fn distance_sq(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        dx * dx + dz * dz
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: Position, t: f32) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// The point `distance` units away along `heading` (radians, 0 = +x).
    #[inline]
    pub fn offset_polar(self, heading: f32, distance: f32) -> Position {
        Position {
            x: self.x + heading.cos() * distance,
            z: self.z + heading.sin() * distance,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.z)
    }
}
