//! Geometry helpers - ball/player distance queries
//!
//! Tracking coordinates are three-dimensional (x, y, z). Distances are plain
//! Euclidean distances in whatever unit the tracking source uses.

use serde::{Deserialize, Serialize};

/// Point in field coordinates.
///
/// Serialized as a `[x, y, z]` array, which is how the tracking feed
/// encodes positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Position {
    fn from(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }
}

impl From<Position> for [f64; 3] {
    fn from(pos: Position) -> Self {
        [pos.x, pos.y, pos.z]
    }
}

/// Anything with a position on the field.
pub trait Located {
    fn position(&self) -> Position;
}

impl Located for Position {
    fn position(&self) -> Position {
        *self
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Result of a nearest-to-ball search.
#[derive(Debug)]
pub struct Closest<'a, T> {
    pub distance: f64,
    pub item: &'a T,
}

impl<T> Clone for Closest<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Closest<'_, T> {}

/// Find the item closest to the ball.
///
/// Ties keep the first minimal item in iteration order. Returns `None` for an
/// empty slice.
pub fn closest_to_ball<T: Located>(items: &[T], ball: Position) -> Option<Closest<'_, T>> {
    let mut closest: Option<Closest<'_, T>> = None;

    for item in items {
        let dist = distance(item.position(), ball);

        match closest {
            None => closest = Some(Closest { distance: dist, item }),
            Some(best) if dist < best.distance => {
                closest = Some(Closest { distance: dist, item });
            }
            _ => {}
        }
    }

    closest
}
