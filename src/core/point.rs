//! 3D integer point type shared across the registration pipeline.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A beacon or scanner position as an exact integer triple.
///
/// Equality and hashing are by value so points can live in hash sets and be
/// intersected across coordinate frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate
    pub z: i32,
}

impl Point3 {
    /// The origin (0, 0, 0)
    pub const ORIGIN: Point3 = Point3 { x: 0, y: 0, z: 0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Manhattan distance to another point
    #[inline]
    pub fn manhattan_distance(&self, other: &Point3) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Squared Euclidean distance, widened to i64 to avoid overflow
    #[inline]
    pub fn distance_squared(&self, other: &Point3) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        let dz = (self.z - other.z) as i64;
        dx * dx + dy * dy + dz * dz
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
