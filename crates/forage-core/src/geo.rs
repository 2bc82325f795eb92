//! Planar geometry for the circular arena.
//!
//! Coordinates are metres in a world frame centred on the home zone.  `f32`
//! gives sub-millimetre precision at arena scale (a few metres) while keeping
//! the SoA arrays compact.

use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D point or direction in arena coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians, world frame).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Angle helpers ─────────────────────────────────────────────────────────────

/// Wrap an angle to (-π, π].
pub fn normalize_angle(mut angle: f32) -> f32 {
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// World-frame heading angle from a raw compass reading.
///
/// The compass vector points toward a fixed world reference direction
/// expressed in the agent's own frame, so the heading comes out as
/// `atan2(-x, -y)`.
#[inline]
pub fn heading_from_compass(compass: Vec2) -> f32 {
    (-compass.x).atan2(-compass.y)
}

/// Alignment test used while an agent spins in place hunting for home.
///
/// Treats `heading` as an infinite ray from `pos` and measures the
/// perpendicular distance from `home` to the carrying line.  True only when
/// that distance is under `tolerance` and the dot product of `heading` with
/// the vector to home is negative (the convention under which home lies on
/// the drive axis rather than behind it).  A zero heading vector never
/// aligns.
pub fn will_cross_home(pos: Vec2, heading: Vec2, home: Vec2, tolerance: f32) -> bool {
    // Line through `pos` with direction `heading`, as A·x + B·y + C = 0.
    let a = heading.y;
    let b = -heading.x;
    let c = heading.x * pos.y - heading.y * pos.x;

    let denominator = (a * a + b * b).sqrt();
    if denominator == 0.0 {
        return false;
    }
    let distance = (a * home.x + b * home.y + c).abs() / denominator;

    distance < tolerance && heading.dot(home - pos) < 0.0
}
