//! Per-tick sensor observations and actuation commands.
//!
//! Both types cross the boundary to the locomotion collaborator: a [`Pose`]
//! arrives from the position/heading feed every tick, and a [`DriveCommand`]
//! goes back to the wheel sink every tick, whatever state the agent is in.

use crate::geo::{heading_from_compass, Vec2};

// ── Pose ──────────────────────────────────────────────────────────────────────

/// One agent's sensor snapshot for a single tick.
///
/// Supplied read-only by the environment; the coordination core never writes
/// positions or compass readings.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// Position fix in arena coordinates.
    pub position: Vec2,
    /// Raw compass vector; convert with [`Pose::heading_angle`].
    pub compass: Vec2,
}

impl Pose {
    #[inline]
    pub fn new(position: Vec2, compass: Vec2) -> Self {
        Self { position, compass }
    }

    /// World-frame heading angle in (-π, π].
    #[inline]
    pub fn heading_angle(&self) -> f32 {
        heading_from_compass(self.compass)
    }

    /// Unit vector along [`heading_angle`][Self::heading_angle].
    #[inline]
    pub fn heading_vector(&self) -> Vec2 {
        Vec2::from_angle(self.heading_angle())
    }
}

impl Default for Pose {
    /// Origin position with a compass reading that maps to heading 0.
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            compass:  Vec2::new(0.0, -1.0),
        }
    }
}

// ── DriveCommand ──────────────────────────────────────────────────────────────

/// A differential-drive wheel-speed pair (rad/s).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveCommand {
    pub left:  f32,
    pub right: f32,
}

impl DriveCommand {
    pub const STOP: DriveCommand = DriveCommand { left: 0.0, right: 0.0 };

    /// Both wheels forward at `speed`.
    #[inline]
    pub fn straight(speed: f32) -> Self {
        Self { left: speed, right: speed }
    }

    /// Both wheels backward at `speed`.
    #[inline]
    pub fn reverse(speed: f32) -> Self {
        Self::straight(-speed)
    }

    /// Spin in place.  Positive `speed` turns toward increasing heading
    /// angle (left wheel back, right wheel forward).
    #[inline]
    pub fn spin(speed: f32) -> Self {
        Self { left: -speed, right: speed }
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.left == 0.0 && self.right == 0.0
    }
}
