//! Arena and resource-field configuration.

use std::ops::RangeInclusive;

use crate::geo::Vec2;

// ── ArenaConfig ───────────────────────────────────────────────────────────────

/// Geometry and motion constants for the circular arena.
///
/// Defaults describe a 2.5 m-radius arena with the home zone at the origin.
/// All distances are metres, durations seconds, wheel speeds rad/s.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Arena radius.
    pub radius: f32,

    /// Centre of the home zone.
    pub home: Vec2,

    /// Distance from the wall at which the outbound leg turns back.
    pub wall_tolerance: f32,

    /// Perpendicular-distance tolerance for the home-alignment ray test.
    pub center_tolerance: f32,

    /// Radius of the home zone: trips complete (and are logged) inside it.
    pub home_radius: f32,

    /// Full wheel speed.
    pub max_speed: f32,

    /// Heading error below which orientation counts as aligned.
    pub align_tolerance_rad: f32,

    /// How long to reverse after hitting the wall.
    pub back_up_secs: f32,

    /// Pause after a collection is signalled, before turning home.
    pub settle_secs: f32,

    /// Bounded wait at home for the mailbox flag to clear.  The agent leaves
    /// when the flag clears or this expires, whichever comes first.
    pub home_wait_secs: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            radius:              2.5,
            home:                Vec2::ZERO,
            wall_tolerance:      0.1,
            center_tolerance:    0.1,
            home_radius:         0.3,
            max_speed:           6.0,
            align_tolerance_rad: 2.0_f32.to_radians(),
            back_up_secs:        1.0,
            settle_secs:         2.0,
            home_wait_secs:      2.0,
        }
    }
}

// ── ResourceConfig ────────────────────────────────────────────────────────────

/// Resource-field seeding parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceConfig {
    /// How many records to seed.
    pub count: usize,

    /// Smallest starting value (inclusive).  Must be ≥ 1: a record is born
    /// live, never exhausted.
    pub min_value: u32,

    /// Largest starting value (inclusive).
    pub max_value: u32,
}

impl ResourceConfig {
    /// The inclusive value range used when drawing starting values.
    #[inline]
    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.min_value..=self.max_value
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            count:     10,
            min_value: 1,
            max_value: 10,
        }
    }
}
