//! Toy differential-drive kinematics for the demo arena.
//!
//! Stands in for the real locomotion stack, which is outside the
//! coordination core: wheel commands are integrated into planar poses with a
//! unicycle model and a hard arena wall.
//!
//! The compass convention matches the sensor the navigation stack expects:
//! the reading points toward world north expressed in the body frame, and the
//! chassis drives along the axis opposite the compass-derived heading — the
//! same relationship the home-alignment ray test assumes.

use std::f32::consts::PI;

use forage_core::geo::normalize_angle;
use forage_core::{AgentId, ArenaConfig, DriveCommand, Pose, SimRng, Vec2};
use forage_sim::Locomotion;

/// Effective wheel radius (m).
const WHEEL_RADIUS: f32 = 0.043;
/// Distance between the wheel tracks (m).
const TRACK_WIDTH: f32 = 0.192;

/// A simulated chassis pose: position plus body angle.
#[derive(Copy, Clone, Debug)]
struct Chassis {
    position: Vec2,
    theta:    f32,
}

/// Integrating locomotion model for a whole swarm.
pub struct DiffDriveArena {
    chassis:  Vec<Chassis>,
    commands: Vec<DriveCommand>,
    radius:   f32,
}

impl DiffDriveArena {
    /// Scatter `count` agents in a small ring around home, facing random
    /// directions.
    pub fn new(count: usize, arena: &ArenaConfig, rng: &mut SimRng) -> Self {
        let chassis = (0..count)
            .map(|_| {
                let angle = rng.gen_range(0.0..(2.0 * PI));
                let distance = rng.gen_range(0.05..arena.home_radius);
                Chassis {
                    position: Vec2::new(
                        arena.home.x + distance * angle.cos(),
                        arena.home.y + distance * angle.sin(),
                    ),
                    theta: rng.gen_range(-PI..PI),
                }
            })
            .collect();
        Self {
            chassis,
            commands: vec![DriveCommand::STOP; count],
            radius: arena.radius,
        }
    }
}

impl Locomotion for DiffDriveArena {
    fn pose(&self, agent: AgentId) -> Pose {
        let c = &self.chassis[agent.index()];
        // Compass reading that maps back to `theta` through the standard
        // atan2(-x, -y) conversion.
        let compass = Vec2::new(-c.theta.sin(), -c.theta.cos());
        Pose::new(c.position, compass)
    }

    fn apply_drive(&mut self, agent: AgentId, command: DriveCommand) {
        self.commands[agent.index()] = command;
    }

    fn tick(&mut self, dt_secs: f32) {
        for (c, cmd) in self.chassis.iter_mut().zip(&self.commands) {
            let linear = 0.5 * (cmd.left + cmd.right) * WHEEL_RADIUS;
            let angular = (cmd.right - cmd.left) * WHEEL_RADIUS / TRACK_WIDTH;

            c.theta = normalize_angle(c.theta + angular * dt_secs);

            // Drive axis is opposite the compass-derived heading.
            let direction = Vec2::new(-c.theta.cos(), -c.theta.sin());
            c.position = c.position + direction * (linear * dt_secs);

            // Hard wall: clamp back onto the arena disc.
            let dist = c.position.length();
            if dist > self.radius {
                c.position = c.position * (self.radius / dist);
            }
        }
    }
}
