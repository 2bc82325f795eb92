//! Environment collaborator traits.
//!
//! Locomotion and rendering are outside the coordination core; the sim talks
//! to them only through these seams.  A real deployment binds them to motor
//! devices and a scene graph; tests bind them to scripted doubles.

use forage_core::{AgentId, DriveCommand, Pose, ResourceId};

// ── Locomotion ────────────────────────────────────────────────────────────────

/// Position/heading feed and drive sink for every agent.
pub trait Locomotion {
    /// Current pose observation for `agent`.  Read once per agent per tick,
    /// at the top of the tick.
    fn pose(&self, agent: AgentId) -> Pose;

    /// Receive the wheel command for `agent`.  Called every tick for every
    /// agent, whatever its state.
    fn apply_drive(&mut self, agent: AgentId, command: DriveCommand);

    /// Advance the collaborator's own model by one tick of `dt_secs`.
    ///
    /// Feeds that are updated externally (a live robot, a replay) leave the
    /// default no-op.
    fn tick(&mut self, dt_secs: f32) {
        let _ = dt_secs;
    }
}

// ── ResourceDisplay ───────────────────────────────────────────────────────────

/// Visual-state directive for one resource record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResourceDirective {
    /// Shrink the record's disc to `radius` after a depletion.
    Resize { id: ResourceId, radius: f32 },

    /// Remove the record's visual.  Emitted exactly once per record, on the
    /// depletion that takes its value to 0.
    Remove { id: ResourceId },
}

/// Visual-state sink for resource records.
pub trait ResourceDisplay {
    fn apply(&mut self, directive: ResourceDirective);
}

/// Display sink that ignores every directive.
pub struct NoopDisplay;

impl ResourceDisplay for NoopDisplay {
    fn apply(&mut self, _directive: ResourceDirective) {}
}
