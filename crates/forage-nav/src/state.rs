//! Navigation state machine states.

use forage_core::Tick;

/// The per-agent foraging cycle.
///
/// choose → orient → out → (collect | back up) → turn → return → wait at
/// home → choose again, repeating for the life of the run.  There is no
/// terminal state.
///
/// Waits are tick-counted, never blocking: `Collecting`, `BackingUp`, and
/// `AtHome` carry the tick at which they were entered and the navigator
/// compares elapsed ticks against the configured durations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavState {
    /// Pick a fresh random target heading.
    ChooseDirection,

    /// Rotate in place toward `target` (radians, world frame).
    Orienting { target: f32 },

    /// Drive straight out at full speed, watching the wall and the mailbox
    /// flag.
    MovingOut,

    /// A collection was signalled: settle in place before heading home.
    Collecting { since: Tick },

    /// The wall was reached: reverse for a fixed duration.
    BackingUp { since: Tick },

    /// Spin in place until the heading ray crosses the home zone.
    TurningToCenter,

    /// Drive straight until inside the home radius.
    Returning,

    /// Stopped at home, waiting (bounded) for the mailbox flag to clear.
    AtHome { since: Tick },
}

impl NavState {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            NavState::ChooseDirection => "choose_direction",
            NavState::Orienting { .. } => "orienting",
            NavState::MovingOut => "moving_out",
            NavState::Collecting { .. } => "collecting",
            NavState::BackingUp { .. } => "backing_up",
            NavState::TurningToCenter => "turning_to_center",
            NavState::Returning => "returning",
            NavState::AtHome { .. } => "at_home",
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        NavState::ChooseDirection
    }
}
