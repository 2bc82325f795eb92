//! The per-agent navigation controller.

use std::f32::consts::PI;

use tracing::debug;

use forage_core::geo::{normalize_angle, will_cross_home};
use forage_core::{
    AgentId, AgentRng, ArenaConfig, DriveCommand, MailboxFlag, Pose, SimClock, Tick,
};

use crate::NavState;

/// One agent's navigation controller.
///
/// [`step`][Navigator::step] is called exactly once per tick with that tick's
/// observations and returns the wheel command to emit — a command goes out
/// every tick regardless of state.  The controller reads the mailbox flag to
/// decide whether to break off the outbound leg, but never writes it; raising
/// and clearing belong to the arbiter side.
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current FSM state.
    #[inline]
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Advance the state machine by one tick and produce a wheel command.
    pub fn step(
        &mut self,
        agent: AgentId,
        now:   Tick,
        pose:  &Pose,
        flag:  MailboxFlag,
        arena: &ArenaConfig,
        clock: &SimClock,
        rng:   &mut AgentRng,
    ) -> DriveCommand {
        let dist_home = pose.position.distance(arena.home);

        match self.state {
            // ── Pick a fresh random heading ───────────────────────────────
            NavState::ChooseDirection => {
                let target = rng.gen_range(-PI..PI);
                self.transition(agent, now, NavState::Orienting { target });
                DriveCommand::STOP
            }

            // ── Rotate in place toward the target heading ─────────────────
            NavState::Orienting { target } => {
                let error = normalize_angle(target - pose.heading_angle());
                if error.abs() < arena.align_tolerance_rad {
                    self.transition(agent, now, NavState::MovingOut);
                    DriveCommand::straight(arena.max_speed)
                } else {
                    let turn = arena.max_speed * 0.5;
                    if error > 0.0 {
                        DriveCommand::spin(turn)
                    } else {
                        DriveCommand::spin(-turn)
                    }
                }
            }

            // ── Drive straight out ────────────────────────────────────────
            //
            // Wall first, mailbox flag second; both are checked in the same
            // tick and the flag branch wins when both fire.
            NavState::MovingOut => {
                let mut command = DriveCommand::straight(arena.max_speed);
                if dist_home >= arena.radius - arena.wall_tolerance {
                    self.transition(agent, now, NavState::BackingUp { since: now });
                    command = DriveCommand::reverse(arena.max_speed);
                }
                if flag.is_collected() {
                    self.transition(agent, now, NavState::Collecting { since: now });
                    command = DriveCommand::STOP;
                }
                command
            }

            // ── Settle over the resource before turning home ──────────────
            NavState::Collecting { since } => {
                if now.since(since) >= clock.ticks_for_secs(arena.settle_secs) {
                    self.transition(agent, now, NavState::TurningToCenter);
                }
                DriveCommand::STOP
            }

            // ── Reverse away from the wall ────────────────────────────────
            NavState::BackingUp { since } => {
                if now.since(since) >= clock.ticks_for_secs(arena.back_up_secs) {
                    self.transition(agent, now, NavState::TurningToCenter);
                }
                DriveCommand::reverse(arena.max_speed * 0.5)
            }

            // ── Spin until the heading ray crosses the home zone ──────────
            NavState::TurningToCenter => {
                let aligned = will_cross_home(
                    pose.position,
                    pose.heading_vector(),
                    arena.home,
                    arena.center_tolerance,
                );
                if aligned {
                    self.transition(agent, now, NavState::Returning);
                    DriveCommand::straight(arena.max_speed)
                } else {
                    DriveCommand::spin(arena.max_speed * 0.5)
                }
            }

            // ── Drive home ────────────────────────────────────────────────
            NavState::Returning => {
                if dist_home <= arena.home_radius {
                    self.transition(agent, now, NavState::AtHome { since: now });
                    DriveCommand::STOP
                } else {
                    DriveCommand::straight(arena.max_speed)
                }
            }

            // ── Bounded wait for the trip to be logged ────────────────────
            //
            // Trip completion (arbiter side) clears the flag once the
            // collection is logged.  Leave as soon as that happens; leave
            // unconditionally when the wait expires, so a lost log write can
            // never wedge the agent.
            NavState::AtHome { since } => {
                let expired = now.since(since) >= clock.ticks_for_secs(arena.home_wait_secs);
                if !flag.is_collected() || expired {
                    self.transition(agent, now, NavState::ChooseDirection);
                }
                DriveCommand::STOP
            }
        }
    }

    fn transition(&mut self, agent: AgentId, now: Tick, next: NavState) {
        debug!(
            %agent,
            tick = now.0,
            from = self.state.name(),
            to = next.name(),
            "nav transition"
        );
        self.state = next;
    }
}
