//! The `Sim` struct and its tick loop.

use forage_agent::{AgentRngs, AgentStore, Roster};
use forage_arbiter::ArbiterContext;
use forage_core::{AgentId, ArenaConfig, SimClock, SimConfig, Tick};
use forage_log::LogWriter;
use forage_nav::Navigator;

use crate::env::{Locomotion, ResourceDirective, ResourceDisplay};
use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<L, D, W>` holds the roster, the per-tick observation store, one
/// navigator per agent, and the arbiter context, and drives the fixed-order
/// tick loop described in the crate docs.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<L: Locomotion, D: ResourceDisplay, W: LogWriter> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Arena geometry and motion constants.
    pub arena: ArenaConfig,

    /// Immutable agent identities (name, team).
    pub roster: Roster,

    /// SoA observation arrays, refreshed from the locomotion feed each tick.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// One navigation state machine per agent.
    pub navigators: Vec<Navigator>,

    /// The arbiter: ledger, mailbox board, tally, and collection log.
    pub context: ArbiterContext<W>,

    /// Locomotion collaborator: pose feed + drive sink.
    pub locomotion: L,

    /// Rendering collaborator for resource visuals.
    pub display: D,
}

impl<L: Locomotion, D: ResourceDisplay, W: LogWriter> Sim<L, D, W> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.process_tick(now, observer)?;
            self.clock.advance();
        }
        self.context.finish()?;
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.process_tick(now, observer)?;
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(now);

        // ── Phase 1: snapshot poses ───────────────────────────────────────
        //
        // The only read from the locomotion feed this tick.  Everything
        // downstream — arbitration, trip completion, nav — sees the same
        // consistent snapshot.
        for agent in 0..self.agents.count as u32 {
            let agent = AgentId(agent);
            let pose = self.locomotion.pose(agent);
            self.agents.record_pose(agent, pose);
        }

        // ── Phase 2: collection arbitration ───────────────────────────────
        //
        // Ledger depletions and flag raises commit here, before any
        // navigator runs.  Each depletion produces one display directive;
        // the one that exhausts a record produces its single removal.
        let collections = self.context.arbitrate(&self.agents)?;
        for event in &collections {
            let directive = if event.remaining == 0 {
                ResourceDirective::Remove { id: event.resource }
            } else {
                let radius = self
                    .context
                    .ledger()
                    .get(event.resource)
                    .map(|r| r.visual_radius())
                    .unwrap_or_default();
                ResourceDirective::Resize { id: event.resource, radius }
            };
            self.display.apply(directive);
            observer.on_collection(now, event);
        }

        // ── Phase 3: trip completion ──────────────────────────────────────
        let trips = self
            .context
            .complete_trips(&self.agents, &self.roster, &self.arena)?;
        for event in &trips {
            observer.on_trip_logged(now, event);
        }

        // ── Phase 4: nav phase ────────────────────────────────────────────
        self.step_navigators(now);

        // ── Phase 5: advance collaborators and report ─────────────────────
        self.locomotion.tick(self.clock.dt_secs());

        if self.config.scoreboard_interval_ticks > 0
            && now.0.is_multiple_of(self.config.scoreboard_interval_ticks)
        {
            observer.on_scoreboard(now, self.context.tally());
        }
        observer.on_tick_end(now, collections.len());

        Ok(())
    }

    /// Step every navigator once and emit its drive command.
    ///
    /// Navigators only read shared state (their own pose row and flag slot)
    /// and return a command, so with the `parallel` feature the stepping runs
    /// on Rayon's thread pool; commands are then applied sequentially in
    /// ascending `AgentId` order for determinism.
    fn step_navigators(&mut self, now: Tick) {
        let arena = &self.arena;
        let clock = &self.clock;

        #[cfg(not(feature = "parallel"))]
        {
            for agent in 0..self.agents.count as u32 {
                let agent = AgentId(agent);
                let pose = self.agents.pose(agent);
                let flag = self.context.flag(agent);
                let rng = self.rngs.get_mut(agent);
                let command =
                    self.navigators[agent.index()].step(agent, now, &pose, flag, arena, clock, rng);
                self.agents.record_drive(agent, command);
                self.locomotion.apply_drive(agent, command);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let ids: Vec<AgentId> = self.agents.agent_ids().collect();
            let poses: Vec<_> = ids.iter().map(|&a| self.agents.pose(a)).collect();
            let flags: Vec<_> = ids.iter().map(|&a| self.context.flag(a)).collect();

            // `get_many_mut` returns disjoint &mut refs for the unique,
            // in-bounds ascending id list built above.
            let rng_refs = self.rngs.get_many_mut(&ids);

            let commands: Vec<_> = self
                .navigators
                .par_iter_mut()
                .zip(rng_refs.into_par_iter())
                .enumerate()
                .map(|(i, (navigator, rng))| {
                    navigator.step(ids[i], now, &poses[i], flags[i], arena, clock, rng)
                })
                .collect();

            for (&agent, &command) in ids.iter().zip(commands.iter()) {
                self.agents.record_drive(agent, command);
                self.locomotion.apply_drive(agent, command);
            }
        }
    }
}
