//! Fluent builder for constructing a [`Sim`].

use forage_agent::{AgentRngs, AgentStore, Roster};
use forage_arbiter::{ArbiterContext, ResourceLedger};
use forage_core::{ArenaConfig, ResourceConfig, SimConfig, SimRng};
use forage_log::LogWriter;
use forage_nav::Navigator;

use crate::env::{Locomotion, ResourceDisplay};
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<L, D, W>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration, …
/// - [`ArenaConfig`] — geometry and motion constants
/// - [`Roster`] — agent identities; its length is the agent count
/// - `L: Locomotion` — the pose feed / drive sink
/// - `D: ResourceDisplay` — the resource visual sink
/// - `W: LogWriter` — the collection-log backend
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                    |
/// |-----------------|--------------------------------------------|
/// | `.resources(c)` | `ResourceConfig::default()` (10 × 1..=10)  |
/// | `.ledger(l)`    | Seeded from `config.seed`                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, arena, roster, kinematics, NoopDisplay, writer)
///     .resources(ResourceConfig { count: 6, ..Default::default() })
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<L: Locomotion, D: ResourceDisplay, W: LogWriter> {
    config:     SimConfig,
    arena:      ArenaConfig,
    roster:     Roster,
    locomotion: L,
    display:    D,
    log:        W,
    resources:  ResourceConfig,
    ledger:     Option<ResourceLedger>,
}

impl<L: Locomotion, D: ResourceDisplay, W: LogWriter> SimBuilder<L, D, W> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:     SimConfig,
        arena:      ArenaConfig,
        roster:     Roster,
        locomotion: L,
        display:    D,
        log:        W,
    ) -> Self {
        Self {
            config,
            arena,
            roster,
            locomotion,
            display,
            log,
            resources: ResourceConfig::default(),
            ledger:    None,
        }
    }

    /// Override the resource-field seeding parameters.
    pub fn resources(mut self, resources: ResourceConfig) -> Self {
        self.resources = resources;
        self
    }

    /// Supply a pre-built ledger instead of seeding one from the run seed.
    ///
    /// Tests use this to place records deterministically.
    pub fn ledger(mut self, ledger: ResourceLedger) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Validate inputs, seed the ledger if none was supplied, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<L, D, W>> {
        let agent_count = self.roster.len();
        if agent_count == 0 {
            return Err(SimError::EmptyRoster);
        }
        if self.config.tick_ms == 0 {
            return Err(SimError::Config("tick_ms must be positive".into()));
        }

        let ledger = match self.ledger {
            Some(ledger) => ledger,
            None => {
                if self.resources.min_value == 0 {
                    return Err(SimError::Config(
                        "resource values start at 1; min_value 0 would seed exhausted records".into(),
                    ));
                }
                if self.resources.min_value > self.resources.max_value {
                    return Err(SimError::Config(format!(
                        "resource value range {}..={} is empty",
                        self.resources.min_value, self.resources.max_value
                    )));
                }
                ResourceLedger::seed(&self.resources, &self.arena, &mut SimRng::new(self.config.seed))
            }
        };

        let clock = self.config.make_clock();
        let seed = self.config.seed;

        Ok(Sim {
            clock,
            config:     self.config,
            arena:      self.arena,
            agents:     AgentStore::new(agent_count),
            rngs:       AgentRngs::new(agent_count, seed),
            navigators: (0..agent_count).map(|_| Navigator::new()).collect(),
            context:    ArbiterContext::new(ledger, agent_count, self.log),
            roster:     self.roster,
            locomotion: self.locomotion,
            display:    self.display,
        })
    }
}
