//! Trip completion: home-zone detection, log append, flag clear.

use tracing::info;

use forage_agent::{AgentStore, Roster};
use forage_core::{AgentId, ArenaConfig};
use forage_log::{CollectionRecord, LogWriter};

use crate::{ArbiterContext, ArbiterResult};

/// A logged trip completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripEvent {
    pub agent: AgentId,
    pub team:  String,
    /// The team's collected count including this trip.
    pub total: u64,
}

impl<W: LogWriter> ArbiterContext<W> {
    /// Run one tick of trip completion over every agent.
    ///
    /// For each agent inside the home radius with its flag raised: append one
    /// collection record carrying the pre-incremented team total, then clear
    /// the flag.  Agents at home with a clear flag are skipped, so repeated
    /// ticks at home never write duplicate entries.
    ///
    /// The tally commits only after the append succeeds; a failed write
    /// leaves the flag raised and the tally untouched, and the same check
    /// simply repeats next tick.
    pub fn complete_trips(
        &mut self,
        agents: &AgentStore,
        roster: &Roster,
        arena:  &ArenaConfig,
    ) -> ArbiterResult<Vec<TripEvent>> {
        let mut events = Vec::new();

        for agent in agents.agent_ids() {
            if agents.distance_from(agent, arena.home) > arena.home_radius {
                continue;
            }
            if !self.mailboxes.get(agent).is_collected() {
                continue;
            }

            let team = roster.team_of(agent).to_string();
            let total = self.tally.get(&team) + 1;
            let record = CollectionRecord {
                agent: roster
                    .name_of(agent)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("agent_{}", agent.0)),
                team: team.clone(),
                resources_collected: total,
            };

            self.log.append(&record)?;
            self.tally.increment(&team);
            self.mailboxes.clear(agent);

            info!(agent = %record.agent, team = %team, total, "trip logged");
            events.push(TripEvent { agent, team, total });
        }

        Ok(events)
    }
}
