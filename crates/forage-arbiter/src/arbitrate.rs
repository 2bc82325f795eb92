//! Per-tick collection arbitration.

use tracing::info;

use forage_agent::AgentStore;
use forage_core::{AgentId, ResourceId};
use forage_log::LogWriter;

use crate::{ArbiterContext, ArbiterResult};

/// A successful collection: one agent credited with one unit of one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionEvent {
    pub agent:     AgentId,
    pub resource:  ResourceId,
    /// The record's value after this depletion (0 means it is now exhausted).
    pub remaining: u32,
}

impl<W: LogWriter> ArbiterContext<W> {
    /// Run one tick of collection arbitration over every agent.
    ///
    /// Agents are visited in ascending id order.  For each agent whose flag
    /// is currently `NotCollected`, live records are scanned in ascending id
    /// order and the first one whose detection radius covers the agent's
    /// position is depleted by exactly 1; the agent's flag is raised and the
    /// scan stops for that agent.  First match wins by record id, not by
    /// distance, and an agent collects at most once per tick.
    ///
    /// Because a depletion commits before the next agent is visited, two
    /// agents over the same value-1 record resolve deterministically: the
    /// lower id collects, the higher id finds the record already exhausted.
    pub fn arbitrate(&mut self, agents: &AgentStore) -> ArbiterResult<Vec<CollectionEvent>> {
        let mut events = Vec::new();

        for agent in agents.agent_ids() {
            if self.mailboxes.get(agent).is_collected() {
                continue; // one collection per trip; the previous one is still in flight
            }

            let position = agents.positions[agent.index()];
            let hit = self
                .ledger
                .live()
                .find(|r| r.position.distance(position) <= r.detection_radius())
                .map(|r| r.id);

            if let Some(resource) = hit {
                let remaining = self.ledger.deplete(resource, 1)?;
                self.mailboxes.raise(agent);
                info!(%agent, %resource, remaining, "collection arbitrated");
                events.push(CollectionEvent { agent, resource, remaining });
            }
        }

        Ok(events)
    }
}
