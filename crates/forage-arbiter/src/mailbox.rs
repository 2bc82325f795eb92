//! The mailbox board — one single-slot flag per agent.

use forage_core::{AgentId, MailboxFlag};

/// All agents' mailbox flags, indexed by `AgentId`.
///
/// Raising and clearing are crate-private on purpose: arbitration is the only
/// raiser and trip completion the only clearer.  Outside this crate the board
/// is read-only, which makes the single-writer-per-transition rule a
/// compile-time property rather than a convention.
#[derive(Clone, Debug)]
pub struct MailboxBoard {
    flags: Vec<MailboxFlag>,
}

impl MailboxBoard {
    /// All slots start at `NotCollected`.
    pub fn new(count: usize) -> Self {
        Self {
            flags: vec![MailboxFlag::NotCollected; count],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Current flag for `agent`.  An out-of-range id reads as `NotCollected`
    /// — fail safe toward "no collection pending".
    pub fn get(&self, agent: AgentId) -> MailboxFlag {
        self.flags.get(agent.index()).copied().unwrap_or_default()
    }

    /// All slots in agent order.
    pub fn flags(&self) -> &[MailboxFlag] {
        &self.flags
    }

    /// Raise `agent`'s flag.  Called only by collection arbitration.
    pub(crate) fn raise(&mut self, agent: AgentId) {
        self.flags[agent.index()] = MailboxFlag::Collected;
    }

    /// Clear `agent`'s flag.  Called only by trip completion.
    pub(crate) fn clear(&mut self, agent: AgentId) {
        self.flags[agent.index()] = MailboxFlag::NotCollected;
    }
}
