//! The arbiter context — all shared coordination state in one object.

use forage_core::{AgentId, MailboxFlag};
use forage_log::{LogWriter, TeamTally};

use crate::{ArbiterResult, MailboxBoard, ResourceLedger};

/// Owner of the resource ledger, mailbox board, team tally, and the handle to
/// the append-only collection log.
///
/// One instance per run, passed to every per-tick arbiter call — replacing
/// any notion of module-level counters or shared dictionaries.  The writer
/// type is generic so runs can log to a file, to memory in tests, or to any
/// other [`LogWriter`] backend.
pub struct ArbiterContext<W: LogWriter> {
    pub(crate) ledger:    ResourceLedger,
    pub(crate) mailboxes: MailboxBoard,
    pub(crate) tally:     TeamTally,
    pub(crate) log:       W,
}

impl<W: LogWriter> ArbiterContext<W> {
    /// Build a context for `agent_count` agents over `ledger`, logging to
    /// `log`.
    pub fn new(ledger: ResourceLedger, agent_count: usize, log: W) -> Self {
        Self {
            ledger,
            mailboxes: MailboxBoard::new(agent_count),
            tally: TeamTally::new(),
            log,
        }
    }

    /// Read-only view of the ledger.
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Read-only view of the mailbox board.
    pub fn mailboxes(&self) -> &MailboxBoard {
        &self.mailboxes
    }

    /// Current mailbox flag for `agent`.
    #[inline]
    pub fn flag(&self, agent: AgentId) -> MailboxFlag {
        self.mailboxes.get(agent)
    }

    /// The running team tally (derived state; the log is authoritative).
    pub fn tally(&self) -> &TeamTally {
        &self.tally
    }

    /// Flush the log backend.  Idempotent.
    pub fn finish(&mut self) -> ArbiterResult<()> {
        self.log.finish()?;
        Ok(())
    }

    /// Unwrap the log backend (e.g. to inspect a `MemoryWriter` after a run).
    pub fn into_log(self) -> W {
        self.log
    }
}
