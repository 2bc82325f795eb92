//! The per-agent mailbox flag — the only signal channel between arbiter and
//! agent.
//!
//! # Write discipline
//!
//! Exactly one writer raises the flag (the collection arbitrator, on a
//! successful collection) and exactly one writer clears it (trip completion,
//! after the matching log append).  The agent's own state machine never
//! writes it — it only reads its own slot to decide whether to break off the
//! outbound leg and head home.  This single-writer-per-transition rule is the
//! whole concurrency-safety argument; see the `forage-arbiter` mailbox board.

use std::fmt;

/// Collection hand-off state for one agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MailboxFlag {
    /// No collection pending; the agent keeps foraging.
    #[default]
    NotCollected,
    /// A collection has been credited and not yet logged.
    Collected,
}

impl MailboxFlag {
    /// Wire form used by external representations of the flag.
    pub fn as_str(self) -> &'static str {
        match self {
            MailboxFlag::NotCollected => "not_collected",
            MailboxFlag::Collected    => "collected",
        }
    }

    /// Parse a wire string.
    ///
    /// Anything other than `"collected"` — including garbage — is read as
    /// [`NotCollected`][MailboxFlag::NotCollected]: fail safe toward "no
    /// collection pending".
    pub fn parse(s: &str) -> MailboxFlag {
        if s.trim().eq_ignore_ascii_case("collected") {
            MailboxFlag::Collected
        } else {
            MailboxFlag::NotCollected
        }
    }

    #[inline]
    pub fn is_collected(self) -> bool {
        self == MailboxFlag::Collected
    }
}

impl fmt::Display for MailboxFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
