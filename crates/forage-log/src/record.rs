//! The durable collection record.

use serde::{Deserialize, Serialize};

/// One logged collection, appended when an agent completes a trip with its
/// mailbox flag raised.
///
/// Immutable once written.  `resources_collected` is the team's running total
/// at the time of the append (pre-incremented by trip completion), so a
/// partially replayed log still carries each team's totals inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    /// Registered name of the collecting agent.
    pub agent: String,

    /// Team credited with the collection (`"unknown"` for unregistered agents).
    pub team: String,

    /// The team's collected count including this entry.
    pub resources_collected: u64,
}
