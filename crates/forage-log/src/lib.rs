//! `forage-log` — the durable collection log and its derived views.
//!
//! The log is the source of truth for scoring: an append-only sequence of
//! independently parseable JSON lines, one per successful collection.  Tallies
//! and the scoreboard are derived state, rebuildable at any time by replaying
//! the stream.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`record`]     | `CollectionRecord`                                     |
//! | [`writer`]     | `LogWriter` trait, `JsonlWriter`, `MemoryWriter`       |
//! | [`scoreboard`] | `TeamTally`, replay helpers, `Scoreboard` renderer     |
//! | [`error`]      | `LogError`, `LogResult`                                |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | Swap the tally map's hasher for FxHash.                 |

pub mod error;
pub mod record;
pub mod scoreboard;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{LogError, LogResult};
pub use record::CollectionRecord;
pub use scoreboard::{replay_file, replay_reader, Scoreboard, TeamTally};
pub use writer::{JsonlWriter, LogWriter, MemoryWriter};
