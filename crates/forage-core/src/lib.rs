//! `forage-core` — foundational types for the `rust_forage` swarm framework.
//!
//! This crate is a dependency of every other `forage-*` crate.  It
//! intentionally has no `forage-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `ResourceId`                                   |
//! | [`geo`]      | `Vec2`, angle helpers, home-alignment ray test            |
//! | [`pose`]     | `Pose` (position + compass), `DriveCommand`               |
//! | [`flag`]     | `MailboxFlag` — the arbiter↔agent hand-off signal         |
//! | [`time`]     | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`config`]   | `ArenaConfig`, `ResourceConfig`                           |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`error`]    | `ForageError`, `ForageResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod flag;
pub mod geo;
pub mod ids;
pub mod pose;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ArenaConfig, ResourceConfig};
pub use error::{ForageError, ForageResult};
pub use flag::MailboxFlag;
pub use geo::Vec2;
pub use ids::{AgentId, ResourceId};
pub use pose::{DriveCommand, Pose};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
