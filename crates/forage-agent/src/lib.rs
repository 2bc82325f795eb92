//! `forage-agent` — per-agent storage for the `rust_forage` framework.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`store`]    | `AgentStore` (SoA observation arrays), `AgentRngs`       |
//! | [`roster`]   | `Roster`, `AgentProfile`, CSV setup-feed loader          |
//!
//! Identity (name, team) is immutable after setup and lives in the roster;
//! everything per-tick lives in the SoA store.

pub mod roster;
pub mod store;

#[cfg(test)]
mod tests;

pub use roster::{load_roster_csv, load_roster_reader, AgentProfile, Roster, UNKNOWN_TEAM};
pub use store::{AgentRngs, AgentStore};
