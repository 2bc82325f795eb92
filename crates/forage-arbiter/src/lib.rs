//! `forage-arbiter` — the central arbiter for the `rust_forage` framework.
//!
//! The arbiter owns ground truth: the resource ledger, every agent's mailbox
//! flag, the team tally, and the handle to the append-only collection log.
//! All of it lives in one [`ArbiterContext`] passed to the per-tick calls —
//! there is no process-wide state.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ledger`]    | `ResourceRecord`, `ResourceLedger`                      |
//! | [`mailbox`]   | `MailboxBoard` — per-agent flag slots                   |
//! | [`context`]   | `ArbiterContext` — owner of all shared state            |
//! | [`arbitrate`] | per-tick collection arbitration, `CollectionEvent`      |
//! | [`trip`]      | trip completion + log append, `TripEvent`               |
//! | [`error`]     | `ArbiterError`, `ArbiterResult`                         |
//!
//! # Write discipline
//!
//! Each shared field has exactly one writer: resource values are depleted
//! only by arbitration; a mailbox flag is raised only by arbitration and
//! cleared only by trip completion.  That single-writer rule is the entire
//! concurrency-safety argument — no locks are needed because no field ever
//! has two writers.

pub mod arbitrate;
pub mod context;
pub mod error;
pub mod ledger;
pub mod mailbox;
pub mod trip;


pub use arbitrate::CollectionEvent;
pub use context::ArbiterContext;
pub use error::{ArbiterError, ArbiterResult};
pub use ledger::{ResourceLedger, ResourceRecord};
pub use mailbox::MailboxBoard;
pub use trip::TripEvent;
