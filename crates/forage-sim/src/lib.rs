//! `forage-sim` — tick loop orchestrator for the rust_forage framework.
//!
//! # Fixed-order tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Poses     — snapshot every agent's pose from the locomotion feed.
//!   ② Arbitrate — ledger depletions + mailbox-flag raises commit, and the
//!                 display sink receives resize/remove directives.
//!   ③ Trips     — agents at home with a raised flag are logged; flags clear.
//!   ④ Nav       — every navigator steps once (parallel with the `parallel`
//!                 feature) and a drive command is emitted for every agent.
//!   ⑤ Advance   — the locomotion collaborator integrates; observer hooks fire.
//! ```
//!
//! Arbiter writes commit before any navigator observes them, so within one
//! tick "writer commits before readers observe" holds by construction.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                         |
//! |------------|------------------------------------------------|
//! | `parallel` | Runs the nav phase on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use forage_log::MemoryWriter;
//! use forage_sim::{NoopDisplay, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, arena, roster, locomotion, NoopDisplay, MemoryWriter::new())
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod env;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use env::{Locomotion, NoopDisplay, ResourceDirective, ResourceDisplay};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
