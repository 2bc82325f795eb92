//! `forage-nav` — the per-agent navigation/foraging state machine.
//!
//! Each agent owns one [`Navigator`].  Every tick it receives that tick's
//! pose observation and mailbox-flag value and returns the wheel command to
//! emit.  The navigator never writes shared state: the mailbox flag is
//! read-only here, and the only channel back to the world is the returned
//! [`DriveCommand`][forage_core::DriveCommand].

pub mod navigator;
pub mod state;


pub use navigator::Navigator;
pub use state::NavState;
