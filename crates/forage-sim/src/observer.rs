//! Simulation observer trait for progress reporting and data collection.

use forage_arbiter::{CollectionEvent, TripEvent};
use forage_core::Tick;
use forage_log::TeamTally;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — collection printer
///
/// ```rust,ignore
/// struct CollectionPrinter;
///
/// impl SimObserver for CollectionPrinter {
///     fn on_collection(&mut self, tick: Tick, event: &CollectionEvent) {
///         println!("{tick}: {} collected from {}", event.agent, event.resource);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per arbitrated collection, after the ledger depletion and
    /// flag raise have committed.
    fn on_collection(&mut self, _tick: Tick, _event: &CollectionEvent) {}

    /// Called once per logged trip, after the log append and flag clear.
    fn on_trip_logged(&mut self, _tick: Tick, _event: &TripEvent) {}

    /// Called at scoreboard intervals (every `config.scoreboard_interval_ticks`
    /// ticks) with the running team tally.
    fn on_scoreboard(&mut self, _tick: Tick, _tally: &TeamTally) {}

    /// Called at the end of each tick.  `collections` is the number of
    /// arbitrated collections this tick.
    fn on_tick_end(&mut self, _tick: Tick, _collections: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
