//! forager — smallest runnable example for the rust_forage framework.
//!
//! Six agents on two teams wander a 2.5 m arena, collect from ten seeded
//! resource records, and haul their credits back to the home zone.  The
//! arbiter logs every completed trip to a JSONL file, and the scoreboard is
//! reprinted whenever totals move.

mod kinematics;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use forage_agent::load_roster_reader;
use forage_arbiter::TripEvent;
use forage_core::{ArenaConfig, ResourceConfig, SimConfig, SimRng, Tick};
use forage_log::{replay_file, JsonlWriter, Scoreboard, TeamTally};
use forage_sim::{NoopDisplay, SimBuilder, SimObserver};

use kinematics::DiffDriveArena;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const TICK_MS:         u32 = 32;      // basic time step
const SIM_MINUTES:     u64 = 10;
const SCOREBOARD_EVERY: u64 = 250;    // ~8 s of sim time
const LOG_PATH:        &str = "output/forager/collections.jsonl";

// ── Roster ────────────────────────────────────────────────────────────────────

const ROSTER_CSV: &str = "\
name,team\n\
scout_0,red\n\
scout_1,red\n\
scout_2,red\n\
scout_3,blue\n\
scout_4,blue\n\
scout_5,blue\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints the scoreboard when totals change and counts logged trips.
struct ScoreboardPrinter {
    board: Scoreboard,
    trips: usize,
}

impl ScoreboardPrinter {
    fn new() -> Self {
        Self { board: Scoreboard::new(), trips: 0 }
    }
}

impl SimObserver for ScoreboardPrinter {
    fn on_trip_logged(&mut self, tick: Tick, event: &TripEvent) {
        self.trips += 1;
        info!(%tick, agent = %event.agent, team = %event.team, total = event.total, "trip logged");
    }

    fn on_scoreboard(&mut self, _tick: Tick, tally: &TeamTally) {
        if let Some(table) = self.board.render_if_changed(tally) {
            println!("\n{table}\n");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    println!("=== forager — rust_forage demo ===");
    println!("Seed: {SEED}  |  Minutes: {SIM_MINUTES}  |  Tick: {TICK_MS} ms");
    println!();

    // 1. Roster (the setup feed, embedded for the demo).
    let roster = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    println!("Roster: {} agents", roster.len());

    // 2. Arena + run configuration.
    let arena = ArenaConfig::default();
    let config = SimConfig {
        tick_ms:                   TICK_MS,
        total_ticks:               SIM_MINUTES * 60 * 1000 / TICK_MS as u64,
        seed:                      SEED,
        scoreboard_interval_ticks: SCOREBOARD_EVERY,
    };
    println!(
        "Sim: {} ticks ({} min), arena radius {} m",
        config.total_ticks, SIM_MINUTES, arena.radius
    );

    // 3. Toy kinematics: agents start scattered inside the home zone.
    let locomotion = DiffDriveArena::new(roster.len(), &arena, &mut SimRng::new(SEED ^ 1));

    // 4. Collection log.
    std::fs::create_dir_all("output/forager")?;
    let writer = JsonlWriter::create(Path::new(LOG_PATH))?;

    // 5. Build and run.
    let mut sim = SimBuilder::new(config, arena, roster, locomotion, NoopDisplay, writer)
        .resources(ResourceConfig::default())
        .build()?;

    let mut observer = ScoreboardPrinter::new();
    let t0 = Instant::now();
    sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    // 6. Summary: the in-memory tally must match a fresh replay of the log.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("Trips logged: {}", observer.trips);
    println!(
        "Resources remaining in the field: {}",
        sim.context.ledger().total_remaining()
    );

    let replayed = replay_file(Path::new(LOG_PATH))?;
    println!("\nFinal scoreboard (replayed from {LOG_PATH}):");
    println!("{}", forage_log::scoreboard::render(&replayed));
    assert_eq!(
        &replayed,
        sim.context.tally(),
        "log replay must reproduce the running tally"
    );

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
