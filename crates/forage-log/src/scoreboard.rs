//! Team tallies and the scoreboard view.

use std::fmt::Write as _;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{CollectionRecord, LogResult};

#[cfg(not(feature = "fx-hash"))]
type TallyMap = std::collections::HashMap<String, u64>;
#[cfg(feature = "fx-hash")]
type TallyMap = rustc_hash::FxHashMap<String, u64>;

// ── TeamTally ─────────────────────────────────────────────────────────────────

/// In-memory team → collected-count mapping.
///
/// Derived state: the log stream is authoritative, and [`replay_reader`]
/// rebuilds an identical tally from it at any time.  Accumulation is
/// commutative within a team, so replay order does not change totals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamTally {
    counts: TallyMap,
}

impl TeamTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current total for `team` (0 for unseen teams).
    pub fn get(&self, team: &str) -> u64 {
        self.counts.get(team).copied().unwrap_or(0)
    }

    /// Add one collection to `team` and return the new total.
    pub fn increment(&mut self, team: &str) -> u64 {
        let count = self.counts.entry(team.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Accumulate one replayed record.
    pub fn apply(&mut self, record: &CollectionRecord) {
        self.increment(&record.team);
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Teams and totals in lexicographic team order.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(team, &count)| (team.as_str(), count))
            .collect();
        rows.sort_by_key(|&(team, _)| team);
        rows
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

/// Rebuild a tally by replaying a JSONL stream.
///
/// Malformed lines are skipped without aborting the scan; I/O errors still
/// propagate.
pub fn replay_reader<R: BufRead>(reader: R) -> LogResult<TeamTally> {
    let mut tally = TeamTally::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<CollectionRecord>(trimmed) {
            Ok(record) => tally.apply(&record),
            Err(_) => continue, // malformed line: skip, never abort
        }
    }
    Ok(tally)
}

/// Replay a log file.  A missing file yields an empty tally — a run that
/// logged nothing is not an error.
pub fn replay_file(path: &Path) -> LogResult<TeamTally> {
    match std::fs::File::open(path) {
        Ok(file) => replay_reader(BufReader::new(file)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TeamTally::new()),
        Err(e) => Err(e.into()),
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

/// Change-detecting scoreboard renderer.
///
/// Holds the last tally it rendered so periodic display loops only print when
/// totals actually moved.
#[derive(Default)]
pub struct Scoreboard {
    last: Option<TeamTally>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a fixed-width table, or `None` when totals are unchanged since
    /// the last render.
    pub fn render_if_changed(&mut self, tally: &TeamTally) -> Option<String> {
        if self.last.as_ref() == Some(tally) {
            return None;
        }
        self.last = Some(tally.clone());
        Some(render(tally))
    }
}

/// Fixed-width scoreboard table.
pub fn render(tally: &TeamTally) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(32));
    let _ = writeln!(out, "{:<15} | {:>10}", "TEAM", "RESOURCES");
    let _ = writeln!(out, "{}", "-".repeat(32));
    for (team, count) in tally.sorted() {
        let _ = writeln!(out, "{:<15} | {:>10}", capitalize(team), count);
    }
    let _ = write!(out, "{}", "=".repeat(32));
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
