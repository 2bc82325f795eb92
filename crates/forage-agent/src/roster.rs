//! Agent roster: names and team assignment, fixed at setup.
//!
//! # CSV format
//!
//! One row per agent, in `AgentId` order:
//!
//! ```csv
//! name,team
//! scout_0,red
//! scout_1,red
//! scout_2,blue
//! ```
//!
//! Team labels are lower-cased on load.  The roster is the setup feed: read
//! once at startup, immutable afterwards.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use forage_core::{AgentId, ForageError, ForageResult};

/// Sentinel team attributed to any agent id outside the roster.
pub const UNKNOWN_TEAM: &str = "unknown";

// ── Profiles ──────────────────────────────────────────────────────────────────

/// One agent's immutable identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: String,
    pub team: String,
}

impl AgentProfile {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into().to_ascii_lowercase(),
        }
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// The full agent roster, indexed by `AgentId`.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    profiles: Vec<AgentProfile>,
}

impl Roster {
    pub fn new(profiles: Vec<AgentProfile>) -> Self {
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, agent: AgentId) -> Option<&AgentProfile> {
        self.profiles.get(agent.index())
    }

    /// Team label for `agent`, or the [`UNKNOWN_TEAM`] sentinel for ids
    /// outside the roster — team resolution never fails.
    pub fn team_of(&self, agent: AgentId) -> &str {
        self.get(agent).map_or(UNKNOWN_TEAM, |p| p.team.as_str())
    }

    /// Registered name for `agent`, if any.
    pub fn name_of(&self, agent: AgentId) -> Option<&str> {
        self.get(agent).map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &AgentProfile)> {
        self.profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (AgentId(i as u32), p))
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    name: String,
    team: String,
}

/// Load the roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> ForageResult<Roster> {
    let file = std::fs::File::open(path).map_err(ForageError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding the roster in
/// a binary.
pub fn load_roster_reader<R: Read>(reader: R) -> ForageResult<Roster> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| ForageError::Parse(e.to_string()))?;
        profiles.push(AgentProfile::new(row.name.trim(), row.team.trim()));
    }

    Ok(Roster::new(profiles))
}
