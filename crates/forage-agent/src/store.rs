//! Core agent storage: `AgentStore` (SoA observations) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The nav phase needs `&mut AgentRngs` (exclusive mutable access to each
//! agent's RNG) and `&AgentStore` (shared read access to the tick's
//! observations) simultaneously.  Rust's borrow checker forbids this if both
//! live inside a single struct; keeping RNGs separate resolves the conflict
//! cleanly.

use forage_core::{AgentId, AgentRng, DriveCommand, Pose, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows in the nav phase.
///
/// `AgentRngs` is `Send` but intentionally not `Sync` — per-agent RNG state
/// must never be shared between threads.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Return mutable references to the RNGs for a set of agents.
    ///
    /// Used by the parallel nav phase: the agent list is zipped with the
    /// returned refs and processed on the thread pool.
    ///
    /// # Precondition (enforced by caller)
    ///
    /// `agents` must contain no duplicate `AgentId`s and all indices must be
    /// in-bounds.  Both invariants hold for the ascending-id list the sim
    /// builds, because ids are generated `0..count` without repeats.
    pub fn get_many_mut(&mut self, agents: &[AgentId]) -> Vec<&mut AgentRng> {
        let ptr = self.inner.as_mut_ptr();
        // SAFETY: Every `AgentId` in `agents` is unique (caller invariant) and
        // within bounds (sim invariant).  Each pointer therefore aliases a
        // distinct element of `self.inner`, so no two references overlap.
        agents
            .iter()
            .map(|a| unsafe { &mut *ptr.add(a.index()) })
            .collect()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for per-tick agent observations.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.positions[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Positions and compass vectors are snapshots of the locomotion feed taken
/// at the top of each tick — the arbiter reads them for proximity checks and
/// each navigator reads its own row.  `drives` records the last command
/// emitted, for inspection and output.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Latest position fix per agent.
    pub positions: Vec<Vec2>,

    /// Latest raw compass vector per agent.
    pub compasses: Vec<Vec2>,

    /// Last wheel command emitted per agent.
    pub drives: Vec<DriveCommand>,
}

impl AgentStore {
    pub fn new(count: usize) -> Self {
        let default_pose = Pose::default();
        Self {
            count,
            positions: vec![default_pose.position; count],
            compasses: vec![default_pose.compass; count],
            drives:    vec![DriveCommand::STOP; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Overwrite one agent's observation row with a fresh pose snapshot.
    #[inline]
    pub fn record_pose(&mut self, agent: AgentId, pose: Pose) {
        self.positions[agent.index()] = pose.position;
        self.compasses[agent.index()] = pose.compass;
    }

    /// Record the wheel command emitted for `agent` this tick.
    #[inline]
    pub fn record_drive(&mut self, agent: AgentId, command: DriveCommand) {
        self.drives[agent.index()] = command;
    }

    /// The stored pose snapshot for `agent`.
    #[inline]
    pub fn pose(&self, agent: AgentId) -> Pose {
        Pose::new(self.positions[agent.index()], self.compasses[agent.index()])
    }

    /// Euclidean distance from `agent`'s stored position to `point`.
    #[inline]
    pub fn distance_from(&self, agent: AgentId, point: Vec2) -> f32 {
        self.positions[agent.index()].distance(point)
    }
}
