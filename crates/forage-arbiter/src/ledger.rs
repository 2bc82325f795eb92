//! The resource ledger — authoritative depletable-resource state.

use std::f32::consts::PI;

use forage_core::{
    ArenaConfig, ForageError, ForageResult, ResourceConfig, ResourceId, SimRng, Vec2,
};

// ── ResourceRecord ────────────────────────────────────────────────────────────

/// One depletable resource.
///
/// Position is fixed for the record's lifetime.  `value` only ever decreases,
/// and reaching 0 is terminal: the record never re-enters proximity scans,
/// though its slot stays addressable by id for display refreshes.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceRecord {
    pub id:       ResourceId,
    pub position: Vec2,
    value:        u32,
}

impl ResourceRecord {
    pub fn new(id: ResourceId, position: Vec2, value: u32) -> Self {
        Self { id, position, value }
    }

    /// Remaining value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Radius of the rendered disc, proportional to the remaining value.
    #[inline]
    pub fn visual_radius(&self) -> f32 {
        0.1 + self.value.saturating_sub(1) as f32 * 0.02
    }

    /// Radius within which an agent is credited with a collection.
    ///
    /// Intentionally larger than [`visual_radius`][Self::visual_radius] so a
    /// grazing pass still counts.
    #[inline]
    pub fn detection_radius(&self) -> f32 {
        0.2 + self.value.saturating_sub(1) as f32 * 0.02
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.value == 0
    }
}

// ── ResourceLedger ────────────────────────────────────────────────────────────

/// The arbiter-owned set of resource records.
///
/// Single writer: only [`deplete`][Self::deplete] mutates a record, and only
/// arbitration calls it.  Everything else sees the ledger read-only.
#[derive(Debug, Default)]
pub struct ResourceLedger {
    records: Vec<ResourceRecord>,
}

impl ResourceLedger {
    /// Build a ledger from pre-positioned records.
    ///
    /// Record ids must equal their slot index; tests use this to place
    /// records deterministically.
    pub fn from_records(records: Vec<ResourceRecord>) -> Self {
        debug_assert!(records.iter().enumerate().all(|(i, r)| r.id.index() == i));
        Self { records }
    }

    /// Seed `config.count` records at random polar positions between 1 m from
    /// home and 0.2 m inside the wall, values drawn from the configured range.
    pub fn seed(config: &ResourceConfig, arena: &ArenaConfig, rng: &mut SimRng) -> Self {
        let mut records = Vec::with_capacity(config.count);
        for i in 0..config.count as u32 {
            let angle = rng.gen_range(0.0..(2.0 * PI));
            let distance = rng.gen_range(1.0..(arena.radius - 0.2));
            let position = Vec2::new(
                arena.home.x + distance * angle.cos(),
                arena.home.y + distance * angle.sin(),
            );
            let value = rng.gen_range(config.value_range());
            records.push(ResourceRecord::new(ResourceId(i), position, value));
        }
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, exhausted slots included, in id order.
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn get(&self, id: ResourceId) -> Option<&ResourceRecord> {
        self.records.get(id.index())
    }

    /// Live records in ascending id order.  Exhausted slots are skipped but
    /// never removed.
    pub fn live(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.records.iter().filter(|r| !r.is_exhausted())
    }

    /// `true` if `id` has no value left.  An unknown id reads as exhausted —
    /// expected transient absence, not an error.
    pub fn is_exhausted(&self, id: ResourceId) -> bool {
        self.get(id).is_none_or(ResourceRecord::is_exhausted)
    }

    /// Sum of all remaining values.
    pub fn total_remaining(&self) -> u64 {
        self.records.iter().map(|r| r.value as u64).sum()
    }

    /// Deplete `id` by `amount`, clamped at 0; returns the remaining value.
    ///
    /// The single mutation point of the ledger.
    pub fn deplete(&mut self, id: ResourceId, amount: u32) -> ForageResult<u32> {
        let record = self
            .records
            .get_mut(id.index())
            .ok_or(ForageError::ResourceNotFound(id))?;
        record.value = record.value.saturating_sub(amount);
        Ok(record.value)
    }
}
