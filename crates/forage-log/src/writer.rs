//! Append-only log backends.
//!
//! All backends implement [`LogWriter`].  Appends must leave earlier entries
//! untouched — the stream is only ever extended, never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{CollectionRecord, LogResult};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Trait implemented by all collection-log backends.
pub trait LogWriter {
    /// Append one record to the stream.
    fn append(&mut self, record: &CollectionRecord) -> LogResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> LogResult<()>;
}

// ── JSON Lines backend ────────────────────────────────────────────────────────

/// JSON Lines backend: one serialized record per line.
///
/// Every append is flushed immediately so a crashed run loses at most the
/// entry being written, and each line stays independently parseable.
pub struct JsonlWriter {
    out:      BufWriter<File>,
    finished: bool,
}

impl JsonlWriter {
    /// Start a fresh log at `path`, truncating any previous run's file.
    pub fn create(path: &Path) -> LogResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out:      BufWriter::new(file),
            finished: false,
        })
    }

    /// Open `path` in append mode, extending an existing stream.
    pub fn append_to(path: &Path) -> LogResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out:      BufWriter::new(file),
            finished: false,
        })
    }
}

impl LogWriter for JsonlWriter {
    fn append(&mut self, record: &CollectionRecord) -> LogResult<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> LogResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

// ── In-memory backend ─────────────────────────────────────────────────────────

/// In-memory backend for tests and demos: records accumulate in a `Vec` in
/// append order.
#[derive(Default)]
pub struct MemoryWriter {
    pub records: Vec<CollectionRecord>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogWriter for MemoryWriter {
    fn append(&mut self, record: &CollectionRecord) -> LogResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> LogResult<()> {
        Ok(())
    }
}
