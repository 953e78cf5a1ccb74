//! Waypoint id allocation.
//!
//! The store enforces id uniqueness; the generator is a pluggable
//! collaborator so callers can pick a counter, a clock, or their own
//! scheme. Ids are never reused while the collection is non-empty as long
//! as the source is told about externally introduced ids via
//! [`IdSource::reserve_through`].

/// Source of fresh waypoint ids.
pub trait IdSource {
    /// Allocate the next id. Each call returns a value strictly greater
    /// than any previously returned or reserved id.
    fn next_id(&mut self) -> u64;

    /// Make sure future ids are strictly greater than `id`. Called after
    /// an import brings in ids this source did not allocate.
    fn reserve_through(&mut self, id: u64);
}

/// Monotonic counter starting at 1.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Counter starting at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    fn reserve_through(&mut self, id: u64) {
        if id >= self.next {
            self.next = id + 1;
        }
    }
}

/// Millisecond-clock ids.
///
/// Strict monotonicity is kept even when two allocations land in the same
/// millisecond.
#[derive(Clone, Debug, Default)]
pub struct TimestampIds {
    last: u64,
}

impl TimestampIds {
    /// Clock-backed id source
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> u64 {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.last = now.max(self.last + 1);
        self.last
    }

    fn reserve_through(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}
