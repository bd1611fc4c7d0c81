//! Lazy-deletion priority queue for Prim's algorithm.
//!
//! Keys are never decreased in place. A cheaper connection pushes a fresh
//! entry, and the superseded one is recognised as stale when it is popped
//! because its vertex has already been finalized. The queue counts pushes
//! and pops so callers can report how much stale work a run performed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Weight;

use super::PrimStats;

/// A vertex and the key it had when it was pushed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct QueueEntry {
    pub(super) key: Weight,
    pub(super) vertex: usize,
}

// `BinaryHeap` is a max-heap, so the comparison is reversed: the smallest key
// is the greatest entry. Equal keys fall back to the smaller vertex id so runs
// are reproducible.
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(super) struct Frontier {
    heap: BinaryHeap<QueueEntry>,
    stats: PrimStats,
}

impl Frontier {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            stats: PrimStats::default(),
        }
    }

    pub(super) fn push(&mut self, vertex: usize, key: Weight) {
        self.heap.push(QueueEntry { key, vertex });
        self.stats.pushes += 1;
    }

    pub(super) fn pop(&mut self) -> Option<QueueEntry> {
        let entry = self.heap.pop()?;
        self.stats.pops += 1;
        Some(entry)
    }

    pub(super) fn discard_stale(&mut self) {
        self.stats.stale_pops += 1;
    }

    pub(super) fn into_stats(self) -> PrimStats {
        self.stats
    }
}
