//! The observable trace of a sorting run.
//!
//! Every state-mutating step of an algorithm publishes a [`Commit`]: an
//! owned snapshot of the whole working sequence plus the mutation that
//! produced it. Snapshots are owned copies -- no references into engine
//! storage -- so a sink can keep them, send them across threads, or hand
//! them to rendering code without touching the engine.
//!
//! Sinks are the engine's only coupling to the outside world: the engine
//! never reaches into presentation state directly.

use serde::{Deserialize, Serialize};

use crate::item::SortableItem;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// The primitive mutation that triggered a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOp {
    /// The elements at positions `a` and `b` exchanged places. `a == b` is
    /// possible: selection sort and quick sort commit even a self-swap.
    Swap { a: usize, b: usize },

    /// Insertion sort copied the element at `from` one slot right into
    /// `to`, leaving a transient duplicate while the inserted key is held
    /// aside.
    Shift { from: usize, to: usize },

    /// Merge sort rewrote the half-open range `lo..hi` from its two
    /// auxiliary buffers. Published once per merge call, never per element.
    Merge { lo: usize, hi: usize },
}

// ---------------------------------------------------------------------------
// Commit
// ---------------------------------------------------------------------------

/// One published step of a run: the full sequence state after `op` was
/// applied. `step` counts commits from 0 within a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub step: u64,
    pub op: SortOp,
    pub items: Vec<SortableItem>,
}

impl Commit {
    /// The keys in sequence order. Convenient for asserting traces.
    pub fn keys(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.key).collect()
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Receives commits as a run progresses. The snapshot is read-only; the
/// sink observes sequence state but can never mutate it.
pub trait CommitSink {
    fn on_commit(&mut self, commit: &Commit);
}

/// Records every commit it sees. Used by tests and trace inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commits: Vec<Commit>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key sequence of every recorded snapshot, in commit order.
    pub fn key_trace(&self) -> Vec<Vec<u32>> {
        self.commits.iter().map(Commit::keys).collect()
    }
}

impl CommitSink for RecordingSink {
    fn on_commit(&mut self, commit: &Commit) {
        self.commits.push(commit.clone());
    }
}

/// Discards commits. For headless runs where only the end state matters.
#[derive(Debug, Default)]
pub struct NullSink;

impl CommitSink for NullSink {
    fn on_commit(&mut self, _commit: &Commit) {}
}

/// Adapts a closure into a sink, so callers can subscribe ad hoc.
pub struct FnSink<F: FnMut(&Commit)>(pub F);

impl<F: FnMut(&Commit)> CommitSink for FnSink<F> {
    fn on_commit(&mut self, commit: &Commit) {
        (self.0)(commit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::AssetId;

    fn commit(step: u64, keys: &[u32]) -> Commit {
        Commit {
            step,
            op: SortOp::Swap { a: 0, b: 1 },
            items: keys
                .iter()
                .enumerate()
                .map(|(i, &k)| SortableItem::new(AssetId(i as u32), k))
                .collect(),
        }
    }

    #[test]
    fn recording_sink_keeps_commit_order() {
        let mut sink = RecordingSink::new();
        sink.on_commit(&commit(0, &[100, 50]));
        sink.on_commit(&commit(1, &[50, 100]));

        assert_eq!(sink.commits.len(), 2);
        assert_eq!(sink.commits[0].step, 0);
        assert_eq!(sink.commits[1].step, 1);
        assert_eq!(sink.key_trace(), vec![vec![100, 50], vec![50, 100]]);
    }

    #[test]
    fn fn_sink_forwards_to_closure() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|c: &Commit| seen.push(c.step));
            sink.on_commit(&commit(0, &[1]));
            sink.on_commit(&commit(1, &[1]));
        }
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn commit_keys_reflect_sequence_order() {
        let c = commit(0, &[75, 150, 50]);
        assert_eq!(c.keys(), vec![75, 150, 50]);
    }
}
