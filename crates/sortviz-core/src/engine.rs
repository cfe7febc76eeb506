//! The sort-and-animate engine.
//!
//! # Architecture
//!
//! The `SortEngine` owns:
//! - The working sequence (a flat `Vec<SortableItem>`, indexed 0..n-1)
//! - A [`Comparator`] (default: descending by key)
//! - A [`Pacing`] policy chosen at construction
//! - A [`CancelToken`] checked at every commit point
//!
//! # Commit protocol
//!
//! Each run executes one algorithm to completion, in place. Every mutating
//! step publishes a [`Commit`] (full-sequence snapshot plus the triggering
//! [`SortOp`]) to the caller's [`CommitSink`], then suspends for the pacing
//! interval, then checks the cancel token, then resumes. The commit/pacing
//! pair is the sole coupling between algorithmic progress and observable
//! output, so its granularity is a contract, not an implementation detail:
//!
//! | Algorithm | Commit trigger |
//! |---|---|
//! | Bubble    | every actual swap of an out-of-order adjacent pair |
//! | Selection | every positional swap, including a swap with itself |
//! | Insertion | every single left-shift write (not the final placement) |
//! | Merge     | once per merge call, after both drain phases |
//! | Quick     | every swap inside partition, in-loop and pivot placement |
//! | Heap      | each extraction root-swap; none during heap construction |
//!
//! Pacing runs on whatever thread called [`SortEngine::run`]. Callers with a
//! presentation surface run the engine on a worker thread so the pacing
//! sleep never blocks a UI thread.

use std::cmp::Ordering;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithm::{Algorithm, SortError};
use crate::cancel::CancelToken;
use crate::event::{Commit, CommitSink, SortOp};
use crate::item::{Comparator, SortableItem, largest_first};

/// The fixed visual delay between commits when pacing is enabled.
pub const VISUAL_STEP: Duration = Duration::from_millis(500);

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// How a run suspends after publishing each commit. Chosen at engine
/// construction and fixed for the engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// No suspension. Headless runs and tests.
    None,
    /// Sleep the calling thread for the given interval after each commit.
    Fixed(Duration),
}

impl Pacing {
    fn pause(self) {
        match self {
            Pacing::None => {}
            Pacing::Fixed(interval) => std::thread::sleep(interval),
        }
    }
}

// ---------------------------------------------------------------------------
// Run reports
// ---------------------------------------------------------------------------

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The algorithm ran to completion; the sequence is sorted.
    Completed,
    /// The cancel token was tripped; the sequence holds its mid-sort order.
    Canceled,
}

/// Summary of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// Number of commits published during the run.
    pub commits: u64,
    pub outcome: RunOutcome,
}

/// Internal sentinel threaded through the algorithms with `?`. Converted to
/// [`RunOutcome::Canceled`] at the `run` boundary.
struct Canceled;

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Drives the six algorithms over a mutable item sequence, publishing a
/// commit for every observable mutation.
#[derive(Debug)]
pub struct SortEngine {
    items: Vec<SortableItem>,
    compare: Comparator,
    pacing: Pacing,
    cancel: CancelToken,
    /// Commits published so far in the current run.
    step: u64,
}

impl SortEngine {
    /// Create an engine owning `items`, ordered by [`largest_first`].
    pub fn new(items: Vec<SortableItem>, pacing: Pacing) -> Self {
        Self {
            items,
            compare: largest_first,
            pacing,
            cancel: CancelToken::new(),
            step: 0,
        }
    }

    /// Substitute an alternate ordering. Algorithm bodies are untouched by
    /// this; they only ever consult the configured comparator.
    pub fn set_comparator(&mut self, compare: Comparator) {
        self.compare = compare;
    }

    /// Install the token a controller will use to stop runs early.
    pub fn set_cancel_token(&mut self, cancel: CancelToken) {
        self.cancel = cancel;
    }

    /// The current sequence order. Read-only; renderers lay out from
    /// commits, tests assert on this between runs.
    pub fn items(&self) -> &[SortableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the sequence is sorted under the configured comparator.
    pub fn is_sorted(&self) -> bool {
        self.items
            .windows(2)
            .all(|w| (self.compare)(&w[0], &w[1]) != Ordering::Greater)
    }

    // -- Running ----------------------------------------------------------

    /// Run `algorithm` to completion (or cancellation) over the working
    /// sequence. Sequences of length 0 or 1 are already sorted and finish
    /// with zero commits.
    pub fn run(&mut self, algorithm: Algorithm, sink: &mut dyn CommitSink) -> RunReport {
        self.step = 0;

        if self.items.len() < 2 {
            return RunReport {
                algorithm,
                commits: 0,
                outcome: RunOutcome::Completed,
            };
        }

        let result = match algorithm {
            Algorithm::Bubble => self.bubble_sort(sink),
            Algorithm::Selection => self.selection_sort(sink),
            Algorithm::Insertion => self.insertion_sort(sink),
            Algorithm::Merge => self.merge_sort(sink, 0, self.items.len()),
            Algorithm::Quick => self.quick_sort(sink, 0, self.items.len()),
            Algorithm::Heap => self.heap_sort(sink),
        };

        RunReport {
            algorithm,
            commits: self.step,
            outcome: match result {
                Ok(()) => RunOutcome::Completed,
                Err(Canceled) => RunOutcome::Canceled,
            },
        }
    }

    /// Run an algorithm selected by name. An unknown name fails before any
    /// sequence access, so no mutation or commit has occurred.
    pub fn run_named(&mut self, name: &str, sink: &mut dyn CommitSink) -> Result<RunReport, SortError> {
        let algorithm = Algorithm::from_name(name)?;
        Ok(self.run(algorithm, sink))
    }

    // -- Commit plumbing --------------------------------------------------

    /// Publish the current sequence, pace, then honor cancellation.
    fn commit(&mut self, sink: &mut dyn CommitSink, op: SortOp) -> Result<(), Canceled> {
        let commit = Commit {
            step: self.step,
            op,
            items: self.items.clone(),
        };
        self.step += 1;
        sink.on_commit(&commit);
        self.pacing.pause();
        if self.cancel.is_canceled() {
            return Err(Canceled);
        }
        Ok(())
    }

    fn swap_and_commit(&mut self, sink: &mut dyn CommitSink, a: usize, b: usize) -> Result<(), Canceled> {
        self.items.swap(a, b);
        self.commit(sink, SortOp::Swap { a, b })
    }

    fn out_of_order(&self, a: &SortableItem, b: &SortableItem) -> bool {
        (self.compare)(a, b) == Ordering::Greater
    }

    // -- Algorithms -------------------------------------------------------

    /// Adjacent-pair scan; each pass bubbles the order-last element of the
    /// unsorted prefix to its slot, shrinking the scan by one.
    fn bubble_sort(&mut self, sink: &mut dyn CommitSink) -> Result<(), Canceled> {
        let n = self.items.len();
        for pass in 0..n - 1 {
            for j in 0..n - pass - 1 {
                if self.out_of_order(&self.items[j], &self.items[j + 1]) {
                    self.swap_and_commit(sink, j, j + 1)?;
                }
            }
        }
        Ok(())
    }

    /// For each position, scan the remainder for the element that orders
    /// first and swap it in. The swap commits even when the position
    /// already holds it.
    fn selection_sort(&mut self, sink: &mut dyn CommitSink) -> Result<(), Canceled> {
        let n = self.items.len();
        for i in 0..n - 1 {
            let mut chosen = i;
            for j in i + 1..n {
                if (self.compare)(&self.items[j], &self.items[chosen]) == Ordering::Less {
                    chosen = j;
                }
            }
            self.swap_and_commit(sink, i, chosen)?;
        }
        Ok(())
    }

    /// Shift each element left over its strictly-greater-ordered
    /// predecessors. Every single-slot shift commits; the final placement
    /// of the held element does not.
    fn insertion_sort(&mut self, sink: &mut dyn CommitSink) -> Result<(), Canceled> {
        let n = self.items.len();
        for i in 1..n {
            let held = self.items[i];
            let mut j = i;
            while j > 0 && self.out_of_order(&self.items[j - 1], &held) {
                self.items[j] = self.items[j - 1];
                self.commit(sink, SortOp::Shift { from: j - 1, to: j })?;
                j -= 1;
            }
            self.items[j] = held;
        }
        Ok(())
    }

    /// Divide at the midpoint, sort each half, merge. Ranges are half-open.
    fn merge_sort(&mut self, sink: &mut dyn CommitSink, lo: usize, hi: usize) -> Result<(), Canceled> {
        if hi - lo < 2 {
            return Ok(());
        }
        let mid = lo + (hi - lo) / 2;
        self.merge_sort(sink, lo, mid)?;
        self.merge_sort(sink, mid, hi)?;
        self.merge(sink, lo, mid, hi)
    }

    /// Linear merge through two copies of the halves, taking from the left
    /// buffer on ties for stability. One commit for the whole range, after
    /// both buffers have drained.
    fn merge(&mut self, sink: &mut dyn CommitSink, lo: usize, mid: usize, hi: usize) -> Result<(), Canceled> {
        let left: Vec<SortableItem> = self.items[lo..mid].to_vec();
        let right: Vec<SortableItem> = self.items[mid..hi].to_vec();

        let (mut i, mut j, mut k) = (0, 0, lo);
        while i < left.len() && j < right.len() {
            if (self.compare)(&left[i], &right[j]) != Ordering::Greater {
                self.items[k] = left[i];
                i += 1;
            } else {
                self.items[k] = right[j];
                j += 1;
            }
            k += 1;
        }
        while i < left.len() {
            self.items[k] = left[i];
            i += 1;
            k += 1;
        }
        while j < right.len() {
            self.items[k] = right[j];
            j += 1;
            k += 1;
        }

        self.commit(sink, SortOp::Merge { lo, hi })
    }

    /// Lomuto partition, last element of the range as pivot. Ranges are
    /// half-open.
    fn quick_sort(&mut self, sink: &mut dyn CommitSink, lo: usize, hi: usize) -> Result<(), Canceled> {
        if hi - lo < 2 {
            return Ok(());
        }
        let p = self.partition(sink, lo, hi)?;
        self.quick_sort(sink, lo, p)?;
        self.quick_sort(sink, p + 1, hi)
    }

    /// Every swap commits: the in-loop swaps (even when an element swaps
    /// with itself) and the final pivot placement.
    fn partition(&mut self, sink: &mut dyn CommitSink, lo: usize, hi: usize) -> Result<usize, Canceled> {
        let pivot = self.items[hi - 1];
        let mut i = lo;
        for j in lo..hi - 1 {
            if (self.compare)(&self.items[j], &pivot) == Ordering::Less {
                self.swap_and_commit(sink, i, j)?;
                i += 1;
            }
        }
        self.swap_and_commit(sink, i, hi - 1)?;
        Ok(i)
    }

    /// Build phase sifts silently; only extraction root-swaps commit, and
    /// the snapshot is taken after the re-sift so it shows the restored
    /// heap. Extraction stops at index 1 -- the last element is already in
    /// place, so no self-swap commit is published for it.
    fn heap_sort(&mut self, sink: &mut dyn CommitSink) -> Result<(), Canceled> {
        let n = self.items.len();
        for root in (0..n / 2).rev() {
            self.sift_down(n, root);
        }
        for end in (1..n).rev() {
            self.items.swap(0, end);
            self.sift_down(end, 0);
            self.commit(sink, SortOp::Swap { a: 0, b: end })?;
        }
        Ok(())
    }

    /// Restore the heap property below `root`, considering only indices
    /// under `limit`. The root accumulates the element that orders last,
    /// so extraction fills the tail with successive order-last elements.
    fn sift_down(&mut self, limit: usize, root: usize) {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < limit && self.out_of_order(&self.items[left], &self.items[largest]) {
            largest = left;
        }
        if right < limit && self.out_of_order(&self.items[right], &self.items[largest]) {
            largest = right;
        }

        if largest != root {
            self.items.swap(root, largest);
            self.sift_down(limit, largest);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{NullSink, RecordingSink};
    use crate::item::{AssetId, smallest_first};

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn items(keys: &[u32]) -> Vec<SortableItem> {
        keys.iter()
            .enumerate()
            .map(|(i, &k)| SortableItem::new(AssetId(i as u32), k))
            .collect()
    }

    fn engine(keys: &[u32]) -> SortEngine {
        SortEngine::new(items(keys), Pacing::None)
    }

    fn keys_of(engine: &SortEngine) -> Vec<u32> {
        engine.items().iter().map(|item| item.key).collect()
    }

    fn sorted_descending(keys: &[u32]) -> Vec<u32> {
        let mut sorted = keys.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    fn multiset(keys: &[u32]) -> Vec<u32> {
        let mut sorted = keys.to_vec();
        sorted.sort_unstable();
        sorted
    }

    // -----------------------------------------------------------------------
    // Test 1: Every algorithm sorts descending and preserves the multiset
    // -----------------------------------------------------------------------
    #[test]
    fn all_algorithms_sort_descending() {
        let inputs: &[&[u32]] = &[
            &[50, 100, 75],
            &[150, 50, 100, 75],
            &[1, 2, 3, 4, 5, 6, 7],
            &[7, 6, 5, 4, 3, 2, 1],
            &[5, 5, 5, 5],
            &[42],
            &[],
            &[100, 50, 150, 200, 75],
        ];

        for alg in Algorithm::ALL {
            for input in inputs {
                let mut engine = engine(input);
                let report = engine.run(alg, &mut NullSink);

                assert_eq!(report.outcome, RunOutcome::Completed);
                assert_eq!(keys_of(&engine), sorted_descending(input), "{alg:?} on {input:?}");
                assert!(engine.is_sorted());
                assert_eq!(multiset(&keys_of(&engine)), multiset(input));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Test 2: No asset id is duplicated or lost by any algorithm
    // -----------------------------------------------------------------------
    #[test]
    fn item_identity_is_preserved() {
        for alg in Algorithm::ALL {
            let mut engine = engine(&[150, 50, 100, 75, 200]);
            engine.run(alg, &mut NullSink);

            let mut ids: Vec<u32> = engine.items().iter().map(|item| item.asset.0).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![0, 1, 2, 3, 4], "{alg:?}");
        }
    }

    // -----------------------------------------------------------------------
    // Test 3: Bubble sort commit trace for [50, 100, 75]
    // -----------------------------------------------------------------------
    #[test]
    fn bubble_trace_three_elements() {
        let mut engine = engine(&[50, 100, 75]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Bubble, &mut sink);

        // 50<100 swaps, then 50<75 swaps; the second pass finds nothing.
        assert_eq!(report.commits, 2);
        assert_eq!(sink.key_trace(), vec![vec![100, 50, 75], vec![100, 75, 50]]);
        assert_eq!(sink.commits[0].op, SortOp::Swap { a: 0, b: 1 });
        assert_eq!(sink.commits[1].op, SortOp::Swap { a: 1, b: 2 });
        assert_eq!(sink.commits[0].step, 0);
        assert_eq!(sink.commits[1].step, 1);
    }

    // -----------------------------------------------------------------------
    // Test 4: Selection sort commits every positional swap, no-ops included
    // -----------------------------------------------------------------------
    #[test]
    fn selection_trace_three_elements() {
        let mut engine = engine(&[50, 100, 75]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Selection, &mut sink);

        assert_eq!(report.commits, 2);
        assert_eq!(sink.key_trace(), vec![vec![100, 50, 75], vec![100, 75, 50]]);
        assert_eq!(sink.commits[0].op, SortOp::Swap { a: 0, b: 1 });
        assert_eq!(sink.commits[1].op, SortOp::Swap { a: 1, b: 2 });
    }

    #[test]
    fn selection_commits_self_swaps_on_sorted_input() {
        let mut engine = engine(&[100, 75, 50]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Selection, &mut sink);

        // n-1 commits even though nothing moves.
        assert_eq!(report.commits, 2);
        assert_eq!(sink.commits[0].op, SortOp::Swap { a: 0, b: 0 });
        assert_eq!(sink.commits[1].op, SortOp::Swap { a: 1, b: 1 });
        assert_eq!(keys_of(&engine), vec![100, 75, 50]);
    }

    // -----------------------------------------------------------------------
    // Test 5: Insertion sort commits each left-shift, not the placement
    // -----------------------------------------------------------------------
    #[test]
    fn insertion_trace_three_elements() {
        let mut engine = engine(&[50, 100, 75]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Insertion, &mut sink);

        // Shifting leaves a transient duplicate while the key is held aside.
        assert_eq!(report.commits, 2);
        assert_eq!(sink.key_trace(), vec![vec![50, 50, 75], vec![100, 50, 50]]);
        assert_eq!(sink.commits[0].op, SortOp::Shift { from: 0, to: 1 });
        assert_eq!(sink.commits[1].op, SortOp::Shift { from: 1, to: 2 });
        assert_eq!(keys_of(&engine), vec![100, 75, 50]);
    }

    // -----------------------------------------------------------------------
    // Test 6: Merge sort commits once per merge call
    // -----------------------------------------------------------------------
    #[test]
    fn merge_trace_three_elements() {
        let mut engine = engine(&[50, 100, 75]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Merge, &mut sink);

        assert_eq!(report.commits, 2);
        assert_eq!(sink.commits[0].op, SortOp::Merge { lo: 1, hi: 3 });
        assert_eq!(sink.commits[1].op, SortOp::Merge { lo: 0, hi: 3 });
        assert_eq!(sink.key_trace(), vec![vec![50, 100, 75], vec![100, 75, 50]]);
    }

    #[test]
    fn merge_always_commits_n_minus_one_times() {
        // The split tree of n leaves has n-1 internal nodes, so any order
        // of n items produces exactly n-1 merge commits.
        for input in [&[100u32, 75, 50][..], &[50, 75, 100], &[75, 100, 50, 150, 25]] {
            let mut engine = engine(input);
            let mut sink = RecordingSink::new();
            let report = engine.run(Algorithm::Merge, &mut sink);
            assert_eq!(report.commits, (input.len() - 1) as u64);
            assert!(sink.commits.iter().all(|c| matches!(c.op, SortOp::Merge { .. })));
        }
    }

    // -----------------------------------------------------------------------
    // Test 7: Quick sort commits in-loop swaps and the pivot placement
    // -----------------------------------------------------------------------
    #[test]
    fn quick_trace_three_elements() {
        let mut engine = engine(&[50, 100, 75]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Quick, &mut sink);

        // Pivot 75: only 100 orders before it (one in-loop swap), then the
        // pivot placement swap.
        assert_eq!(report.commits, 2);
        assert_eq!(sink.key_trace(), vec![vec![100, 50, 75], vec![100, 75, 50]]);
        assert_eq!(sink.commits[0].op, SortOp::Swap { a: 0, b: 1 });
        assert_eq!(sink.commits[1].op, SortOp::Swap { a: 1, b: 2 });
    }

    // -----------------------------------------------------------------------
    // Test 8: Heap sort commits only extraction root-swaps
    // -----------------------------------------------------------------------
    #[test]
    fn heap_trace_three_elements() {
        let mut engine = engine(&[50, 100, 75]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Heap, &mut sink);

        // [50,100,75] is already a valid heap (root orders last), so the
        // build phase moves nothing and, per contract, commits nothing.
        assert_eq!(report.commits, 2);
        assert_eq!(sink.key_trace(), vec![vec![75, 100, 50], vec![100, 75, 50]]);
        assert_eq!(sink.commits[0].op, SortOp::Swap { a: 0, b: 2 });
        assert_eq!(sink.commits[1].op, SortOp::Swap { a: 0, b: 1 });
    }

    #[test]
    fn heap_snapshot_shows_post_sift_state() {
        // On sorted input the build phase reorders silently; each extraction
        // snapshot then shows the sequence after the re-sift.
        let mut engine = engine(&[100, 75, 50]);
        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Heap, &mut sink);

        assert_eq!(report.commits, 2);
        assert_eq!(sink.key_trace(), vec![vec![75, 100, 50], vec![100, 75, 50]]);
        assert_eq!(keys_of(&engine), vec![100, 75, 50]);
    }

    // -----------------------------------------------------------------------
    // Test 9: Boundary sequences commit zero times
    // -----------------------------------------------------------------------
    #[test]
    fn empty_and_single_sequences_commit_nothing() {
        for alg in Algorithm::ALL {
            for input in [&[][..], &[42][..]] {
                let mut engine = engine(input);
                let mut sink = RecordingSink::new();
                let report = engine.run(alg, &mut sink);

                assert_eq!(report.commits, 0, "{alg:?} on {input:?}");
                assert_eq!(report.outcome, RunOutcome::Completed);
                assert!(sink.commits.is_empty());
                assert_eq!(keys_of(&engine), input);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Test 10: Idempotent re-runs on sorted input
    // -----------------------------------------------------------------------
    #[test]
    fn rerun_on_sorted_input_is_minimal() {
        // Minimum commit counts on an already-sorted 3-element sequence.
        let expected: [(Algorithm, u64); 6] = [
            (Algorithm::Bubble, 0),
            (Algorithm::Selection, 2), // n-1 no-op swaps
            (Algorithm::Insertion, 0),
            (Algorithm::Merge, 2), // n-1 merges regardless of order
            (Algorithm::Quick, 5), // every element orders before the pivot
            (Algorithm::Heap, 2),  // n-1 extractions
        ];

        for (alg, commits) in expected {
            let mut engine = engine(&[100, 75, 50]);
            let report = engine.run(alg, &mut NullSink);
            assert_eq!(report.commits, commits, "{alg:?}");
            assert_eq!(keys_of(&engine), vec![100, 75, 50]);
        }
    }

    // -----------------------------------------------------------------------
    // Test 11: Unknown algorithm fails before any mutation
    // -----------------------------------------------------------------------
    #[test]
    fn run_named_unknown_leaves_sequence_untouched() {
        let mut engine = engine(&[50, 100, 75]);
        let mut sink = RecordingSink::new();
        let err = engine.run_named("NotARealAlgorithm", &mut sink).unwrap_err();

        assert_eq!(
            err,
            SortError::UnknownAlgorithm {
                name: "NotARealAlgorithm".to_string()
            }
        );
        assert!(sink.commits.is_empty());
        assert_eq!(keys_of(&engine), vec![50, 100, 75]);
    }

    #[test]
    fn run_named_accepts_selector_labels() {
        let mut engine = engine(&[50, 100, 75]);
        let report = engine.run_named("Quick sort", &mut NullSink).unwrap();
        assert_eq!(report.algorithm, Algorithm::Quick);
        assert_eq!(keys_of(&engine), vec![100, 75, 50]);
    }

    // -----------------------------------------------------------------------
    // Test 12: Cancellation stops after the in-flight commit
    // -----------------------------------------------------------------------
    #[test]
    fn cancel_stops_after_first_commit() {
        let mut engine = engine(&[50, 100, 75]);
        let token = CancelToken::new();
        engine.set_cancel_token(token.clone());
        token.cancel();

        let mut sink = RecordingSink::new();
        let report = engine.run(Algorithm::Bubble, &mut sink);

        assert_eq!(report.outcome, RunOutcome::Canceled);
        assert_eq!(report.commits, 1);
        assert_eq!(sink.key_trace(), vec![vec![100, 50, 75]]);
        // Mid-sort order is left as published.
        assert_eq!(keys_of(&engine), vec![100, 50, 75]);
    }

    #[test]
    fn cancel_mid_run_truncates_the_trace() {
        for alg in Algorithm::ALL {
            let mut engine = engine(&[150, 50, 100, 75, 200, 25]);
            let token = engine_token(&mut engine);

            let mut count = 0u32;
            let cancel_after = 2;
            let mut sink = crate::event::FnSink(|_: &Commit| {
                count += 1;
                if count == cancel_after {
                    token.cancel();
                }
            });

            let report = engine.run(alg, &mut sink);
            assert_eq!(report.outcome, RunOutcome::Canceled, "{alg:?}");
            assert_eq!(report.commits, cancel_after as u64, "{alg:?}");
        }
    }

    fn engine_token(engine: &mut SortEngine) -> CancelToken {
        let token = CancelToken::new();
        engine.set_cancel_token(token.clone());
        token
    }

    // -----------------------------------------------------------------------
    // Test 13: A fresh run resets the step counter
    // -----------------------------------------------------------------------
    #[test]
    fn step_counter_resets_between_runs() {
        let mut engine = engine(&[50, 100, 75]);
        engine.run(Algorithm::Bubble, &mut NullSink);

        let mut sink = RecordingSink::new();
        engine.run(Algorithm::Selection, &mut sink);
        assert_eq!(sink.commits[0].step, 0);
    }

    // -----------------------------------------------------------------------
    // Test 14: Alternate comparator flips the result, not the mechanics
    // -----------------------------------------------------------------------
    #[test]
    fn smallest_first_sorts_ascending() {
        for alg in Algorithm::ALL {
            let mut engine = engine(&[50, 100, 75, 150]);
            engine.set_comparator(smallest_first);
            engine.run(alg, &mut NullSink);
            assert_eq!(keys_of(&engine), vec![50, 75, 100, 150], "{alg:?}");
        }
    }

    // -----------------------------------------------------------------------
    // Test 15: Snapshots are full-sequence copies, oldest first
    // -----------------------------------------------------------------------
    #[test]
    fn snapshots_cover_the_whole_sequence() {
        let mut engine = engine(&[150, 50, 100, 75]);
        let mut sink = RecordingSink::new();
        engine.run(Algorithm::Bubble, &mut sink);

        for (i, commit) in sink.commits.iter().enumerate() {
            assert_eq!(commit.items.len(), 4);
            assert_eq!(commit.step, i as u64);
        }
    }
}
