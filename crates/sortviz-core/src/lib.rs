//! Sortviz Core -- the sort-and-animate engine behind the visualizer.
//!
//! This crate drives six classic comparison sorts (bubble, selection,
//! insertion, merge, quick, heap) over a mutable sequence of
//! [`item::SortableItem`]s while publishing an observable trace: every
//! state-mutating step emits a [`event::Commit`] (full-sequence snapshot
//! plus the triggering mutation) to a [`event::CommitSink`], then suspends
//! for a fixed pacing interval before the algorithm proceeds.
//!
//! # Commit Protocol
//!
//! Each algorithm has a fixed, observable commit granularity -- see the
//! table on [`engine::SortEngine`]. For a given input and algorithm the
//! commit sequence is deterministic and reproducible; there is no
//! randomness anywhere.
//!
//! # Key Types
//!
//! - [`engine::SortEngine`] -- owns the working sequence and runs one
//!   algorithm at a time to completion (or cancellation).
//! - [`algorithm::Algorithm`] -- the fixed set of six algorithms, parsable
//!   from selector labels.
//! - [`item::SortableItem`] -- asset reference plus immutable sort key;
//!   ordered by a substitutable [`item::Comparator`] (default: descending
//!   by key).
//! - [`event::CommitSink`] -- the observer boundary; the engine never
//!   touches presentation state directly.
//! - [`cancel::CancelToken`] -- cooperative stop, checked at each commit.

pub mod algorithm;
pub mod cancel;
pub mod engine;
pub mod event;
pub mod item;

pub use algorithm::{Algorithm, SortError};
pub use cancel::CancelToken;
pub use engine::{Pacing, RunOutcome, RunReport, SortEngine, VISUAL_STEP};
pub use event::{Commit, CommitSink, FnSink, NullSink, RecordingSink, SortOp};
pub use item::{AssetId, Comparator, SortableItem, largest_first, smallest_first};
