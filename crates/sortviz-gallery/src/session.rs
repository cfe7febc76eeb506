//! Run lifecycle management.
//!
//! A [`RunSession`] owns the item collection and the engine across runs
//! and realizes the concurrency model: one run at a time, executed on a
//! worker thread (the pacing sleep never blocks the caller's thread), with
//! commits ferried back over a channel. Overlapping starts are rejected,
//! not queued; a run can be canceled at any commit point.
//!
//! Session state advances on [`RunSession::poll`]: callers (the render
//! loop, headless tests) poll each frame to drain new commits and, once
//! the worker finishes, reclaim the engine and the run report.

use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use sortviz_core::{
    Algorithm, AssetId, CancelToken, Commit, FnSink, Pacing, RunReport, SortEngine, SortableItem,
    VISUAL_STEP,
};

use crate::collection::Collection;
use crate::error::GalleryError;

/// A run in flight on its worker thread.
struct ActiveRun {
    rx: Receiver<Commit>,
    join: JoinHandle<(SortEngine, RunReport)>,
    cancel: CancelToken,
}

/// Owns the collection and engine; manages one run at a time.
pub struct RunSession<H> {
    handles: Vec<H>,
    /// Mirror of the latest published order, valid whether or not the
    /// engine is currently out on a worker thread.
    current: Vec<SortableItem>,
    engine: Option<SortEngine>,
    worker: Option<ActiveRun>,
    last_report: Option<RunReport>,
    pacing: Pacing,
}

impl<H> RunSession<H> {
    /// Session with the visual pacing interval, for presentation use.
    pub fn new(collection: Collection<H>) -> Self {
        Self::with_pacing(collection, Pacing::Fixed(VISUAL_STEP))
    }

    /// Session with explicit pacing; headless tests pass [`Pacing::None`].
    pub fn with_pacing(collection: Collection<H>, pacing: Pacing) -> Self {
        Self {
            handles: collection.handles,
            current: collection.items.clone(),
            engine: Some(SortEngine::new(collection.items, pacing)),
            worker: None,
            last_report: None,
            pacing,
        }
    }

    /// Start a run. Rejected while another run is active (including one
    /// that has finished but has not yet been reclaimed by `poll`).
    pub fn start(&mut self, algorithm: Algorithm) -> Result<(), GalleryError> {
        if self.worker.is_some() {
            return Err(GalleryError::RunInProgress);
        }
        let Some(mut engine) = self.engine.take() else {
            return Err(GalleryError::RunInProgress);
        };

        let cancel = CancelToken::new();
        engine.set_cancel_token(cancel.clone());

        let (tx, rx) = mpsc::channel();
        let join = std::thread::spawn(move || {
            let mut sink = FnSink(move |commit: &Commit| {
                // The receiver disappears if the session is dropped
                // mid-run; the run just finishes unobserved.
                let _ = tx.send(commit.clone());
            });
            let report = engine.run(algorithm, &mut sink);
            (engine, report)
        });

        self.worker = Some(ActiveRun { rx, join, cancel });
        Ok(())
    }

    /// Request the active run stop at its next commit point. No-op when
    /// nothing is running.
    pub fn cancel(&self) {
        if let Some(active) = &self.worker {
            active.cancel.cancel();
        }
    }

    /// Drain commits published since the last poll. When the worker has
    /// finished, reclaims the engine and stores the run report.
    pub fn poll(&mut self) -> Vec<Commit> {
        let mut commits = Vec::new();
        let finished = match &self.worker {
            None => return commits,
            Some(active) => {
                while let Ok(commit) = active.rx.try_recv() {
                    commits.push(commit);
                }
                active.join.is_finished()
            }
        };

        if let Some(last) = commits.last() {
            self.current = last.items.clone();
        }

        if finished && let Some(active) = self.worker.take() {
            // Drain any stragglers that raced the finish check.
            while let Ok(commit) = active.rx.try_recv() {
                commits.push(commit);
            }
            match active.join.join() {
                Ok((engine, report)) => {
                    self.current = engine.items().to_vec();
                    self.engine = Some(engine);
                    self.last_report = Some(report);
                }
                Err(_) => {
                    // The worker panicked; rebuild from the last
                    // published order so the session stays usable.
                    self.engine = Some(SortEngine::new(self.current.clone(), self.pacing));
                }
            }
        }

        commits
    }

    /// Whether a run is active (state advances on `poll`).
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// The latest known sequence order.
    pub fn items(&self) -> &[SortableItem] {
        &self.current
    }

    /// The asset table, indexed by [`AssetId`].
    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    pub fn handle(&self, asset: AssetId) -> Option<&H> {
        self.handles.get(asset.0 as usize)
    }

    /// Report of the most recently completed run, if any.
    pub fn last_report(&self) -> Option<&RunReport> {
        self.last_report.as_ref()
    }

    /// Consume the report of the most recently completed run. Lets a
    /// render loop react exactly once per finished run.
    pub fn take_report(&mut self) -> Option<RunReport> {
        self.last_report.take()
    }
}
