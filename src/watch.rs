//! Session orchestration: tracker, source and notifier wired together.

use crate::diff::ChangeReport;
use crate::error::TrackError;
use crate::notify::UpdateNotifier;
use crate::recipe::{LatestSource, Recipe};
use crate::tracker::VersionTracker;

/// Runs the full detection pipeline for a stream of observed snapshots.
///
/// Each `observe` call checks the snapshot against the tracker, and when a
/// non-empty [`ChangeReport`] comes back, hands it to the notifier before
/// returning it. One watcher equals one tracking session; independent
/// sessions in the same process simply construct independent watchers.
pub struct RecipeWatcher<S: LatestSource, N: UpdateNotifier> {
    tracker: VersionTracker,
    source: S,
    notifier: N,
}

impl<S: LatestSource, N: UpdateNotifier> RecipeWatcher<S, N> {
    pub fn new(source: S, notifier: N) -> Self {
        Self {
            tracker: VersionTracker::new(),
            source,
            notifier,
        }
    }

    /// Presents one observed snapshot to the session.
    ///
    /// Returns the report that was surfaced, if any. Notifier failures
    /// propagate as [`TrackError::Notify`]; the observed version has already
    /// been recorded by then, since the change itself was detected and
    /// reported to the caller through the error.
    pub fn observe(&mut self, recipe: &Recipe) -> Result<Option<ChangeReport>, TrackError> {
        let Some(report) = self.tracker.check_for_update(recipe, &self.source)? else {
            return Ok(None);
        };
        self.notifier.show_update_alert(&report)?;
        Ok(Some(report))
    }

    pub fn tracker(&self) -> &VersionTracker {
        &self.tracker
    }

    /// Mutable access to the reference source, e.g. to refresh snapshots
    /// between observations.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Tears the session down into its parts.
    pub fn into_parts(self) -> (VersionTracker, S, N) {
        (self.tracker, self.source, self.notifier)
    }
}
