//! Version tracking: decides when a diff is owed.

use crate::diff::{ChangeReport, diff_recipes};
use crate::error::TrackError;
use crate::recipe::{LatestSource, Recipe, Version};
use ahash::AHashMap;

/// Tracks the last-seen version token per recipe name.
///
/// The tracker is a plain owned value with no global state; each tracking
/// session constructs its own. It holds version tokens only, never whole
/// snapshots — the reference for a diff always comes from the injected
/// [`LatestSource`].
///
/// Per name the tracker is a two-state machine: `Unseen` (no map entry) and
/// `Seen(version)`. A first sighting records the version without comparing,
/// so a recipe can never produce a false-positive report the first time it
/// is checked.
#[derive(Debug, Clone, Default)]
pub struct VersionTracker {
    seen: AHashMap<String, Version>,
}

impl VersionTracker {
    /// Creates a tracker that has seen nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The version most recently recorded for `name`, if any.
    pub fn last_seen(&self, name: &str) -> Option<&Version> {
        self.seen.get(name)
    }

    /// Number of recipe names this tracker has seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Evaluates one observed snapshot for an update.
    ///
    /// Returns `Ok(Some(report))` only when the observed version differs from
    /// the last-seen one AND the diff against the source's reference snapshot
    /// is non-empty. On every successful path the observed version is
    /// written through, so each version of a recipe is evaluated at most
    /// once.
    ///
    /// When the source cannot produce a reference ([`SourceError::NotFound`])
    /// or the diff fails, the error propagates and the version is NOT
    /// recorded: an incomplete check must not suppress the notification the
    /// next sighting would produce.
    ///
    /// [`SourceError::NotFound`]: crate::error::SourceError::NotFound
    pub fn check_for_update(
        &mut self,
        recipe: &Recipe,
        source: &impl LatestSource,
    ) -> Result<Option<ChangeReport>, TrackError> {
        let report = match self.seen.get(&recipe.name) {
            None => {
                tracing::debug!(recipe = %recipe.name, version = %recipe.version, "first sighting");
                None
            }
            Some(last) if *last == recipe.version => {
                tracing::debug!(recipe = %recipe.name, version = %recipe.version, "version unchanged");
                None
            }
            Some(last) => {
                tracing::info!(
                    recipe = %recipe.name,
                    old_version = %last,
                    new_version = %recipe.version,
                    "version changed, computing diff"
                );
                let reference = source.fetch_latest(&recipe.name)?;
                let report = diff_recipes(&reference, recipe)?;
                if report.is_empty() { None } else { Some(report) }
            }
        };

        self.seen
            .insert(recipe.name.clone(), recipe.version.clone());
        Ok(report)
    }
}
