//! # Sabun - Recipe Change Detection and Update Notification
//!
//! **Sabun** detects when a crafting recipe definition has changed since it was
//! last seen, computes a field-level summary of what changed across the recipe's
//! three facets (materials, output stats, profession requirements), and surfaces
//! that summary as a human-readable alert.
//!
//! ## Core Workflow
//!
//! The engine is a pure decision layer over two injected collaborators: a
//! [`LatestSource`](recipe::LatestSource) that supplies reference snapshots, and
//! an [`UpdateNotifier`](notify::UpdateNotifier) that presents alerts. The
//! primary workflow is:
//!
//! 1.  **Load Your Data**: Produce [`Recipe`](recipe::Recipe) snapshots, either
//!     through the bundled catalog loader or your own loader.
//! 2.  **Build a Session**: Create a [`RecipeWatcher`](watch::RecipeWatcher)
//!     with a reference source and a notifier. Each watcher owns its own
//!     [`VersionTracker`](tracker::VersionTracker); there is no global state.
//! 3.  **Observe**: Present each snapshot you encounter. The tracker gates on
//!     version inequality, the diff engine computes the change report, and any
//!     non-empty report is handed to the notifier.
//!
//! ## Quick Start
//!
//! ```rust
//! use sabun::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Yesterday's snapshot becomes the reference source.
//!     let mut sword = Recipe::new("Iron Sword", "1");
//!     sword.materials.insert("Iron Ingot".to_string(), 3);
//!
//!     let mut source = CatalogSource::new();
//!     source.insert(sword.clone());
//!
//!     // Alerts are rendered onto any `Write` sink.
//!     let mut watcher = RecipeWatcher::new(source, ConsoleNotifier::stdout());
//!
//!     // First sighting: the version is recorded, nothing is reported.
//!     assert!(watcher.observe(&sword)?.is_none());
//!
//!     // A revised snapshot of the same recipe arrives.
//!     let mut revised = sword.clone();
//!     revised.version = "2".into();
//!     revised.materials.insert("Iron Ingot".to_string(), 4);
//!     revised.materials.insert("Leather Strap".to_string(), 1);
//!
//!     // The version changed, so a diff is computed and the alert fires.
//!     let report = watcher.observe(&revised)?.expect("change detected");
//!     assert_eq!(report.change_count(), 2);
//!
//!     Ok(())
//! }
//! ```
//!
//! The lower-level pieces are usable on their own: the facet comparators and
//! [`diff_recipes`](diff::diff_recipes) are pure functions, and
//! [`VersionTracker::check_for_update`](tracker::VersionTracker::check_for_update)
//! returns the report instead of rendering it, for callers that want to route
//! notifications themselves.

pub mod data;
pub mod diff;
pub mod error;
pub mod notify;
pub mod prelude;
pub mod recipe;
pub mod tracker;
pub mod watch;
