//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the sabun crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use sabun::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let old = RecipeCatalog::from_file("path/to/yesterday.json")?;
//! let new = RecipeCatalog::from_file("path/to/today.json")?;
//!
//! let source: CatalogSource = old.into_iter().collect();
//! let mut watcher = RecipeWatcher::new(source, ConsoleNotifier::stdout());
//!
//! for recipe in &new {
//!     watcher.observe(recipe)?;
//! }
//! # Ok(())
//! # }
//! ```

// Core diff engine
pub use crate::diff::{
    ChangeRecord, ChangeReport, Delta, compare_materials, compare_output_stats,
    compare_profession_reqs, diff_recipes,
};

// Tracking and orchestration
pub use crate::tracker::VersionTracker;
pub use crate::watch::RecipeWatcher;

// Data structures
pub use crate::data::RecipeCatalog;
pub use crate::recipe::{
    CatalogSource, LatestSource, Materials, OutputStats, ProfessionReqs, Recipe, StatValue,
    Version,
};

// Notification
pub use crate::notify::{ConsoleNotifier, ReportFormatter, UpdateNotifier};

// Error types
pub use crate::error::{DiffError, LoadError, NotifyError, SourceError, TrackError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
