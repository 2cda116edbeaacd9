use thiserror::Error;

/// Errors that can occur while diffing two recipe snapshots.
#[derive(Error, Debug, Clone)]
pub enum DiffError {
    #[error(
        "Cannot diff recipe '{left}' against recipe '{right}': the snapshots describe different recipes"
    )]
    IdentityMismatch { left: String, right: String },
}

/// Errors produced by a latest-recipe source.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    #[error("No recipe named '{0}' is known to this source")]
    NotFound(String),
}

/// Errors that can occur while presenting an update alert.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("The display surface is unavailable: {0}")]
    DisplayUnavailable(String),
}

/// Errors surfaced by a version-tracking check.
///
/// A failed check is incomplete: the tracker does not record the observed
/// version, so the same version will be re-evaluated on its next sighting.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Errors that can occur while loading a recipe catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Recipe '{recipe}' lists the {facet} key '{key}' more than once")]
    DuplicateKey {
        recipe: String,
        facet: &'static str,
        key: String,
    },
}
