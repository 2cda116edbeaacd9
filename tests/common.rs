//! Common test utilities for building recipe snapshots and stub collaborators.
use sabun::prelude::*;

/// Builds a recipe with the given facets, accepting plain literals.
#[allow(dead_code)]
pub fn recipe(
    name: &str,
    version: &str,
    materials: &[(&str, u32)],
    stats: &[(&str, f64)],
    reqs: &[(&str, u32)],
) -> Recipe {
    let mut r = Recipe::new(name, version);
    for (key, quantity) in materials {
        r.materials.insert(key.to_string(), *quantity);
    }
    for (key, value) in stats {
        r.output_stats.insert(key.to_string(), StatValue(*value));
    }
    for (key, level) in reqs {
        r.profession_requirements.insert(key.to_string(), *level);
    }
    r
}

/// The "Iron Sword" recipe at version 1 used across the tracker tests.
#[allow(dead_code)]
pub fn iron_sword_v1() -> Recipe {
    recipe(
        "Iron Sword",
        "1",
        &[("Iron Ingot", 3), ("Leather Strap", 1)],
        &[("damage", 10.0), ("durability", 120.0)],
        &[("blacksmith", 5)],
    )
}

/// A notifier stub that records every report it is handed.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingNotifier {
    pub alerts: Vec<ChangeReport>,
}

impl UpdateNotifier for RecordingNotifier {
    fn show_update_alert(&mut self, report: &ChangeReport) -> std::result::Result<(), NotifyError> {
        self.alerts.push(report.clone());
        Ok(())
    }
}

/// A notifier stub whose display surface is always unavailable.
#[allow(dead_code)]
pub struct FailingNotifier;

impl UpdateNotifier for FailingNotifier {
    fn show_update_alert(&mut self, _report: &ChangeReport) -> std::result::Result<(), NotifyError> {
        Err(NotifyError::DisplayUnavailable(
            "no display attached".to_string(),
        ))
    }
}

/// A latest-recipe source that knows nothing.
#[allow(dead_code)]
pub struct EmptySource;

impl LatestSource for EmptySource {
    fn fetch_latest(&self, name: &str) -> std::result::Result<Recipe, SourceError> {
        Err(SourceError::NotFound(name.to_string()))
    }
}
