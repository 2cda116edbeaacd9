use crate::recipe::{StatValue, Version};
use serde::Serialize;

/// A single per-key difference inside one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Delta<V> {
    Added { key: String, new: V },
    Removed { key: String, old: V },
    Modified { key: String, old: V, new: V },
}

impl<V> Delta<V> {
    pub fn key(&self) -> &str {
        match self {
            Delta::Added { key, .. } | Delta::Removed { key, .. } | Delta::Modified { key, .. } => {
                key
            }
        }
    }

    /// The action tag used in rendered alerts.
    pub fn tag(&self) -> &'static str {
        match self {
            Delta::Added { .. } => "added",
            Delta::Removed { .. } => "removed",
            Delta::Modified { .. } => "modified",
        }
    }
}

/// All deltas for one facet between two snapshots of a recipe.
///
/// Deltas are ordered lexicographically by key, so repeated runs over
/// identical input render identical text. An empty record means the facet
/// did not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct ChangeRecord<V> {
    pub deltas: Vec<Delta<V>>,
}

impl<V> ChangeRecord<V> {
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Delta<V>> {
        self.deltas.iter()
    }
}

/// The full three-facet diff result for one recipe version transition.
///
/// A report is constructed even when nothing changed; downstream consumers
/// treat an empty report as a no-op.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeReport {
    pub name: String,
    pub old_version: Version,
    pub new_version: Version,
    pub materials: ChangeRecord<u32>,
    pub output_stats: ChangeRecord<StatValue>,
    pub profession_requirements: ChangeRecord<u32>,
}

impl ChangeReport {
    /// True when all three facet records are empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
            && self.output_stats.is_empty()
            && self.profession_requirements.is_empty()
    }

    /// Total number of deltas across all facets.
    pub fn change_count(&self) -> usize {
        self.materials.len() + self.output_stats.len() + self.profession_requirements.len()
    }
}
