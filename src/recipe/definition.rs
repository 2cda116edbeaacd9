use super::stat::StatValue;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, equality-comparable revision token for a recipe.
///
/// Version tokens carry no ordering guarantees; the tracker only ever asks
/// whether two tokens are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(pub String);

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Version(value.to_string())
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Version(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Material name to required quantity.
pub type Materials = AHashMap<String, u32>;
/// Stat name to crafted-output value.
pub type OutputStats = AHashMap<String, StatValue>;
/// Profession name to minimum level.
pub type ProfessionReqs = AHashMap<String, u32>;

/// A single snapshot of a crafting recipe definition.
///
/// The `name` is the recipe's identity; everything else is versioned data.
/// Snapshots are never mutated by a comparison: the diff engine always
/// operates on two independent `Recipe` values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub materials: Materials,
    #[serde(default)]
    pub output_stats: OutputStats,
    #[serde(default)]
    pub profession_requirements: ProfessionReqs,
}

impl Recipe {
    /// Creates a recipe with the given identity and version and empty facets.
    pub fn new(name: impl Into<String>, version: impl Into<Version>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            materials: Materials::new(),
            output_stats: OutputStats::new(),
            profession_requirements: ProfessionReqs::new(),
        }
    }
}
