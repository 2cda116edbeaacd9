use super::definition::Recipe;
use crate::error::SourceError;
use ahash::AHashMap;

/// A source of best-known reference snapshots, keyed by recipe name.
///
/// This is the extension seam for wiring the diff engine to wherever recipe
/// data actually lives. When the tracker sees a version change it asks the
/// source for the reference snapshot to diff the new observation against.
///
/// # Example
///
/// ```rust
/// use sabun::prelude::*;
/// use sabun::error::SourceError;
///
/// struct SingleRecipe(Recipe);
///
/// impl LatestSource for SingleRecipe {
///     fn fetch_latest(&self, name: &str) -> std::result::Result<Recipe, SourceError> {
///         if self.0.name == name {
///             Ok(self.0.clone())
///         } else {
///             Err(SourceError::NotFound(name.to_string()))
///         }
///     }
/// }
/// ```
pub trait LatestSource {
    /// Returns the best current reference snapshot for the named recipe.
    fn fetch_latest(&self, name: &str) -> Result<Recipe, SourceError>;
}

/// An in-memory name-indexed recipe store.
///
/// The stock `LatestSource`: callers insert whole snapshots and the source
/// hands back clones on fetch. Re-inserting a name replaces its snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    recipes: AHashMap<String, Recipe>,
}

impl CatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the snapshot stored under the recipe's name.
    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.name.clone(), recipe);
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl LatestSource for CatalogSource {
    fn fetch_latest(&self, name: &str) -> Result<Recipe, SourceError> {
        self.recipes
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }
}

impl FromIterator<Recipe> for CatalogSource {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut source = Self::new();
        for recipe in iter {
            source.insert(recipe);
        }
        source
    }
}
