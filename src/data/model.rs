use crate::error::LoadError;
use crate::recipe::{CatalogSource, Recipe, StatValue, Version};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk catalog model, matching the recipe JSON snapshot format.
///
/// Facets are stored as entry lists rather than JSON objects so that a
/// duplicated key in hand-edited data is visible to validation instead of
/// being silently collapsed by the JSON parser.
#[derive(Serialize, Deserialize, Debug)]
pub struct RecipeCatalog {
    pub recipes: Vec<RecipeEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecipeEntry {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub materials: Vec<MaterialEntry>,
    #[serde(default)]
    pub output_stats: Vec<StatEntry>,
    #[serde(default)]
    pub profession_requirements: Vec<RequirementEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MaterialEntry {
    pub name: String,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StatEntry {
    pub name: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RequirementEntry {
    pub name: String,
    pub level: u32,
}

impl RecipeCatalog {
    /// Loads and validates a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Recipe>, LoadError> {
        let content = fs::read_to_string(path.as_ref())?;
        let recipes = Self::from_json(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = recipes.len(),
            "loaded recipe catalog"
        );
        Ok(recipes)
    }

    /// Parses and validates a catalog from a JSON string.
    pub fn from_json(content: &str) -> Result<Vec<Recipe>, LoadError> {
        let catalog: RecipeCatalog = serde_json::from_str(content)?;
        catalog.into_recipes()
    }

    /// Folds the entry lists into facet mappings, rejecting duplicate keys.
    pub fn into_recipes(self) -> Result<Vec<Recipe>, LoadError> {
        self.recipes.into_iter().map(RecipeEntry::build).collect()
    }
}

impl RecipeEntry {
    fn build(self) -> Result<Recipe, LoadError> {
        let mut recipe = Recipe::new(self.name, self.version);

        for entry in self.materials {
            if recipe.materials.insert(entry.name.clone(), entry.quantity).is_some() {
                return Err(duplicate(&recipe.name, "material", entry.name));
            }
        }
        for entry in self.output_stats {
            if recipe
                .output_stats
                .insert(entry.name.clone(), StatValue(entry.value))
                .is_some()
            {
                return Err(duplicate(&recipe.name, "output stat", entry.name));
            }
        }
        for entry in self.profession_requirements {
            if recipe
                .profession_requirements
                .insert(entry.name.clone(), entry.level)
                .is_some()
            {
                return Err(duplicate(&recipe.name, "profession requirement", entry.name));
            }
        }

        Ok(recipe)
    }
}

fn duplicate(recipe: &str, facet: &'static str, key: String) -> LoadError {
    LoadError::DuplicateKey {
        recipe: recipe.to_string(),
        facet,
        key,
    }
}

/// Loads a catalog file straight into a [`CatalogSource`].
pub fn load_catalog_source(path: impl AsRef<Path>) -> Result<CatalogSource, LoadError> {
    Ok(RecipeCatalog::from_file(path)?.into_iter().collect())
}
