use crate::catalog::{Catalog, Recipe};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    pub version: u32,
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_max_recipes")]
    pub max_recipes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_recipes: default_max_recipes(),
        }
    }
}

fn default_max_recipes() -> usize {
    1000
}

impl RecipeConfig {
    /// Load a recipe catalog from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read recipe catalog from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: RecipeConfig = serde_yaml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse recipe catalog from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        info!(
            "Loaded {} recipes from {}",
            config.recipes.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Validate the entire catalog file
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported catalog version: {}. Expected version 1",
                self.version
            )));
        }

        if self.recipes.len() > self.validation.max_recipes {
            return Err(Error::Config(format!(
                "Too many recipes: {} > {}",
                self.recipes.len(),
                self.validation.max_recipes
            )));
        }

        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if !seen.insert(recipe.id) {
                return Err(Error::Config(format!("Duplicate recipe id: {}", recipe.id)));
            }
        }

        for (index, recipe) in self.recipes.iter().enumerate() {
            if recipe.name.trim().is_empty() {
                return Err(Error::Config(format!(
                    "Recipe #{} (id {}): name cannot be empty",
                    index + 1,
                    recipe.id
                )));
            }
        }

        Ok(())
    }

    pub fn total_ingredients(&self) -> usize {
        self.recipes.iter().map(|r| r.ingredients.len()).sum()
    }

    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::new(self.recipes)
    }
}

/// Load the catalog at `path`, or the built-in one when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => RecipeConfig::from_file(path)?.into_catalog(),
        None => Ok(Catalog::builtin()),
    }
}
