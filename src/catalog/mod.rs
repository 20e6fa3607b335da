pub mod models;

pub use models::Recipe;

use crate::error::{Error, Result};
use crate::matcher::{self, SearchOptions};
use std::collections::HashSet;
use tracing::debug;

/// Query used by the demonstration command
pub const DEMO_QUERY: &str = "tomato, pasta, garlic";

/// An ordered, in-memory collection of recipes with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate recipe ids
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(Error::Validation(format!(
                    "Duplicate recipe id: {}",
                    recipe.id
                )));
            }
        }

        debug!("Catalog built with {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    /// The four recipes used by the demonstration command
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                Recipe::new(
                    1,
                    "Spaghetti Bolognese",
                    ["tomato", "pasta", "beef", "garlic", "onion"],
                ),
                Recipe::new(2, "Garlic Bread", ["bread", "butter", "garlic"]),
                Recipe::new(
                    3,
                    "Pasta Salad",
                    ["pasta", "tomato", "cucumber", "olive oil"],
                ),
                Recipe::new(4, "Tomato Soup", ["tomato", "garlic", "onion"]),
            ],
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by id
    pub fn get(&self, id: i64) -> Result<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))
    }

    /// Recipes with at least one ingredient containing `name`, ignoring case
    pub fn with_ingredient(&self, name: &str) -> Vec<&Recipe> {
        let needle = name.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.ingredients.iter().any(|ing| ing.to_lowercase().contains(&needle)))
            .collect()
    }

    /// Recipes containing every ingredient in `query`
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<&Recipe> {
        matcher::search_with(&self.recipes, query, options)
    }
}
