use super::tokenizer::{normalize_token, tokenize};
use crate::catalog::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How recipe ingredient names are normalized before membership tests.
///
/// Query tokens always lose all whitespace and are lowercased. `Literal`
/// only lowercases ingredient names, so a multi-word ingredient such as
/// `olive oil` can never be matched. `Symmetric` applies the query
/// normalization to ingredients as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    Literal,
    Symmetric,
}

impl Normalization {
    fn normalize_ingredient(self, ingredient: &str) -> String {
        match self {
            Normalization::Literal => ingredient.to_lowercase(),
            Normalization::Symmetric => normalize_token(ingredient),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalization::Literal => f.write_str("literal"),
            Normalization::Symmetric => f.write_str("symmetric"),
        }
    }
}

impl FromStr for Normalization {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Ok(Normalization::Literal),
            "symmetric" => Ok(Normalization::Symmetric),
            other => Err(crate::Error::InvalidArgument(format!(
                "Unknown normalization mode: {other}. Must be literal or symmetric"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub delimiter: char,
    pub normalization: Normalization,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            normalization: Normalization::Literal,
        }
    }
}

/// Build the set of normalized ingredient names for one recipe
pub fn ingredient_set(recipe: &Recipe, normalization: Normalization) -> HashSet<String> {
    recipe
        .ingredients
        .iter()
        .map(|ing| normalization.normalize_ingredient(ing))
        .collect()
}

/// Return the recipes containing every ingredient listed in `query`,
/// splitting on `,` and using literal normalization.
pub fn search<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    search_with(recipes, query, &SearchOptions::default())
}

pub fn search_with<'a>(
    recipes: &'a [Recipe],
    query: &str,
    options: &SearchOptions,
) -> Vec<&'a Recipe> {
    let tokens = tokenize(query, options.delimiter);
    debug!(
        "Searching {} recipes for {:?} ({} normalization)",
        recipes.len(),
        tokens,
        options.normalization
    );

    let matches: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| {
            let available = ingredient_set(recipe, options.normalization);
            tokens.iter().all(|token| available.contains(token))
        })
        .collect();

    debug!("{} recipes matched", matches.len());
    matches
}
