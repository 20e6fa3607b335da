use crate::catalog::{Catalog, Recipe};
use crate::config::recipes::RecipeConfig;
use crate::matcher::SearchOptions;
use crate::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run a search and print the query followed by one line per match
pub fn demo<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    query: &str,
    options: &SearchOptions,
) -> Result<()> {
    let matches = catalog.search(query, options);
    print_matches(out, query, &matches)
}

/// Search for recipes containing every ingredient in `query`
pub fn search<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    let matches = catalog.search(query, options);
    info!("{} of {} recipes matched", matches.len(), catalog.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &matches)?;
        writeln!(out)?;
        return Ok(());
    }

    if matches.is_empty() {
        writeln!(out, "No recipes contain all of: {query}")?;
        return Ok(());
    }

    print_matches(out, query, &matches)
}

/// Show a recipe by ID
pub fn show<W: Write>(out: &mut W, catalog: &Catalog, id: i64, json: bool) -> Result<()> {
    let recipe = catalog.get(id)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, recipe)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} (ID: {})", recipe.name, recipe.id)?;
    writeln!(out, "Ingredients:")?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "  - {ingredient}")?;
    }

    Ok(())
}

/// List recipes, keeping only those that use `ingredient` when given
pub fn list<W: Write>(out: &mut W, catalog: &Catalog, ingredient: Option<&str>) -> Result<()> {
    let recipes: Vec<&Recipe> = match ingredient {
        Some(name) => catalog.with_ingredient(name),
        None => catalog.recipes().iter().collect(),
    };

    for recipe in recipes {
        writeln!(out, "{}", format_recipe_line(recipe))?;
    }

    Ok(())
}

/// Validate a recipe catalog file
pub fn validate<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    let config = RecipeConfig::from_file(path)?;

    writeln!(out, "✓ Catalog is valid: {}", path.display())?;
    writeln!(out, "  Recipes: {}", config.recipes.len())?;
    writeln!(out, "  Ingredients: {}", config.total_ingredients())?;

    Ok(())
}

fn print_matches<W: Write>(out: &mut W, query: &str, matches: &[&Recipe]) -> Result<()> {
    writeln!(out, "Query: {query}")?;
    writeln!(out, "Matching Recipes:")?;
    for recipe in matches {
        writeln!(out, "{}", format_recipe_line(recipe))?;
    }
    Ok(())
}

fn format_recipe_line(recipe: &Recipe) -> String {
    format!(" - {} (ID: {})", recipe.name, recipe.id)
}
