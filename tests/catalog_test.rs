use ingredient_match::cli::commands;
use ingredient_match::config::recipes::{load_catalog, RecipeConfig};
use ingredient_match::matcher::{Normalization, SearchOptions};
use ingredient_match::Error;
use std::path::Path;

fn sample_catalog_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/recipes.yaml")
}

#[test]
fn test_sample_catalog_is_valid() {
    let config = RecipeConfig::from_file(sample_catalog_path()).unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.recipes.len(), 6);
    assert_eq!(config.recipes[4].name, "Shakshuka");
}

#[test]
fn test_search_sample_catalog() {
    let catalog = load_catalog(Some(sample_catalog_path().as_path())).unwrap();

    let ids: Vec<i64> = catalog
        .search("tomato, garlic, onion", &SearchOptions::default())
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 4, 5]);

    let symmetric = SearchOptions {
        normalization: Normalization::Symmetric,
        ..SearchOptions::default()
    };
    let ids: Vec<i64> = catalog
        .search("Olive Oil, garlic", &symmetric)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![5, 6]);
}

#[test]
fn test_validate_command_summary() {
    let mut buf = Vec::new();
    commands::validate(&mut buf, &sample_catalog_path()).unwrap();

    let output = String::from_utf8(buf).unwrap();
    assert!(output.contains("Recipes: 6"));
    assert!(output.contains("Ingredients: 26"));
}

#[test]
fn test_show_from_sample_catalog() {
    let catalog = load_catalog(Some(sample_catalog_path().as_path())).unwrap();
    assert_eq!(catalog.get(6).unwrap().name, "Aglio e Olio");
    assert!(matches!(catalog.get(7), Err(Error::NotFound(_))));
}
