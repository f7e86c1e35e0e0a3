//! Integration tests for the built-in recipe catalog.
//!
//! Tests cover:
//! - Parsing the compiled-in catalog asset
//! - Lookup by id and basic field integrity
//! - Validation of id uniqueness and positive cook time/servings

mod common;

use common::*;

#[test]
fn test_builtin_catalog_loads() -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    assert_eq!(catalog.len(), 6);
    assert!(!catalog.is_empty());

    let salmon = catalog.get("4").expect("Recipe 4 should exist");
    assert_eq!(salmon.title, "Grilled Salmon with Herbs");
    assert_eq!(salmon.cook_time, 20);
    assert_eq!(salmon.servings, 4);
    assert_eq!(salmon.category, "Seafood");
    assert_eq!(salmon.difficulty, Difficulty::Easy);
    assert_eq!(salmon.ingredients.len(), 8);
    assert_eq!(salmon.instructions.len(), 7);

    assert!(catalog.get("missing").is_none());

    Ok(())
}

#[test]
fn test_catalog_ids_are_unique() -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    let mut ids: Vec<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
    Ok(())
}

#[test]
fn test_difficulties_cover_all_levels() -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    assert_eq!(catalog.get("2").unwrap().difficulty, Difficulty::Easy);
    assert_eq!(catalog.get("1").unwrap().difficulty, Difficulty::Medium);
    assert_eq!(catalog.get("5").unwrap().difficulty, Difficulty::Hard);
    assert_eq!(Difficulty::Hard.name(), "Hard");
    Ok(())
}

#[test]
fn test_duplicate_ids_rejected() {
    let recipes = vec![
        make_test_recipe("1", "First", &["Salt"]),
        make_test_recipe("1", "Second", &["Pepper"]),
    ];

    let result = Catalog::from_recipes(recipes);
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("Duplicate recipe id"),
        "Error should mention the duplicate id, got: {message}"
    );
}

#[test]
fn test_zero_cook_time_rejected() {
    let mut recipe = make_test_recipe("1", "Instant", &["Water"]);
    recipe.cook_time = 0;

    let result = Catalog::from_recipes(vec![recipe]);
    assert!(result.is_err());
}

#[test]
fn test_zero_servings_rejected() {
    let mut recipe = make_test_recipe("1", "Nothing", &["Air"]);
    recipe.servings = 0;

    let result = Catalog::from_recipes(vec![recipe]);
    assert!(result.is_err());
}
