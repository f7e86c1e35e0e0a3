use recipebook::core::catalog::{Catalog, Difficulty, Recipe};
use recipebook::core::favorites::{FavoritesBook, JsonFileStorage};
use recipebook::core::session::Session;

/// Creates a session over the built-in catalog, backed by a favorites file
/// inside a fresh temp dir. Returns both (the dir must be kept alive).
pub fn create_test_session() -> (Session<JsonFileStorage>, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let catalog = builtin_catalog();
    let session = Session::new(catalog, FavoritesBook::open(storage_at(&dir)));
    (session, dir)
}

/// Storage handle pointing at the favorites file inside the given temp dir.
pub fn storage_at(dir: &tempfile::TempDir) -> JsonFileStorage {
    JsonFileStorage::new(dir.path().join("favorites.json"))
}

pub fn builtin_catalog() -> Catalog {
    Catalog::builtin().expect("Built-in catalog should parse")
}

/// Titles of a filtered result, for compact membership assertions.
pub fn titles<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
    recipes.iter().map(|recipe| recipe.title.as_str()).collect()
}

/// Minimal recipe for hand-built catalogs.
pub fn make_test_recipe(id: &str, title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        image: String::new(),
        cook_time: 10,
        servings: 2,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Cook.".to_string()],
        category: "Test".to_string(),
        difficulty: Difficulty::Easy,
    }
}
