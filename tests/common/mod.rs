mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from recipebook for tests
pub use recipebook::core::catalog::{Catalog, Difficulty, Recipe};
pub use recipebook::core::favorites::{
    FavoritesBook, FavoritesStorage, JsonFileStorage, ToggleOutcome,
};
pub use recipebook::core::filter::FilterState;
pub use recipebook::core::session::{Session, View};
