pub mod core;

pub use crate::core::catalog::{Catalog, Difficulty, Recipe};
pub use crate::core::favorites::{FavoritesBook, FavoritesStorage, JsonFileStorage, ToggleOutcome};
pub use crate::core::filter::FilterState;
pub use crate::core::session::{Session, View};

#[cfg(feature = "gui")]
pub mod gui;
