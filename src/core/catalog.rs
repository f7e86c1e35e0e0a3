use std::collections::BTreeSet;

use anyhow::Context;
use serde::Deserialize;

const BUILTIN_RECIPES: &str = include_str!("../../assets/recipes.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
}

/// The full recipe collection. Loaded once at startup and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Parse the compiled-in catalog asset.
    pub fn builtin() -> anyhow::Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(BUILTIN_RECIPES)
            .context("Failed to parse the built-in recipe catalog")?;
        Self::from_recipes(recipes)
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> anyhow::Result<Self> {
        let mut seen = BTreeSet::new();
        for recipe in &recipes {
            if recipe.cook_time == 0 {
                anyhow::bail!("Recipe {} has a zero cook time", recipe.id);
            }
            if recipe.servings == 0 {
                anyhow::bail!("Recipe {} has zero servings", recipe.id);
            }
            if !seen.insert(recipe.id.as_str()) {
                anyhow::bail!("Duplicate recipe id: {}", recipe.id);
            }
        }
        Ok(Self { recipes })
    }

    /// All recipes, in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Every ingredient across the catalog, deduplicated and sorted for the
    /// filter panel.
    pub fn all_ingredients(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter().map(String::as_str))
            .collect();
        unique.into_iter().map(str::to_owned).collect()
    }
}
