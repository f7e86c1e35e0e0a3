use std::collections::BTreeSet;

use crate::core::catalog::Recipe;

/// Search and ingredient filter inputs for the browse view.
///
/// Both inputs are inactive when empty. The visible subset is recomputed
/// wholesale from these inputs on every change; the catalog is small enough
/// that nothing incremental is warranted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_ingredients: BTreeSet<String>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_ingredients.is_empty()
    }

    pub fn toggle_ingredient(&mut self, ingredient: &str) {
        if !self.selected_ingredients.remove(ingredient) {
            self.selected_ingredients.insert(ingredient.to_string());
        }
    }

    pub fn clear_ingredients(&mut self) {
        self.selected_ingredients.clear();
    }

    /// Whether a recipe passes every active predicate.
    ///
    /// The text predicate matches title, category or any ingredient. The
    /// ingredient predicate requires every selected filter to be contained in
    /// at least one of the recipe's own ingredients.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !matches_search(recipe, &self.search_term) {
            return false;
        }
        self.selected_ingredients.iter().all(|wanted| {
            recipe
                .ingredients
                .iter()
                .any(|ingredient| contains_ignore_case(ingredient, wanted))
        })
    }

    /// The matching subset, preserving catalog order.
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

/// Case-insensitive text match across title, category and ingredients.
/// An empty term matches everything.
pub fn matches_search(recipe: &Recipe, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    contains_ignore_case(&recipe.title, term)
        || contains_ignore_case(&recipe.category, term)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| contains_ignore_case(ingredient, term))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
