use crate::core::catalog::{Catalog, Recipe};
use crate::core::favorites::{FavoritesBook, FavoritesStorage, ToggleOutcome};
use crate::core::filter::{FilterState, matches_search};

/// The current view, as a tagged union so invalid combinations (e.g. a detail
/// and the favorites view at once) cannot be represented.
///
/// `Detail` carries the selection; leaving it is what clears the selection.
/// `Favorites` carries its own search term, recreated empty on every entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Browse,
    Detail {
        recipe_id: String,
    },
    Favorites {
        search_term: String,
    },
}

impl View {
    pub fn is_browse(&self) -> bool {
        matches!(self, Self::Browse)
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }

    pub fn is_favorites(&self) -> bool {
        matches!(self, Self::Favorites { .. })
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Self::Detail { recipe_id } => Some(recipe_id),
            _ => None,
        }
    }
}

/// Owns every store the views read from: the static catalog, the persisted
/// favorites set, the browse filter inputs and the view router.
///
/// Created once at application start and passed by reference to the views.
/// The browse filter inputs deliberately survive navigation; only the
/// favorites view's own search term is transient.
#[derive(Debug, Clone)]
pub struct Session<S> {
    catalog: Catalog,
    favorites: FavoritesBook<S>,
    filter: FilterState,
    view: View,
}

impl<S: FavoritesStorage> Session<S> {
    pub fn new(catalog: Catalog, favorites: FavoritesBook<S>) -> Self {
        Self {
            catalog,
            favorites,
            filter: FilterState::default(),
            view: View::Browse,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorites(&self) -> &FavoritesBook<S> {
        &self.favorites
    }

    // Navigation

    pub fn select_recipe(&mut self, id: &str) {
        if self.catalog.get(id).is_none() {
            tracing::debug!("Ignoring selection of unknown recipe id {id}");
            return;
        }
        match self.view {
            View::Browse | View::Favorites { .. } => {
                self.view = View::Detail {
                    recipe_id: id.to_string(),
                };
            }
            View::Detail { .. } => {}
        }
    }

    /// Leave the current view. The router is flat: a detail view entered from
    /// favorites still returns to browse.
    pub fn back(&mut self) {
        match self.view {
            View::Browse => {}
            View::Detail { .. } | View::Favorites { .. } => self.view = View::Browse,
        }
    }

    pub fn open_favorites(&mut self) {
        if self.view.is_browse() {
            self.view = View::Favorites {
                search_term: String::new(),
            };
        }
    }

    // Filter inputs

    pub fn set_search(&mut self, term: String) {
        self.filter.search_term = term;
    }

    pub fn toggle_ingredient_filter(&mut self, ingredient: &str) {
        self.filter.toggle_ingredient(ingredient);
    }

    pub fn clear_ingredient_filters(&mut self) {
        self.filter.clear_ingredients();
    }

    pub fn set_favorites_search(&mut self, term: String) {
        if let View::Favorites { search_term } = &mut self.view {
            *search_term = term;
        }
    }

    // Favorites

    pub fn toggle_favorite(&mut self, id: &str) -> ToggleOutcome {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    // Derived views

    /// The browse list: the catalog narrowed by the active filters, in
    /// catalog order.
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        self.filter.apply(self.catalog.recipes())
    }

    /// Every favorited recipe, in catalog order.
    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.catalog
            .recipes()
            .iter()
            .filter(|recipe| self.favorites.is_favorite(&recipe.id))
            .collect()
    }

    /// The favorites list narrowed by the favorites view's own search term.
    pub fn visible_favorites(&self) -> Vec<&Recipe> {
        let term = match &self.view {
            View::Favorites { search_term } => search_term.as_str(),
            _ => "",
        };
        self.favorite_recipes()
            .into_iter()
            .filter(|recipe| matches_search(recipe, term))
            .collect()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.view.selected_id().and_then(|id| self.catalog.get(id))
    }

    /// The deduplicated, sorted ingredient list for the filter panel.
    pub fn ingredient_choices(&self) -> Vec<String> {
        self.catalog.all_ingredients()
    }
}
