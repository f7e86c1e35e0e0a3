use super::state::ViewMode;

#[derive(Debug, Clone)]
pub enum Message {
    Browse(BrowseMessage),
    Detail(DetailMessage),
    Favorites(FavoritesMessage),
    EscapePressed,
    DismissToast,
    Noop,
}

#[derive(Debug, Clone)]
pub enum BrowseMessage {
    SearchChanged(String),
    ToggleFilterPanel,
    IngredientToggled(String),
    ClearIngredients,
    ViewModeChanged(ViewMode),
    RecipeSelected(String),
    OpenFavorites,
    ToggleFavorite(String),
}

#[derive(Debug, Clone)]
pub enum DetailMessage {
    Back,
    ToggleFavorite(String),
}

#[derive(Debug, Clone)]
pub enum FavoritesMessage {
    Back,
    SearchChanged(String),
    ViewModeChanged(ViewMode),
    RecipeSelected(String),
    ToggleFavorite(String),
}
