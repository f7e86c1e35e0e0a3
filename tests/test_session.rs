//! Integration tests for navigation and the session store.
//!
//! Tests cover:
//! - Browse/Detail/Favorites transitions (flat router, no navigation stack)
//! - Filter and search state preserved across navigation
//! - The favorites view's transient search term
//! - Favorites toggling and empty-state distinctions through the session

mod common;

use common::*;

#[test]
fn test_starts_in_browse() {
    let (session, _dir) = create_test_session();
    assert!(session.view().is_browse());
    assert!(session.selected_recipe().is_none());
    assert_eq!(session.visible_recipes().len(), session.catalog().len());
}

#[test]
fn test_select_then_back_preserves_filters() {
    let (mut session, _dir) = create_test_session();
    session.set_search("garlic".to_string());
    session.toggle_ingredient_filter("Lemon");

    // 1. Select a recipe from browse
    session.select_recipe("2");
    assert!(session.view().is_detail());
    assert_eq!(
        session.selected_recipe().unwrap().title,
        "Classic Caesar Salad"
    );

    // 2. Back clears the selection and returns to browse
    session.back();
    assert!(session.view().is_browse());
    assert!(session.selected_recipe().is_none());

    // 3. Filter inputs were untouched by the round trip
    assert_eq!(session.filter().search_term, "garlic");
    assert!(session.filter().selected_ingredients.contains("Lemon"));
}

#[test]
fn test_detail_from_favorites_returns_to_browse() {
    let (mut session, _dir) = create_test_session();
    session.toggle_favorite("4");

    session.open_favorites();
    assert!(session.view().is_favorites());

    session.select_recipe("4");
    assert!(session.view().is_detail());

    // Flat router: back goes to browse, not favorites
    session.back();
    assert!(session.view().is_browse());
}

#[test]
fn test_back_in_browse_is_a_no_op() {
    let (mut session, _dir) = create_test_session();
    session.back();
    assert!(session.view().is_browse());
}

#[test]
fn test_favorites_search_is_transient() {
    let (mut session, _dir) = create_test_session();
    session.toggle_favorite("2");
    session.toggle_favorite("4");

    session.open_favorites();
    session.set_favorites_search("salmon".to_string());
    assert_eq!(
        titles(&session.visible_favorites()),
        ["Grilled Salmon with Herbs"]
    );

    // Re-entering the favorites view starts with a fresh search
    session.back();
    session.open_favorites();
    assert_eq!(
        session.view(),
        &View::Favorites {
            search_term: String::new()
        }
    );
    assert_eq!(session.visible_favorites().len(), 2);
}

#[test]
fn test_empty_states_are_distinguishable() {
    let (mut session, _dir) = create_test_session();

    // Zero favorites at all
    session.open_favorites();
    assert!(session.favorite_recipes().is_empty());
    assert!(session.visible_favorites().is_empty());

    // Favorites exist but the search excludes them
    session.back();
    session.toggle_favorite("1");
    session.open_favorites();
    session.set_favorites_search("pizza".to_string());
    assert_eq!(session.favorite_recipes().len(), 1);
    assert!(session.visible_favorites().is_empty());
}

#[test]
fn test_unknown_recipe_id_is_ignored() {
    let (mut session, _dir) = create_test_session();
    session.select_recipe("no-such-id");
    assert!(session.view().is_browse());
    assert!(session.selected_recipe().is_none());
}

#[test]
fn test_open_favorites_only_from_browse() {
    let (mut session, _dir) = create_test_session();
    session.select_recipe("3");

    session.open_favorites();
    assert!(session.view().is_detail());
}

#[test]
fn test_first_toggle_creates_single_favorite() {
    let (mut session, _dir) = create_test_session();
    assert!(session.favorites().is_empty());

    assert_eq!(session.toggle_favorite("5"), ToggleOutcome::Added);
    assert_eq!(session.favorites().len(), 1);
    assert_eq!(titles(&session.favorite_recipes()), ["Thai Green Curry"]);
    assert!(session.is_favorite("5"));
}

#[test]
fn test_favorite_recipes_follow_catalog_order() {
    let (mut session, _dir) = create_test_session();
    session.toggle_favorite("6");
    session.toggle_favorite("2");
    session.toggle_favorite("4");

    assert_eq!(
        titles(&session.favorite_recipes()),
        [
            "Classic Caesar Salad",
            "Grilled Salmon with Herbs",
            "Margherita Pizza",
        ]
    );
}

#[test]
fn test_visible_recipes_follow_filter_inputs() {
    let (mut session, _dir) = create_test_session();

    session.set_search("italian".to_string());
    assert_eq!(
        titles(&session.visible_recipes()),
        ["Creamy Mushroom Risotto", "Margherita Pizza"]
    );

    session.set_search(String::new());
    assert_eq!(session.visible_recipes().len(), 6);

    session.toggle_ingredient_filter("Butter");
    assert_eq!(
        titles(&session.visible_recipes()),
        ["Creamy Mushroom Risotto", "Chocolate Lava Cake"]
    );
}

#[test]
fn test_ingredient_choices_come_from_the_catalog() {
    let (session, _dir) = create_test_session();
    let choices = session.ingredient_choices();
    assert!(choices.iter().any(|i| i == "Garlic"));
    assert!(choices.iter().any(|i| i == "Arborio rice"));
}

#[test]
fn test_favorites_persist_across_sessions() {
    let dir = tempfile::TempDir::new().unwrap();

    {
        let mut session = Session::new(builtin_catalog(), FavoritesBook::open(storage_at(&dir)));
        session.toggle_favorite("6");
    }

    let session = Session::new(builtin_catalog(), FavoritesBook::open(storage_at(&dir)));
    assert!(session.is_favorite("6"));
    assert_eq!(titles(&session.favorite_recipes()), ["Margherita Pizza"]);
}
