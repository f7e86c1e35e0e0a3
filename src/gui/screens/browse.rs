use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::gui::message::{BrowseMessage, Message};
use crate::gui::state::AppState;
use crate::gui::widgets::{self, ButtonStyleFn};

pub fn view(state: &AppState) -> Element<'_, Message> {
    let session = &state.session;

    let favorites_count = session.favorites().len();
    let favorites_label = if favorites_count > 0 {
        format!("♥ Favorites ({favorites_count})")
    } else {
        "♥ Favorites".to_string()
    };

    let header = row![
        text("Recipe Book").size(28),
        Space::new().width(Length::Fill),
        button(text(favorites_label).size(14))
            .on_press(Message::Browse(BrowseMessage::OpenFavorites)),
        widgets::view_mode_toggle(state.browse_view_mode, |mode| {
            Message::Browse(BrowseMessage::ViewModeChanged(mode))
        }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let filter_count = session.filter().selected_ingredients.len();
    let filter_label = if filter_count > 0 {
        format!("Filters ({filter_count})")
    } else {
        "Filters".to_string()
    };

    let search_row = row![
        text_input("Search recipes...", &session.filter().search_term)
            .on_input(|term| Message::Browse(BrowseMessage::SearchChanged(term)))
            .padding(8),
        button(text(filter_label).size(14))
            .on_press(Message::Browse(BrowseMessage::ToggleFilterPanel)),
    ]
    .spacing(8);

    let mut page = column![header, search_row].spacing(12).padding(16);

    if state.show_filters {
        page = page.push(filter_panel(state));
    }

    let recipes = session.visible_recipes();
    let body: Element<'_, Message> = if recipes.is_empty() {
        widgets::empty_state("No recipes found", "Try adjusting your search or filters")
    } else {
        widgets::recipe_grid(
            &recipes,
            state.browse_view_mode,
            |recipe| session.is_favorite(&recipe.id),
            |recipe| Message::Browse(BrowseMessage::RecipeSelected(recipe.id.clone())),
            |recipe| Message::Browse(BrowseMessage::ToggleFavorite(recipe.id.clone())),
        )
    };

    page.push(scrollable(body).height(Length::Fill)).into()
}

fn filter_panel(state: &AppState) -> Element<'_, Message> {
    let selected = &state.session.filter().selected_ingredients;
    let choices = state.session.ingredient_choices();

    let mut panel = column![text("Filter by ingredients:").size(13)].spacing(8);
    for chunk in choices.chunks(4) {
        let mut line = row![].spacing(4);
        for ingredient in chunk {
            let style: ButtonStyleFn = if selected.contains(ingredient) {
                button::primary
            } else {
                button::secondary
            };
            line = line.push(
                button(text(ingredient.clone()).size(11))
                    .style(style)
                    .on_press(Message::Browse(BrowseMessage::IngredientToggled(
                        ingredient.clone(),
                    ))),
            );
        }
        panel = panel.push(line);
    }
    if !selected.is_empty() {
        panel = panel.push(
            button(text("Clear filters").size(12))
                .style(button::text)
                .on_press(Message::Browse(BrowseMessage::ClearIngredients)),
        );
    }
    container(panel)
        .padding(12)
        .style(container::bordered_box)
        .width(Length::Fill)
        .into()
}
