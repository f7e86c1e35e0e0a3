use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::gui::message::{FavoritesMessage, Message};
use crate::gui::state::AppState;
use crate::gui::widgets;

pub fn view<'a>(state: &'a AppState, search_term: &'a str) -> Element<'a, Message> {
    let session = &state.session;
    let all_favorites = session.favorite_recipes();
    let visible = session.visible_favorites();

    let header = row![
        button(text("← Back").size(14))
            .style(button::text)
            .on_press(Message::Favorites(FavoritesMessage::Back)),
        text("My Favorites").size(28),
        Space::new().width(Length::Fill),
        widgets::view_mode_toggle(state.favorites_view_mode, |mode| {
            Message::Favorites(FavoritesMessage::ViewModeChanged(mode))
        }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let search = text_input("Search your favorites...", search_term)
        .on_input(|term| Message::Favorites(FavoritesMessage::SearchChanged(term)))
        .padding(8);

    let mut page = column![header, search].spacing(12).padding(16);

    if !all_favorites.is_empty() {
        let noun = if all_favorites.len() == 1 {
            "recipe"
        } else {
            "recipes"
        };
        page = page.push(text(format!("{} favorite {noun}", all_favorites.len())).size(12));
    }

    let body: Element<'a, Message> = if all_favorites.is_empty() {
        column![
            widgets::empty_state(
                "No favorites yet",
                "Start adding recipes to your favorites by tapping the heart icon!",
            ),
            container(
                button(text("Browse Recipes").size(14))
                    .on_press(Message::Favorites(FavoritesMessage::Back))
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
        ]
        .spacing(4)
        .into()
    } else if visible.is_empty() {
        widgets::empty_state("No matching favorites", "Try adjusting your search")
    } else {
        widgets::recipe_grid(
            &visible,
            state.favorites_view_mode,
            |_| true,
            |recipe| Message::Favorites(FavoritesMessage::RecipeSelected(recipe.id.clone())),
            |recipe| Message::Favorites(FavoritesMessage::ToggleFavorite(recipe.id.clone())),
        )
    };

    page.push(scrollable(body).height(Length::Fill)).into()
}
