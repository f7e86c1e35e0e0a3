use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::gui::message::{DetailMessage, Message};
use crate::gui::state::AppState;
use crate::gui::widgets;

const COOKING_TIPS: [&str; 4] = [
    "Read through all instructions before starting to cook",
    "Prepare and measure all ingredients beforehand (mise en place)",
    "Taste and adjust seasoning as you cook",
    "Don't be afraid to customize the recipe to your preferences",
];

pub fn view(state: &AppState) -> Element<'_, Message> {
    let Some(recipe) = state.session.selected_recipe() else {
        return widgets::empty_state("Recipe not found", "Go back and pick another recipe");
    };
    let is_favorite = state.session.is_favorite(&recipe.id);

    let header = row![
        button(text("← Back").size(14))
            .style(button::text)
            .on_press(Message::Detail(DetailMessage::Back)),
        Space::new().width(Length::Fill),
        button(text(if is_favorite { "♥" } else { "♡" }).size(18))
            .style(button::text)
            .on_press(Message::Detail(DetailMessage::ToggleFavorite(
                recipe.id.clone()
            ))),
    ]
    .align_y(Alignment::Center);

    let meta = row![
        text(format!("{} min", recipe.cook_time)).size(13),
        text(format!("{} servings", recipe.servings)).size(13),
        widgets::difficulty_badge(recipe.difficulty),
        widgets::badge(recipe.category.as_str()),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut ingredients = column![text("Ingredients").size(18)].spacing(6);
    for ingredient in &recipe.ingredients {
        ingredients = ingredients.push(text(format!("• {ingredient}")).size(13));
    }

    let mut instructions = column![text("Instructions").size(18)].spacing(8);
    for (index, step) in recipe.instructions.iter().enumerate() {
        instructions = instructions.push(
            row![
                text(format!("{}.", index + 1)).size(13).width(24.0),
                text(step.as_str()).size(13),
            ]
            .spacing(8),
        );
    }

    let mut tips = column![text("Cooking Tips").size(18)].spacing(6);
    for tip in COOKING_TIPS {
        tips = tips.push(text(format!("• {tip}")).size(13));
    }

    let body = column![
        header,
        text(recipe.title.as_str()).size(28),
        meta,
        row![
            container(ingredients)
                .style(container::bordered_box)
                .padding(12)
                .width(Length::FillPortion(1)),
            container(instructions)
                .style(container::bordered_box)
                .padding(12)
                .width(Length::FillPortion(1)),
        ]
        .spacing(12),
        container(tips)
            .style(container::bordered_box)
            .padding(12)
            .width(Length::Fill),
    ]
    .spacing(16)
    .padding(16);

    scrollable(body).height(Length::Fill).into()
}
