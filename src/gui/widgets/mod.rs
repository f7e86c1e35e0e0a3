use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::core::catalog::{Difficulty, Recipe};

use super::message::Message;
use super::state::{Toast, ViewMode};

pub type ButtonStyleFn = fn(&Theme, button::Status) -> button::Style;

/// Small rounded label, used for categories and ingredient previews.
pub fn badge<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(label).size(11))
        .padding([2.0, 8.0])
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.05).into()),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

pub fn difficulty_badge<'a>(difficulty: Difficulty) -> Element<'a, Message> {
    let color = match difficulty {
        Difficulty::Easy => Color::from_rgb8(46, 125, 50),
        Difficulty::Medium => Color::from_rgb8(230, 140, 20),
        Difficulty::Hard => Color::from_rgb8(198, 40, 40),
    };
    container(text(difficulty.name()).size(11).color(Color::WHITE))
        .padding([2.0, 8.0])
        .style(move |_theme: &Theme| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// One clickable recipe card: category badge, heart toggle, title, cook
/// time/servings line and the first three ingredients.
pub fn recipe_card<'a>(
    recipe: &'a Recipe,
    is_favorite: bool,
    on_select: Message,
    on_toggle: Message,
) -> Element<'a, Message> {
    let heart = button(text(if is_favorite { "♥" } else { "♡" }).size(16))
        .on_press(on_toggle)
        .style(button::text)
        .padding(2);

    let meta = row![
        text(format!("{} min", recipe.cook_time)).size(12),
        Space::new().width(Length::Fill),
        text(format!("{} servings", recipe.servings)).size(12),
    ];

    let mut ingredients = row![].spacing(4);
    for ingredient in recipe.ingredients.iter().take(3) {
        ingredients = ingredients.push(badge(ingredient.as_str()));
    }
    if recipe.ingredients.len() > 3 {
        ingredients = ingredients.push(badge(format!("+{} more", recipe.ingredients.len() - 3)));
    }

    let content = column![
        row![
            badge(recipe.category.as_str()),
            Space::new().width(Length::Fill),
            heart,
        ]
        .align_y(Alignment::Center),
        text(recipe.title.as_str()).size(16),
        meta,
        ingredients,
    ]
    .spacing(6)
    .padding(10);

    mouse_area(
        container(content)
            .style(container::bordered_box)
            .width(Length::Fill),
    )
    .on_press(on_select)
    .into()
}

/// Lay recipe cards out three-up in grid mode, one per row in list mode.
/// Trailing slots are padded so cards keep a constant width.
pub fn recipe_grid<'a>(
    recipes: &[&'a Recipe],
    mode: ViewMode,
    is_favorite: impl Fn(&Recipe) -> bool,
    on_select: impl Fn(&Recipe) -> Message,
    on_toggle: impl Fn(&Recipe) -> Message,
) -> Element<'a, Message> {
    let columns = match mode {
        ViewMode::Grid => 3,
        ViewMode::List => 1,
    };
    let mut rows = column![].spacing(12);
    for chunk in recipes.chunks(columns) {
        let mut cards = row![].spacing(12);
        for recipe in chunk {
            cards = cards.push(recipe_card(
                recipe,
                is_favorite(recipe),
                on_select(recipe),
                on_toggle(recipe),
            ));
        }
        for _ in chunk.len()..columns {
            cards = cards.push(Space::new().width(Length::Fill));
        }
        rows = rows.push(cards);
    }
    rows.width(Length::Fill).into()
}

pub fn view_mode_toggle<'a>(
    current: ViewMode,
    to_message: impl Fn(ViewMode) -> Message,
) -> Element<'a, Message> {
    let grid_style: ButtonStyleFn = if current == ViewMode::Grid {
        button::primary
    } else {
        button::secondary
    };
    let list_style: ButtonStyleFn = if current == ViewMode::List {
        button::primary
    } else {
        button::secondary
    };
    row![
        button(text("Grid").size(12))
            .style(grid_style)
            .on_press(to_message(ViewMode::Grid)),
        button(text("List").size(12))
            .style(list_style)
            .on_press(to_message(ViewMode::List)),
    ]
    .spacing(4)
    .into()
}

/// Centered placeholder for an empty result list.
pub fn empty_state<'a>(title: &'a str, hint: &'a str) -> Element<'a, Message> {
    container(
        column![text(title).size(18), text(hint).size(13)]
            .spacing(8)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}

pub fn toast<'a>(toast: &'a Toast) -> Element<'a, Message> {
    container(text(toast.text.as_str()).size(14).color(Color::WHITE))
        .padding([8.0, 16.0])
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
