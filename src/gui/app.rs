use std::time::Duration;

use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Size, Subscription, Task, Theme, keyboard, time, window};

use crate::core::favorites::{JsonFileStorage, ToggleOutcome};
use crate::core::session::{Session, View};

use super::message::{BrowseMessage, DetailMessage, FavoritesMessage, Message};
use super::screens;
use super::state::{AppState, Toast};
use super::widgets;

const TOAST_DURATION: Duration = Duration::from_millis(2000);

pub struct RecipeBookApp {
    state: AppState,
}

/// Run the application until the window closes.
pub fn run(session: Session<JsonFileStorage>) -> iced::Result {
    iced::application(
        move || (RecipeBookApp::new(session.clone()), Task::none()),
        RecipeBookApp::update,
        RecipeBookApp::view,
    )
    .title(RecipeBookApp::title)
    .theme(RecipeBookApp::theme)
    .subscription(RecipeBookApp::subscription)
    .window(window::Settings {
        size: Size::new(960.0, 720.0),
        min_size: Some(Size::new(640.0, 480.0)),
        ..Default::default()
    })
    .run()
}

impl RecipeBookApp {
    fn new(session: Session<JsonFileStorage>) -> Self {
        Self {
            state: AppState::new(session),
        }
    }

    fn title(&self) -> String {
        match self.state.session.view() {
            View::Browse => "Recipe Book".to_string(),
            View::Detail { .. } => match self.state.session.selected_recipe() {
                Some(recipe) => format!("{} - Recipe Book", recipe.title),
                None => "Recipe Book".to_string(),
            },
            View::Favorites { .. } => "My Favorites - Recipe Book".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browse(msg) => self.update_browse(msg),
            Message::Detail(msg) => self.update_detail(msg),
            Message::Favorites(msg) => self.update_favorites(msg),
            Message::EscapePressed => self.state.session.back(),
            Message::DismissToast => self.state.toast = None,
            Message::Noop => {}
        }
        Task::none()
    }

    fn update_browse(&mut self, message: BrowseMessage) {
        match message {
            BrowseMessage::SearchChanged(term) => self.state.session.set_search(term),
            BrowseMessage::ToggleFilterPanel => {
                self.state.show_filters = !self.state.show_filters;
            }
            BrowseMessage::IngredientToggled(ingredient) => {
                self.state.session.toggle_ingredient_filter(&ingredient);
            }
            BrowseMessage::ClearIngredients => self.state.session.clear_ingredient_filters(),
            BrowseMessage::ViewModeChanged(mode) => self.state.browse_view_mode = mode,
            BrowseMessage::RecipeSelected(id) => self.state.session.select_recipe(&id),
            BrowseMessage::OpenFavorites => self.state.session.open_favorites(),
            BrowseMessage::ToggleFavorite(id) => self.toggle_favorite(&id),
        }
    }

    fn update_detail(&mut self, message: DetailMessage) {
        match message {
            DetailMessage::Back => self.state.session.back(),
            DetailMessage::ToggleFavorite(id) => self.toggle_favorite(&id),
        }
    }

    fn update_favorites(&mut self, message: FavoritesMessage) {
        match message {
            FavoritesMessage::Back => self.state.session.back(),
            FavoritesMessage::SearchChanged(term) => self.state.session.set_favorites_search(term),
            FavoritesMessage::ViewModeChanged(mode) => self.state.favorites_view_mode = mode,
            FavoritesMessage::RecipeSelected(id) => self.state.session.select_recipe(&id),
            FavoritesMessage::ToggleFavorite(id) => self.toggle_favorite(&id),
        }
    }

    fn toggle_favorite(&mut self, id: &str) {
        let outcome = self.state.session.toggle_favorite(id);
        self.state.toast = Some(Toast::new(match outcome {
            ToggleOutcome::Added => "Added to favorites",
            ToggleOutcome::Removed => "Removed from favorites",
        }));
    }

    fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.state.session.view() {
            View::Browse => screens::browse::view(&self.state),
            View::Detail { .. } => screens::detail::view(&self.state),
            View::Favorites { search_term } => screens::favorites::view(&self.state, search_term),
        };

        let Some(toast) = &self.state.toast else {
            return content;
        };

        let toast_row = row![
            Space::new().width(iced::Length::Fill),
            container(widgets::toast(toast)).padding(16),
        ];
        stack![
            container(content)
                .width(iced::Length::Fill)
                .height(iced::Length::Fill),
            column![Space::new().height(iced::Length::Fill), toast_row],
        ]
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            } => Message::EscapePressed,
            _ => Message::Noop,
        });

        let toast_sub = if self.state.toast.is_some() {
            time::every(TOAST_DURATION).map(|_| Message::DismissToast)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, toast_sub])
    }
}
