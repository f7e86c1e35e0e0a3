use crate::core::favorites::JsonFileStorage;
use crate::core::session::Session;

/// Grid/list presentation toggle for recipe collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Transient notification shown after a favorites toggle.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
}

impl Toast {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The owned session plus presentation-only toggles. Which view is shown
/// lives in the session; everything here is cosmetic.
#[derive(Debug)]
pub struct AppState {
    pub session: Session<JsonFileStorage>,
    pub browse_view_mode: ViewMode,
    pub favorites_view_mode: ViewMode,
    pub show_filters: bool,
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(session: Session<JsonFileStorage>) -> Self {
        Self {
            session,
            browse_view_mode: ViewMode::default(),
            favorites_view_mode: ViewMode::default(),
            show_filters: false,
            toast: None,
        }
    }
}
