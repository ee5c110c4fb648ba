// src/state/view.rs

/// The exclusive dashboard section on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Create,
    View,
    Results,
    Client,
}

impl ViewMode {
    /// Navigation order.
    pub const ALL: [ViewMode; 4] = [ViewMode::Create, ViewMode::View, ViewMode::Results, ViewMode::Client];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Create => "➕ Create query",
            ViewMode::View => "📋 View queries",
            ViewMode::Results => "📦 View results",
            ViewMode::Client => "👤 Create client",
        }
    }
}
