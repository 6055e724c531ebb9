// src/view.rs

/// The four panes. Exactly one is on screen; switching never touches domain
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Quest,
    Vault,
    Create,
    Feed,
}

impl View {
    /// Navigation-bar order.
    pub fn all() -> Vec<View> {
        vec![
            View::Quest,
            View::Vault,
            View::Create,
            View::Feed,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            View::Quest => "Quest",
            View::Vault => "Vault",
            View::Create => "New",
            View::Feed => "Feed",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            View::Quest => "🎯",
            View::Vault => "🛡",
            View::Create => "⚡",
            View::Feed => "📣",
        }
    }

    /// Number key that jumps to this view.
    pub fn hotkey(&self) -> char {
        match self {
            View::Quest => '1',
            View::Vault => '2',
            View::Create => '3',
            View::Feed => '4',
        }
    }

    pub fn from_hotkey(c: char) -> Option<View> {
        View::all().into_iter().find(|v| v.hotkey() == c)
    }

    pub fn next(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        views[(idx + 1) % views.len()]
    }

    pub fn prev(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        views[(idx + views.len() - 1) % views.len()]
    }
}
