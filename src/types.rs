use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Visual theme preference. Anything other than "dark" reads as light, so a
/// corrupt stored value degrades to the default rather than erroring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str_lossy(raw: &str) -> Self {
        match raw {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, with = "time::serde::timestamp::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// Tools that open as modal panels over the chat view. Chat itself is not a
/// tool: it is the base view, so `from_param("chat")` is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolPanel {
    Jobs,
    Products,
}

impl ToolPanel {
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "jobs" => Some(ToolPanel::Jobs),
            "products" => Some(ToolPanel::Products),
            _ => None,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            ToolPanel::Jobs => "jobs",
            ToolPanel::Products => "products",
        }
    }
}

/// Which modal is currently shown. At most one is visible; the chat view is
/// always present beneath it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Jobs,
    Products,
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard { tool: Option<ToolPanel> },
    Login,
}

impl Route {
    pub fn dashboard() -> Self {
        Route::Dashboard { tool: None }
    }

    pub fn is_dashboard(self) -> bool {
        matches!(self, Route::Dashboard { .. })
    }
}

/// Outcome of a controller operation: either the current route stays, or the
/// view layer should switch routes (the old cross-page redirect).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Stay,
    Goto(Route),
}
