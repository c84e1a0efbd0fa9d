//! Core type definitions shared across the presenter.

use std::fmt;

use crate::constants::{classes, settings};

/// Display mode of an element, the terminal counterpart of `display: block | none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Rendered.
    #[default]
    Block,
    /// Not rendered.
    Hidden,
}

impl Display {
    /// Whether this mode renders the element.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Block)
    }
}

/// Direction of a navigation request coming from a key or a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Go back one slide.
    Previous,
    /// Go forward one slide.
    Next,
}

impl NavAction {
    /// Label drawn on the control bound to this action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Previous => "◀",
            Self::Next => "▶",
        }
    }

    /// Class that distinguishes the control bound to this action.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Previous => classes::PREV,
            Self::Next => classes::NEXT,
        }
    }
}

/// Theme name as written in the deck. Unknown names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme(pub String);

impl Theme {
    /// Create a theme from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the theme name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class added to the body for this theme, e.g. `pages-dark`.
    pub fn body_class(&self) -> String {
        format!("{}{}", classes::THEME_PREFIX, self.0)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(settings::DEFAULT_THEME)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation settings read from the document at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Presentation version string.
    pub version: String,
    /// Presentation title, used by the footer and the export labels.
    pub title: String,
    /// Selected theme.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: settings::DEFAULT_VERSION.to_string(),
            title: settings::DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
        }
    }
}
