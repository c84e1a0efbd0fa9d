//! Presentation startup.
//!
//! Reads the settings element, turns the document's `<page>` elements into a
//! navigable deck, and applies the stylesheet, theme class and navigation
//! controls to the document exactly once.

use crate::constants::{classes, settings as defaults};
use crate::document::{Control, Document, Element};
use crate::export::ExportJob;
use crate::navigator::{Navigator, Visibility};
use crate::stylesheet::Stylesheet;
use crate::types::{Display, NavAction, Settings, Theme};

/// Read presentation settings from the document head.
///
/// A missing settings element is not an error: every value falls back to
/// its default. The theme is taken verbatim.
pub fn parse_settings(document: &Document) -> Settings {
    let Some(element) = document.head.settings.as_ref() else {
        return Settings {
            title: document_title(document),
            ..Settings::default()
        };
    };

    Settings {
        version: element
            .attribute("version")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults::DEFAULT_VERSION)
            .to_string(),
        title: element
            .attribute("title")
            .filter(|t| !t.is_empty())
            .map_or_else(|| document_title(document), str::to_string),
        theme: element
            .attribute("theme")
            .filter(|t| !t.is_empty())
            .map_or_else(Theme::default, Theme::new),
    }
}

fn document_title(document: &Document) -> String {
    document
        .head
        .title
        .clone()
        .unwrap_or_else(|| defaults::DEFAULT_TITLE.to_string())
}

/// A slide element owned by the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    element: Element,
}

impl Slide {
    /// Wrap a `<page>` element, marking it as a slide.
    pub fn new(mut element: Element) -> Self {
        element.add_class(classes::SLIDE);
        Self { element }
    }

    /// The underlying element.
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Plain text of the slide.
    pub fn text(&self) -> String {
        self.element.inner_text()
    }
}

impl Visibility for Slide {
    fn show(&mut self) {
        self.element.display = Display::Block;
        self.element.add_class(classes::ACTIVE);
    }

    fn hide(&mut self) {
        self.element.display = Display::Hidden;
        self.element.remove_class(classes::ACTIVE);
    }

    fn is_visible(&self) -> bool {
        self.element.display.is_visible()
    }
}

/// A bootstrapped presentation: settings, deck and the styled document.
#[derive(Debug, Clone)]
pub struct Presentation {
    settings: Settings,
    navigator: Navigator<Slide>,
    document: Document,
}

impl Presentation {
    /// Take over `document` and prepare it for presenting.
    pub fn bootstrap(mut document: Document) -> Self {
        let settings = parse_settings(&document);
        let slides = document.take_pages().into_iter().map(Slide::new).collect();
        let navigator = Navigator::new(slides);

        document.head.stylesheets.push(Stylesheet::generate());
        document.body.add_class(&settings.theme.body_class());
        for action in [NavAction::Previous, NavAction::Next] {
            document.body.controls.push(Control::for_action(action));
        }

        tracing::info!(
            "Presentation '{}' v{} ready with {} slides (theme: {})",
            settings.title,
            settings.version,
            navigator.len(),
            settings.theme
        );

        Self { settings, navigator, document }
    }

    /// Presentation settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The slide navigator.
    pub const fn navigator(&self) -> &Navigator<Slide> {
        &self.navigator
    }

    /// The styled document, without its pages.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The stylesheet injected at startup.
    pub fn stylesheet(&self) -> Option<&Stylesheet> {
        self.document.head.stylesheets.first()
    }

    /// Navigate in the given direction.
    pub fn navigate(&mut self, action: NavAction) {
        match action {
            NavAction::Previous => self.navigator.previous(),
            NavAction::Next => self.navigator.next(),
        }
    }

    /// Jump to a slide by index; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        self.navigator.go_to(index);
    }

    /// Snapshot of the slide texts for export.
    pub fn export_job(&self) -> ExportJob {
        ExportJob {
            title: self.settings.title.clone(),
            pages: self.navigator.slides().iter().map(Slide::text).collect(),
        }
    }
}
