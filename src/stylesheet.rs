//! Generated presentation stylesheet.
//!
//! The stylesheet is a fixed list of selector rules resolved into terminal
//! styles. It is generated once and injected into the document head by the
//! bootstrapper; the renderer looks rules up by selector or by the classes of
//! the element being drawn.

use ratatui::style::{Color, Modifier, Style};

use crate::constants::classes;

/// A single selector and the style it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Selector the rule matches, e.g. `body.pages-dark`.
    pub selector: String,
    /// Style applied to matching elements.
    pub style: Style,
}

impl Rule {
    fn new(selector: impl Into<String>, style: Style) -> Self {
        Self { selector: selector.into(), style }
    }
}

/// Ordered set of rules; later rules win on conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Build the presenter's stylesheet.
    pub fn generate() -> Self {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let rules = vec![
            Rule::new("body", Style::default()),
            Rule::new(
                format!("body.{}light", classes::THEME_PREFIX),
                Style::default()
                    .bg(Color::Rgb(0xfa, 0xfa, 0xfa))
                    .fg(Color::Rgb(0x11, 0x11, 0x11)),
            ),
            Rule::new(
                format!("body.{}dark", classes::THEME_PREFIX),
                Style::default()
                    .bg(Color::Rgb(0x11, 0x11, 0x11))
                    .fg(Color::Rgb(0xee, 0xee, 0xee)),
            ),
            Rule::new("page h1", heading.add_modifier(Modifier::UNDERLINED)),
            Rule::new("page h2", heading),
            Rule::new("page h3", heading),
            Rule::new("page h4", heading.add_modifier(Modifier::ITALIC)),
            Rule::new(
                format!(".{}", classes::NAV_BUTTON),
                Style::default()
                    .bg(Color::Rgb(0x40, 0x40, 0x40))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Rule::new(
                format!(".{}", classes::FOOTER),
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            ),
        ];
        Self { rules }
    }

    /// All rules in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Style of the rule with exactly this selector.
    pub fn rule(&self, selector: &str) -> Option<Style> {
        self.rules
            .iter()
            .filter(|r| r.selector == selector)
            .map(|r| r.style)
            .reduce(Style::patch)
    }

    /// Body style for the given body classes. Classes without a rule, such as
    /// an unknown theme, contribute nothing.
    pub fn body_style(&self, body_classes: &[String]) -> Style {
        body_classes
            .iter()
            .filter_map(|class| self.rule(&format!("body.{class}")))
            .fold(self.rule("body").unwrap_or_default(), Style::patch)
    }

    /// Style of a heading of `level` inside a slide.
    pub fn heading_style(&self, level: u8) -> Style {
        self.rule(&format!("page h{level}")).unwrap_or_default()
    }

    /// Style of an element carrying `class`.
    pub fn class_style(&self, class: &str) -> Style {
        self.rule(&format!(".{class}")).unwrap_or_default()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::generate()
    }
}
