//! Document model and deck loading.
//!
//! A deck file is a small XML document. The loader only discovers the
//! elements the presenter cares about: the `<title>` and `<pages>` settings
//! element in the head, the body classes, and every `<page>` element with its
//! text. Everything else is treated as text containers.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::constants::{classes, settings};
use crate::error::{Error, Result};
use crate::stylesheet::Stylesheet;
use crate::types::{Display, NavAction};

/// Kind of a text run inside a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `h1` to `h4` heading; the level is kept.
    Heading(u8),
    /// Any other text.
    Paragraph,
}

/// A run of text collected from one block-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// How the run is styled.
    pub kind: BlockKind,
    /// Whitespace-collapsed text.
    pub text: String,
}

/// An element of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Class list, without duplicates.
    pub classes: Vec<String>,
    /// Attributes other than `class`, in document order.
    pub attributes: Vec<(String, String)>,
    /// Current display mode.
    pub display: Display,
    /// Text content in document order.
    pub blocks: Vec<TextBlock>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            display: Display::default(),
            blocks: Vec::new(),
        }
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add `class` unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove `class` if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Plain text of the element, one line per block.
    pub fn inner_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An on-screen navigation control appended to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Text drawn on the control.
    pub label: String,
    /// Class list of the control.
    pub classes: Vec<String>,
    /// Navigation triggered by clicking the control.
    pub action: NavAction,
}

impl Control {
    /// Build the control for `action` with its standard label and classes.
    pub fn for_action(action: NavAction) -> Self {
        Self {
            label: action.label().to_string(),
            classes: vec![classes::NAV_BUTTON.to_string(), action.class().to_string()],
            action,
        }
    }
}

/// Document head.
#[derive(Debug, Clone, Default)]
pub struct Head {
    /// Content of `<title>`, if any.
    pub title: Option<String>,
    /// The `<pages>` settings element, if any.
    pub settings: Option<Element>,
    /// Stylesheets injected at startup.
    pub stylesheets: Vec<Stylesheet>,
}

/// Document body.
#[derive(Debug, Clone, Default)]
pub struct Body {
    /// Body class list.
    pub classes: Vec<String>,
    /// `<page>` elements in document order, until the bootstrapper takes them.
    pub pages: Vec<Element>,
    /// Controls appended at startup.
    pub controls: Vec<Control>,
}

impl Body {
    /// Add `class` to the body unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }
}

/// A loaded deck document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Head section.
    pub head: Head,
    /// Body section.
    pub body: Body,
}

impl Document {
    /// Read and parse a deck file.
    pub fn load(path: &Path) -> Result<Self> {
        let xml = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let document = Self::parse(&xml).map_err(|e| e.with_file(path))?;
        tracing::info!(
            "Loaded {} pages from {}",
            document.body.pages.len(),
            path.display()
        );
        Ok(document)
    }

    /// Parse a deck from XML text.
    pub fn parse(xml: &str) -> Result<Self> {
        // No trimming: inline runs are joined exactly as written.
        let mut reader = Reader::from_str(xml);

        let mut builder = DocumentBuilder::default();
        loop {
            let event = reader.read_event().map_err(|e| {
                Error::parse(format!("{e} at byte {}", reader.buffer_position()), None)
            })?;
            match event {
                Event::Start(e) => builder.open(&e, false)?,
                Event::Empty(e) => builder.open(&e, true)?,
                Event::End(e) => builder.close(&tag_name(e.name().as_ref())),
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| Error::parse(e.to_string(), None))?;
                    builder.text(&text);
                }
                Event::CData(c) => builder.text(&String::from_utf8_lossy(&c)),
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(builder.finish())
    }

    /// Move the `<page>` elements out of the body.
    pub fn take_pages(&mut self) -> Vec<Element> {
        std::mem::take(&mut self.body.pages)
    }
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        _ => None,
    }
}

fn is_inline(tag: &str) -> bool {
    matches!(
        tag,
        "a" | "b" | "i" | "em" | "strong" | "span" | "code" | "small" | "sub" | "sup" | "u" | "mark"
    )
}

fn read_attributes(start: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::parse(e.to_string(), None))?;
        let key = tag_name(attr.key.as_ref());
        let value = attr
            .unescape_value()
            .map_err(|e| Error::parse(e.to_string(), None))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}

/// Page being collected, with the open elements nested inside it.
#[derive(Debug)]
struct PageBuilder {
    /// Position reserved for this page in `body.pages`.
    slot: usize,
    element: Element,
    open: Vec<String>,
    pending: String,
    pending_kind: BlockKind,
}

impl PageBuilder {
    fn current_kind(&self) -> BlockKind {
        self.open
            .iter()
            .rev()
            .filter(|tag| !is_inline(tag))
            .find_map(|tag| heading_level(tag))
            .map_or(BlockKind::Paragraph, BlockKind::Heading)
    }

    fn push_text(&mut self, text: &str) {
        if self.pending.trim().is_empty() && !text.trim().is_empty() {
            self.pending_kind = self.current_kind();
        }
        self.pending.push_str(text);
    }

    fn flush(&mut self) {
        let text = collapse_whitespace(&self.pending);
        self.pending.clear();
        if !text.is_empty() {
            self.element.blocks.push(TextBlock { kind: self.pending_kind, text });
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Default)]
struct DocumentBuilder {
    document: Document,
    stack: Vec<String>,
    /// Pages currently open, outermost first. A nested page is still its own
    /// slide, and its text also belongs to every enclosing page.
    pages: Vec<PageBuilder>,
    title: Option<String>,
}

impl DocumentBuilder {
    /// Settings and title are only read from direct children of `<head>`.
    fn in_head(&self) -> bool {
        self.stack.last().is_some_and(|t| t == "head")
    }

    fn flush_pages(&mut self) {
        for page in &mut self.pages {
            page.flush();
        }
    }

    fn open(&mut self, start: &BytesStart<'_>, empty: bool) -> Result<()> {
        let tag = tag_name(start.name().as_ref());

        if tag == settings::PAGE_TAG {
            return self.open_page(start, tag, empty);
        }

        if !self.pages.is_empty() {
            for page in &mut self.pages {
                if !is_inline(&tag) {
                    page.flush();
                }
                if !empty {
                    page.open.push(tag.clone());
                }
            }
            return Ok(());
        }

        if tag == settings::SETTINGS_TAG && self.in_head() && self.document.head.settings.is_none() {
            let mut element = Element::new(tag.clone());
            element.attributes = read_attributes(start)?;
            self.document.head.settings = Some(element);
        } else if tag == "body" {
            if let Some((_, value)) = read_attributes(start)?.into_iter().find(|(k, _)| k == "class") {
                for class in value.split_whitespace() {
                    self.document.body.add_class(class);
                }
            }
        } else if tag == "title" && self.in_head() {
            self.title = Some(String::new());
        }

        if !empty {
            self.stack.push(tag);
        }
        Ok(())
    }

    fn open_page(&mut self, start: &BytesStart<'_>, tag: String, empty: bool) -> Result<()> {
        let mut element = Element::new(tag.clone());
        for (key, value) in read_attributes(start)? {
            if key == "class" {
                for class in value.split_whitespace() {
                    element.add_class(class);
                }
            } else {
                element.attributes.push((key, value));
            }
        }

        self.flush_pages();
        if empty {
            self.document.body.pages.push(element);
            return Ok(());
        }

        if self.pages.is_empty() {
            self.stack.push(tag.clone());
        }
        for page in &mut self.pages {
            page.open.push(tag.clone());
        }
        // Reserve the slot now so pages keep document order by start tag.
        let slot = self.document.body.pages.len();
        self.document.body.pages.push(Element::new(tag));
        self.pages.push(PageBuilder {
            slot,
            element,
            open: Vec::new(),
            pending: String::new(),
            pending_kind: BlockKind::Paragraph,
        });
        Ok(())
    }

    fn close(&mut self, tag: &str) {
        if let Some(innermost) = self.pages.last() {
            if innermost.open.is_empty() {
                self.close_page();
                return;
            }
            for page in &mut self.pages {
                if !is_inline(tag) {
                    page.flush();
                }
                page.open.pop();
            }
            return;
        }

        if tag == "title" {
            if let Some(title) = self.title.take() {
                let title = collapse_whitespace(&title);
                if self.document.head.title.is_none() && !title.is_empty() {
                    self.document.head.title = Some(title);
                }
            }
        }
        self.stack.pop();
    }

    /// End the innermost open page.
    fn close_page(&mut self) {
        self.flush_pages();
        let Some(page) = self.pages.pop() else {
            return;
        };
        self.store(page);
        for outer in &mut self.pages {
            outer.open.pop();
        }
        if self.pages.is_empty() {
            self.stack.pop();
        }
    }

    fn store(&mut self, page: PageBuilder) {
        if let Some(slot) = self.document.body.pages.get_mut(page.slot) {
            *slot = page.element;
        }
    }

    fn text(&mut self, text: &str) {
        if !self.pages.is_empty() {
            for page in &mut self.pages {
                page.push_text(text);
            }
        } else if let Some(title) = self.title.as_mut() {
            title.push_str(text);
        }
    }

    fn finish(mut self) -> Document {
        // Unterminated pages at end of input: keep what was collected.
        self.flush_pages();
        while let Some(page) = self.pages.pop() {
            self.store(page);
        }
        self.document
    }
}
