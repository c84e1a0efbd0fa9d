//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Presentation settings defaults and the element names the deck loader looks for.
pub mod settings {
    /// Version reported when the settings element has no `version` attribute.
    pub const DEFAULT_VERSION: &str = "1.0.0";

    /// Title used when neither the settings element nor the document has one.
    pub const DEFAULT_TITLE: &str = "Pages Slideshow";

    /// Theme used when the settings element has no `theme` attribute.
    pub const DEFAULT_THEME: &str = "light";

    /// Tag of the settings element inside the document head.
    pub const SETTINGS_TAG: &str = "pages";

    /// Tag of a slide element.
    pub const PAGE_TAG: &str = "page";
}

/// Class names shared by the bootstrapper, stylesheet and renderer.
pub mod classes {
    /// Added to every element captured as a slide.
    pub const SLIDE: &str = "pages-slide";

    /// Carried by the visible slide only.
    pub const ACTIVE: &str = "active";

    /// Prefix of the theme class added to the body.
    pub const THEME_PREFIX: &str = "pages-";

    /// Shared class of both navigation controls.
    pub const NAV_BUTTON: &str = "pages-nav-btn";

    /// Previous control.
    pub const PREV: &str = "pages-prev";

    /// Next control.
    pub const NEXT: &str = "pages-next";

    /// Slide footer.
    pub const FOOTER: &str = "page-footer";
}

/// PDF export constants.
pub mod export {
    /// Output file name when the caller supplies none.
    pub const DEFAULT_FILENAME: &str = "slides.pdf";

    /// Horizontal position of the page label, in document units.
    pub const LABEL_X: f32 = 20.0;

    /// Vertical position of the page label, in document units.
    pub const LABEL_Y: f32 = 20.0;

    /// Horizontal position of the slide text, in document units.
    pub const BODY_X: f32 = 20.0;

    /// Vertical position of the slide text, in document units.
    pub const BODY_Y: f32 = 50.0;

    /// A4 width in millimetres.
    pub const A4_WIDTH_MM: f32 = 210.0;

    /// A4 height in millimetres.
    pub const A4_HEIGHT_MM: f32 = 297.0;

    /// Font size of exported text, in points.
    pub const FONT_SIZE_PT: f32 = 16.0;

    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT_FACTOR: f32 = 1.15;
}

/// Async task constants.
pub mod async_tasks {
    /// Channel buffer size for async task communication.
    pub const CHANNEL_BUFFER_SIZE: usize = 10;
}

/// UI layout constants.
pub mod ui {
    /// Width of a navigation control in cells.
    pub const CONTROL_WIDTH: u16 = 5;

    /// Height of a navigation control in cells.
    pub const CONTROL_HEIGHT: u16 = 3;

    /// Gap between a control and the screen edge.
    pub const CONTROL_MARGIN: u16 = 2;

    /// Horizontal padding inside the slide area.
    pub const SLIDE_PADDING: u16 = 6;

    /// Event poll interval of the main loop in milliseconds.
    pub const POLL_INTERVAL_MS: u64 = 50;
}
