//! End-to-end tests for loading, navigating and exporting a deck.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use pages::bootstrap::Presentation;
use pages::document::Document;
use pages::export::{
    export_pdf, DocumentOptions, ExportError, ExportOutcome, PdfDocument, PdfLibrary,
};
use pages::navigator::Visibility;
use pages::types::NavAction;

fn demo_deck() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("deck.xml")
}

fn visible(presentation: &Presentation) -> Vec<usize> {
    presentation
        .navigator()
        .slides()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_visible())
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_demo_deck_loads_with_settings() {
    let presentation = Presentation::bootstrap(Document::load(&demo_deck()).unwrap());
    let settings = presentation.settings();

    assert_eq!(settings.title, "Terminal Slides");
    assert_eq!(settings.version, "1.2.0");
    assert_eq!(settings.theme.as_str(), "dark");
    assert_eq!(presentation.navigator().len(), 3);
    assert!(presentation.document().body.classes.contains(&"pages-dark".to_string()));
}

#[test]
fn test_missing_deck_file_is_io_error() {
    let err = Document::load(Path::new("does/not/exist.xml")).unwrap_err();
    assert!(matches!(err, pages::error::Error::Io { path: Some(_), .. }));
}

#[test]
fn test_three_slide_walkthrough() {
    let mut presentation = Presentation::bootstrap(Document::load(&demo_deck()).unwrap());
    assert_eq!(visible(&presentation), vec![0]);

    presentation.navigate(NavAction::Next);
    assert_eq!(presentation.navigator().cursor(), 1);
    assert_eq!(visible(&presentation), vec![1]);

    presentation.navigate(NavAction::Next);
    presentation.navigate(NavAction::Next);
    assert_eq!(presentation.navigator().cursor(), 2);
    assert_eq!(visible(&presentation), vec![2]);

    presentation.navigate(NavAction::Previous);
    assert_eq!(presentation.navigator().cursor(), 1);

    presentation.go_to(7);
    assert_eq!(presentation.navigator().cursor(), 1);
    assert_eq!(visible(&presentation), vec![1]);
}

#[test]
fn test_empty_deck_has_nothing_visible() {
    let mut presentation = Presentation::bootstrap(Document::parse("<html><body/></html>").unwrap());
    presentation.navigate(NavAction::Next);
    presentation.navigate(NavAction::Previous);
    presentation.go_to(0);
    assert!(presentation.navigator().is_empty());
    assert!(visible(&presentation).is_empty());
}

struct LinesLibrary {
    lines: Arc<Mutex<Vec<String>>>,
}

struct LinesDoc {
    lines: Arc<Mutex<Vec<String>>>,
}

impl PdfLibrary for LinesLibrary {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn create_document(&self, _options: &DocumentOptions) -> Result<Box<dyn PdfDocument>, ExportError> {
        Ok(Box::new(LinesDoc { lines: Arc::clone(&self.lines) }))
    }
}

impl PdfDocument for LinesDoc {
    fn add_page(&mut self) {
        self.lines.lock().unwrap().push("--".to_string());
    }

    fn text(&mut self, text: &str, _x: f32, _y: f32) {
        self.lines.lock().unwrap().push(text.to_string());
    }

    fn save(self: Box<Self>, filename: &Path) -> Result<(), ExportError> {
        std::fs::write(filename, self.lines.lock().unwrap().join("\n")).map_err(|source| {
            ExportError::Io { source, path: filename.to_path_buf() }
        })
    }
}

#[tokio::test]
async fn test_export_writes_one_page_per_slide() {
    let presentation = Presentation::bootstrap(Document::load(&demo_deck()).unwrap());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slides.pdf");
    let library: Arc<dyn PdfLibrary> = Arc::new(LinesLibrary { lines: Arc::default() });

    let outcome = export_pdf(presentation.export_job(), Some(library), &path).await.unwrap();

    assert_eq!(outcome, ExportOutcome::Saved { path: path.clone(), pages: 3 });
    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "Page 1: Terminal Slides");
    assert_eq!(lines[1], "Terminal Slides");
    assert!(written.contains("Page 3: Terminal Slides"));
    assert_eq!(lines.iter().filter(|l| **l == "--").count(), 2);
}

#[tokio::test]
async fn test_export_without_library_writes_nothing() {
    let presentation = Presentation::bootstrap(Document::load(&demo_deck()).unwrap());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slides.pdf");

    let outcome = export_pdf(presentation.export_job(), None, &path).await.unwrap();

    assert_eq!(outcome, ExportOutcome::Unavailable);
    assert!(!path.exists());
}
