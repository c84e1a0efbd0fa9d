//! PDF export of slide text.
//!
//! The exporter does not render PDFs itself. It drives a [`PdfLibrary`]
//! capability supplied by the caller, writing one page per slide with a
//! `Page {n}: {title}` label and the slide's plain text. When no library is
//! available the export is skipped with a logged diagnostic.

#[cfg(feature = "pdf")]
pub mod builtin;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::export as layout;

/// Errors that can occur during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An I/O error occurred while writing the output file
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// Output file being written.
        path: PathBuf,
    },

    /// The PDF library reported a failure
    #[error("PDF library error: {0}")]
    Library(String),

    /// The background export task did not complete
    #[error("Export task failed: {0}")]
    Task(String),
}

/// Unit of the coordinates passed to [`PdfDocument::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// CSS pixels at 96 per inch.
    #[default]
    Px,
    /// Points at 72 per inch.
    Pt,
    /// Millimetres.
    Mm,
}

impl Unit {
    /// Convert a length in this unit to millimetres.
    #[must_use]
    pub fn to_mm(self, value: f32) -> f32 {
        match self {
            Self::Px => value * 25.4 / 96.0,
            Self::Pt => value * 25.4 / 72.0,
            Self::Mm => value,
        }
    }
}

/// Page format of a new document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    /// ISO A4, portrait.
    #[default]
    A4,
}

impl PageFormat {
    /// Width and height in millimetres.
    #[must_use]
    pub const fn size_mm(self) -> (f32, f32) {
        match self {
            Self::A4 => (layout::A4_WIDTH_MM, layout::A4_HEIGHT_MM),
        }
    }
}

/// Options for [`PdfLibrary::create_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentOptions {
    /// Coordinate unit.
    pub unit: Unit,
    /// Page format.
    pub format: PageFormat,
}

/// A PDF library able to create documents.
pub trait PdfLibrary: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Start a new document with one empty page.
    fn create_document(&self, options: &DocumentOptions) -> Result<Box<dyn PdfDocument>, ExportError>;
}

/// A document under construction. Text goes to the most recently added page.
pub trait PdfDocument {
    /// Append a page and make it current.
    fn add_page(&mut self);

    /// Write `text` with its top-left corner at (`x`, `y`), measured from the
    /// top-left of the page. Newlines start new lines.
    fn text(&mut self, text: &str, x: f32, y: f32);

    /// Write the finished document to `filename`.
    fn save(self: Box<Self>, filename: &Path) -> Result<(), ExportError>;
}

/// Text to export, captured from the deck when the export starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportJob {
    /// Presentation title used in page labels.
    pub title: String,
    /// Plain text of each slide in deck order.
    pub pages: Vec<String>,
}

/// How an export ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written.
    Saved {
        /// Output file.
        path: PathBuf,
        /// Number of slides exported.
        pages: usize,
    },
    /// No PDF library was available; nothing was written.
    Unavailable,
}

/// The PDF library compiled into this build, if any.
pub fn default_library() -> Option<Arc<dyn PdfLibrary>> {
    #[cfg(feature = "pdf")]
    {
        Some(Arc::new(builtin::PrintPdfLibrary))
    }
    #[cfg(not(feature = "pdf"))]
    {
        None
    }
}

/// Log the missing-library diagnostic.
pub fn report_unavailable() {
    tracing::error!("PDF library not available. Build with the `pdf` feature to enable export.");
}

/// Label written at the top of page `number` (1-based).
pub fn page_label(number: usize, title: &str) -> String {
    format!("Page {number}: {title}")
}

/// Write `job` to `filename` through `library`. Returns the number of pages.
pub fn write_document(
    job: &ExportJob,
    library: &dyn PdfLibrary,
    filename: &Path,
) -> Result<usize, ExportError> {
    let mut doc = library.create_document(&DocumentOptions::default())?;

    for (i, text) in job.pages.iter().enumerate() {
        if i != 0 {
            doc.add_page();
        }
        doc.text(&page_label(i + 1, &job.title), layout::LABEL_X, layout::LABEL_Y);
        doc.text(text, layout::BODY_X, layout::BODY_Y);
    }

    doc.save(filename)?;
    Ok(job.pages.len())
}

/// Export `job` to `filename`.
///
/// Availability of `library` is checked before any work is scheduled. The
/// document itself is generated on a blocking task and awaited; the export
/// cannot be cancelled once started.
pub async fn export_pdf(
    job: ExportJob,
    library: Option<Arc<dyn PdfLibrary>>,
    filename: impl Into<PathBuf>,
) -> Result<ExportOutcome, ExportError> {
    let Some(library) = library else {
        report_unavailable();
        return Ok(ExportOutcome::Unavailable);
    };
    let path = filename.into();

    tracing::info!(
        "Exporting {} slides to {} with {}",
        job.pages.len(),
        path.display(),
        library.name()
    );

    let pages = tokio::task::spawn_blocking({
        let path = path.clone();
        move || write_document(&job, library.as_ref(), &path)
    })
    .await
    .map_err(|e| ExportError::Task(e.to_string()))??;

    tracing::info!("Exported {pages} slides to {}", path.display());
    Ok(ExportOutcome::Saved { path, pages })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(DocumentOptions),
        AddPage,
        Text(String, f32, f32),
        Save(PathBuf),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    struct RecordedDoc {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl PdfLibrary for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn create_document(&self, options: &DocumentOptions) -> Result<Box<dyn PdfDocument>, ExportError> {
            self.calls.lock().unwrap().push(Call::Create(*options));
            Ok(Box::new(RecordedDoc { calls: Arc::clone(&self.calls) }))
        }
    }

    impl PdfDocument for RecordedDoc {
        fn add_page(&mut self) {
            self.calls.lock().unwrap().push(Call::AddPage);
        }

        fn text(&mut self, text: &str, x: f32, y: f32) {
            self.calls.lock().unwrap().push(Call::Text(text.to_string(), x, y));
        }

        fn save(self: Box<Self>, filename: &Path) -> Result<(), ExportError> {
            self.calls.lock().unwrap().push(Call::Save(filename.to_path_buf()));
            Ok(())
        }
    }

    fn job() -> ExportJob {
        ExportJob {
            title: "Demo".into(),
            pages: vec!["first".into(), "second\nline".into()],
        }
    }

    #[test]
    fn test_write_document_call_sequence() {
        let recorder = Recorder::default();
        let pages = write_document(&job(), &recorder, Path::new("out.pdf")).unwrap();

        assert_eq!(pages, 2);
        assert_eq!(
            *recorder.calls.lock().unwrap(),
            vec![
                Call::Create(DocumentOptions { unit: Unit::Px, format: PageFormat::A4 }),
                Call::Text("Page 1: Demo".into(), 20.0, 20.0),
                Call::Text("first".into(), 20.0, 50.0),
                Call::AddPage,
                Call::Text("Page 2: Demo".into(), 20.0, 20.0),
                Call::Text("second\nline".into(), 20.0, 50.0),
                Call::Save(PathBuf::from("out.pdf")),
            ]
        );
    }

    #[test]
    fn test_empty_job_still_saves() {
        let recorder = Recorder::default();
        let pages = write_document(&ExportJob::default(), &recorder, Path::new("e.pdf")).unwrap();
        assert_eq!(pages, 0);
        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], Call::Save(PathBuf::from("e.pdf")));
    }

    #[tokio::test]
    async fn test_export_without_library_is_skipped() {
        let outcome = export_pdf(job(), None, "never.pdf").await.unwrap();
        assert_eq!(outcome, ExportOutcome::Unavailable);
        assert!(!Path::new("never.pdf").exists());
    }

    #[tokio::test]
    async fn test_export_with_library_reports_pages() {
        let recorder = Arc::new(Recorder::default());
        let calls = Arc::clone(&recorder.calls);
        let library: Arc<dyn PdfLibrary> = recorder;
        let outcome = export_pdf(job(), Some(library), "deck.pdf").await.unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Saved { path: PathBuf::from("deck.pdf"), pages: 2 }
        );
        assert_eq!(calls.lock().unwrap().last(), Some(&Call::Save(PathBuf::from("deck.pdf"))));
    }

    #[test]
    fn test_unit_conversion() {
        assert!((Unit::Px.to_mm(96.0) - 25.4).abs() < 1e-4);
        assert!((Unit::Pt.to_mm(72.0) - 25.4).abs() < 1e-4);
        assert!((Unit::Mm.to_mm(3.0) - 3.0).abs() < 1e-4);
    }
}
