//! Application state and event dispatch.

use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::bootstrap::Presentation;
use crate::config::Config;
use crate::constants::async_tasks::CHANNEL_BUFFER_SIZE;
use crate::export::{self, ExportError, ExportOutcome, PdfLibrary};
use crate::input::{self, GlobalHandler, InputContext, InputHandler, InputResult, NavigationHandler};
use crate::types::NavAction;

/// Messages sent back to the event loop by background tasks.
#[derive(Debug)]
pub enum AppUpdate {
    /// A PDF export finished.
    ExportFinished(Result<ExportOutcome, ExportError>),
}

/// The running presenter.
pub struct App {
    /// The bootstrapped presentation.
    pub presentation: Presentation,
    /// Loaded configuration.
    pub config: Config,
    /// Screen areas of the navigation controls from the last draw.
    pub control_areas: Vec<(Rect, NavAction)>,
    /// Informational message overlay.
    pub status_message: Option<String>,
    /// Error message overlay.
    pub error_message: Option<String>,
    /// Whether an export is running.
    pub is_exporting: bool,
    pdf_library: Option<Arc<dyn PdfLibrary>>,
    handlers: Vec<Box<dyn InputHandler>>,
    async_task_tx: mpsc::Sender<AppUpdate>,
    async_task_rx: mpsc::Receiver<AppUpdate>,
    should_quit: bool,
}

impl App {
    /// Create the app with the PDF library compiled into this build.
    pub fn new(presentation: Presentation, config: Config) -> Self {
        let (async_task_tx, async_task_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            presentation,
            config,
            control_areas: Vec::new(),
            status_message: None,
            error_message: None,
            is_exporting: false,
            pdf_library: export::default_library(),
            handlers: vec![Box::new(GlobalHandler), Box::new(NavigationHandler)],
            async_task_tx,
            async_task_rx,
            should_quit: false,
        }
    }

    /// Replace the PDF library used for export.
    #[must_use]
    pub fn with_pdf_library(mut self, library: Option<Arc<dyn PdfLibrary>>) -> Self {
        self.pdf_library = library;
        self
    }

    /// Whether the event loop should stop.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request the event loop to stop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn input_context(&self) -> InputContext {
        InputContext {
            has_message: self.status_message.is_some() || self.error_message.is_some(),
            exporting: self.is_exporting,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctx = self.input_context();
        let result = input::dispatch(&mut self.handlers, key, &ctx);
        self.apply(result);
    }

    /// Handle a mouse event; clicks on the navigation controls navigate.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if let Some(action) = input::hit_test(&self.control_areas, mouse) {
            self.apply(InputResult::Navigate(action));
        }
    }

    fn apply(&mut self, result: InputResult) {
        match result {
            InputResult::Navigate(action) => self.presentation.navigate(action),
            InputResult::Export => self.start_export(),
            InputResult::Dismiss => {
                self.status_message = None;
                self.error_message = None;
            }
            InputResult::Quit => self.quit(),
            InputResult::Ignored => {}
        }
    }

    /// Start exporting the deck to the configured file in the background.
    pub fn start_export(&mut self) {
        let Some(library) = self.pdf_library.clone() else {
            export::report_unavailable();
            self.status_message = Some("PDF export is not available in this build".to_string());
            return;
        };

        self.is_exporting = true;
        let job = self.presentation.export_job();
        let path = self.config.export_file.clone();
        let tx = self.async_task_tx.clone();

        tokio::spawn(async move {
            let result = export::export_pdf(job, Some(library), path).await;
            if tx.send(AppUpdate::ExportFinished(result)).await.is_err() {
                tracing::warn!("Export finished after the presenter closed");
            }
        });
    }

    /// Apply results sent back by background tasks.
    pub fn handle_updates(&mut self) {
        while let Ok(update) = self.async_task_rx.try_recv() {
            self.apply_update(update);
        }
    }

    fn apply_update(&mut self, update: AppUpdate) {
        match update {
            AppUpdate::ExportFinished(result) => {
                self.is_exporting = false;
                match result {
                    Ok(ExportOutcome::Saved { path, pages }) => {
                        self.status_message =
                            Some(format!("Exported {pages} slides to {}", path.display()));
                    }
                    Ok(ExportOutcome::Unavailable) => {
                        self.status_message =
                            Some("PDF export is not available in this build".to_string());
                    }
                    Err(e) => {
                        tracing::error!("Export failed: {e}");
                        self.error_message = Some(e.to_string());
                    }
                }
            }
        }
    }
}
