//! `printpdf`-backed [`PdfLibrary`].

use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference};

use super::{DocumentOptions, ExportError, PdfDocument, PdfLibrary, Unit};
use crate::constants::export as layout;

const LAYER_NAME: &str = "Layer 1";

/// PDF library built on `printpdf` with the Helvetica base font.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintPdfLibrary;

impl PdfLibrary for PrintPdfLibrary {
    fn name(&self) -> &'static str {
        "printpdf"
    }

    fn create_document(&self, options: &DocumentOptions) -> Result<Box<dyn PdfDocument>, ExportError> {
        let (width, height) = options.format.size_mm();
        let (doc, page, layer) =
            printpdf::PdfDocument::new("pages", Mm(width), Mm(height), LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Library(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Box::new(PrintPdfDocument {
            doc,
            layer,
            font,
            unit: options.unit,
            width,
            height,
        }))
    }
}

struct PrintPdfDocument {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    unit: Unit,
    width: f32,
    height: f32,
}

impl PdfDocument for PrintPdfDocument {
    fn add_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(self.width), Mm(self.height), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        let line_height = Unit::Pt.to_mm(layout::FONT_SIZE_PT * layout::LINE_HEIGHT_FACTOR);
        let x = self.unit.to_mm(x);
        let top = self.unit.to_mm(y);

        // PDF origin is bottom-left; callers measure from the top.
        let mut row = 0_u16;
        for line in text.lines() {
            let baseline = self.height - top - f32::from(row) * line_height;
            if baseline < 0.0 {
                break;
            }
            self.layer
                .use_text(line, layout::FONT_SIZE_PT, Mm(x), Mm(baseline), &self.font);
            row = row.saturating_add(1);
        }
    }

    fn save(self: Box<Self>, filename: &Path) -> Result<(), ExportError> {
        let bytes = self
            .doc
            .save_to_bytes()
            .map_err(|e| ExportError::Library(e.to_string()))?;
        fs_err::write(filename, bytes).map_err(|source| ExportError::Io {
            source,
            path: filename.to_path_buf(),
        })
    }
}
