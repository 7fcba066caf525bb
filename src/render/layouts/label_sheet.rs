//! Address Label Sheet Renderer
//!
//! Prints low-value order addresses on a 30-up label sheet
//! (3 columns x 10 rows, US Letter), one address per cell, text block
//! vertically centered in its cell.

use crate::config::Settings;
use crate::error::RenderError;
use crate::layout::{LabelSheetLayout, PlacedLabel};
use crate::model::AddressRecord;

use crate::render::canvas::{Canvas, TextStyle};
use crate::render::pdf::PdfCanvas;

const DOCUMENT_TITLE: &str = "Address Labels";

/// Replay placed labels onto a canvas and save it
///
/// A page is opened before the first label and on every page change.
/// Canvas errors are returned as-is.
pub fn render_labels<C: Canvas>(
    mut canvas: C,
    labels: &[PlacedLabel],
    style: &TextStyle,
) -> Result<Vec<u8>, RenderError> {
    canvas.begin_page()?;
    let mut page = 0;

    for label in labels {
        while page < label.page {
            canvas.end_page()?;
            canvas.begin_page()?;
            page += 1;
        }

        let (x, y) = label.origin;
        canvas.place_text_block(x, y, &label.lines, label.color, style)?;
    }

    canvas.end_page()?;
    canvas.save()
}

/// Label sheet renderer
pub struct LabelSheetRenderer {
    settings: Settings,
}

impl LabelSheetRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Generate the label sheet PDF for `addresses` (plus any fillers)
    pub fn render(&self, addresses: &[AddressRecord]) -> Result<Vec<u8>, RenderError> {
        let layout = LabelSheetLayout::new(self.settings.layout.clone())?;
        let labels = layout.layout(addresses);

        let canvas = PdfCanvas::new(DOCUMENT_TITLE, layout.geometry())
            .with_compression(self.settings.compress);

        render_labels(canvas, &labels, &TextStyle::default())
    }
}
