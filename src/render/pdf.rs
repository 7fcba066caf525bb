//! printpdf-backed canvas

use printpdf::{Color, Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::FontColor;
use crate::error::RenderError;
use crate::layout::SheetGeometry;

use super::canvas::{Canvas, TextStyle};
use super::helpers::colors::to_rgb;
use super::helpers::compress::compress_pdf;
use super::helpers::layer::LayerBuilder;

/// Canvas that builds a PDF document page by page
pub struct PdfCanvas {
    doc: PdfDocument,
    page_width: Mm,
    page_height: Mm,
    pages: Vec<PdfPage>,
    current: Option<LayerBuilder>,
    compress: bool,
}

impl PdfCanvas {
    pub fn new(title: &str, geometry: &SheetGeometry) -> Self {
        Self {
            doc: PdfDocument::new(title),
            page_width: Mm(geometry.page_width),
            page_height: Mm(geometry.page_height),
            pages: Vec::new(),
            current: None,
            compress: true,
        }
    }

    /// Enable or disable lopdf stream compression on save
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Pages finished so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_layer(&mut self) -> Result<&mut LayerBuilder, RenderError> {
        self.current
            .as_mut()
            .ok_or_else(|| RenderError::PdfGeneration("No page is open".to_string()))
    }
}

impl Canvas for PdfCanvas {
    fn begin_page(&mut self) -> Result<(), RenderError> {
        if self.current.is_some() {
            self.end_page()?;
        }
        self.current = Some(LayerBuilder::new());
        Ok(())
    }

    fn place_text_block(
        &mut self,
        x: Mm,
        y: Mm,
        lines: &[String],
        color: FontColor,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let layer = self.current_layer()?;

        layer.save_graphics_state();
        layer.set_fill_color(Color::Rgb(to_rgb(color)));
        for (i, line) in lines.iter().enumerate() {
            let baseline = y.0 - i as f32 * style.line_height;
            layer.use_text_builtin(line.as_str(), style.font_size, x, Mm(baseline), style.font);
        }
        layer.restore_graphics_state();

        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let layer = self
            .current
            .take()
            .ok_or_else(|| RenderError::PdfGeneration("No page is open".to_string()))?;
        self.pages
            .push(PdfPage::new(self.page_width, self.page_height, layer.into_ops()));
        Ok(())
    }

    fn save(mut self) -> Result<Vec<u8>, RenderError> {
        if self.current.is_some() {
            self.end_page()?;
        }
        if self.pages.is_empty() {
            // A PDF needs at least one page
            self.begin_page()?;
            self.end_page()?;
        }

        log::debug!("Saving PDF with {} page(s)", self.pages.len());
        self.doc.with_pages(self.pages);

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);

        if !self.compress {
            return Ok(bytes);
        }

        match compress_pdf(&bytes) {
            Ok(compressed) => Ok(compressed),
            Err(e) => {
                log::warn!("{}; writing uncompressed PDF", e);
                Ok(bytes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::{Op, Pt};

    use crate::config::defaults::LINE_HEIGHT;

    fn canvas() -> PdfCanvas {
        PdfCanvas::new("Test", &SheetGeometry::default()).with_compression(false)
    }

    #[test]
    fn test_text_outside_page_is_an_error() {
        let mut canvas = canvas();
        let result = canvas.place_text_block(
            Mm(10.0),
            Mm(10.0),
            &["x".to_string()],
            (0.0, 0.0, 0.0),
            &TextStyle::default(),
        );
        assert!(matches!(result, Err(RenderError::PdfGeneration(_))));
    }

    #[test]
    fn test_end_without_begin_is_an_error() {
        let mut canvas = canvas();
        assert!(canvas.end_page().is_err());
    }

    #[test]
    fn test_begin_closes_open_page() {
        let mut canvas = canvas();
        canvas.begin_page().unwrap();
        canvas.begin_page().unwrap();
        assert_eq!(canvas.page_count(), 1);
        canvas.end_page().unwrap();
        assert_eq!(canvas.page_count(), 2);
    }

    fn cursor_heights(canvas: &PdfCanvas) -> Vec<f32> {
        canvas
            .current
            .as_ref()
            .unwrap()
            .ops()
            .iter()
            .filter_map(|op| match op {
                Op::SetTextCursor { pos } => Some(pos.y.0),
                _ => None,
            })
            .collect()
    }

    fn baselines(y: f32, steps: &[usize]) -> Vec<f32> {
        steps
            .iter()
            .map(|&k| Pt::from(Mm(y - k as f32 * LINE_HEIGHT)).0)
            .collect()
    }

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-3, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_lines_step_down_by_line_height() {
        let mut canvas = canvas();
        canvas.begin_page().unwrap();

        let lines: Vec<String> = ["John Doe", "456 Main St", "Apt 789", "Anytown, ST 67890"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let color = (0.2, 0.4, 0.6);
        canvas
            .place_text_block(Mm(10.0), Mm(200.0), &lines, color, &TextStyle::default())
            .unwrap();

        assert_close(&cursor_heights(&canvas), &baselines(200.0, &[0, 1, 2, 3]));

        let expected = to_rgb(color);
        let fills: Vec<&Op> = canvas
            .current
            .as_ref()
            .unwrap()
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::SetFillColor { .. }))
            .collect();
        assert_eq!(fills.len(), 1);
        match fills[0] {
            Op::SetFillColor {
                col: Color::Rgb(rgb),
            } => assert_eq!((rgb.r, rgb.g, rgb.b), (expected.r, expected.g, expected.b)),
            other => panic!("unexpected fill op: {:?}", other),
        }
    }

    #[test]
    fn test_empty_line_keeps_its_baseline_slot() {
        let mut canvas = canvas();
        canvas.begin_page().unwrap();

        let lines: Vec<String> = ["Jane Smith", "", "Othertown, ST 54321"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        canvas
            .place_text_block(Mm(10.0), Mm(150.0), &lines, (0.0, 0.0, 0.0), &TextStyle::default())
            .unwrap();

        assert_close(&cursor_heights(&canvas), &baselines(150.0, &[0, 2]));
    }

    #[test]
    fn test_save_empty_document_is_valid_pdf() {
        let bytes = canvas().save().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
