//! Drawing surface used by the label sheet renderer

use printpdf::{BuiltinFont, Mm};

use crate::config::defaults::{FONT_SIZE, LINE_HEIGHT};
use crate::config::FontColor;
use crate::error::RenderError;

/// Font settings for a block of label text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: BuiltinFont,
    /// Font size in points
    pub font_size: f32,
    /// Baseline-to-baseline distance in mm
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: BuiltinFont::Helvetica,
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
        }
    }
}

/// A paged drawing surface
///
/// Pages are opened and closed explicitly; text may only be placed while a
/// page is open.
pub trait Canvas {
    /// Open a new blank page
    fn begin_page(&mut self) -> Result<(), RenderError>;

    /// Draw `lines` top to bottom, the first baseline at (`x`, `y`)
    fn place_text_block(
        &mut self,
        x: Mm,
        y: Mm,
        lines: &[String],
        color: FontColor,
        style: &TextStyle,
    ) -> Result<(), RenderError>;

    /// Close the current page
    fn end_page(&mut self) -> Result<(), RenderError>;

    /// Finish the document and return its bytes
    fn save(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}
