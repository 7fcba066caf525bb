use printpdf::Mm;

use crate::config::defaults::*;

/// Fixed dimensions of the label sheet
///
/// All coordinates are in mm from the bottom-left corner of the page,
/// matching PDF user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub top_margin: f32,
    pub left_margin: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub column_spacing: f32,
    pub row_spacing: f32,
    pub padding_left: f32,
    pub line_height: f32,
}

impl Default for SheetGeometry {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            top_margin: TOP_MARGIN,
            left_margin: LEFT_MARGIN,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            column_spacing: COLUMN_SPACING,
            row_spacing: ROW_SPACING,
            padding_left: PADDING_LEFT,
            line_height: LINE_HEIGHT,
        }
    }
}

impl SheetGeometry {
    /// Horizontal distance between the left edges of adjacent cells
    pub fn column_pitch(&self) -> f32 {
        self.cell_width + self.column_spacing
    }

    /// Vertical distance between the tops of adjacent rows
    pub fn row_pitch(&self) -> f32 {
        self.cell_height + self.row_spacing
    }

    /// Top edge of the first row on every page
    pub fn page_top(&self) -> f32 {
        self.page_height - self.top_margin
    }

    /// Left edge and top edge of a cell
    ///
    /// Every page shares the same grid, so the page index does not enter
    /// the calculation.
    pub fn cell_origin(&self, row: usize, column: usize) -> (Mm, Mm) {
        let x = self.left_margin + column as f32 * self.column_pitch();
        let y = self.page_top() - row as f32 * self.row_pitch();
        (Mm(x), Mm(y))
    }

    /// Gap between the cell top and the first baseline that centers a block
    /// of `line_count` lines vertically in the cell
    pub fn vertical_offset(&self, line_count: usize) -> f32 {
        (self.cell_height - line_count as f32 * self.line_height) / 2.0
    }

    /// Start of the first text line for a block of `line_count` lines
    pub fn text_origin(&self, row: usize, column: usize, line_count: usize) -> (Mm, Mm) {
        let (x, top) = self.cell_origin(row, column);
        (
            Mm(x.0 + self.padding_left),
            Mm(top.0 - self.vertical_offset(line_count)),
        )
    }
}
