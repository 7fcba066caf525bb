//! Label sheet geometry and run defaults
//!
//! The sheet is a 30-up US Letter address label page (3 columns x 10 rows).
//! All lengths are in mm.

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

/// US Letter page width in mm
pub const PAGE_WIDTH: f32 = 215.9;

/// US Letter page height in mm
pub const PAGE_HEIGHT: f32 = 279.4;

/// Top margin (0.5 in)
pub const TOP_MARGIN: f32 = 0.5 * MM_PER_INCH;

/// Left margin (0.25 in)
pub const LEFT_MARGIN: f32 = 0.25 * MM_PER_INCH;

/// Label cell width (2.63 in)
pub const CELL_WIDTH: f32 = 2.63 * MM_PER_INCH;

/// Label cell height (1 in)
pub const CELL_HEIGHT: f32 = 1.0 * MM_PER_INCH;

/// Gap between label columns (0.125 in)
pub const COLUMN_SPACING: f32 = 0.125 * MM_PER_INCH;

/// Gap between label rows (0.05 in)
pub const ROW_SPACING: f32 = 0.05 * MM_PER_INCH;

/// Text inset from the left edge of a cell (0.125 in)
pub const PADDING_LEFT: f32 = 0.125 * MM_PER_INCH;

/// Distance between text baselines (0.2 in)
pub const LINE_HEIGHT: f32 = 0.2 * MM_PER_INCH;

/// Label columns per page
pub const COLUMNS: usize = 3;

/// Label rows per page
pub const ROWS_PER_PAGE: usize = 10;

/// Label text size in points
pub const FONT_SIZE: f32 = 10.0;

/// Default label text color (black)
pub const DEFAULT_FONT_COLOR: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Orders costing less than this many dollars get a printed label
pub const DEFAULT_VALUE_THRESHOLD: f64 = 20.0;

/// Name of the label sheet written to the output directory
pub const LABELS_FILE_NAME: &str = "formatted_addresses.pdf";
