//! Document renderers

pub mod label_sheet;

pub use label_sheet::{render_labels, LabelSheetRenderer};
