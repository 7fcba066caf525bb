//! PDF rendering modules

pub mod canvas;
pub mod helpers;
pub mod layouts;
pub mod pdf;

// Re-export commonly used items for convenience
pub use canvas::{Canvas, TextStyle};
pub use helpers::LayerBuilder;
pub use layouts::{render_labels, LabelSheetRenderer};
pub use pdf::PdfCanvas;
