//! Label sheet layout engine
//!
//! Turns a list of addresses into positioned text blocks on a grid of
//! label cells. Layout is pure: nothing here draws or allocates pages,
//! see [`crate::render`] for that.

pub mod cursor;
pub mod engine;
pub mod geometry;

pub use cursor::{PlacementCursor, Slot};
pub use engine::{layout, page_count, LabelSheetLayout, PlacedLabel};
pub use geometry::SheetGeometry;
