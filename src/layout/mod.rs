//! Region placement strategies.
//!
//! Every strategy takes a validated [`Viewport`] and returns ready-to-emit
//! [`DivBox`](crate::core::page::DivBox)es or plain [`Rect`](crate::core::geometry::Rect)s.
//! Strategies that cannot produce positive-size regions for a viewport reject
//! it with [`LayoutError`](crate::error::LayoutError) instead of emitting
//! degenerate boxes.

pub mod grid;
pub mod panel;
pub mod viewport;

pub use grid::{centered_panel, checkerboard_grid, grid_cell_size, CELL_COLUMNS, CELL_ROWS};
pub use panel::{bordered_panel, full_viewport, split_top, PANEL_INSET_X, PANEL_INSET_Y};
pub use viewport::Viewport;
