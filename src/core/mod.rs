//! Wire-level page model shared by every page handler.

pub mod feed;
pub mod geometry;
pub mod page;
pub mod style;
