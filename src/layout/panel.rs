//! Single-region strategies: backdrop, inset bordered panel, top bar split.

use crate::core::geometry::{Border, Rect};
use crate::core::page::DivBox;
use crate::core::style::{glyph, Style};
use crate::error::LayoutError;
use crate::layout::viewport::Viewport;

/// Left/top inset of the bordered panel.
pub const PANEL_INSET_X: u32 = 5;
pub const PANEL_INSET_Y: u32 = 5;
/// Width and height given up by the bordered panel.
const PANEL_SHRINK_X: u32 = 10;
const PANEL_SHRINK_Y: u32 = 15;

/// Borderless box spanning the whole viewport.
pub fn full_viewport(name: &str, viewport: Viewport, fill_glyph: char, fill_style: Style) -> DivBox {
    DivBox::new(name, viewport.rect(), fill_style).with_fill_glyph(fill_glyph)
}

/// Bordered box inset at (5, 5), 10 cells narrower and 15 shorter than the
/// viewport.
pub fn bordered_panel(name: &str, viewport: Viewport) -> Result<DivBox, LayoutError> {
    viewport.require("bordered panel", PANEL_SHRINK_X + 1, PANEL_SHRINK_Y + 1)?;

    let rect = Rect::new(
        PANEL_INSET_X,
        PANEL_INSET_Y,
        viewport.width() - PANEL_SHRINK_X,
        viewport.height() - PANEL_SHRINK_Y,
    );
    Ok(DivBox::new(name, rect, Style::pair("white", "black"))
        .with_border(Border::new(1, glyph("^"), Style::pair("orange", "black")))
        .with_fill_glyph(glyph("")))
}

/// Split the viewport into a full-width bar of `bar_height` rows and the
/// body below it.
pub fn split_top(viewport: Viewport, bar_height: u32) -> Result<(Rect, Rect), LayoutError> {
    viewport.require("top bar split", 1, bar_height + 1)?;

    let bar = Rect::new(0, 0, viewport.width(), bar_height);
    let body = Rect::new(
        0,
        bar_height,
        viewport.width(),
        viewport.height() - bar_height,
    );
    Ok((bar, body))
}
