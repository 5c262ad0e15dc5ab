//! Landing page: checkerboard background under a centered text panel.

use crate::content::builder::PageBuilder;
use crate::content::table::ContentTable;
use crate::core::page::{PageResponse, TextBlob};
use crate::core::style::Style;
use crate::error::PageError;
use crate::layout::{centered_panel, checkerboard_grid, Viewport};

pub const HOME_PAGE: &str = "home";

const PANEL: &str = "content";

pub fn home_page(
    name: &str,
    viewport: Viewport,
    table: &ContentTable,
) -> Result<PageResponse, PageError> {
    let mut page = PageBuilder::new(name);
    page.add_boxes(checkerboard_grid(viewport)?)?;
    page.add_box(centered_panel(PANEL, viewport))?;

    let body = table.get(HOME_PAGE).unwrap_or_default().repeat(3);
    page.add_text(TextBlob::wrapped(body, Style::pair("white", "black"), PANEL));
    page.finish()
}
