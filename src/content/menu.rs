//! Static menu pages: a top bar of four destinations and a prose body.

use crate::content::builder::PageBuilder;
use crate::content::table::ContentTable;
use crate::core::page::{DivBox, KeyStroke, Link, PageResponse, TextBlob};
use crate::core::style::{glyph, Style};
use crate::error::PageError;
use crate::layout::{full_viewport, split_top, Viewport};

/// Destinations in the top bar, with their keystrokes.
pub const MENU_LINKS: [(&str, &str); 4] = [("one", "1"), ("two", "2"), ("three", "3"), ("four", "4")];

const MENU_BAR_HEIGHT: u32 = 3;

fn menu_line(current: &str) -> String {
    MENU_LINKS
        .iter()
        .map(|(page, key)| {
            if *page == current {
                format!("[({key}) {page}]")
            } else {
                format!("({key}) {page}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Menu page named `name`, with its body looked up in `table`.
pub fn menu_page(
    name: &str,
    viewport: Viewport,
    table: &ContentTable,
) -> Result<PageResponse, PageError> {
    let (bar, body) = split_top(viewport, MENU_BAR_HEIGHT)?;
    let mut page = PageBuilder::new(name);

    page.add_box(full_viewport(
        "main",
        viewport,
        glyph(""),
        Style::pair("grey", "black"),
    ))?;
    page.add_box(DivBox::new("menu", bar, Style::pair("white", "darkslategrey")))?;
    page.add_box(DivBox::new("body", body, Style::pair("white", "black")))?;

    page.add_text(TextBlob::wrapped(
        format!("\n {}", menu_line(name)),
        Style::pair("white", "darkslategrey"),
        "menu",
    ));
    let prose = match table.get(name) {
        Some(text) => text.to_owned(),
        None => format!("Nothing has been written for '{name}' yet."),
    };
    page.add_text(TextBlob::wrapped(prose, Style::pair("white", "black"), "body"));

    for (target, key) in MENU_LINKS {
        page.bind(KeyStroke::link(key, Link::local(target)))?;
    }

    page.finish()
}
