//! Directory page assembly.

use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::content::builder::PageBuilder;
use crate::core::geometry::Rect;
use crate::core::page::{DivBox, KeyStroke, Link, PageResponse, TextBlob};
use crate::core::style::{glyph, Style};
use crate::directory::keys::{key_for, OverflowPolicy, KEY_ALPHABET};
use crate::directory::source::{fetch_with_deadline, PeopleSource, PersonRecord};
use crate::error::PageError;
use crate::layout::{full_viewport, Viewport};

const BACKDROP: &str = "dynamic-main";
const LISTING: &str = "directory";
const HEADER: &str = "  DIRECTORY  ";
const LISTING_ORIGIN: (u32, u32) = (3, 3);
const MIN_LISTING_WIDTH: u32 = 30;
/// Header row plus the two border rows.
const MIN_LISTING_HEIGHT: u32 = 3;

/// Where directory links point and how overlong listings are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub link_server: String,
    pub link_port: String,
    pub overflow: OverflowPolicy,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            link_server: "localhost".to_string(),
            link_port: "8888".to_string(),
            overflow: OverflowPolicy::default(),
        }
    }
}

fn backdrop(viewport: Viewport) -> DivBox {
    full_viewport(BACKDROP, viewport, glyph("|"), Style::pair("grey", "black"))
}

fn listing_width(lines: &[String]) -> u32 {
    let widest = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);
    u32::try_from(widest.saturating_add(2))
        .unwrap_or(u32::MAX)
        .max(MIN_LISTING_WIDTH)
}

/// Build the directory page from an already fetched listing.
///
/// Records are walked once, in fetch order: the n-th record gets the n-th
/// symbol of [`KEY_ALPHABET`], a link to the page named after it, and the
/// n-th line of the listing.
pub fn directory_page(
    name: &str,
    viewport: Viewport,
    people: &[PersonRecord],
    options: &DirectoryOptions,
) -> Result<PageResponse, PageError> {
    let capacity = KEY_ALPHABET.len();
    if people.len() > capacity && options.overflow == OverflowPolicy::Reject {
        return Err(PageError::DirectoryOverflow {
            count: people.len(),
            capacity,
        });
    }

    let (x, y) = LISTING_ORIGIN;
    viewport.require(
        "directory listing",
        x + MIN_LISTING_WIDTH,
        y + MIN_LISTING_HEIGHT,
    )?;

    let mut page = PageBuilder::new(name);
    page.add_box(backdrop(viewport))?;

    let mut lines = vec![HEADER.to_string()];
    for (index, person) in people.iter().enumerate() {
        let Some(key) = key_for(index) else {
            break;
        };
        let display_name = person.display_name();
        page.bind(KeyStroke::link(
            key,
            Link::remote(
                display_name.as_str(),
                options.link_server.as_str(),
                options.link_port.as_str(),
            ),
        ))?;
        lines.push(format!("({key}) {display_name}"));
    }

    let shown = lines.len() - 1;
    let hidden = people.len() - shown;
    if hidden > 0 {
        tracing::warn!(count = people.len(), shown, "directory listing truncated");
        lines.push(format!("... {hidden} more not shown"));
    }

    // Clipped to the viewport; the blob wraps inside whatever fits.
    let height = u32::try_from(lines.len() + 2)
        .unwrap_or(u32::MAX)
        .min(viewport.height() - y);
    let width = listing_width(&lines).min(viewport.width() - x);
    page.add_box(DivBox::new(
        LISTING,
        Rect::new(x, y, width, height),
        Style::pair("grey", "black"),
    ))?;

    let mut content = lines.join("\n");
    content.push('\n');
    page.add_text(TextBlob::wrapped(
        content,
        Style::pair("white", "black"),
        LISTING,
    ));

    page.finish()
}

/// Directory page shown when the listing could not be fetched.
pub fn degraded_directory_page(
    name: &str,
    viewport: Viewport,
    error: &PageError,
) -> Result<PageResponse, PageError> {
    let mut page = PageBuilder::new(name);
    page.add_box(backdrop(viewport))?;
    page.add_text(TextBlob::wrapped(
        format!("{HEADER}\n\nThe directory is unavailable right now.\n{error}\n"),
        Style::pair("white", "black"),
        BACKDROP,
    ));
    page.finish()
}

/// Fetch the listing within `deadline` and build the page; fetch failures
/// are returned to the caller.
pub async fn load_directory_page<S: PeopleSource>(
    name: &str,
    viewport: Viewport,
    source: &S,
    options: &DirectoryOptions,
    deadline: Duration,
) -> Result<PageResponse, PageError> {
    let people = fetch_with_deadline(source, deadline).await?;
    tracing::debug!(count = people.len(), "directory listing fetched");
    directory_page(name, viewport, &people, options)
}
