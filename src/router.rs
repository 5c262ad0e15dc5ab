//! Page-name dispatch.

use std::time::Duration;

use crate::content::{
    form_page, home_page, menu_page, submit_page, ContentTable, ProfileSubmission, FORM_PAGE,
    HOME_PAGE, MENU_LINKS, SUBMIT_PAGE,
};
use crate::core::page::{PageRequest, PageResponse};
use crate::directory::{degraded_directory_page, load_directory_page, DirectoryOptions, PeopleSource};
use crate::error::PageError;
use crate::layout::Viewport;
use crate::session::InboundSession;

/// Name the feed advertises for the directory page. Any unrecognized name
/// renders the same page.
pub const DIRECTORY_PAGE: &str = "directory";

/// Known page kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Form,
    FormSubmit,
    Menu,
    /// The default arm: every name not listed above.
    Directory,
}

impl PageKind {
    /// Total over all names.
    pub fn from_name(name: &str) -> Self {
        match name {
            HOME_PAGE => Self::Home,
            FORM_PAGE => Self::Form,
            SUBMIT_PAGE => Self::FormSubmit,
            _ if MENU_LINKS.iter().any(|(page, _)| *page == name) => Self::Menu,
            _ => Self::Directory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    pub directory: DirectoryOptions,
    /// Upper bound on one directory fetch, retries included.
    pub fetch_deadline: Duration,
    /// Render a degraded directory page instead of failing the request when
    /// the listing cannot be fetched.
    pub degrade_on_fetch_failure: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            directory: DirectoryOptions::default(),
            fetch_deadline: Duration::from_secs(5),
            degrade_on_fetch_failure: true,
        }
    }
}

/// Single entry point for page requests.
///
/// Holds only immutable state, so one router serves any number of
/// concurrent requests.
#[derive(Debug)]
pub struct Router<S> {
    source: S,
    content: ContentTable,
    config: RouterConfig,
}

impl<S: PeopleSource> Router<S> {
    pub fn new(source: S, content: ContentTable, config: RouterConfig) -> Self {
        Self {
            source,
            content,
            config,
        }
    }

    pub async fn route(&self, request: PageRequest) -> Result<PageResponse, PageError> {
        let viewport = Viewport::new(request.client_width, request.client_height)?;
        let kind = PageKind::from_name(&request.name);
        tracing::debug!(
            page = %request.name,
            ?kind,
            width = request.client_width,
            height = request.client_height,
            "routing page request"
        );

        match kind {
            PageKind::Home => home_page(&request.name, viewport, &self.content),
            PageKind::Form => {
                let session = InboundSession::from_cookies(&request.send_cookies);
                form_page(viewport, &session)
            }
            PageKind::FormSubmit => {
                let submission = ProfileSubmission::from_form_data(&request.form_data);
                submit_page(viewport, submission)
            }
            PageKind::Menu => menu_page(&request.name, viewport, &self.content),
            PageKind::Directory => self.directory(&request.name, viewport).await,
        }
    }

    async fn directory(&self, name: &str, viewport: Viewport) -> Result<PageResponse, PageError> {
        let result = load_directory_page(
            name,
            viewport,
            &self.source,
            &self.config.directory,
            self.config.fetch_deadline,
        )
        .await;

        match result {
            Err(error @ PageError::Directory(_)) if self.config.degrade_on_fetch_failure => {
                tracing::warn!(page = %name, error = %error, "serving degraded directory page");
                degraded_directory_page(name, viewport, &error)
            }
            other => other,
        }
    }
}
