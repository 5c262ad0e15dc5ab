//! Static catalog of advertised pages.

use crate::core::feed::{FeedRequest, FeedResponse, PageListing};

/// Pages advertised to clients, in order.
pub const FEED_PAGES: [&str; 7] = ["directory", "home", "form", "one", "two", "three", "four"];

#[derive(Debug, Clone)]
pub struct FeedLister {
    pages: Vec<PageListing>,
}

impl FeedLister {
    pub fn new() -> Self {
        Self::with_pages(FEED_PAGES)
    }

    pub fn with_pages<I, N>(pages: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(PageListing::new).collect(),
        }
    }

    /// The catalog, identical for every request.
    pub fn get_feed(&self, _request: &FeedRequest) -> FeedResponse {
        FeedResponse {
            pages: self.pages.clone(),
        }
    }
}

impl Default for FeedLister {
    fn default() -> Self {
        Self::new()
    }
}
