//! Transport-facing service contracts.
//!
//! An RPC layer registers implementations of these traits and maps its wire
//! messages onto [`PageRequest`]/[`PageResponse`] and the feed types.

use std::future::Future;

use crate::core::feed::{FeedRequest, FeedResponse};
use crate::core::page::{PageRequest, PageResponse};
use crate::directory::PeopleSource;
use crate::error::PageError;
use crate::feed::FeedLister;
use crate::router::Router;

pub trait PageService: Send + Sync {
    fn get_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<PageResponse, PageError>> + Send;
}

pub trait FeedService: Send + Sync {
    fn get_feed(&self, request: &FeedRequest) -> FeedResponse;
}

impl<S: PeopleSource> PageService for Router<S> {
    fn get_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<PageResponse, PageError>> + Send {
        self.route(request)
    }
}

impl FeedService for FeedLister {
    fn get_feed(&self, request: &FeedRequest) -> FeedResponse {
        FeedLister::get_feed(self, request)
    }
}
