//! Server-side page composition for remote terminal clients.
//!
//! A client asks for a page by name with its viewport size, any submitted
//! form data and its cookies. The engine answers with a declarative
//! description: named boxes, text blobs, forms, keystroke bindings and
//! cookies to store. Clients render the description themselves.
//!
//! # Public API Overview
//! - [`Router`] dispatches a [`PageRequest`] to the page handler for its name.
//!   Unrecognized names render the directory page.
//! - [`FeedLister`] advertises the page catalog.
//! - [`PageService`] and [`FeedService`] are the seams an RPC transport binds to.
//! - [`PeopleSource`] abstracts the people listing behind the directory page.

pub mod config;
pub mod logging;

pub mod content;
pub mod core;
pub mod directory;
pub mod error;
pub mod feed;
pub mod layout;
pub mod router;
pub mod service;
pub mod session;

/// Wire model.
pub use crate::core::feed::{FeedRequest, FeedResponse, PageListing};
pub use crate::core::geometry::{Border, Rect};
pub use crate::core::page::{
    Action, Cookie, DivBox, Elements, Form, FormData, Link, KeyStroke, PageRequest, PageResponse,
    TextBlob, TextBox, TextBoxData,
};
pub use crate::core::style::{Attr, Color, Style};

/// Errors.
pub use crate::error::{LayoutError, PageError, SourceError};

/// Routing and services.
pub use crate::feed::FeedLister;
pub use crate::router::{PageKind, Router, RouterConfig, DIRECTORY_PAGE};
pub use crate::service::{FeedService, PageService};

/// Directory listing.
pub use crate::directory::{DirectoryOptions, OverflowPolicy, PeopleSource, PersonRecord, StaticSource};

/// Page building blocks.
pub use crate::content::{ContentTable, PageBuilder};
pub use crate::layout::Viewport;
