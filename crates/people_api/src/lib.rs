//! Transport-only client for the people-listing HTTP API.
//!
//! This crate owns request building, retry and response decoding for the
//! listing endpoint only. It knows nothing about pages, keystrokes or layout;
//! the page engine consumes it through its own data-source trait.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod retry;
pub mod schema;
pub mod url;

pub use client::PeopleApiClient;
pub use config::PeopleApiConfig;
pub use error::PeopleApiError;
pub use schema::{Elixir, Person};
pub use url::normalize_people_url;
