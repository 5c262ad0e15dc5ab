use std::collections::BTreeMap;

use crate::config::PeopleApiConfig;

pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_USER_AGENT: &str = "user-agent";

/// Default `User-Agent` when the config carries no override.
pub const DEFAULT_USER_AGENT: &str = concat!("termpage/", env!("CARGO_PKG_VERSION"));

/// Build a deterministic header map for listing requests.
pub fn build_headers(config: &PeopleApiConfig) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();

    headers.insert(HEADER_ACCEPT.to_owned(), "application/json".to_owned());

    let ua = config
        .user_agent
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(HEADER_USER_AGENT.to_owned(), ua.to_owned());

    for (key, value) in &config.extra_headers {
        headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_owned());
    }

    headers
}
