use std::collections::BTreeMap;
use std::time::Duration;

use crate::retry::{backoff_budget, BASE_DELAY_MS, MAX_RETRIES};
use crate::url::DEFAULT_PEOPLE_BASE_URL;

/// Transport configuration for people-listing requests.
#[derive(Debug, Clone)]
pub struct PeopleApiConfig {
    /// Base URL for the listing API.
    pub base_url: String,
    /// Optional `User-Agent` override.
    pub user_agent: Option<String>,
    /// Additional headers merged into request headers.
    pub extra_headers: BTreeMap<String, String>,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
    /// Retry attempts after the initial request.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further attempt.
    pub retry_base_delay: Duration,
}

impl Default for PeopleApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PEOPLE_BASE_URL.to_string(),
            user_agent: None,
            extra_headers: BTreeMap::new(),
            timeout: None,
            max_retries: MAX_RETRIES,
            retry_base_delay: Duration::from_millis(BASE_DELAY_MS),
        }
    }
}

impl PeopleApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Fit every attempt and the backoff between them inside `deadline`.
    ///
    /// Backoff may take at most a quarter of the deadline; the base delay is
    /// scaled down when the configured one would exceed that. The remainder
    /// is split evenly into per-attempt timeouts.
    pub fn within_deadline(mut self, deadline: Duration) -> Self {
        let attempts = self.max_retries.saturating_add(1);
        let backoff_cap = deadline / 4;
        let mut backoff = backoff_budget(self.retry_base_delay, self.max_retries);
        if backoff > backoff_cap {
            let scale = backoff_cap.as_secs_f64() / backoff.as_secs_f64();
            self.retry_base_delay = self.retry_base_delay.mul_f64(scale);
            backoff = backoff_budget(self.retry_base_delay, self.max_retries);
        }
        self.timeout = Some(deadline.saturating_sub(backoff) / attempts);
        self
    }

    pub fn insert_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.extra_headers.extend(headers);
        self
    }
}
