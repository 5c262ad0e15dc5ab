//! Environment configuration.

use std::env;
use std::time::Duration;

use people_api::PeopleApiConfig;

use crate::directory::{DirectoryOptions, OverflowPolicy};
use crate::logging;
use crate::router::RouterConfig;

const DEFAULT_LINK_SERVER: &str = "localhost";
const DEFAULT_LINK_PORT: &str = "8888";
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub link_server: String,
    pub link_port: String,
    pub directory_url: Option<String>,
    pub fetch_timeout: Duration,
    pub strict_fetch: bool,
    pub reject_overflow: bool,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            link_server: env_string_opt("TERMPAGE_LINK_SERVER")
                .unwrap_or_else(|| DEFAULT_LINK_SERVER.to_string()),
            link_port: env_string_opt("TERMPAGE_LINK_PORT")
                .unwrap_or_else(|| DEFAULT_LINK_PORT.to_string()),
            directory_url: env_string_opt("TERMPAGE_DIRECTORY_URL"),
            fetch_timeout: Duration::from_millis(env_millis(
                "TERMPAGE_FETCH_TIMEOUT_MS",
                DEFAULT_FETCH_TIMEOUT_MS,
            )),
            strict_fetch: env_flag("TERMPAGE_STRICT_FETCH"),
            reject_overflow: env_flag("TERMPAGE_REJECT_OVERFLOW"),
            log_filter: env_string_opt("TERMPAGE_LOG"),
        }
    }

    pub fn router_config(&self) -> RouterConfig {
        let overflow = if self.reject_overflow {
            OverflowPolicy::Reject
        } else {
            OverflowPolicy::Truncate
        };
        RouterConfig {
            directory: DirectoryOptions {
                link_server: self.link_server.clone(),
                link_port: self.link_port.clone(),
                overflow,
            },
            fetch_deadline: self.fetch_timeout,
            degrade_on_fetch_failure: !self.strict_fetch,
        }
    }

    /// Attempts and retry backoff are fitted inside the fetch deadline.
    pub fn people_api_config(&self) -> PeopleApiConfig {
        let config = match &self.directory_url {
            Some(url) => PeopleApiConfig::new(url.clone()),
            None => PeopleApiConfig::default(),
        };
        config.within_deadline(self.fetch_timeout)
    }

    /// Install the global subscriber using `TERMPAGE_LOG`, if set.
    pub fn init_logging(&self) -> bool {
        logging::init(self.log_filter.as_deref())
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_millis(key: &str, default: u64) -> u64 {
    match env_string_opt(key) {
        Some(value) => match value.parse::<u64>() {
            Ok(millis) if millis > 0 => millis,
            _ => {
                tracing::warn!(key, value = %value, default, "ignoring invalid millisecond value");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::EnvConfig;
    use crate::directory::OverflowPolicy;
    use std::env;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

    const KEYS: [&str; 7] = [
        "TERMPAGE_LINK_SERVER",
        "TERMPAGE_LINK_PORT",
        "TERMPAGE_DIRECTORY_URL",
        "TERMPAGE_FETCH_TIMEOUT_MS",
        "TERMPAGE_STRICT_FETCH",
        "TERMPAGE_REJECT_OVERFLOW",
        "TERMPAGE_LOG",
    ];

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned")
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    fn clear_all() -> Vec<EnvGuard> {
        KEYS.iter().map(|key| set_env_guard(key, None)).collect()
    }

    #[test]
    fn env_defaults() {
        let _lock = env_lock();
        let _guards = clear_all();

        let config = EnvConfig::from_env();
        assert_eq!(config.link_server, "localhost");
        assert_eq!(config.link_port, "8888");
        assert!(config.directory_url.is_none());
        assert_eq!(config.fetch_timeout, Duration::from_millis(5_000));
        assert!(!config.strict_fetch);
        assert!(!config.reject_overflow);
        assert!(config.log_filter.is_none());

        let router = config.router_config();
        assert!(router.degrade_on_fetch_failure);
        assert_eq!(router.directory.overflow, OverflowPolicy::Truncate);
        assert_eq!(router.directory.link_port, "8888");
    }

    #[test]
    fn env_values_override_defaults() {
        let _lock = env_lock();
        let _guards = clear_all();
        let _g1 = set_env_guard("TERMPAGE_LINK_SERVER", Some("pages.internal"));
        let _g2 = set_env_guard("TERMPAGE_LINK_PORT", Some("9000"));
        let _g3 = set_env_guard("TERMPAGE_DIRECTORY_URL", Some("http://127.0.0.1:4000"));
        let _g4 = set_env_guard("TERMPAGE_FETCH_TIMEOUT_MS", Some("1500"));
        let _g5 = set_env_guard("TERMPAGE_STRICT_FETCH", Some("1"));
        let _g6 = set_env_guard("TERMPAGE_REJECT_OVERFLOW", Some("1"));
        let _g7 = set_env_guard("TERMPAGE_LOG", Some("termpage=debug"));

        let config = EnvConfig::from_env();
        assert_eq!(config.log_filter.as_deref(), Some("termpage=debug"));

        let router = config.router_config();
        assert_eq!(router.directory.link_server, "pages.internal");
        assert_eq!(router.directory.link_port, "9000");
        assert_eq!(router.directory.overflow, OverflowPolicy::Reject);
        assert_eq!(router.fetch_deadline, Duration::from_millis(1500));
        assert!(!router.degrade_on_fetch_failure);

        let api = config.people_api_config();
        assert_eq!(api.base_url, "http://127.0.0.1:4000");
        assert_eq!(api.retry_base_delay, Duration::from_millis(125));
        assert_eq!(api.timeout, Some(Duration::from_millis(375)));
    }

    #[test]
    fn people_api_attempts_fit_inside_fetch_deadline() {
        let _lock = env_lock();
        let _guards = clear_all();
        let _g1 = set_env_guard("TERMPAGE_FETCH_TIMEOUT_MS", Some("400"));

        let config = EnvConfig::from_env();
        let deadline = config.router_config().fetch_deadline;
        let api = config.people_api_config();
        let per_attempt = api.timeout.expect("per-attempt timeout");

        assert!(per_attempt < deadline);
        let attempts = api.max_retries + 1;
        let backoff = people_api::retry::backoff_budget(api.retry_base_delay, api.max_retries);
        assert!(per_attempt * attempts + backoff <= deadline + Duration::from_millis(1));
    }

    #[test]
    fn log_filter_comes_from_env() {
        let _lock = env_lock();
        let _guards = clear_all();
        let _g1 = set_env_guard("TERMPAGE_LOG", Some("termpage=trace"));

        let config = EnvConfig::from_env();
        assert_eq!(config.log_filter.as_deref(), Some("termpage=trace"));
        let _ = config.init_logging();
        assert!(!config.init_logging());
    }

    #[test]
    fn invalid_or_blank_values_fall_back() {
        let _lock = env_lock();
        let _guards = clear_all();
        let _g1 = set_env_guard("TERMPAGE_FETCH_TIMEOUT_MS", Some("soon"));
        let _g2 = set_env_guard("TERMPAGE_LINK_SERVER", Some("   "));
        let _g3 = set_env_guard("TERMPAGE_STRICT_FETCH", Some("true"));

        let config = EnvConfig::from_env();
        assert_eq!(config.fetch_timeout, Duration::from_millis(5_000));
        assert_eq!(config.link_server, "localhost");
        assert!(!config.strict_fetch);
    }
}
