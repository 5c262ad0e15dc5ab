use std::error::Error as StdError;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

/// Default retry attempts after an initial request attempt.
pub const MAX_RETRIES: u32 = 2;
/// Default base delay before the first retry.
pub const BASE_DELAY_MS: u64 = 250;

fn transient_error_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| {
        Regex::new(r"(?i)timed?.?out|connection.?(refused|reset|closed|aborted)|broken.?pipe|unexpected.?eof")
            .expect("retry regex must compile")
    })
}

/// Statuses worth another attempt. Response bodies are not consulted.
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Whether a transport failure's message reads as transient.
pub fn is_transient_error_text(error_text: &str) -> bool {
    transient_error_regex().is_match(error_text)
}

/// Whether a transport failure is worth another attempt.
///
/// Timeouts and connect failures always are; anything else only when some
/// error in its source chain reads as transient.
pub fn is_retryable_transport_error(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect() || is_transient_error_text(&error_chain_text(error))
}

/// Display text of `error` and every source below it, joined with `": "`.
pub fn error_chain_text(error: &(dyn StdError + 'static)) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Exponential backoff delay for a retry attempt, starting at `base`.
pub fn retry_delay(base: Duration, attempt: u32) -> Duration {
    let exponent = attempt.min(16);
    base.saturating_mul(2u32.saturating_pow(exponent))
}

/// Total sleep across `retries` consecutive retries.
pub fn backoff_budget(base: Duration, retries: u32) -> Duration {
    (0..retries).fold(Duration::ZERO, |total, attempt| {
        total.saturating_add(retry_delay(base, attempt))
    })
}
