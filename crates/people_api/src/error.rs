use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Error as JsonError;

#[derive(Debug)]
pub enum PeopleApiError {
    InvalidBaseUrl(String),
    InvalidHeader(String),
    Request(reqwest::Error),
    Status(StatusCode, String),
    Decode(JsonError),
    RetryExhausted {
        status: Option<StatusCode>,
        last_error: Option<String>,
    },
}

/// Error body shapes the listing API has been observed to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    Nested { error: ErrorPayloadFields },
    Flat(ErrorPayloadFields),
}

#[derive(Debug, Deserialize)]
struct ErrorPayloadFields {
    message: Option<String>,
    title: Option<String>,
}

impl ErrorPayloadFields {
    fn message_or_fallback(&self) -> Option<String> {
        self.message
            .as_deref()
            .and_then(non_empty_string)
            .or_else(|| self.title.as_deref().and_then(non_empty_string))
            .map(str::to_owned)
    }
}

impl fmt::Display for PeopleApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl(value) => write!(f, "invalid base URL: {value}"),
            Self::InvalidHeader(message) => write!(f, "invalid header: {message}"),
            Self::Request(error) => write!(f, "request error: {error}"),
            Self::Status(status, message) => write!(f, "HTTP {status} {message}"),
            Self::Decode(error) => write!(f, "failed to decode people listing: {error}"),
            Self::RetryExhausted { status, last_error } => {
                let status = status
                    .map(|status| status.as_u16().to_string())
                    .unwrap_or_else(|| "n/a".to_owned());
                write!(f, "retry exhausted after max attempts (status: {status}, last_error: {last_error:?})")
            }
        }
    }
}

impl std::error::Error for PeopleApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(error) => Some(error),
            Self::Decode(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PeopleApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

impl From<JsonError> for PeopleApiError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error)
    }
}

/// Extract a human-readable message from an error response body.
pub fn parse_error_message(status: StatusCode, body: &str) -> String {
    let fields = match serde_json::from_str::<ErrorPayload>(body) {
        Ok(ErrorPayload::Nested { error }) => Some(error),
        Ok(ErrorPayload::Flat(fields)) => Some(fields),
        Err(_) => None,
    };

    if let Some(message) = fields.and_then(|fields| fields.message_or_fallback()) {
        return message;
    }

    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}

fn non_empty_string(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
