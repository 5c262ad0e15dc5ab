use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};

use crate::config::PeopleApiConfig;
use crate::error::{parse_error_message, PeopleApiError};
use crate::headers::build_headers;
use crate::retry::{is_retryable_status, is_retryable_transport_error, retry_delay};
use crate::schema::Person;
use crate::url::normalize_people_url;

#[derive(Debug)]
pub struct PeopleApiClient {
    http: Client,
    config: PeopleApiConfig,
}

impl PeopleApiClient {
    pub fn new(config: PeopleApiConfig) -> Result<Self, PeopleApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(PeopleApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &PeopleApiConfig {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        normalize_people_url(&self.config.base_url)
    }

    pub fn build_headers(&self) -> Result<HeaderMap, PeopleApiError> {
        let mut out = HeaderMap::new();
        for (key, value) in build_headers(&self.config) {
            out.insert(
                HeaderName::from_bytes(key.as_bytes())
                    .map_err(|_| PeopleApiError::InvalidHeader(format!("invalid header key: {key}")))?,
                HeaderValue::from_str(&value).map_err(|_| {
                    PeopleApiError::InvalidHeader(format!("invalid header value for {key}"))
                })?,
            );
        }
        Ok(out)
    }

    pub fn build_request(&self) -> Result<reqwest::RequestBuilder, PeopleApiError> {
        let endpoint = self.endpoint();
        reqwest::Url::parse(&endpoint)
            .map_err(|error| PeopleApiError::InvalidBaseUrl(format!("{endpoint}: {error}")))?;
        let headers = self.build_headers()?;
        Ok(self.http.get(endpoint).headers(headers))
    }

    /// Fetch the full listing, retrying transient failures.
    ///
    /// Retries are decided by status for responses and by the transport error
    /// itself otherwise. Decode failures are returned immediately.
    pub async fn list_people(&self) -> Result<Vec<Person>, PeopleApiError> {
        let max_retries = self.config.max_retries;
        let mut last_status: Option<StatusCode> = None;
        let mut last_error = None;

        for attempt in 0..=max_retries {
            match self.build_request()?.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.text().await?;
                        let people = serde_json::from_str::<Vec<Person>>(&body)?;
                        tracing::debug!(count = people.len(), attempt, "people listing fetched");
                        return Ok(people);
                    }

                    last_status = Some(status);
                    let body = response.text().await.unwrap_or_else(|_| {
                        status
                            .canonical_reason()
                            .unwrap_or("request failed")
                            .to_string()
                    });
                    let message = parse_error_message(status, &body);
                    last_error = Some(message.clone());

                    if attempt < max_retries && is_retryable_status(status.as_u16()) {
                        tracing::warn!(%status, attempt, error = %message, "retrying people listing");
                        tokio::time::sleep(retry_delay(self.config.retry_base_delay, attempt)).await;
                        continue;
                    }

                    return Err(PeopleApiError::Status(status, message));
                }
                Err(error) => {
                    if !is_retryable_transport_error(&error) {
                        return Err(PeopleApiError::Request(error));
                    }
                    let message = error.to_string();
                    last_error = Some(message.clone());
                    if attempt < max_retries {
                        tracing::warn!(attempt, error = %message, "retrying people listing");
                        tokio::time::sleep(retry_delay(self.config.retry_base_delay, attempt)).await;
                        continue;
                    }
                    return Err(PeopleApiError::RetryExhausted {
                        status: last_status,
                        last_error,
                    });
                }
            }
        }

        Err(PeopleApiError::RetryExhausted {
            status: last_status,
            last_error,
        })
    }
}
