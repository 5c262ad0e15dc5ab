//! Client-held session state.
//!
//! The server keeps nothing between requests. What a page wants remembered is
//! sent back as cookies ([`OutboundSession`]) and the client echoes them on
//! its next request, where they are read once into an [`InboundSession`].

use crate::core::page::Cookie;

pub const NAME_COOKIE: &str = "name";
pub const AGE_COOKIE: &str = "age";

/// Session values recovered from a request's cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundSession {
    name: Option<String>,
    age: Option<String>,
}

impl InboundSession {
    /// Read the session cookies; when a key repeats, the last value wins.
    /// Unrelated cookies are ignored.
    pub fn from_cookies(cookies: &[Cookie]) -> Self {
        let mut session = Self::default();
        for cookie in cookies {
            tracing::debug!(key = %cookie.key, value = %cookie.value, "client cookie");
            match cookie.key.as_str() {
                NAME_COOKIE => session.name = Some(cookie.value.clone()),
                AGE_COOKIE => session.age = Some(cookie.value.clone()),
                _ => {}
            }
        }
        session
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<&str> {
        self.age.as_deref()
    }

    /// Name and age, only when both were echoed back non-empty.
    pub fn returning_visitor(&self) -> Option<(&str, &str)> {
        let name = self.name().filter(|value| !value.is_empty())?;
        let age = self.age().filter(|value| !value.is_empty())?;
        Some((name, age))
    }
}

/// Session values a response asks the client to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutboundSession {
    pub name: String,
    pub age: String,
}

impl OutboundSession {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Cookies to set, always `name` then `age`.
    pub fn into_cookies(self) -> Vec<Cookie> {
        vec![
            Cookie::new(NAME_COOKIE, self.name),
            Cookie::new(AGE_COOKIE, self.age),
        ]
    }
}
