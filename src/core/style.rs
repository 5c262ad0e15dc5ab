//! Color and attribute styling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque color token.
///
/// Tokens are named colors understood by the client (`"springgreen"`,
/// `"darkslategrey"`, ...). Nothing here validates them; an unknown token is
/// forwarded verbatim and rendering it is the client's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single-byte text attribute enumerant, passed through to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attr(pub u8);

impl Attr {
    /// Attribute used by every built-in page.
    pub const DEFAULT: Attr = Attr(4);
}

impl Default for Attr {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attr: Attr,
}

impl Style {
    /// Foreground/background pair with the default attribute.
    pub fn pair(fg: impl Into<Color>, bg: impl Into<Color>) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
            attr: Attr::DEFAULT,
        }
    }
}

/// First character of `value`, or a space when it is empty.
pub fn glyph(value: &str) -> char {
    value.chars().next().unwrap_or(' ')
}
