//! Page request/response messages exchanged with the client.

use serde::{Deserialize, Serialize};

use crate::core::geometry::{Border, Rect};
use crate::core::style::Style;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub name: String,
    pub client_width: u32,
    pub client_height: u32,
    pub form_data: Vec<FormData>,
    pub send_cookies: Vec<Cookie>,
}

impl PageRequest {
    pub fn new(name: impl Into<String>, client_width: u32, client_height: u32) -> Self {
        Self {
            name: name.into(),
            client_width,
            client_height,
            ..Self::default()
        }
    }

    pub fn with_cookie(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.send_cookies.push(Cookie::new(key, value));
        self
    }

    pub fn with_form_data(mut self, form: FormData) -> Self {
        self.form_data.push(form);
        self
    }
}

/// Values a client submitted for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub name: String,
    pub text_box_data: Vec<TextBoxData>,
}

impl FormData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text_box_data: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.text_box_data.push(TextBoxData {
            name: name.into(),
            contents: contents.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBoxData {
    pub name: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub key: String,
    pub value: String,
}

impl Cookie {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    pub name: String,
    pub div_boxes: Vec<DivBox>,
    pub elements: Elements,
    pub key_strokes: Vec<KeyStroke>,
    pub set_cookies: Vec<Cookie>,
}

impl PageResponse {
    pub fn find_box(&self, name: &str) -> Option<&DivBox> {
        self.div_boxes.iter().find(|div| div.name == name)
    }

    pub fn find_key(&self, key_stroke: &str) -> Option<&KeyStroke> {
        self.key_strokes
            .iter()
            .find(|binding| binding.key_stroke == key_stroke)
    }

    pub fn cookie(&self, key: &str) -> Option<&str> {
        self.set_cookies
            .iter()
            .find(|cookie| cookie.key == key)
            .map(|cookie| cookie.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elements {
    pub text_blobs: Vec<TextBlob>,
    pub forms: Vec<Form>,
}

/// Rectangular layout region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivBox {
    pub name: String,
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    pub fill_glyph: char,
    pub fill_style: Style,
}

impl DivBox {
    pub fn new(name: impl Into<String>, rect: Rect, fill_style: Style) -> Self {
        Self {
            name: name.into(),
            rect,
            border: None,
            fill_glyph: ' ',
            fill_style,
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_fill_glyph(mut self, glyph: char) -> Self {
        self.fill_glyph = glyph;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlob {
    pub content: String,
    pub wrap: bool,
    pub style: Style,
    pub div_names: Vec<String>,
}

impl TextBlob {
    /// Wrapped text drawn into a single box.
    pub fn wrapped(content: impl Into<String>, style: Style, div_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            wrap: true,
            style,
            div_names: vec![div_name.into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub name: String,
    pub div_name: String,
    pub submit_link: Link,
    pub text_boxes: Vec<TextBox>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBox {
    pub name: String,
    pub tab_order: u32,
    pub default_value: String,
    pub description: String,
    pub show_description: bool,
    pub position_x: u32,
    pub position_y: u32,
    pub width: u32,
    pub height: u32,
    pub style_cursor: Style,
    pub style_fill: Style,
    pub style_text: Style,
    pub style_description: Style,
}

/// Navigation target. `server`/`port` left unset mean the serving host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub page_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

impl Link {
    pub fn local(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            server: None,
            port: None,
        }
    }

    pub fn remote(
        page_name: impl Into<String>,
        server: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            page_name: page_name.into(),
            server: Some(server.into()),
            port: Some(port.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Link(Link),
    FormActivation { form_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStroke {
    pub key_stroke: String,
    pub action: Action,
}

impl KeyStroke {
    pub fn link(key_stroke: impl Into<String>, link: Link) -> Self {
        Self {
            key_stroke: key_stroke.into(),
            action: Action::Link(link),
        }
    }

    pub fn activate_form(key_stroke: impl Into<String>, form_name: impl Into<String>) -> Self {
        Self {
            key_stroke: key_stroke.into(),
            action: Action::FormActivation {
                form_name: form_name.into(),
            },
        }
    }
}
