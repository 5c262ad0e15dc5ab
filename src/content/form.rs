//! Two-phase, cookie-backed profile form.
//!
//! Render phase (`form`): show the form and greet the visitor from their
//! cookies. Submit phase (`formSubmit`): read the submitted fields, confirm
//! them and hand them back to the client as cookies.

use crate::content::builder::PageBuilder;
use crate::core::page::{Form, FormData, KeyStroke, Link, PageResponse, TextBlob, TextBox};
use crate::core::style::Style;
use crate::error::PageError;
use crate::layout::{bordered_panel, Viewport};
use crate::session::{InboundSession, OutboundSession};

pub const FORM_PAGE: &str = "form";
pub const SUBMIT_PAGE: &str = "formSubmit";
/// Name the submit phase answers with.
pub const SUBMIT_RESPONSE: &str = "formResponse";

pub const FORM_NAME: &str = "profile";
pub const FORM_KEY: &str = "j";
pub const BACK_KEY: &str = "f";

const FORM_DIV: &str = "formDiv";
const SUBMIT_DIV: &str = "formR";

const NAME_FIELD: &str = "name";
const AGE_FIELD: &str = "age";

const FIRST_VISIT_GREETING: &str = "hi, I don't think we've met before";

fn text_style() -> Style {
    Style::pair("white", "black")
}

fn text_field(name: &str, description: &str, default_value: &str, tab_order: u32, row: u32) -> TextBox {
    TextBox {
        name: name.to_owned(),
        tab_order,
        default_value: default_value.to_owned(),
        description: description.to_owned(),
        show_description: true,
        position_x: 25,
        position_y: row,
        width: 30,
        height: 1,
        style_cursor: Style::pair("black", "gray"),
        style_fill: Style::pair("black", "blue"),
        style_text: Style::pair("white", "blue"),
        style_description: Style::pair("red", "black"),
    }
}

fn profile_form() -> Form {
    Form {
        name: FORM_NAME.to_owned(),
        div_name: FORM_DIV.to_owned(),
        submit_link: Link::local(SUBMIT_PAGE),
        text_boxes: vec![
            text_field(NAME_FIELD, "Name: ", "<your name here>", 2, 10),
            text_field(AGE_FIELD, "Age: ", "<your age here>", 4, 12),
        ],
    }
}

fn greeting(session: &InboundSession) -> String {
    match session.returning_visitor() {
        Some((name, age)) => format!("Welcome back {name}, are you still {age}"),
        None => FIRST_VISIT_GREETING.to_owned(),
    }
}

/// Render phase.
pub fn form_page(viewport: Viewport, session: &InboundSession) -> Result<PageResponse, PageError> {
    let mut page = PageBuilder::new(FORM_PAGE);
    page.add_box(bordered_panel(FORM_DIV, viewport)?)?;
    page.add_form(profile_form());
    page.bind(KeyStroke::activate_form(FORM_KEY, FORM_NAME))?;
    page.add_text(TextBlob::wrapped(greeting(session), text_style(), FORM_DIV));
    page.finish()
}

/// Field values pulled out of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSubmission {
    pub name: String,
    pub age: String,
}

impl ProfileSubmission {
    /// Scan every submitted form; a field that repeats keeps its last value
    /// and a missing field reads as empty.
    pub fn from_form_data(forms: &[FormData]) -> Self {
        let mut submission = Self::default();
        for field in forms.iter().flat_map(|form| form.text_box_data.iter()) {
            match field.name.as_str() {
                NAME_FIELD => submission.name = field.contents.clone(),
                AGE_FIELD => submission.age = field.contents.clone(),
                _ => {}
            }
        }
        submission
    }

    pub fn confirmation(&self) -> String {
        format!("Hi, {}, I see that you're {}.", self.name, self.age)
    }
}

/// Submit phase.
pub fn submit_page(
    viewport: Viewport,
    submission: ProfileSubmission,
) -> Result<PageResponse, PageError> {
    let mut page = PageBuilder::new(SUBMIT_RESPONSE);
    page.add_box(bordered_panel(SUBMIT_DIV, viewport)?)?;
    page.add_text(TextBlob::wrapped(
        submission.confirmation(),
        text_style(),
        SUBMIT_DIV,
    ));
    page.bind(KeyStroke::link(BACK_KEY, Link::local(FORM_PAGE)))?;
    page.set_cookies(OutboundSession::new(submission.name, submission.age).into_cookies());
    page.finish()
}
