//! Incremental, validating page assembly.

use std::collections::HashSet;

use crate::core::page::{Action, Cookie, DivBox, Form, KeyStroke, PageResponse, TextBlob};
use crate::error::PageError;

/// Accumulates one [`PageResponse`].
///
/// Box names and keystroke symbols are unique per page; [`PageBuilder::finish`]
/// additionally checks that every element points at a box that exists and
/// every form activation at a form that exists.
#[derive(Debug, Default)]
pub struct PageBuilder {
    page: PageResponse,
    box_names: HashSet<String>,
    key_strokes: HashSet<String>,
}

impl PageBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            page: PageResponse {
                name: name.into(),
                ..PageResponse::default()
            },
            ..Self::default()
        }
    }

    pub fn add_box(&mut self, div: DivBox) -> Result<(), PageError> {
        if !self.box_names.insert(div.name.clone()) {
            return Err(PageError::DuplicateBox { name: div.name });
        }
        self.page.div_boxes.push(div);
        Ok(())
    }

    pub fn add_boxes(&mut self, divs: impl IntoIterator<Item = DivBox>) -> Result<(), PageError> {
        for div in divs {
            self.add_box(div)?;
        }
        Ok(())
    }

    pub fn add_text(&mut self, blob: TextBlob) {
        self.page.elements.text_blobs.push(blob);
    }

    pub fn add_form(&mut self, form: Form) {
        self.page.elements.forms.push(form);
    }

    pub fn bind(&mut self, key_stroke: KeyStroke) -> Result<(), PageError> {
        if !self.key_strokes.insert(key_stroke.key_stroke.clone()) {
            return Err(PageError::DuplicateKeyStroke {
                key_stroke: key_stroke.key_stroke,
            });
        }
        self.page.key_strokes.push(key_stroke);
        Ok(())
    }

    pub fn set_cookies(&mut self, cookies: impl IntoIterator<Item = Cookie>) {
        self.page.set_cookies.extend(cookies);
    }

    pub fn finish(self) -> Result<PageResponse, PageError> {
        let Self {
            page, box_names, ..
        } = self;

        let blob_targets = page
            .elements
            .text_blobs
            .iter()
            .flat_map(|blob| blob.div_names.iter());
        let form_targets = page.elements.forms.iter().map(|form| &form.div_name);
        if let Some(name) = blob_targets
            .chain(form_targets)
            .find(|name| !box_names.contains(name.as_str()))
        {
            return Err(PageError::UnknownBox { name: name.clone() });
        }

        for binding in &page.key_strokes {
            if let Action::FormActivation { form_name } = &binding.action {
                if !page.elements.forms.iter().any(|form| &form.name == form_name) {
                    return Err(PageError::UnknownForm {
                        key_stroke: binding.key_stroke.clone(),
                        form_name: form_name.clone(),
                    });
                }
            }
        }

        Ok(page)
    }
}
