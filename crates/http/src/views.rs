//! HTML views rendered with tera.
//!
//! Templates are embedded at compile time. Tera autoescapes every `.html`
//! template, so contact names and numbers are always escaped.

use contact_list_core::{ContactView, NO_RESULT};
use serde::Serialize;
use tera::{Context, Tera};

const BASE_HTML: &str = include_str!("../templates/base.html");
const INDEX_HTML: &str = include_str!("../templates/index.html");
const ADD_UPDATE_HTML: &str = include_str!("../templates/add-update.html");
const DELETE_HTML: &str = include_str!("../templates/delete.html");

/// Which write form a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Update,
    Delete,
}

impl FormAction {
    const fn template(self) -> &'static str {
        match self {
            Self::Save | Self::Update => "add-update.html",
            Self::Delete => "delete.html",
        }
    }

    const fn action_name(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    const fn form_path(self) -> &'static str {
        match self {
            Self::Save => "/add",
            Self::Update => "/update",
            Self::Delete => "/delete",
        }
    }
}

/// What a write form shows under the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// Fresh form (GET).
    Empty,
    /// Input was rejected before reaching storage.
    Invalid(String),
    /// The write ran; carries the outcome message.
    Done(String),
}

#[derive(Debug, Serialize)]
struct SearchPage<'a> {
    developer_name: &'a str,
    show_result: bool,
    keyword: &'a str,
    persons: &'a [ContactView],
    no_result: &'static str,
}

#[derive(Debug, Serialize)]
struct FormPage<'a> {
    developer_name: &'a str,
    action_name: &'static str,
    form_path: &'static str,
    show_result: bool,
    not_valid: bool,
    message: &'a str,
    result: &'a str,
}

/// Compiled template set.
pub struct Views {
    tera: Tera,
    developer_name: String,
}

impl Views {
    pub fn new(developer_name: impl Into<String>) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_HTML),
            ("index.html", INDEX_HTML),
            ("add-update.html", ADD_UPDATE_HTML),
            ("delete.html", DELETE_HTML),
        ])?;
        Ok(Self { tera, developer_name: developer_name.into() })
    }

    /// Search page. `results` is `None` for the empty form; an empty slice
    /// renders the "No Result" row.
    pub fn search(
        &self,
        keyword: &str,
        results: Option<&[ContactView]>,
    ) -> Result<String, tera::Error> {
        let page = SearchPage {
            developer_name: &self.developer_name,
            show_result: results.is_some(),
            keyword,
            persons: results.unwrap_or_default(),
            no_result: NO_RESULT,
        };
        self.tera.render("index.html", &Context::from_serialize(&page)?)
    }

    pub fn form(&self, action: FormAction, status: &FormStatus) -> Result<String, tera::Error> {
        let (show_result, not_valid, message, result) = match status {
            FormStatus::Empty => (false, false, "", ""),
            FormStatus::Invalid(msg) => (false, true, msg.as_str(), ""),
            FormStatus::Done(msg) => (true, false, "", msg.as_str()),
        };
        let page = FormPage {
            developer_name: &self.developer_name,
            action_name: action.action_name(),
            form_path: action.form_path(),
            show_result,
            not_valid,
            message,
            result,
        };
        self.tera.render(action.template(), &Context::from_serialize(&page)?)
    }
}
