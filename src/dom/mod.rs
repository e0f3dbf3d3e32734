//! Browser DOM helpers on top of `web-sys`.
//!
//! Functions that need a document take an explicit `Option<&Document>` and
//! fall back to `window().document()` when given `None`. Mutators return
//! [`Result`]; getters degrade to `None`, `false` or an empty list when the
//! browser call fails.

mod animate;
mod attr;
mod class;
mod create;
mod event;
mod form;
mod select;
mod style;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCollection, HtmlElement, NodeList, Window};

pub use animate::{RafClock, fade_in, fade_out, slide_down, slide_up};
pub use attr::{
    data_attribute_name, get_attr, get_data, has_attr, remove_attr, set_attr, set_attrs, set_data,
};
pub use class::{add_class, class_names, has_class, remove_class, replace_class, toggle_class};
pub use create::{
    append, create_element, empty, get_html, get_text, insert_after, prepend, remove, set_html,
    set_text,
};
pub use event::{Listener, delegate, on, once, trigger};
pub use form::{collect_values, form_values, reset_form, serialize_form, to_query_string};
pub use select::{by_id, children, closest, parent, query, query_all, query_in, siblings};
pub use style::{
    css_property_name, get_style, hide, is_hidden, set_style, set_styles, show, toggle_display,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("element is not {0}")]
    WrongType(&'static str),

    #[error("element is not attached to a parent")]
    Detached,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(describe(&value))
    }
}

pub type Result<T> = std::result::Result<T, DomError>;

fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The given document, or the global one.
pub fn document(doc: Option<&Document>) -> Result<Document> {
    match doc {
        Some(doc) => Ok(doc.clone()),
        None => window()?.document().ok_or(DomError::NoDocument),
    }
}

fn as_html(el: &Element) -> Result<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
        .ok_or(DomError::WrongType("an HtmlElement"))
}

/// Drops the error of a failed browser call, logging it under `tracing`.
fn ok_or_log<T>(result: Result<T>, _op: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("dom {} failed: {}", _op, _e);
            None
        }
    }
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn collection_elements(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}
