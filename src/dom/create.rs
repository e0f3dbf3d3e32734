use web_sys::{Document, Element};

use super::{DomError, Result, document};

/// Creates `<tag>` with the given attributes and optional text content.
pub fn create_element<'a, I>(
    tag: &str,
    attrs: I,
    text: Option<&str>,
    doc: Option<&Document>,
) -> Result<Element>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let el = document(doc)?.create_element(tag)?;
    for (name, value) in attrs {
        el.set_attribute(name, value)?;
    }
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

pub fn append(parent: &Element, child: &Element) -> Result<()> {
    parent.append_child(child)?;
    Ok(())
}

pub fn prepend(parent: &Element, child: &Element) -> Result<()> {
    parent.prepend_with_node_1(child)?;
    Ok(())
}

/// Inserts `new` right after `reference` under the same parent.
pub fn insert_after(new: &Element, reference: &Element) -> Result<()> {
    let parent = reference.parent_node().ok_or(DomError::Detached)?;
    parent.insert_before(new, reference.next_sibling().as_ref())?;
    Ok(())
}

/// Detaches `el` from its parent. No-op when already detached.
pub fn remove(el: &Element) {
    el.remove();
}

/// Removes every child node.
pub fn empty(el: &Element) {
    el.set_text_content(None);
}

pub fn set_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_html(el: &Element) -> String {
    el.inner_html()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn get_text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}
